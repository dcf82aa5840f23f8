//! # Checkout Flow
//!
//! One customer transaction, from an opened order to a receipt.
//!
//! ## Transaction State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Transaction                                 │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ Selecting│────►│ Selecting│────►│ Selecting│────►│ Awaiting │       │
//! │  │  Items   │  0  │   Sets   │  0  │  Drinks  │  0  │ Payment  │       │
//! │  └────┬─────┘     └────┬─────┘     └────┬─────┘     └────┬─────┘       │
//! │       │ -1             │ -1             │ -1             │ 1/2         │
//! │       ▼                ▼                ▼                ▼             │
//! │  ┌────────────────────────────────────┐            ┌──────────┐       │
//! │  │             Cancelled              │            │ Completed│       │
//! │  │  nothing committed; stock already  │            └──────────┘       │
//! │  │  taken in this transaction STAYS   │                               │
//! │  │  taken (decrements are final)      │                               │
//! │  └────────────────────────────────────┘                               │
//! │                                                                        │
//! │  The order is committed (revenue credited, receipt printed) BEFORE    │
//! │  the payment prompt, so cancelling at the payment prompt only skips   │
//! │  the acknowledgment; the committed order stays committed.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock decrements happen per accepted line, inside the selection loop,
//! never batched into the commit.

use tracing::{debug, info};

use ashkana_core::{CoreError, CoreResult, ItemKind, Order, PaymentMethod};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::flows::{prompt_choice, CANCEL, FINISH};
use crate::render;
use crate::state::AppState;
use crate::terminal::Terminal;

/// How a selection stage ended.
#[derive(Debug, PartialEq, Eq)]
enum Stage {
    /// Finish sentinel: move on to the next stage.
    Advance,
    /// Cancel sentinel: abort the whole transaction.
    Cancelled,
}

/// Runs one checkout transaction.
pub fn run<T: Terminal>(
    state: &mut AppState,
    config: &AppConfig,
    term: &mut T,
) -> AppResult<()> {
    debug!("checkout started");

    // The id is consumed here: a later cancellation does not give it back.
    let mut order = Order::new(&state.sequence);
    info!(order_id = order.id, "order opened");

    term.write("Enter -1 at any time to cancel the order and return to the main menu.\n");

    if select_items(state, term, &mut order, ItemKind::Menu)? == Stage::Cancelled {
        return cancelled(term, order.id);
    }
    if select_sets(state, term, &mut order)? == Stage::Cancelled {
        return cancelled(term, order.id);
    }
    if select_items(state, term, &mut order, ItemKind::Drink)? == Stage::Cancelled {
        return cancelled(term, order.id);
    }

    finalize(state, config, term, order)
}

// =============================================================================
// Selection Stages
// =============================================================================

/// Item selection loop, shared by the menu and drink stages.
///
/// Per accepted selection: first-match lookup, immediate stock decrement,
/// snapshot line appended. Insufficient stock and unknown ids are reported
/// and the loop continues.
fn select_items<T: Terminal>(
    state: &mut AppState,
    term: &mut T,
    order: &mut Order,
    kind: ItemKind,
) -> AppResult<Stage> {
    term.write(&render::render_items(&state.catalog, kind));
    let prompt = format!("Enter the {} number to order (0 to finish): ", kind.label());

    loop {
        let Some(choice) = prompt_choice(term, &prompt)? else {
            continue;
        };
        if choice == FINISH {
            return Ok(Stage::Advance);
        }
        if choice == CANCEL {
            return Ok(Stage::Cancelled);
        }

        let Some(quantity) = prompt_choice(term, "Enter quantity: ")? else {
            continue;
        };
        if quantity == CANCEL {
            return Ok(Stage::Cancelled);
        }

        if let Err(err) = take_line(state, order, kind, choice, quantity) {
            term.write(&format!("{err}\n"));
        }
    }
}

/// Looks up, decrements, and appends one item line.
///
/// The snapshot is taken before the decrement; the line carries the ordered
/// quantity, not the remaining stock.
fn take_line(
    state: &mut AppState,
    order: &mut Order,
    kind: ItemKind,
    id: i64,
    quantity: i64,
) -> CoreResult<()> {
    let snapshot = state
        .catalog
        .find_item(kind, id)
        .cloned()
        .ok_or(CoreError::InvalidSelection { id })?;

    state.catalog.decrement_stock(kind, id, quantity)?;
    order.add_item(&snapshot, quantity);

    info!(
        order_id = order.id,
        kind = kind.label(),
        id,
        quantity,
        "line accepted"
    );
    Ok(())
}

/// Set selection loop. Sets have no stock pool: nothing is decremented.
fn select_sets<T: Terminal>(
    state: &mut AppState,
    term: &mut T,
    order: &mut Order,
) -> AppResult<Stage> {
    term.write(&render::render_sets(&state.catalog));

    loop {
        let Some(choice) = prompt_choice(term, "Enter the set number to order (0 to finish): ")?
        else {
            continue;
        };
        if choice == FINISH {
            return Ok(Stage::Advance);
        }
        if choice == CANCEL {
            return Ok(Stage::Cancelled);
        }

        match state.catalog.find_set(choice).cloned() {
            Some(set) => {
                order.add_set(&set);
                info!(order_id = order.id, set_id = set.id, "set accepted");
            }
            None => {
                term.write(&format!("{}\n", CoreError::InvalidSelection { id: choice }));
            }
        }
    }
}

// =============================================================================
// Commit & Payment
// =============================================================================

/// Commits the order, prints the receipt, and records the payment.
///
/// Commit order: revenue is credited exactly once, here. The payment
/// prompt afterwards is an acknowledgment only.
fn finalize<T: Terminal>(
    state: &mut AppState,
    config: &AppConfig,
    term: &mut T,
    order: Order,
) -> AppResult<()> {
    let order_id = order.id;
    let total = order.total();

    let committed = state.orders.commit(order);
    let receipt = render::render_receipt(committed, config);
    term.write(&receipt);

    info!(
        order_id,
        total = %total,
        revenue = %state.orders.total_revenue(),
        "order committed"
    );

    loop {
        let Some(choice) = prompt_choice(term, "Select payment method (1. Cash, 2. Credit): ")?
        else {
            continue;
        };
        if choice == CANCEL {
            // The order is already committed; only the acknowledgment is
            // abandoned.
            return Ok(());
        }

        match PaymentMethod::from_choice(choice) {
            Ok(method) => {
                term.write(&format!("Paid {} {}.\n", total, method.label()));
                info!(order_id, method = ?method, amount = %total, "payment recorded");
                return Ok(());
            }
            Err(err) => term.write(&format!("{err}. Please try again.\n")),
        }
    }
}

fn cancelled<T: Terminal>(term: &mut T, order_id: u64) -> AppResult<()> {
    info!(order_id, "order cancelled");
    term.write("Order cancelled. Returning to main menu...\n");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedTerminal;

    fn seeded() -> (AppState, AppConfig) {
        (AppState::seeded(), AppConfig::default())
    }

    fn stock(state: &AppState, kind: ItemKind, id: i64) -> i64 {
        state.catalog.find_item(kind, id).unwrap().stock
    }

    #[test]
    fn test_full_checkout_kotlety_times_three() {
        let (mut state, config) = seeded();
        // item 1 × 3, finish items/sets/drinks, pay cash
        let mut term = ScriptedTerminal::new(&["1", "3", "0", "0", "0", "1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert_eq!(stock(&state, ItemKind::Menu, 1), 47);
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.orders.total_revenue().cents(), 1797);
        assert!(term.output.contains("Kotlety x 3 = $17.97"));
        assert!(term.output.contains("Total: $17.97"));
        assert!(term.output.contains("Paid $17.97 in cash."));
    }

    #[test]
    fn test_insufficient_stock_is_recoverable() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["1", "60", "1", "2", "0", "0", "0", "1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert!(term
            .output
            .contains("Not enough stock for item 1: available 50, requested 60"));
        // The failed line moved no stock; the retry did.
        assert_eq!(stock(&state, ItemKind::Menu, 1), 48);
        assert_eq!(state.orders.total_revenue().cents(), 1198);
    }

    #[test]
    fn test_unknown_id_is_recoverable() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["42", "5", "0", "0", "0", "1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert!(term.output.contains("Invalid selection: 42"));
        // Nothing selected: the committed order is legally empty.
        assert_eq!(state.orders.len(), 1);
        assert!(state.orders.total_revenue().is_zero());
        assert!(term.output.contains("Total: $0.00"));
    }

    #[test]
    fn test_cancel_keeps_stock_taken_and_commits_nothing() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["1", "3", "-1"]);

        run(&mut state, &config, &mut term).unwrap();

        // No rollback: the decrement from the accepted line stands.
        assert_eq!(stock(&state, ItemKind::Menu, 1), 47);
        assert!(state.orders.is_empty());
        assert!(state.orders.total_revenue().is_zero());
        assert!(term.output.contains("Order cancelled"));
    }

    #[test]
    fn test_cancel_in_quantity_prompt() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["1", "-1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert_eq!(stock(&state, ItemKind::Menu, 1), 50);
        assert!(state.orders.is_empty());
    }

    #[test]
    fn test_cancelled_checkout_still_consumes_an_order_id() {
        let (mut state, config) = seeded();

        let mut term = ScriptedTerminal::new(&["-1"]);
        run(&mut state, &config, &mut term).unwrap();

        let mut term = ScriptedTerminal::new(&["0", "0", "0", "1"]);
        run(&mut state, &config, &mut term).unwrap();

        // First transaction burned id 1; the committed order carries id 2.
        assert_eq!(state.orders.orders()[0].id, 2);
    }

    #[test]
    fn test_set_selection_skips_stock() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["0", "201", "0", "0", "2"]);

        run(&mut state, &config, &mut term).unwrap();

        assert_eq!(state.orders.total_revenue().cents(), 799);
        // Component stock pools are untouched by set orders.
        assert_eq!(stock(&state, ItemKind::Menu, 1), 50);
        assert_eq!(stock(&state, ItemKind::Drink, 102), 80);
        assert!(term.output.contains("Kyrgyz Combo = $7.99"));
        assert!(term.output.contains("Paid $7.99 with credit card."));
    }

    #[test]
    fn test_drink_selection_decrements_drink_stock() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["0", "0", "101", "2", "0", "1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert_eq!(stock(&state, ItemKind::Drink, 101), 98);
        assert_eq!(state.orders.total_revenue().cents(), 398);
        assert!(term.output.contains("Kompot x 2 = $3.98"));
    }

    #[test]
    fn test_unknown_payment_method_reprompts() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["1", "3", "0", "0", "0", "9", "2"]);

        run(&mut state, &config, &mut term).unwrap();

        assert!(term.output.contains("Invalid input: 9"));
        assert!(term.output.contains("Paid $17.97 with credit card."));
    }

    #[test]
    fn test_cancel_at_payment_keeps_order_committed() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["1", "3", "0", "0", "0", "-1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.orders.total_revenue().cents(), 1797);
        assert!(!term.output.contains("Paid"));
    }

    #[test]
    fn test_non_numeric_input_degrades_gracefully() {
        let (mut state, config) = seeded();
        // "kotlety" at the selection prompt and "three" at the quantity
        // prompt are both reported; the selection restarts after the
        // malformed quantity.
        let mut term =
            ScriptedTerminal::new(&["kotlety", "1", "three", "1", "3", "0", "0", "0", "1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert!(term.output.contains("Invalid input: kotlety"));
        assert!(term.output.contains("Invalid input: three"));
        assert_eq!(stock(&state, ItemKind::Menu, 1), 47);
        assert_eq!(state.orders.total_revenue().cents(), 1797);
    }

    #[test]
    fn test_negative_quantity_never_restocks() {
        let (mut state, config) = seeded();
        let mut term = ScriptedTerminal::new(&["1", "-5", "0", "0", "0", "1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert_eq!(stock(&state, ItemKind::Menu, 1), 50);
        assert!(term.output.contains("Invalid input: -5"));
    }

    #[test]
    fn test_duplicate_menu_id_orders_first_match() {
        let (mut state, config) = seeded();
        // Two entities share id 1; only Kotlety (first) is touched.
        let mut term = ScriptedTerminal::new(&["1", "10", "0", "0", "0", "1"]);

        run(&mut state, &config, &mut term).unwrap();

        assert_eq!(state.catalog.items(ItemKind::Menu)[0].stock, 40);
        assert_eq!(state.catalog.items(ItemKind::Menu)[1].stock, 10);
        assert!(term.output.contains("Kotlety x 10 = $59.90"));
    }
}
