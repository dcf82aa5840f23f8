//! # Admin Flow
//!
//! The passphrase-gated administration panel.
//!
//! ## Gate Semantics
//! Exactly one passphrase attempt per panel entry: a wrong passphrase
//! reports `Unauthorized` and returns to the main menu: no retry loop,
//! no lockout, and no state touched. The passphrase comes from
//! [`AppConfig`]; it is a toy gate, not a security boundary.
//!
//! ## Panel Semantics
//! The operation menu re-displays after every operation until the exit
//! sentinel (0). The cancel sentinel (-1) in any operation input closes
//! the whole panel immediately, abandoning the half-entered operation.
//! Validation failures abandon only the current operation, before any
//! catalog mutation.

use tracing::{debug, info, warn};

use ashkana_core::validation::{validate_name, validate_stock};
use ashkana_core::{CoreError, FoodSet, ItemKind, MenuItem, Money};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::flows::{prompt_choice, CANCEL, FINISH};
use crate::render;
use crate::state::AppState;
use crate::terminal::Terminal;

const PANEL_MENU: &str = "Admin Panel:\n\
    1. View total revenue\n\
    2. Add new item\n\
    3. Add new set\n\
    4. Remove item\n\
    5. Remove set\n\
    6. Add new drink\n\
    7. Remove drink\n\
    8. View orders\n\
    0. Exit\n";

/// How one panel operation ended.
#[derive(Debug, PartialEq, Eq)]
enum Panel {
    /// Back to the operation menu.
    Continue,
    /// Cancel sentinel seen mid-operation: close the panel.
    Exit,
}

/// Runs the admin panel, gate included.
pub fn run<T: Terminal>(
    state: &mut AppState,
    config: &AppConfig,
    term: &mut T,
) -> AppResult<()> {
    debug!("admin panel requested");

    let entered = term.read_line("Enter admin password: ")?;
    if entered != config.admin_passphrase {
        warn!("admin access denied");
        term.write(&format!("{}.\n", CoreError::Unauthorized));
        return Ok(());
    }
    info!("admin authenticated");

    loop {
        term.write(PANEL_MENU);
        let Some(choice) = prompt_choice(term, "")? else {
            continue;
        };

        let outcome = match choice {
            FINISH => {
                debug!("admin panel closed");
                return Ok(());
            }
            1 => view_revenue(state, term),
            2 => add_item(state, term, ItemKind::Menu)?,
            3 => add_set(state, term)?,
            4 => remove_menu_item(state, term)?,
            5 => remove_set(state, term)?,
            6 => add_item(state, term, ItemKind::Drink)?,
            7 => remove_drink(state, term)?,
            8 => list_orders(state, term),
            _ => {
                term.write("Invalid choice.\n");
                Panel::Continue
            }
        };

        if outcome == Panel::Exit {
            debug!("admin panel closed mid-operation");
            return Ok(());
        }
    }
}

// =============================================================================
// Reporting Operations
// =============================================================================

fn view_revenue<T: Terminal>(state: &AppState, term: &mut T) -> Panel {
    term.write(&format!(
        "Total revenue: {}\n",
        state.orders.total_revenue()
    ));
    Panel::Continue
}

/// Renders every committed order through the same routine receipts use.
fn list_orders<T: Terminal>(state: &AppState, term: &mut T) -> Panel {
    for order in state.orders.orders() {
        term.write(&render::render_order(order));
    }
    Panel::Continue
}

// =============================================================================
// Catalog Mutations
// =============================================================================

/// Adds a menu item or drink from console input.
fn add_item<T: Terminal>(
    state: &mut AppState,
    term: &mut T,
    kind: ItemKind,
) -> AppResult<Panel> {
    let label = kind.label();

    let Some(id) = read_value(term, &format!("Enter {label} ID: "))? else {
        return Ok(Panel::Exit);
    };

    let name = match validate_name(&term.read_line(&format!("Enter {label} name: "))?) {
        Ok(name) => name,
        Err(err) => return abort_operation(term, err.into()),
    };

    let Some(stock) = read_value(term, &format!("Enter {label} quantity: "))? else {
        return Ok(Panel::Exit);
    };
    if let Err(err) = validate_stock(stock) {
        return abort_operation(term, err.into());
    }

    let price = match read_price(term, &format!("Enter {label} price: "))? {
        PriceInput::Cancelled => return Ok(Panel::Exit),
        PriceInput::Invalid(err) => return abort_operation(term, err),
        PriceInput::Price(price) => price,
    };

    state
        .catalog
        .add_item(kind, MenuItem::new(id, name, stock, price));
    info!(kind = label, id, "catalog item added");

    if kind == ItemKind::Drink {
        term.write("Drink added successfully.\n");
    }
    Ok(Panel::Continue)
}

/// Adds a combo set, snapshotting each resolvable component from the menu.
///
/// Component ids that match nothing are silently skipped; the set is
/// created with whatever did resolve.
fn add_set<T: Terminal>(state: &mut AppState, term: &mut T) -> AppResult<Panel> {
    let Some(id) = read_value(term, "Enter set ID: ")? else {
        return Ok(Panel::Exit);
    };

    let name = match validate_name(&term.read_line("Enter set name: ")?) {
        Ok(name) => name,
        Err(err) => return abort_operation(term, err.into()),
    };

    let Some(count) = read_value(term, "Enter number of items in the set: ")? else {
        return Ok(Panel::Exit);
    };

    let mut components = Vec::new();
    for _ in 0..count.max(0) {
        let Some(item_id) = read_value(term, "Enter item ID to add to set: ")? else {
            return Ok(Panel::Exit);
        };
        match state.catalog.find_item(ItemKind::Menu, item_id) {
            Some(item) => components.push(item.clone()),
            None => debug!(item_id, "set component not found, skipped"),
        }
    }

    let price = match read_price(term, "Enter set price: ")? {
        PriceInput::Cancelled => return Ok(Panel::Exit),
        PriceInput::Invalid(err) => return abort_operation(term, err),
        PriceInput::Price(price) => price,
    };

    let component_count = components.len();
    state.catalog.add_set(FoodSet::new(id, name, components, price));
    info!(id, components = component_count, "set added");
    Ok(Panel::Continue)
}

/// Removes **every** menu entity with the given id.
fn remove_menu_item<T: Terminal>(state: &mut AppState, term: &mut T) -> AppResult<Panel> {
    let Some(id) = read_value(term, "Enter item ID to remove: ")? else {
        return Ok(Panel::Exit);
    };

    let removed = state.catalog.remove_menu_items(id);
    info!(id, removed, "menu items removed");
    Ok(Panel::Continue)
}

/// Removes only the **first** set with the given id.
fn remove_set<T: Terminal>(state: &mut AppState, term: &mut T) -> AppResult<Panel> {
    let Some(id) = read_value(term, "Enter set ID to remove: ")? else {
        return Ok(Panel::Exit);
    };

    let removed = state.catalog.remove_set(id);
    info!(id, removed, "set removal attempted");
    Ok(Panel::Continue)
}

/// Removes only the **first** drink with the given id.
fn remove_drink<T: Terminal>(state: &mut AppState, term: &mut T) -> AppResult<Panel> {
    let Some(id) = read_value(term, "Enter drink ID to remove: ")? else {
        return Ok(Panel::Exit);
    };

    if state.catalog.remove_drink(id) {
        info!(id, "drink removed");
        term.write("Drink removed successfully.\n");
    } else {
        term.write(&format!("Drink with ID {id} not found.\n"));
    }
    Ok(Panel::Continue)
}

// =============================================================================
// Input Helpers
// =============================================================================

/// Reads an integer, re-prompting on malformed input.
/// `None` means the cancel sentinel: the caller closes the panel.
fn read_value<T: Terminal>(term: &mut T, prompt: &str) -> AppResult<Option<i64>> {
    loop {
        match prompt_choice(term, prompt)? {
            Some(CANCEL) => return Ok(None),
            Some(value) => return Ok(Some(value)),
            None => continue,
        }
    }
}

enum PriceInput {
    Price(Money),
    Invalid(CoreError),
    Cancelled,
}

/// Reads a decimal price ("5.99"). The cancel sentinel is honored here too.
fn read_price<T: Terminal>(term: &mut T, prompt: &str) -> AppResult<PriceInput> {
    let line = term.read_line(prompt)?;
    if line.parse::<i64>().ok() == Some(CANCEL) {
        return Ok(PriceInput::Cancelled);
    }

    Ok(match line.parse::<Money>() {
        Ok(price) => PriceInput::Price(price),
        Err(err) => PriceInput::Invalid(err.into()),
    })
}

/// Reports a validation failure and abandons the current operation,
/// leaving the catalog untouched.
fn abort_operation<T: Terminal>(term: &mut T, err: CoreError) -> AppResult<Panel> {
    term.write(&format!("{err}\n"));
    Ok(Panel::Continue)
}

// =============================================================================
// Unit Tests
// =============================================================================
