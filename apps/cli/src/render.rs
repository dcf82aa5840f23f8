//! # Rendering
//!
//! Turns domain state into the text the terminal displays: catalog
//! listings, order bodies, and receipts.
//!
//! The order body routine is shared on purpose: the receipt printed at
//! checkout completion and the admin panel's order listing render every
//! order through the same function, so the two can never drift apart.

use ashkana_core::{Catalog, ItemKind, Order, OrderLine};

use crate::config::AppConfig;

const RULE: &str = "*********************************************\n";

/// Welcome banner shown once at startup.
pub fn welcome_banner(config: &AppConfig) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str(&format!(
        "*    WELCOME TO {:<28}*\n",
        config.store_name.to_uppercase()
    ));
    out.push_str(RULE);
    out
}

/// Lists one item collection with price and remaining stock.
pub fn render_items(catalog: &Catalog, kind: ItemKind) -> String {
    let title = match kind {
        ItemKind::Menu => "Menu:",
        ItemKind::Drink => "Drinks:",
    };

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for item in catalog.items(kind) {
        out.push_str(&format!(
            "{}. {} - {} (In Stock: {})\n",
            item.id,
            item.name,
            item.price(),
            item.stock
        ));
    }
    out
}

/// Lists the combo sets with their frozen components.
pub fn render_sets(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("Sets:\n");
    for set in catalog.sets() {
        out.push_str(&format!("{}. {} - {}\n", set.id, set.name, set.price()));
        for component in &set.items {
            out.push_str(&format!("    {}\n", component.name));
        }
    }
    out
}

/// Renders one order's body: its lines and total.
///
/// Used verbatim inside receipts and by the admin order listing.
pub fn render_order(order: &Order) -> String {
    let mut out = String::new();
    out.push_str(&format!("Order #{}\n", order.id));
    for line in &order.lines {
        match line {
            OrderLine::Item(item) => out.push_str(&format!(
                "{} x {} = {}\n",
                item.name,
                item.quantity,
                item.line_total()
            )),
            OrderLine::Set(set) => {
                out.push_str(&format!("{} = {}\n", set.name, set.price()))
            }
        }
    }
    out.push_str(&format!("Total: {}\n", order.total()));
    out
}

/// Wraps an order body in the receipt banner.
pub fn render_receipt(order: &Order, config: &AppConfig) -> String {
    let mut out = String::new();
    out.push_str("****************** Receipt ******************\n");
    out.push_str(&config.store_name);
    out.push('\n');
    out.push_str(&render_order(order));
    out.push_str(RULE);
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
