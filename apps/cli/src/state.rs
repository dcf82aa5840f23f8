//! # Application State
//!
//! Process-lifetime shared state: the catalog, the order book, and the
//! order id sequence. Created once at startup, owned by the REPL, and
//! borrowed mutably by whichever flow is active. Input is synchronous,
//! so exactly one flow runs at a time.

use ashkana_core::{Catalog, FoodSet, ItemKind, MenuItem, Money, OrderBook, OrderSequence};

/// Everything the flows operate on.
#[derive(Debug, Default)]
pub struct AppState {
    /// Menu items, drinks, and combo sets available for sale.
    pub catalog: Catalog,

    /// Committed orders and cumulative revenue.
    pub orders: OrderBook,

    /// The order-construction authority: sequential ids from 1.
    pub sequence: OrderSequence,
}

impl AppState {
    /// Empty state (used by tests that seed their own data).
    pub fn new() -> Self {
        AppState::default()
    }

    /// State seeded with the opening catalog.
    ///
    /// The duplicate ids (two menu entries with id 1, two with id 3) are
    /// intentional: first-match lookup decides which one an order or a
    /// removal touches, and the duplicates keep that behavior honest.
    pub fn seeded() -> Self {
        let mut catalog = Catalog::new();

        let kotlety = MenuItem::new(1, "Kotlety", 50, Money::from_cents(599));
        let beshbarmak = MenuItem::new(1, "Beshbarmak", 10, Money::from_cents(899));
        catalog.add_item(ItemKind::Menu, kotlety.clone());
        catalog.add_item(ItemKind::Menu, beshbarmak.clone());
        catalog.add_item(
            ItemKind::Menu,
            MenuItem::new(2, "Pure potato", 30, Money::from_cents(799)),
        );
        catalog.add_item(
            ItemKind::Menu,
            MenuItem::new(3, "Olivie", 20, Money::from_cents(499)),
        );
        catalog.add_item(
            ItemKind::Menu,
            MenuItem::new(3, "Slice of Bread", 20, Money::from_cents(499)),
        );

        let kompot = MenuItem::new(101, "Kompot", 100, Money::from_cents(199));
        let zharma = MenuItem::new(102, "Zharma", 80, Money::from_cents(199));
        catalog.add_item(ItemKind::Drink, kompot.clone());
        catalog.add_item(ItemKind::Drink, zharma.clone());
        catalog.add_item(
            ItemKind::Drink,
            MenuItem::new(103, "Tea", 70, Money::from_cents(199)),
        );

        // Set components are snapshots taken now; later menu edits won't
        // reach into them.
        catalog.add_set(FoodSet::new(
            201,
            "Kyrgyz Combo",
            vec![beshbarmak, zharma],
            Money::from_cents(799),
        ));
        catalog.add_set(FoodSet::new(
            202,
            "Russian Combo",
            vec![kotlety, kompot],
            Money::from_cents(999),
        ));

        AppState {
            catalog,
            orders: OrderBook::new(),
            sequence: OrderSequence::new(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_shape() {
        let state = AppState::seeded();

        assert_eq!(state.catalog.items(ItemKind::Menu).len(), 5);
        assert_eq!(state.catalog.items(ItemKind::Drink).len(), 3);
        assert_eq!(state.catalog.sets().len(), 2);
        assert!(state.orders.is_empty());
    }

    #[test]
    fn test_seeded_duplicates_resolve_first_match() {
        let state = AppState::seeded();

        let first = state.catalog.find_item(ItemKind::Menu, 1).unwrap();
        assert_eq!(first.name, "Kotlety");
        assert_eq!(first.stock, 50);
        assert_eq!(first.price_cents, 599);

        let third = state.catalog.find_item(ItemKind::Menu, 3).unwrap();
        assert_eq!(third.name, "Olivie");
    }

    #[test]
    fn test_seeded_set_components_are_frozen_copies() {
        let mut state = AppState::seeded();

        // Wipe the menu; the combos keep their component snapshots.
        state.catalog.remove_menu_items(1);
        let combo = state.catalog.find_set(202).unwrap();
        assert_eq!(combo.items[0].name, "Kotlety");
    }
}
