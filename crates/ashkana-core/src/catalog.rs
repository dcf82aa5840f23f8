//! # Catalog
//!
//! The mutable collections of sellable entities: menu items, drinks, and
//! combo sets.
//!
//! ## Lookup Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    First-Match Linear Scan                              │
//! │                                                                         │
//! │  menu: [ {id:1 Kotlety} {id:1 Beshbarmak} {id:2 Pure potato} ... ]     │
//! │                │                                                        │
//! │  find_item(Menu, 1) ───► always the FIRST id:1 entry (Kotlety)         │
//! │                                                                         │
//! │  Collections are ordered Vecs, NOT maps. Duplicate ids are legal       │
//! │  (admins may create them deliberately or by mistake) and only the      │
//! │  first match is ever found, decremented, or (for drinks/sets)          │
//! │  removed.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Semantics
//! All mutations are immediate and visible to subsequent lookups in the same
//! process. There is no rollback mechanism: a stock decrement stands even if
//! the order that caused it is later cancelled.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{FoodSet, ItemKind, MenuItem};

// =============================================================================
// Catalog
// =============================================================================

/// The three independent sellable-entity collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    menu: Vec<MenuItem>,
    drinks: Vec<MenuItem>,
    sets: Vec<FoodSet>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// The items of one collection, in insertion order.
    pub fn items(&self, kind: ItemKind) -> &[MenuItem] {
        match kind {
            ItemKind::Menu => &self.menu,
            ItemKind::Drink => &self.drinks,
        }
    }

    /// The combo sets, in insertion order.
    pub fn sets(&self) -> &[FoodSet] {
        &self.sets
    }

    /// Finds the first entity in `kind`'s collection whose id matches.
    pub fn find_item(&self, kind: ItemKind, id: i64) -> Option<&MenuItem> {
        self.items(kind).iter().find(|item| item.id == id)
    }

    /// Finds the first set whose id matches.
    pub fn find_set(&self, id: i64) -> Option<&FoodSet> {
        self.sets.iter().find(|set| set.id == id)
    }

    // -------------------------------------------------------------------------
    // Stock
    // -------------------------------------------------------------------------

    /// Takes `quantity` units from the first matching entity's stock.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidInput`] if `quantity` is negative: stock is
    ///   monotonically non-increasing through this path, a negative request
    ///   must never restock
    /// - [`CoreError::InvalidSelection`] if no entity matches `id`
    /// - [`CoreError::InsufficientStock`] if `quantity` exceeds the current
    ///   stock; the stock is left unchanged
    ///
    /// On success the decrement takes effect immediately. It is not part of
    /// any transaction and is never rolled back.
    pub fn decrement_stock(&mut self, kind: ItemKind, id: i64, quantity: i64) -> CoreResult<()> {
        if quantity < 0 {
            return Err(CoreError::InvalidInput {
                input: quantity.to_string(),
            });
        }

        let item = self
            .collection_mut(kind)
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::InvalidSelection { id })?;

        if !item.can_take(quantity) {
            return Err(CoreError::InsufficientStock {
                id,
                requested: quantity,
                available: item.stock,
            });
        }

        item.stock -= quantity;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Adds (append-only, no uniqueness check)
    // -------------------------------------------------------------------------

    /// Appends an item to the tagged collection.
    ///
    /// No uniqueness check on id: callers may create duplicates, and the
    /// first-match rules above decide which duplicate wins.
    pub fn add_item(&mut self, kind: ItemKind, item: MenuItem) {
        self.collection_mut(kind).push(item);
    }

    /// Appends a combo set. No uniqueness check on id.
    pub fn add_set(&mut self, set: FoodSet) {
        self.sets.push(set);
    }

    // -------------------------------------------------------------------------
    // Removals (deliberately asymmetric)
    // -------------------------------------------------------------------------
    //
    // Menu removal is bulk (every matching entity goes), drink and set
    // removal take only the first match. These are distinct documented
    // behaviors, not one routine with a flag.

    /// Removes **all** menu entities matching `id`. Returns how many went.
    pub fn remove_menu_items(&mut self, id: i64) -> usize {
        let before = self.menu.len();
        self.menu.retain(|item| item.id != id);
        before - self.menu.len()
    }

    /// Removes only the **first** drink matching `id`.
    /// Returns `false` if nothing matched.
    pub fn remove_drink(&mut self, id: i64) -> bool {
        match self.drinks.iter().position(|drink| drink.id == id) {
            Some(index) => {
                self.drinks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes only the **first** set matching `id`.
    /// Returns `false` if nothing matched.
    pub fn remove_set(&mut self, id: i64) -> bool {
        match self.sets.iter().position(|set| set.id == id) {
            Some(index) => {
                self.sets.remove(index);
                true
            }
            None => false,
        }
    }

    fn collection_mut(&mut self, kind: ItemKind) -> &mut Vec<MenuItem> {
        match kind {
            ItemKind::Menu => &mut self.menu,
            ItemKind::Drink => &mut self.drinks,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(id: i64, name: &str, stock: i64, cents: i64) -> MenuItem {
        MenuItem::new(id, name, stock, Money::from_cents(cents))
    }

    fn catalog_with_duplicates() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_item(ItemKind::Menu, item(1, "Kotlety", 50, 599));
        catalog.add_item(ItemKind::Menu, item(1, "Beshbarmak", 10, 899));
        catalog.add_item(ItemKind::Menu, item(2, "Pure potato", 30, 799));
        catalog.add_item(ItemKind::Drink, item(101, "Kompot", 100, 199));
        catalog.add_item(ItemKind::Drink, item(101, "Zharma", 80, 199));
        catalog.add_set(FoodSet::new(201, "Combo A", vec![], Money::from_cents(799)));
        catalog.add_set(FoodSet::new(201, "Combo B", vec![], Money::from_cents(999)));
        catalog
    }

    #[test]
    fn test_find_item_takes_first_match() {
        let catalog = catalog_with_duplicates();
        assert_eq!(catalog.find_item(ItemKind::Menu, 1).unwrap().name, "Kotlety");
        assert_eq!(
            catalog.find_item(ItemKind::Drink, 101).unwrap().name,
            "Kompot"
        );
        assert!(catalog.find_item(ItemKind::Menu, 101).is_none());
    }

    #[test]
    fn test_find_set_takes_first_match() {
        let catalog = catalog_with_duplicates();
        assert_eq!(catalog.find_set(201).unwrap().name, "Combo A");
        assert!(catalog.find_set(999).is_none());
    }

    #[test]
    fn test_decrement_stock_hits_first_match_only() {
        let mut catalog = catalog_with_duplicates();
        catalog.decrement_stock(ItemKind::Menu, 1, 3).unwrap();

        assert_eq!(catalog.items(ItemKind::Menu)[0].stock, 47);
        // The second id:1 entity is untouched.
        assert_eq!(catalog.items(ItemKind::Menu)[1].stock, 10);
    }

    #[test]
    fn test_decrement_stock_insufficient_leaves_stock_unchanged() {
        let mut catalog = catalog_with_duplicates();
        let err = catalog
            .decrement_stock(ItemKind::Menu, 1, 51)
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                id: 1,
                requested: 51,
                available: 50,
            }
        ));
        assert_eq!(catalog.items(ItemKind::Menu)[0].stock, 50);
    }

    #[test]
    fn test_decrement_stock_unknown_id() {
        let mut catalog = catalog_with_duplicates();
        assert!(matches!(
            catalog.decrement_stock(ItemKind::Drink, 7, 1),
            Err(CoreError::InvalidSelection { id: 7 })
        ));
    }

    #[test]
    fn test_decrement_rejects_negative_quantity() {
        let mut catalog = catalog_with_duplicates();
        assert!(matches!(
            catalog.decrement_stock(ItemKind::Menu, 1, -5),
            Err(CoreError::InvalidInput { .. })
        ));
        assert_eq!(catalog.items(ItemKind::Menu)[0].stock, 50);
    }

    #[test]
    fn test_decrement_to_exactly_zero() {
        let mut catalog = catalog_with_duplicates();
        catalog.decrement_stock(ItemKind::Menu, 2, 30).unwrap();
        assert_eq!(catalog.find_item(ItemKind::Menu, 2).unwrap().stock, 0);
        assert!(catalog.decrement_stock(ItemKind::Menu, 2, 1).is_err());
    }

    #[test]
    fn test_add_allows_duplicate_ids() {
        let mut catalog = Catalog::new();
        catalog.add_item(ItemKind::Menu, item(5, "First", 1, 100));
        catalog.add_item(ItemKind::Menu, item(5, "Second", 2, 200));
        assert_eq!(catalog.items(ItemKind::Menu).len(), 2);
        assert_eq!(catalog.find_item(ItemKind::Menu, 5).unwrap().name, "First");
    }

    #[test]
    fn test_remove_menu_items_is_bulk() {
        let mut catalog = catalog_with_duplicates();
        let removed = catalog.remove_menu_items(1);

        assert_eq!(removed, 2);
        assert!(catalog.find_item(ItemKind::Menu, 1).is_none());
        // Unrelated ids survive.
        assert!(catalog.find_item(ItemKind::Menu, 2).is_some());
    }

    #[test]
    fn test_remove_drink_takes_first_match_only() {
        let mut catalog = catalog_with_duplicates();
        assert!(catalog.remove_drink(101));

        // The duplicate remains, and is now the first match.
        assert_eq!(
            catalog.find_item(ItemKind::Drink, 101).unwrap().name,
            "Zharma"
        );
        assert!(!catalog.remove_drink(999));
    }

    #[test]
    fn test_remove_set_takes_first_match_only() {
        let mut catalog = catalog_with_duplicates();
        assert!(catalog.remove_set(201));

        assert_eq!(catalog.sets().len(), 1);
        assert_eq!(catalog.find_set(201).unwrap().name, "Combo B");
        assert!(!catalog.remove_set(999));
    }

    #[test]
    fn test_remove_from_empty_collections() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.remove_menu_items(1), 0);
        assert!(!catalog.remove_drink(1));
        assert!(!catalog.remove_set(1));
    }
}
