//! # Domain Types
//!
//! Core domain types used throughout Ashkana POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │    FoodSet      │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  Cash           │       │
//! │  │  name           │   │  name           │   │  Credit         │       │
//! │  │  stock          │   │  items (frozen) │   └─────────────────┘       │
//! │  │  price_cents    │   │  price_cents    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Semantics
//! Entity ids are plain integers and are NOT unique: the same id may appear
//! on several entities in one collection, and on unrelated entities across
//! collections (menu items and drinks are tracked separately). Every lookup
//! in the system is a first-match scan in insertion order.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Collection Tag
// =============================================================================

/// Which sellable-item collection an operation targets.
///
/// Menu items and drinks share a shape but live in independent collections
/// with independent id spaces, so catalog operations take this tag rather
/// than duplicating every method per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A dish on the food menu.
    Menu,
    /// A drink.
    Drink,
}

impl ItemKind {
    /// Human-readable collection name for messages and logs.
    pub const fn label(&self) -> &'static str {
        match self {
            ItemKind::Menu => "item",
            ItemKind::Drink => "drink",
        }
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A sellable entity: a dish or a drink.
///
/// `stock` is the only mutable field; it is decremented in place as order
/// lines are accepted and restocked only by admin edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Integer identifier; not guaranteed unique within its collection.
    pub id: i64,

    /// Display name shown on listings and receipts.
    pub name: String,

    /// Units currently available. Never goes negative.
    pub stock: i64,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl MenuItem {
    /// Creates a new menu item or drink.
    pub fn new(id: i64, name: impl Into<String>, stock: i64, price: Money) -> Self {
        MenuItem {
            id,
            name: name.into(),
            stock,
            price_cents: price.cents(),
        }
    }

    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` units can be taken from stock.
    #[inline]
    pub fn can_take(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Food Set
// =============================================================================

/// A combo set: a named bundle of item snapshots at a fixed price.
///
/// ## Snapshot Semantics
/// `items` are copies frozen at the moment the set is created. Editing or
/// removing the originals from the catalog later does not reach into an
/// existing set. The set price is independent of the component prices, and
/// ordering a set never touches any stock pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSet {
    /// Integer identifier; not guaranteed unique.
    pub id: i64,

    /// Display name shown on listings and receipts.
    pub name: String,

    /// Component snapshots, in the order they were added.
    pub items: Vec<MenuItem>,

    /// Bundle price in cents, independent of component prices.
    pub price_cents: i64,
}

impl FoodSet {
    /// Creates a new set from already-snapshotted components.
    pub fn new(id: i64, name: impl Into<String>, items: Vec<MenuItem>, price: Money) -> Self {
        FoodSet {
            id,
            name: name.into(),
            items,
            price_cents: price.cents(),
        }
    }

    /// Returns the bundle price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a completed order was paid.
///
/// Payment is an acknowledgment only: it affects neither totals nor stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Credit card payment.
    Credit,
}

impl PaymentMethod {
    /// Maps a console menu choice (1 = cash, 2 = credit) to a method.
    ///
    /// Anything outside the known set is an invalid-input error, never
    /// silently coerced.
    pub fn from_choice(choice: i64) -> CoreResult<Self> {
        match choice {
            1 => Ok(PaymentMethod::Cash),
            2 => Ok(PaymentMethod::Credit),
            other => Err(CoreError::InvalidInput {
                input: other.to_string(),
            }),
        }
    }

    /// Wording used in the payment acknowledgment line.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "in cash",
            PaymentMethod::Credit => "with credit card",
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
    fn test_menu_item_price_and_stock_check() {
        let item = MenuItem::new(1, "Kotlety", 50, Money::from_cents(599));
        assert_eq!(item.price().cents(), 599);
        assert!(item.can_take(50));
        assert!(!item.can_take(51));
    }

    #[test]
    fn test_set_components_are_snapshots() {
        let mut original = MenuItem::new(1, "Kotlety", 50, Money::from_cents(599));
        let set = FoodSet::new(
            201,
            "Russian Combo",
            vec![original.clone()],
            Money::from_cents(999),
        );

        // Mutating the original must not reach into the set.
        original.stock = 0;
        original.name = "Renamed".to_string();
        assert_eq!(set.items[0].stock, 50);
        assert_eq!(set.items[0].name, "Kotlety");
    }

    #[test]
    fn test_payment_method_from_choice() {
        assert_eq!(PaymentMethod::from_choice(1).unwrap(), PaymentMethod::Cash);
        assert_eq!(
            PaymentMethod::from_choice(2).unwrap(),
            PaymentMethod::Credit
        );
        assert!(matches!(
            PaymentMethod::from_choice(3),
            Err(CoreError::InvalidInput { .. })
        ));
        assert!(PaymentMethod::from_choice(0).is_err());
    }
}
