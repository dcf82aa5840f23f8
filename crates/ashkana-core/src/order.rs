//! # Orders and the Order Book
//!
//! An order accumulates snapshot lines during a checkout transaction and
//! becomes immutable once committed to the order book.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CONSTRUCT                                                           │
//! │     └── Order::new(&sequence) → consumes the next sequential id        │
//! │         (the id is spent even if the order is later cancelled)          │
//! │                                                                         │
//! │  2. ACCUMULATE                                                          │
//! │     └── add_item() → snapshot line, decoupled from catalog stock        │
//! │     └── add_set()  → whole-set line, quantity implicitly 1              │
//! │                                                                         │
//! │  3. COMMIT                                                              │
//! │     └── OrderBook::commit() → revenue credited with total(),           │
//! │         exactly once, and the order appended                            │
//! │                                                                         │
//! │  (CANCEL at any point before commit: the order is simply dropped.      │
//! │   Stock already taken for its lines stays taken.)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{FoodSet, MenuItem};

// =============================================================================
// Line Item
// =============================================================================

/// An item snapshot with an order-specific quantity.
///
/// Uses the snapshot pattern to freeze name and unit price at the moment the
/// line is accepted: later catalog edits do not reach into existing orders,
/// and the quantity here is the ordered amount, unrelated to remaining stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog id at time of ordering.
    pub item_id: i64,

    /// Name at time of ordering (frozen).
    pub name: String,

    /// Unit price in cents at time of ordering (frozen).
    pub unit_price_cents: i64,

    /// Quantity ordered.
    pub quantity: i64,

    /// When this line was accepted.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Snapshots a catalog entity into an order line.
    pub fn from_item(item: &MenuItem, quantity: i64) -> Self {
        LineItem {
            item_id: item.id,
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One line of an order: a quantified item snapshot or a whole set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderLine {
    /// An item (menu dish or drink) with a quantity.
    Item(LineItem),

    /// A whole combo set at its fixed price, quantity implicitly 1.
    /// Selecting the same set again appends another line.
    Set(FoodSet),
}

impl OrderLine {
    /// What this line contributes to the order total.
    pub fn line_total(&self) -> Money {
        match self {
            OrderLine::Item(line) => line.line_total(),
            OrderLine::Set(set) => set.price(),
        }
    }
}

// =============================================================================
// Order Sequence
// =============================================================================

/// Process-wide monotonic source of order ids.
///
/// Ids start at 1 and advance by exactly 1 per constructed order. An id is
/// consumed at construction time, so a cancelled checkout still advances the
/// sequence; ids are never reused and never reset for the process lifetime.
/// Atomic so the authority stays sound even if flows ever run off-thread.
#[derive(Debug)]
pub struct OrderSequence(AtomicU64);

impl OrderSequence {
    /// Creates a sequence starting at order id 1.
    pub fn new() -> Self {
        OrderSequence(AtomicU64::new(1))
    }

    /// Takes the next id, advancing the sequence.
    pub fn next_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        OrderSequence::new()
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order under construction or committed.
///
/// Mutable only during its checkout transaction; the order book takes
/// ownership at commit, after which nothing appends to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Sequential id, assigned at construction.
    pub id: u64,

    /// Accepted lines, in acceptance order.
    pub lines: Vec<OrderLine>,

    /// When the checkout transaction started.
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Starts a new order, consuming the next id from the sequence.
    pub fn new(sequence: &OrderSequence) -> Self {
        Order {
            id: sequence.next_id(),
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends an item snapshot line with the given order quantity.
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) {
        self.lines.push(OrderLine::Item(LineItem::from_item(item, quantity)));
    }

    /// Appends a whole-set line.
    pub fn add_set(&mut self, set: &FoodSet) {
        self.lines.push(OrderLine::Set(set.clone()));
    }

    /// Sum of all line totals. Always ≥ 0; an order with no lines totals 0.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_total())
    }

    /// Whether any line has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Order Book
// =============================================================================

/// Append-only log of committed orders plus the running revenue total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderBook {
    orders: Vec<Order>,
    total_revenue: Money,
}

impl OrderBook {
    /// Creates an empty order book.
    pub fn new() -> Self {
        OrderBook::default()
    }

    /// Commits a finished order: credits revenue with the order's total
    /// (exactly once, at this moment) and appends the order.
    ///
    /// Zero-line orders are accepted; they contribute nothing to revenue.
    pub fn commit(&mut self, order: Order) -> &Order {
        self.total_revenue += order.total();
        self.orders.push(order);
        self.orders.last().expect("order just pushed")
    }

    /// All committed orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Cumulative revenue across every committed order.
    pub fn total_revenue(&self) -> Money {
        self.total_revenue
    }

    /// Number of committed orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether any order has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
