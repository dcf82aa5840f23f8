//! # ashkana-core: Pure Business Logic for Ashkana POS
//!
//! This crate is the **heart** of Ashkana POS. It contains all business logic
//! as pure functions and in-memory state machines with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ashkana POS Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal (stdin/stdout)                        │   │
//! │  │     Main Menu ──► Checkout ──► Receipt / Admin Panel            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Terminal trait                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    CLI Flows (apps/cli)                         │   │
//! │  │    checkout selection loops, admin panel loop                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ ashkana-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   order   │  │   │
//! │  │   │ MenuItem  │  │   Money   │  │  Catalog  │  │ OrderBook │  │   │
//! │  │   │  FoodSet  │  │  parsing  │  │  stock    │  │ sequence  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO FILES • PURE STATE TRANSITIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, FoodSet, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Mutable menu/drink/set collections with first-match lookup
//! - [`order`] - Orders, the order id sequence, and the order book
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for admin operations
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 2. **First-Match Collections**: entity ids are NOT unique; lookups scan in
//!    insertion order and touch only the first match
//! 3. **Immediate Mutation**: stock decrements take effect per accepted line and
//!    are never rolled back, even if the enclosing order is cancelled
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// Re-exports for convenience: `use ashkana_core::Money` instead of
// `use ashkana_core::money::Money`.

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderBook, OrderLine, OrderSequence};
pub use types::{FoodSet, ItemKind, MenuItem, PaymentMethod};
