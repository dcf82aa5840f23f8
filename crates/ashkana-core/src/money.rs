//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A receipt that sums 5.99 three times in f32 may print 17.969999.      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    599 cents × 3 = 1797 cents, displayed as $17.97, exactly            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ashkana_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(599); // $5.99
//!
//! // Arithmetic operations
//! let line = price * 3;                          // $17.97
//! let total = line + Money::from_cents(199);     // $19.96
//!
//! // Parse admin console input
//! let parsed: Money = "8.99".parse().unwrap();
//! assert_eq!(parsed.cents(), 899);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for accumulated revenue; negatives never occur
///   in practice because prices are validated non-negative at the boundary
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ashkana_core::money::Money;
    ///
    /// let price = Money::from_cents(599); // Represents $5.99
    /// assert_eq!(price.cents(), 599);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// Used directly on receipts and catalog listings.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Parses a decimal price string as entered on the admin console.
///
/// Accepts `"8"`, `"8.9"`, and `"8.99"`; rejects negatives, more than two
/// fraction digits, and anything non-numeric. The fraction is zero-padded,
/// so `"8.9"` is 890 cents, not 809.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a non-negative amount like 5.99".to_string(),
        };

        let (major_str, minor_str) = match s.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (s, ""),
        };

        if major_str.is_empty() || major_str.starts_with('-') || minor_str.len() > 2 {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;
        let minor: i64 = if minor_str.is_empty() {
            0
        } else {
            if !minor_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            // "9" means 90 cents, "09" means 9 cents
            let parsed: i64 = minor_str.parse().map_err(|_| invalid())?;
            if minor_str.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        Ok(Money(major * 100 + minor))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=), used by the revenue accumulator.
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity (for line totals).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
