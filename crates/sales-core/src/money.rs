//! # Money Module
//!
//! Provides the `Revenue` type for the accumulated sales total.
//!
//! ## Floating Point, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHY f64 AND NOT INTEGER CENTS                                          │
//! │                                                                         │
//! │  Catalogue prices arrive as arbitrary JSON numbers (28.1, 2.499 ...)    │
//! │  and quantities may be fractional or negative.                          │
//! │                                                                         │
//! │  The total is the plain f64 sum of price × quantity, accumulated in     │
//! │  sales order. Rounding to cents happens ONLY at display time.           │
//! │                                                                         │
//! │  Consequence: reordering sales can drift the last bits of the total.   │
//! │  That drift is accepted and never shows at 2 decimal places in         │
//! │  realistic inputs.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::money::Revenue;
//!
//! let mut total = Revenue::zero();
//! total += Revenue::line_total(2.5, 4.0);
//! total += Revenue::line_total(0.99, 1.0);
//!
//! assert_eq!(total.to_string(), "$10.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Revenue Type
// =============================================================================

/// A revenue amount in major currency units (dollars).
///
/// No currency or locale is attached: the display is always `$` followed by
/// the value with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revenue(f64);

impl Revenue {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Revenue(value)
    }

    /// Returns zero revenue.
    #[inline]
    pub const fn zero() -> Self {
        Revenue(0.0)
    }

    /// Revenue of one matched sale line: `price × quantity`.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::money::Revenue;
    ///
    /// assert_eq!(Revenue::line_total(2.5, 4.0).value(), 10.0);
    /// assert_eq!(Revenue::line_total(3.0, -1.0).value(), -3.0); // a return
    /// ```
    #[inline]
    pub fn line_total(price: f64, quantity: f64) -> Self {
        Revenue(price * quantity)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$<value with 2 decimal places>`.
///
/// Negative amounts keep the sign after the dollar sign (`$-5.50`).
impl fmt::Display for Revenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Add for Revenue {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Revenue(self.0 + other.0)
    }
}

impl AddAssign for Revenue {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl From<f64> for Revenue {
    fn from(value: f64) -> Self {
        Revenue(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
