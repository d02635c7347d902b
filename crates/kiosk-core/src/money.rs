//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! Floating point cannot represent retail prices exactly (0.1 + 0.2 !=
//! 0.3), so every monetary value in the system is an integer count of the
//! smallest currency unit. The kiosk trades in Korean won, which has no
//! minor unit: `Money` stores whole won.
//!
//! ## Usage
//! ```rust
//! use kiosk_core::money::Money;
//!
//! let price = Money::from_won(4000);
//! assert_eq!(price.won(), 4000);
//! assert_eq!(price.to_string(), "₩4000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Korean won.
///
/// ## Design Decisions
/// - **i64 (signed)**: room for refund/adjustment amounts if they are
///   ever needed; catalog prices themselves are non-negative constants
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, total ordering for price comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole won.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let price = Money::from_won(4500);
    /// assert_eq!(price.won(), 4500);
    /// ```
    #[inline]
    pub const fn from_won(won: i64) -> Self {
        Money(won)
    }

    /// Returns the value in whole won.
    #[inline]
    pub const fn won(&self) -> i64 {
        self.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. A real storefront would localize
/// currency formatting at the presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₩{}", sign, self.0.abs())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
