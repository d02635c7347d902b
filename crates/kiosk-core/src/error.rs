//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant carries a fixed customer-facing message; context
//!    (the rejected quantity, the rejected instant) rides in the fields
//! 4. Errors are caller errors: surfaced synchronously at the call site,
//!    never retried, never logged out of band

use chrono::NaiveDateTime;
use thiserror::Error;

// =============================================================================
// Kiosk Error
// =============================================================================

/// Business rule violations raised by the kiosk.
///
/// Both variants are invalid-input errors: the kiosk's own state is never
/// touched when one is returned.
#[derive(Debug, Error)]
pub enum KioskError {
    /// Requested quantity is below the one-cup minimum.
    ///
    /// ## When This Occurs
    /// - [`Kiosk::add_quantity`](crate::Kiosk::add_quantity) called with
    ///   zero or a negative quantity
    #[error("at least one beverage must be ordered")]
    QuantityTooSmall { requested: i64 },

    /// The ordering instant falls outside the open-hours window.
    ///
    /// ## When This Occurs
    /// - [`Kiosk::create_order`](crate::Kiosk::create_order) (or the
    ///   injected-instant variant) invoked before 10:00 or at/after 22:00
    #[error("outside ordering hours; contact an administrator")]
    OutsideOpenHours { ordered_at: NaiveDateTime },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with KioskError.
pub type KioskResult<T> = Result<T, KioskError>;

// =============================================================================
// Unit Tests
// =============================================================================
