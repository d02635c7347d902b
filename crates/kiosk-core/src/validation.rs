//! # Validation Module
//!
//! Business rule validation for the cafe kiosk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validate Before Mutate                             │
//! │                                                                         │
//! │  add_quantity(beverage, qty)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_order_quantity(qty) ──── Err ──► cart untouched              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  append qty clones                                                      │
//! │                                                                         │
//! │  create_order_at(instant)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_order_time(instant) ──── Err ──► no order, cart untouched    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  snapshot selection into Order                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check here is a pure function of its arguments. In particular the
//! ordering instant is passed in, never read from the system clock, so the
//! open-hours boundary can be pinned exactly in unit tests.

use chrono::{NaiveDateTime, NaiveTime};

use crate::error::{KioskError, KioskResult};
use crate::{CLOSE_HOUR, OPEN_HOUR};

// =============================================================================
// Quantity Rules
// =============================================================================

/// Validates a requested beverage quantity.
///
/// ## Rules
/// - Must be at least 1 (one cup is the minimum order unit)
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::validate_order_quantity;
///
/// assert!(validate_order_quantity(1).is_ok());
/// assert!(validate_order_quantity(0).is_err());
/// assert!(validate_order_quantity(-3).is_err());
/// ```
pub fn validate_order_quantity(quantity: i64) -> KioskResult<()> {
    if quantity < 1 {
        return Err(KioskError::QuantityTooSmall {
            requested: quantity,
        });
    }

    Ok(())
}

// =============================================================================
// Open-Hours Rules
// =============================================================================

/// Validates that an ordering instant falls inside the open-hours window.
///
/// ## Rules
/// - Time-of-day must lie in `[10:00, 22:00)` - half-open:
///   - 10:00:00 accepted, 09:59:59 rejected
///   - 21:59:59 accepted, 22:00:00 rejected
/// - Only the time-of-day matters; the date does not
pub fn validate_order_time(ordered_at: NaiveDateTime) -> KioskResult<()> {
    let open = NaiveTime::from_hms_opt(OPEN_HOUR, 0, 0).expect("open hour is a valid time");
    let close = NaiveTime::from_hms_opt(CLOSE_HOUR, 0, 0).expect("close hour is a valid time");

    let time = ordered_at.time();
    if time < open || time >= close {
        return Err(KioskError::OutsideOpenHours { ordered_at });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
