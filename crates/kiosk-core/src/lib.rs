//! # kiosk-core: Pure Business Logic for the Cafe Kiosk
//!
//! This crate is the **heart** of the kiosk. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cafe Kiosk Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/terminal (Runner)                         │   │
//! │  │        logging setup ──► kiosk flow ──► outcome report          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   kiosk   │  │ validation│  │   │
//! │  │   │ Beverage  │  │   Money   │  │   Kiosk   │  │   rules   │  │   │
//! │  │   │   Order   │  │  (won)    │  │  (cart)   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK READS IN VALIDATION • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Beverage, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`kiosk`] - The cart accumulator and order service
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: order validation is a function of (selection, instant)
//! 2. **Injected Time**: [`Kiosk::create_order_at`] takes the reference instant
//!    as an argument; only the convenience wrapper touches the real clock
//! 3. **Integer Money**: all monetary values are whole won (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kiosk_core::{Beverage, Kiosk};
//!
//! let mut kiosk = Kiosk::new();
//! let americano = Beverage::americano();
//! kiosk.add(&americano);
//!
//! // Deterministic path: the ordering instant is injected
//! let at = NaiveDate::from_ymd_opt(2025, 6, 20)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let order = kiosk.create_order_at(at).unwrap();
//!
//! assert_eq!(order.beverages().len(), 1);
//! assert_eq!(order.beverages()[0].name(), "Americano");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kiosk;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::Kiosk` instead of
// `use kiosk_core::kiosk::Kiosk`

pub use error::{KioskError, KioskResult};
pub use kiosk::Kiosk;
pub use money::Money;
pub use types::{Beverage, Order};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Hour of day (24h) at which the kiosk starts accepting orders.
///
/// The open-hours window is half-open: an order at exactly 10:00:00 is
/// accepted, one at 09:59:59 is not.
pub const OPEN_HOUR: u32 = 10;

/// Hour of day (24h) at which the kiosk stops accepting orders.
///
/// Exclusive bound: an order at exactly 22:00:00 is rejected, one at
/// 21:59:59 is accepted.
pub const CLOSE_HOUR: u32 = 22;
