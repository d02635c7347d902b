//! # Domain Types
//!
//! Core domain types for the cafe kiosk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │    Beverage     │          │      Order      │                      │
//! │  │  ─────────────  │          │  ─────────────  │                      │
//! │  │  id (UUID)      │  many──► │  beverages      │                      │
//! │  │  name           │          │  (snapshot)     │                      │
//! │  │  price (won)    │          │  ordered_at     │                      │
//! │  └─────────────────┘          └─────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every beverage instance has:
//! - `id`: UUID v4 instance token - assigned at construction, immutable
//! - Business data: (name, price) - what the customer sees
//!
//! Clones of an instance share its token; two separately constructed
//! beverages never do, even when name and price match. Removal from the
//! cart matches on the token, so it is identity-based, not value-based.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Beverage
// =============================================================================

/// A beverage sold by the kiosk.
///
/// Variants (Americano, Latte, ...) are plain instances of this one
/// concrete type: they differ only in fixed name/price data, so there is
/// no subtype hierarchy to dispatch over.
///
/// Immutable after construction: fields are private and no setters exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beverage {
    /// Instance token (UUID v4).
    id: Uuid,

    /// Display name shown to the customer.
    name: String,

    /// Price in whole won.
    price: Money,
}

impl Beverage {
    /// Creates a beverage with a fresh instance token.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Beverage {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
        }
    }

    /// Catalog entry: Americano, ₩4000.
    pub fn americano() -> Self {
        Beverage::new("Americano", Money::from_won(4000))
    }

    /// Catalog entry: Latte, ₩4500.
    pub fn latte() -> Self {
        Beverage::new("Latte", Money::from_won(4500))
    }

    /// Returns the instance token.
    ///
    /// Two beverages with the same token are the same instance (one is a
    /// clone of the other); equal name and price alone do not make a match.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order produced by the kiosk at checkout.
///
/// Uses the snapshot pattern: `beverages` is a frozen copy of the kiosk's
/// selection at the moment of creation - same instances, same duplicates,
/// same order - and stays unchanged no matter what happens to the live
/// cart afterwards.
///
/// Orders are created only by [`Kiosk::create_order_at`] (the constructor
/// is crate-private) and serialize but do not deserialize, so one cannot
/// be minted from outside data.
///
/// [`Kiosk::create_order_at`]: crate::Kiosk::create_order_at
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Selected beverages at creation time (frozen).
    beverages: Vec<Beverage>,

    /// The ordering instant the open-hours check was made against.
    ordered_at: NaiveDateTime,
}

impl Order {
    /// Creates an order from an already-validated selection snapshot.
    pub(crate) fn new(beverages: Vec<Beverage>, ordered_at: NaiveDateTime) -> Self {
        Order {
            beverages,
            ordered_at,
        }
    }

    /// Returns the ordered beverages, in cart display order.
    #[inline]
    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }

    /// Returns the ordering instant.
    #[inline]
    pub fn ordered_at(&self) -> NaiveDateTime {
        self.ordered_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
