//! # Kiosk Module
//!
//! The cart accumulator and order service.
//!
//! ## Kiosk Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Kiosk Operations                                   │
//! │                                                                         │
//! │  Customer Action           Kiosk Call              Selection Change     │
//! │  ───────────────           ──────────              ────────────────     │
//! │                                                                         │
//! │  Pick a beverage ────────► add() ────────────────► push(clone)         │
//! │                                                                         │
//! │  Pick several ───────────► add_quantity() ───────► push(clone) × n     │
//! │                                                                         │
//! │  Put one back ───────────► remove() ─────────────► drop first match    │
//! │                                                                         │
//! │  Start over ─────────────► clear() ──────────────► selection empty     │
//! │                                                                         │
//! │  Review cart ────────────► beverages() ──────────► (read only)         │
//! │                                                                         │
//! │  Checkout ───────────────► create_order() ───────► (read only:         │
//! │                            create_order_at()        snapshot, cart      │
//! │                                                     left unchanged)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The kiosk has no explicit states: it is a mutable accumulator with one
//! snapshot-producing operation, and that operation is non-destructive and
//! repeatable.

use chrono::{Local, NaiveDateTime};

use crate::error::KioskResult;
use crate::types::{Beverage, Order};
use crate::validation::{validate_order_quantity, validate_order_time};

// =============================================================================
// Kiosk
// =============================================================================

/// The kiosk's cart and order service.
///
/// ## Invariants
/// - The selection preserves insertion order (it is the cart display order)
/// - Duplicates are allowed: adding with a quantity repeats the same
///   instance contiguously
/// - The selection is owned exclusively; callers only ever see it through
///   an immutable slice
/// - Failed operations leave the selection untouched (validate before
///   mutate)
#[derive(Debug, Default)]
pub struct Kiosk {
    /// Selected beverages, in the order they were added.
    beverages: Vec<Beverage>,
}

impl Kiosk {
    /// Creates a kiosk with an empty selection.
    pub fn new() -> Self {
        Kiosk {
            beverages: Vec::new(),
        }
    }

    /// Appends one beverage to the selection.
    ///
    /// The stored clone shares the argument's instance token, so the caller
    /// can later [`remove`](Kiosk::remove) exactly what was added. Always
    /// succeeds.
    pub fn add(&mut self, beverage: &Beverage) {
        self.beverages.push(beverage.clone());
    }

    /// Appends `quantity` units of the same beverage, contiguously.
    ///
    /// ## Errors
    /// Returns [`KioskError::QuantityTooSmall`] when `quantity < 1`; the
    /// selection is untouched in that case.
    ///
    /// [`KioskError::QuantityTooSmall`]: crate::KioskError::QuantityTooSmall
    pub fn add_quantity(&mut self, beverage: &Beverage, quantity: i64) -> KioskResult<()> {
        validate_order_quantity(quantity)?;

        for _ in 0..quantity {
            self.beverages.push(beverage.clone());
        }

        Ok(())
    }

    /// Removes the first occurrence of the given beverage instance.
    ///
    /// Matches on the instance token, not on value: a beverage with equal
    /// name and price but a different token is left alone. Removing a
    /// beverage that is not in the selection is a no-op, not an error.
    pub fn remove(&mut self, beverage: &Beverage) {
        if let Some(index) = self.beverages.iter().position(|b| b.id() == beverage.id()) {
            self.beverages.remove(index);
        }
    }

    /// Empties the selection. Always succeeds.
    pub fn clear(&mut self) {
        self.beverages.clear();
    }

    /// Returns the current selection as an ordered, read-only view.
    #[inline]
    pub fn beverages(&self) -> &[Beverage] {
        &self.beverages
    }

    /// Checks if the selection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beverages.is_empty()
    }

    /// Creates an order using the current wall-clock time.
    ///
    /// Thin convenience wrapper over [`create_order_at`](Kiosk::create_order_at);
    /// this is the only place in the crate that reads the system clock.
    pub fn create_order(&self) -> KioskResult<Order> {
        self.create_order_at(Local::now().naive_local())
    }

    /// Creates an order using `ordered_at` as the reference instant.
    ///
    /// The instant is injected so the open-hours check stays a pure
    /// function of (selection, instant) and every boundary can be tested
    /// deterministically.
    ///
    /// On success the current selection is snapshotted (copied, never
    /// aliased) into the returned [`Order`]; the kiosk's own selection is
    /// left unchanged, so checkout can be repeated.
    ///
    /// ## Errors
    /// Returns [`KioskError::OutsideOpenHours`] when the instant's
    /// time-of-day falls outside `[10:00, 22:00)`.
    ///
    /// [`KioskError::OutsideOpenHours`]: crate::KioskError::OutsideOpenHours
    pub fn create_order_at(&self, ordered_at: NaiveDateTime) -> KioskResult<Order> {
        validate_order_time(ordered_at)?;

        Ok(Order::new(self.beverages.clone(), ordered_at))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KioskError;
    use chrono::NaiveDate;

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 20)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_add() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();

        kiosk.add(&americano);

        assert_eq!(kiosk.beverages().len(), 1);
        assert_eq!(kiosk.beverages()[0].name(), "Americano");
    }

    #[test]
    fn test_add_several_beverages() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();

        kiosk.add_quantity(&americano, 2).unwrap();

        assert_eq!(kiosk.beverages().len(), 2);
        // Both entries are the added instance (same token), contiguous
        assert_eq!(kiosk.beverages()[0], americano);
        assert_eq!(kiosk.beverages()[1].id(), americano.id());
    }

    #[test]
    fn test_add_zero_beverages() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();

        let err = kiosk.add_quantity(&americano, 0).unwrap_err();

        assert!(matches!(err, KioskError::QuantityTooSmall { requested: 0 }));
        assert_eq!(err.to_string(), "at least one beverage must be ordered");
        // Validate-before-mutate: nothing was appended
        assert!(kiosk.is_empty());
    }

    #[test]
    fn test_add_negative_quantity_leaves_cart_unchanged() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();
        kiosk.add(&americano);

        assert!(kiosk.add_quantity(&americano, -1).is_err());
        assert_eq!(kiosk.beverages().len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();

        kiosk.add(&americano);
        assert_eq!(kiosk.beverages().len(), 1);

        kiosk.remove(&americano);
        assert!(kiosk.is_empty());
    }

    #[test]
    fn test_remove_matches_identity_not_value() {
        let mut kiosk = Kiosk::new();
        let mine = Beverage::americano();
        let someone_elses = Beverage::americano();

        kiosk.add(&someone_elses);
        kiosk.add(&mine);

        // Value-equal but a distinct instance: only `mine` may go
        kiosk.remove(&mine);

        assert_eq!(kiosk.beverages().len(), 1);
        assert_eq!(kiosk.beverages()[0].id(), someone_elses.id());
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();

        kiosk.add_quantity(&americano, 3).unwrap();
        kiosk.remove(&americano);

        assert_eq!(kiosk.beverages().len(), 2);
    }

    #[test]
    fn test_remove_absent_beverage_is_noop() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();
        let latte = Beverage::latte();

        kiosk.add(&americano);
        kiosk.remove(&latte);

        assert_eq!(kiosk.beverages().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();
        let latte = Beverage::latte();

        kiosk.add(&americano);
        kiosk.add(&latte);
        assert_eq!(kiosk.beverages().len(), 2);

        kiosk.clear();
        assert!(kiosk.is_empty());
    }

    #[test]
    fn test_clear_empty_cart() {
        let mut kiosk = Kiosk::new();
        kiosk.clear();
        assert!(kiosk.is_empty());
    }

    #[test]
    fn test_create_order_with_injected_time() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();

        kiosk.add(&americano);
        let order = kiosk.create_order_at(at(10, 0)).unwrap();

        assert_eq!(order.beverages().len(), 1);
        assert_eq!(order.beverages()[0].name(), "Americano");
        assert_eq!(order.ordered_at(), at(10, 0));
    }

    #[test]
    fn test_create_order_outside_open_time() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();

        kiosk.add(&americano);
        let err = kiosk.create_order_at(at(9, 59)).unwrap_err();

        assert!(matches!(err, KioskError::OutsideOpenHours { .. }));
        assert_eq!(
            err.to_string(),
            "outside ordering hours; contact an administrator"
        );
    }

    #[test]
    fn test_create_order_at_closing_time_is_rejected() {
        let kiosk = Kiosk::new();
        assert!(kiosk.create_order_at(at(21, 59)).is_ok());
        assert!(kiosk.create_order_at(at(22, 0)).is_err());
    }

    #[test]
    fn test_create_order_keeps_cart_intact() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();
        kiosk.add(&americano);

        let first = kiosk.create_order_at(at(12, 0)).unwrap();

        // Checkout does not clear the cart and can be repeated
        assert_eq!(kiosk.beverages().len(), 1);
        let second = kiosk.create_order_at(at(12, 30)).unwrap();
        assert_eq!(first.beverages().len(), second.beverages().len());
    }

    #[test]
    fn test_order_is_a_snapshot_of_the_selection() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();
        let latte = Beverage::latte();

        kiosk.add(&americano);
        let order = kiosk.create_order_at(at(11, 0)).unwrap();

        // Mutating the kiosk afterwards must not leak into the order
        kiosk.add(&latte);
        kiosk.clear();

        assert_eq!(order.beverages().len(), 1);
        assert_eq!(order.beverages()[0].id(), americano.id());
    }

    #[test]
    fn test_order_preserves_duplicates_and_insertion_order() {
        let mut kiosk = Kiosk::new();
        let americano = Beverage::americano();
        let latte = Beverage::latte();

        kiosk.add_quantity(&americano, 2).unwrap();
        kiosk.add(&latte);

        let order = kiosk.create_order_at(at(15, 0)).unwrap();
        let names: Vec<&str> = order.beverages().iter().map(|b| b.name()).collect();

        assert_eq!(names, vec!["Americano", "Americano", "Latte"]);
    }
}
