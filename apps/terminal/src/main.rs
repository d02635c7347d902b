//! # Kiosk Terminal
//!
//! Console runner for the cafe kiosk.
//!
//! Walks one customer flow against the real wall clock: assemble a cart,
//! change your mind once, then check out. Whether checkout succeeds depends
//! on when you run it - the open-hours rule lives in kiosk-core and this
//! runner just reports the outcome.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize Logging ── tracing-subscriber with env filter
//!                          Default: INFO, override with RUST_LOG
//! 2. Assemble Cart ─────── add Americano, add 2 Lattes, put one back
//! 3. Checkout ──────────── create_order() against the current time
//! ```

use kiosk_core::{Beverage, Kiosk};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    info!("Starting cafe kiosk terminal");

    let mut kiosk = Kiosk::new();
    let americano = Beverage::americano();
    let latte = Beverage::latte();

    kiosk.add(&americano);
    info!(name = %americano.name(), price = %americano.price(), "Beverage added");

    match kiosk.add_quantity(&latte, 2) {
        Ok(()) => info!(name = %latte.name(), quantity = 2, "Beverages added"),
        Err(e) => error!(error = %e, "Add rejected"),
    }

    // Customer puts one latte back
    kiosk.remove(&latte);
    info!(
        name = %latte.name(),
        in_cart = kiosk.beverages().len(),
        "Beverage removed"
    );

    match kiosk.create_order() {
        Ok(order) => {
            info!(
                ordered_at = %order.ordered_at(),
                count = order.beverages().len(),
                "Order created"
            );
            for beverage in order.beverages() {
                info!("  {} {}", beverage.name(), beverage.price());
            }
        }
        Err(e) => error!(error = %e, "Order rejected"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
