//! # Cinema Tickets Testing
//!
//! Testing utilities and helpers for cinema ticket purchases.
//!
//! This crate provides:
//! - Recording implementations of the collaborator traits
//! - A fluent Given-When-Then harness for purchases
//! - Property-based testing strategies
//! - Log capture for tests
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{InvalidPurchaseError, TicketType};
//! use cinema_tickets_testing::PurchaseTest;
//!
//! PurchaseTest::new()
//!     .given_account(1)
//!     .when_requesting(TicketType::Adult, 1)
//!     .when_requesting(TicketType::Infant, 2)
//!     .then_rejected(InvalidPurchaseError::TooManyInfants { infants: 2, adults: 1 })
//!     .run();
//! ```

pub mod mocks;
pub mod properties;
pub mod purchase_test;

pub use mocks::RecordingCollaborators;
pub use purchase_test::PurchaseTest;

/// Route `tracing` output through the test harness's captured stdout.
///
/// Safe to call from every test; only the first call installs a subscriber.
/// Honours `RUST_LOG`, defaulting to `debug` for the purchase core.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cinema_tickets_core=debug".into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
