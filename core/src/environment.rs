//! Collaborators injected into the ticket service.
//!
//! Payment and seat reservation are third-party services with fixed
//! interfaces. They take an account and a number, return nothing, and are
//! assumed to always succeed, so the traits are infallible.

use crate::ticket::AccountId;
use std::fmt;
use std::sync::Arc;

/// Payment processor.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` pounds to `account_id`
    fn make_payment(&self, account_id: AccountId, amount: u32);
}

/// Seat reservation system.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seats` seats for `account_id`
    fn reserve_seat(&self, account_id: AccountId, seats: u32);
}

/// Payment processor stand-in that only logs the charge.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingTicketPaymentService;

impl TicketPaymentService for LoggingTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u32) {
        tracing::info!(
            account_id = account_id.get(),
            amount,
            "Payment taken"
        );
    }
}

/// Seat reservation stand-in that only logs the reservation.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        tracing::info!(
            account_id = account_id.get(),
            seats,
            "Seats reserved"
        );
    }
}

/// Dependencies of the ticket service.
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Payment processor
    pub payments: Arc<dyn TicketPaymentService>,
    /// Seat reservation system
    pub seats: Arc<dyn SeatReservationService>,
}

impl PurchaseEnvironment {
    /// Create an environment from the two collaborators
    #[must_use]
    pub fn new(
        payments: Arc<dyn TicketPaymentService>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self { payments, seats }
    }

    /// Environment backed by the logging stand-ins
    #[must_use]
    pub fn logging() -> Self {
        Self::new(
            Arc::new(LoggingTicketPaymentService),
            Arc::new(LoggingSeatReservationService),
        )
    }
}

impl fmt::Debug for PurchaseEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PurchaseEnvironment").finish_non_exhaustive()
    }
}
