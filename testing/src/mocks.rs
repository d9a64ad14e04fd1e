//! Recording collaborators.
//!
//! [`RecordingCollaborators`] implements both collaborator traits and keeps
//! every call, in order, as a [`PurchaseEffect`]. Tests can then check which
//! calls a purchase made and in what order.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Lock poisoning only happens after a test already panicked

use cinema_tickets_core::{
    AccountId, PurchaseEffect, PurchaseEnvironment, SeatReservationService, TicketPaymentService,
};
use std::sync::{Arc, RwLock};

/// Payment and seat collaborators that record calls instead of acting.
///
/// Clones share the same call log.
///
/// # Example
///
/// ```
/// use cinema_tickets_core::{TicketService, TicketServiceImpl, TicketType, TicketTypeRequest};
/// use cinema_tickets_testing::RecordingCollaborators;
///
/// let collaborators = RecordingCollaborators::new();
/// let service = TicketServiceImpl::new(collaborators.environment());
///
/// service
///     .purchase_tickets(1, &[TicketTypeRequest::new(TicketType::Adult, 3)])
///     .unwrap();
///
/// assert_eq!(collaborators.payments(), vec![(1, 75)]);
/// assert_eq!(collaborators.reservations(), vec![(1, 3)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingCollaborators {
    calls: Arc<RwLock<Vec<PurchaseEffect>>>,
}

impl RecordingCollaborators {
    /// Create collaborators with an empty call log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment whose collaborators both record into this log
    #[must_use]
    pub fn environment(&self) -> PurchaseEnvironment {
        PurchaseEnvironment::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }

    /// Every call so far, in the order it was made
    #[must_use]
    pub fn calls(&self) -> Vec<PurchaseEffect> {
        self.calls.read().unwrap().clone()
    }

    /// `(account, amount)` of every payment
    #[must_use]
    pub fn payments(&self) -> Vec<(i64, u32)> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter_map(|call| match *call {
                PurchaseEffect::MakePayment { account_id, amount } => {
                    Some((account_id.get(), amount))
                },
                PurchaseEffect::ReserveSeats { .. } => None,
            })
            .collect()
    }

    /// `(account, seats)` of every reservation
    #[must_use]
    pub fn reservations(&self) -> Vec<(i64, u32)> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter_map(|call| match *call {
                PurchaseEffect::ReserveSeats { account_id, seats } => {
                    Some((account_id.get(), seats))
                },
                PurchaseEffect::MakePayment { .. } => None,
            })
            .collect()
    }

    /// No collaborator has been called
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.calls.read().unwrap().is_empty()
    }

    /// Forget all recorded calls
    pub fn clear(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl TicketPaymentService for RecordingCollaborators {
    fn make_payment(&self, account_id: AccountId, amount: u32) {
        self.calls
            .write()
            .unwrap()
            .push(PurchaseEffect::MakePayment { account_id, amount });
    }
}

impl SeatReservationService for RecordingCollaborators {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        self.calls
            .write()
            .unwrap()
            .push(PurchaseEffect::ReserveSeats { account_id, seats });
    }
}
