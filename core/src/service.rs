//! The ticket service: plan a purchase, then run its effects.

use crate::environment::PurchaseEnvironment;
use crate::error::PurchaseResult;
use crate::plan::{PurchaseEffect, PurchasePlan, plan_purchase};
use crate::ticket::TicketTypeRequest;

/// Purchase entry point.
pub trait TicketService {
    /// Validate and settle a purchase.
    ///
    /// On success the payment has been taken and the seats reserved. On
    /// failure neither collaborator has been called.
    ///
    /// # Errors
    ///
    /// Returns [`crate::InvalidPurchaseError`] if any purchase rule is broken.
    fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<()>;
}

/// [`TicketService`] backed by a [`PurchaseEnvironment`].
///
/// Holds no mutable state, so a clone can serve purchases from any thread.
#[derive(Clone, Debug)]
pub struct TicketServiceImpl {
    env: PurchaseEnvironment,
}

impl TicketServiceImpl {
    /// Create a service over the given collaborators
    #[must_use]
    pub const fn new(env: PurchaseEnvironment) -> Self {
        Self { env }
    }

    /// Validate a purchase and return what it would cost, without paying
    /// or reserving anything.
    ///
    /// # Errors
    ///
    /// Returns [`crate::InvalidPurchaseError`] if any purchase rule is broken.
    pub fn preview(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<PurchasePlan> {
        plan_purchase(account_id, requests)
    }

    fn execute(&self, effect: PurchaseEffect) {
        match effect {
            PurchaseEffect::MakePayment { account_id, amount } => {
                self.env.payments.make_payment(account_id, amount);
            },
            PurchaseEffect::ReserveSeats { account_id, seats } => {
                self.env.seats.reserve_seat(account_id, seats);
            },
        }
    }
}

impl TicketService for TicketServiceImpl {
    #[tracing::instrument(skip(self, requests), fields(requests = requests.len()))]
    fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketTypeRequest],
    ) -> PurchaseResult<()> {
        let plan = plan_purchase(account_id, requests).inspect_err(|error| {
            tracing::warn!(%error, "Purchase rejected");
        })?;

        tracing::debug!(
            adult = plan.totals.adult,
            child = plan.totals.child,
            infant = plan.totals.infant,
            amount = plan.amount,
            seats = plan.seats,
            "Purchase planned"
        );

        for effect in plan.effects() {
            self.execute(effect);
        }

        tracing::info!(amount = plan.amount, seats = plan.seats, "Purchase completed");
        Ok(())
    }
}
