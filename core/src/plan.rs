//! Pure purchase planning.
//!
//! [`plan_purchase`] runs every box-office rule against a purchase and, if
//! they all hold, returns a [`PurchasePlan`]. The plan only *describes* the
//! collaborator calls as [`PurchaseEffect`] values; executing them is the
//! service's job. Rules are checked in a fixed order and the first failure
//! wins:
//!
//! 1. account identifier is positive
//! 2. at least one ticket request
//! 3. every request asks for at least one ticket
//! 4. between 1 and [`MAX_TICKETS`] tickets in total
//! 5. child or infant tickets come with at least one adult
//! 6. no more infants than adults

use crate::MAX_TICKETS;
use crate::error::{InvalidPurchaseError, PurchaseResult};
use crate::ticket::{AccountId, TicketTypeRequest};
use crate::totals::PurchaseTotals;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// A collaborator call implied by a validated purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum PurchaseEffect {
    /// Charge `amount` pounds to the account
    MakePayment {
        /// Account to charge
        account_id: AccountId,
        /// Amount in pounds
        amount: u32,
    },
    /// Hold `seats` seats for the account
    ReserveSeats {
        /// Account reserving
        account_id: AccountId,
        /// Number of seats
        seats: u32,
    },
}

/// A purchase that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePlan {
    /// Purchasing account
    pub account_id: AccountId,
    /// Ticket counts per category
    pub totals: PurchaseTotals,
    /// Amount payable, in pounds
    pub amount: u32,
    /// Seats to reserve
    pub seats: u32,
}

impl PurchasePlan {
    /// Collaborator calls to perform, in order: payment first, then seats.
    #[must_use]
    pub fn effects(&self) -> SmallVec<[PurchaseEffect; 2]> {
        smallvec![
            PurchaseEffect::MakePayment {
                account_id: self.account_id,
                amount: self.amount,
            },
            PurchaseEffect::ReserveSeats {
                account_id: self.account_id,
                seats: self.seats,
            },
        ]
    }
}

/// Validate a purchase and work out what it costs and how many seats it takes.
///
/// # Errors
///
/// Returns the [`InvalidPurchaseError`] for the first rule the purchase
/// breaks; see the module docs for the order.
pub fn plan_purchase(
    account_id: i64,
    requests: &[TicketTypeRequest],
) -> PurchaseResult<PurchasePlan> {
    let account_id = AccountId::new(account_id)?;
    validate_requests(requests)?;

    let totals = PurchaseTotals::from_requests(requests);
    validate_totals(&totals)?;

    Ok(PurchasePlan {
        account_id,
        totals,
        amount: totals.amount_payable(),
        seats: totals.seats_to_reserve(),
    })
}

fn validate_requests(requests: &[TicketTypeRequest]) -> PurchaseResult<()> {
    if requests.is_empty() {
        return Err(InvalidPurchaseError::NoTicketRequests);
    }

    if let Some(index) = requests.iter().position(|r| r.no_of_tickets() == 0) {
        return Err(InvalidPurchaseError::InvalidTicketRequest { index });
    }

    Ok(())
}

const fn validate_totals(totals: &PurchaseTotals) -> PurchaseResult<()> {
    if totals.total == 0 {
        return Err(InvalidPurchaseError::NoTickets);
    }

    if totals.total > MAX_TICKETS {
        return Err(InvalidPurchaseError::TooManyTickets {
            requested: totals.total,
            max: MAX_TICKETS,
        });
    }

    if totals.adult == 0 && (totals.child > 0 || totals.infant > 0) {
        return Err(InvalidPurchaseError::UnaccompaniedMinors);
    }

    if totals.infant > totals.adult {
        return Err(InvalidPurchaseError::TooManyInfants {
            infants: totals.infant,
            adults: totals.adult,
        });
    }

    Ok(())
}
