//! Per-category ticket totals for a single purchase.

use crate::ticket::{TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// Ticket counts summed across every request in a purchase.
///
/// Computed fresh for each purchase and never stored. `total` always equals
/// `adult + child + infant`; the sums saturate at `u32::MAX`, which is far
/// beyond the per-purchase maximum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    /// Tickets across all categories
    pub total: u32,
    /// Adult tickets
    pub adult: u32,
    /// Child tickets
    pub child: u32,
    /// Infant tickets
    pub infant: u32,
}

impl PurchaseTotals {
    /// Sum the requests into per-category totals.
    #[must_use]
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        requests.iter().fold(Self::default(), |totals, request| {
            totals.add(request.ticket_type(), request.no_of_tickets())
        })
    }

    /// Add `count` tickets of `ticket_type`.
    #[must_use]
    pub const fn add(mut self, ticket_type: TicketType, count: u32) -> Self {
        match ticket_type {
            TicketType::Adult => self.adult = self.adult.saturating_add(count),
            TicketType::Child => self.child = self.child.saturating_add(count),
            TicketType::Infant => self.infant = self.infant.saturating_add(count),
        }
        self.total = self.adult.saturating_add(self.child).saturating_add(self.infant);
        self
    }

    /// Count for a single category
    #[must_use]
    pub const fn count(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    /// Amount payable in pounds. Infants are free.
    #[must_use]
    pub fn amount_payable(&self) -> u32 {
        TicketType::ALL
            .into_iter()
            .map(|ticket_type| self.count(ticket_type).saturating_mul(ticket_type.unit_price()))
            .fold(0, u32::saturating_add)
    }

    /// Seats to reserve. Infants share an adult's seat.
    #[must_use]
    pub fn seats_to_reserve(&self) -> u32 {
        TicketType::ALL
            .into_iter()
            .filter(|ticket_type| ticket_type.occupies_seat())
            .map(|ticket_type| self.count(ticket_type))
            .fold(0, u32::saturating_add)
    }
}
