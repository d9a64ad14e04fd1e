//! Property-based testing utilities using proptest.
//!
//! Strategies for ticket types, requests and whole purchases, valid or not.

use cinema_tickets_core::{MAX_TICKETS, TicketType, TicketTypeRequest};
use proptest::prelude::*;

/// Per-category ticket counts a purchase was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counts {
    /// Adult tickets
    pub adult: u32,
    /// Child tickets
    pub child: u32,
    /// Infant tickets
    pub infant: u32,
}

impl Counts {
    /// Tickets across all categories
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.adult + self.child + self.infant
    }
}

/// Any ticket type
pub fn ticket_type() -> impl Strategy<Value = TicketType> {
    prop::sample::select(TicketType::ALL.to_vec())
}

/// A single request with a positive count of at most `max` tickets
pub fn ticket_request(max: u32) -> impl Strategy<Value = TicketTypeRequest> {
    (ticket_type(), 1..=max).prop_map(|(ticket_type, count)| TicketTypeRequest::new(ticket_type, count))
}

/// Between one and eight requests with arbitrary positive counts.
///
/// Totals can land anywhere, including well over the maximum.
pub fn any_requests() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    prop::collection::vec(ticket_request(MAX_TICKETS), 1..=8)
}

/// Counts that satisfy every purchase rule: at least one adult, no more
/// infants than adults, and no more than [`MAX_TICKETS`] in total.
pub fn valid_counts() -> impl Strategy<Value = Counts> {
    (1..=MAX_TICKETS)
        .prop_flat_map(|adult| {
            let infant_max = adult.min(MAX_TICKETS - adult);
            (Just(adult), 0..=infant_max)
        })
        .prop_flat_map(|(adult, infant)| {
            (Just(adult), 0..=(MAX_TICKETS - adult - infant), Just(infant))
        })
        .prop_map(|(adult, child, infant)| Counts {
            adult,
            child,
            infant,
        })
}

/// Spread `counts` over requests: each category is split into one or two
/// requests and the result is shuffled. Zero counts produce no request.
pub fn requests_for(counts: Counts) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
    let categories = [
        (TicketType::Adult, counts.adult),
        (TicketType::Child, counts.child),
        (TicketType::Infant, counts.infant),
    ];

    prop::collection::vec(any::<bool>(), 3)
        .prop_map(move |splits| {
            categories
                .iter()
                .zip(splits)
                .flat_map(|(&(ticket_type, count), split)| split_count(ticket_type, count, split))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn split_count(ticket_type: TicketType, count: u32, split: bool) -> Vec<TicketTypeRequest> {
    match count {
        0 => Vec::new(),
        1 => vec![TicketTypeRequest::new(ticket_type, 1)],
        _ if split => {
            let first = count / 2;
            vec![
                TicketTypeRequest::new(ticket_type, first),
                TicketTypeRequest::new(ticket_type, count - first),
            ]
        },
        _ => vec![TicketTypeRequest::new(ticket_type, count)],
    }
}

/// A valid purchase together with the counts it was built from
pub fn valid_purchase() -> impl Strategy<Value = (Counts, Vec<TicketTypeRequest>)> {
    valid_counts().prop_flat_map(|counts| (Just(counts), requests_for(counts)))
}
