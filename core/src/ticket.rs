//! Ticket categories, ticket requests and account identifiers.

use crate::error::InvalidPurchaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Account
// ============================================================================

/// Identifier of the purchasing account.
///
/// Only strictly positive values are valid; the core performs no other
/// lookup on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AccountId(i64);

impl AccountId {
    /// Validate a raw account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchaseError::InvalidAccountId`] if `id` is zero or
    /// negative.
    pub const fn new(id: i64) -> Result<Self, InvalidPurchaseError> {
        if id <= 0 {
            return Err(InvalidPurchaseError::InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Get the raw identifier
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for AccountId {
    type Error = InvalidPurchaseError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket types
// ============================================================================

/// The fixed set of ticket categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    /// Full price, occupies a seat
    Adult,
    /// Reduced price, occupies a seat
    Child,
    /// Free, sits on an adult's lap
    Infant,
}

impl TicketType {
    /// All ticket types, in display order
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of a single ticket of this type, in pounds.
    #[must_use]
    pub const fn unit_price(self) -> u32 {
        match self {
            Self::Adult => 25,
            Self::Child => 15,
            Self::Infant => 0,
        }
    }

    /// Whether a ticket of this type needs a seat of its own.
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }

    /// Upper-case name, as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = InvalidPurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|ticket_type| ticket_type.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidPurchaseError::UnknownTicketType(name.to_string()))
    }
}

// ============================================================================
// Ticket requests
// ============================================================================

/// A request for some number of tickets of one type.
///
/// Immutable once built. A count of zero is representable so that it can be
/// rejected during validation with the request's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    #[serde(rename = "count")]
    no_of_tickets: u32,
}

impl TicketTypeRequest {
    /// Create a request for `no_of_tickets` tickets of `ticket_type`
    #[must_use]
    pub const fn new(ticket_type: TicketType, no_of_tickets: u32) -> Self {
        Self {
            ticket_type,
            no_of_tickets,
        }
    }

    /// Requested ticket type
    #[must_use]
    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    /// Requested ticket count
    #[must_use]
    pub const fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets
    }
}

/// Parses the `TYPE=COUNT` form, e.g. `adult=2`.
impl FromStr for TicketTypeRequest {
    type Err = InvalidPurchaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidPurchaseError::MalformedTicketRequest {
            input: s.to_string(),
        };

        let (name, count) = s.split_once('=').ok_or_else(malformed)?;
        let ticket_type = name.parse::<TicketType>()?;
        let no_of_tickets = count.trim().parse::<u32>().map_err(|_| malformed())?;

        Ok(Self::new(ticket_type, no_of_tickets))
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.ticket_type, self.no_of_tickets)
    }
}
