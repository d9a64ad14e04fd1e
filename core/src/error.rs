//! Purchase rejection reasons.

use thiserror::Error;

/// Result alias for purchase operations.
pub type PurchaseResult<T> = Result<T, InvalidPurchaseError>;

/// Why a purchase was rejected.
///
/// Every variant is raised before either collaborator is called, so a
/// rejected purchase has no side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPurchaseError {
    /// Account identifiers must be strictly positive.
    #[error("Invalid account ID: {0}")]
    InvalidAccountId(i64),

    /// The purchase carried no ticket requests at all.
    #[error("At least one ticket type request must be provided")]
    NoTicketRequests,

    /// A ticket request asked for zero tickets.
    #[error("Invalid ticket type request at position {index}: ticket count must be positive")]
    InvalidTicketRequest {
        /// Position of the offending request in the purchase
        index: usize,
    },

    /// A ticket request could not be read from its text form.
    #[error("Invalid ticket type request: {input:?}")]
    MalformedTicketRequest {
        /// The text that failed to parse
        input: String,
    },

    /// Ticket type name outside the fixed set.
    #[error("Unknown ticket type: {0:?}")]
    UnknownTicketType(String),

    /// Totals summed to zero tickets.
    #[error("No tickets requested")]
    NoTickets,

    /// Totals exceeded the per-purchase maximum.
    #[error("Cannot purchase more than {max} tickets at a time (requested {requested})")]
    TooManyTickets {
        /// Total tickets requested
        requested: u32,
        /// Maximum allowed per purchase
        max: u32,
    },

    /// Child or infant tickets were requested without any adult ticket.
    #[error("Child or Infant tickets cannot be purchased without at least one Adult ticket")]
    UnaccompaniedMinors,

    /// More infants than adults; each infant sits on an adult's lap.
    #[error("Each infant must be accompanied by an adult: {infants} infants for {adults} adults")]
    TooManyInfants {
        /// Infant tickets requested
        infants: u32,
        /// Adult tickets requested
        adults: u32,
    },
}
