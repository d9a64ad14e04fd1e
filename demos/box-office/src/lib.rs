//! # Box Office
//!
//! A command-line front end for the cinema ticket purchase core.
//!
//! ```text
//! box-office <ACCOUNT_ID> <TYPE=COUNT>...
//! box-office 1 adult=2 child=1 infant=1
//! ```
//!
//! On success the purchase plan is printed as JSON. Payment and seat
//! reservation go to the logging stand-ins, so the collaborator calls show
//! up in the log output.

pub mod config;

pub use config::BoxOfficeConfig;

use cinema_tickets_core::{
    InvalidPurchaseError, PurchasePlan, TicketService, TicketServiceImpl, TicketTypeRequest,
};
use thiserror::Error;

/// Usage line shown on bad arguments
pub const USAGE: &str = "usage: box-office <ACCOUNT_ID> <TYPE=COUNT>...";

/// Errors surfaced by the box office
#[derive(Error, Debug)]
pub enum BoxOfficeError {
    /// Command line could not be understood
    #[error("{0}")]
    Usage(String),

    /// Purchase was rejected
    #[error("Invalid purchase: {0}")]
    InvalidPurchase(#[from] InvalidPurchaseError),

    /// Plan could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BoxOfficeError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidPurchase(_) => 1,
            Self::Usage(_) | Self::Serialization(_) => 2,
        }
    }
}

/// A purchase read from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    /// Raw account identifier, validated by the purchase core
    pub account_id: i64,
    /// Requested tickets, in command-line order
    pub requests: Vec<TicketTypeRequest>,
}

impl PurchaseOrder {
    /// Parse `<ACCOUNT_ID> <TYPE=COUNT>...` (program name already stripped).
    ///
    /// # Errors
    ///
    /// Returns [`BoxOfficeError::Usage`] if the account identifier is missing
    /// or not an integer, and [`BoxOfficeError::InvalidPurchase`] if a ticket
    /// request is malformed or names an unknown ticket type.
    pub fn from_args<I, S>(args: I) -> Result<Self, BoxOfficeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        let account = args
            .next()
            .ok_or_else(|| BoxOfficeError::Usage("missing account id".to_string()))?;
        let account = account.as_ref();
        let account_id = account
            .trim()
            .parse::<i64>()
            .map_err(|_| BoxOfficeError::Usage(format!("account id must be an integer, got {account:?}")))?;

        let requests = args
            .map(|arg| arg.as_ref().parse::<TicketTypeRequest>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            account_id,
            requests,
        })
    }
}

/// Settle `order` through `service` and return the plan it was charged on.
///
/// # Errors
///
/// Returns [`BoxOfficeError::InvalidPurchase`] if the purchase is rejected;
/// nothing is charged or reserved in that case.
pub fn settle(
    service: &TicketServiceImpl,
    order: &PurchaseOrder,
) -> Result<PurchasePlan, BoxOfficeError> {
    let plan = service.preview(order.account_id, &order.requests)?;
    service.purchase_tickets(order.account_id, &order.requests)?;
    Ok(plan)
}

/// Render a plan as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`BoxOfficeError::Serialization`] if the plan cannot be encoded.
pub fn render_plan(plan: &PurchasePlan) -> Result<String, BoxOfficeError> {
    Ok(serde_json::to_string_pretty(plan)?)
}
