//! # Cinema Tickets Core
//!
//! Validation and pricing rules for cinema ticket purchases.
//!
//! A purchase is an account identifier plus a list of ticket requests. The
//! core checks the requests against the box-office rules, works out how much
//! to charge and how many seats to hold, and only then calls out to the
//! payment and seat-reservation collaborators.
//!
//! ## Core Concepts
//!
//! - **Ticket type**: closed set of categories (`Adult`, `Child`, `Infant`)
//! - **Ticket request**: a ticket type and how many of it
//! - **Totals**: per-category counts summed across a purchase
//! - **Plan**: the validated purchase, with the collaborator calls it implies
//! - **Environment**: the collaborators, injected as traits
//!
//! ## Architecture
//!
//! Planning is a pure function: it either rejects the purchase or returns a
//! [`PurchasePlan`] describing the effects to run. [`TicketServiceImpl`] is
//! the imperative shell that plans, then executes the effects in order. A
//! rejected purchase never reaches the environment.
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{
//!     PurchaseEnvironment, TicketService, TicketServiceImpl, TicketType, TicketTypeRequest,
//! };
//!
//! let service = TicketServiceImpl::new(PurchaseEnvironment::logging());
//!
//! service
//!     .purchase_tickets(
//!         1,
//!         &[
//!             TicketTypeRequest::new(TicketType::Adult, 2),
//!             TicketTypeRequest::new(TicketType::Child, 1),
//!         ],
//!     )
//!     .unwrap();
//! ```

pub mod environment;
pub mod error;
pub mod plan;
pub mod service;
pub mod ticket;
pub mod totals;

pub use environment::{
    LoggingSeatReservationService, LoggingTicketPaymentService, PurchaseEnvironment,
    SeatReservationService, TicketPaymentService,
};
pub use error::{InvalidPurchaseError, PurchaseResult};
pub use plan::{PurchaseEffect, PurchasePlan, plan_purchase};
pub use service::{TicketService, TicketServiceImpl};
pub use ticket::{AccountId, TicketType, TicketTypeRequest};
pub use totals::PurchaseTotals;

/// Maximum number of tickets, across all categories, in a single purchase.
pub const MAX_TICKETS: u32 = 25;
