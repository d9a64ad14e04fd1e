//! Fluent Given-When-Then harness for purchases
//!
//! Runs a purchase through [`TicketServiceImpl`] against
//! [`RecordingCollaborators`] and checks the outcome and the calls it made.

#![allow(clippy::module_name_repetitions)] // PurchaseTest is the natural name

use crate::mocks::RecordingCollaborators;
use cinema_tickets_core::{
    InvalidPurchaseError, TicketService, TicketServiceImpl, TicketType, TicketTypeRequest,
};

/// Type alias for outcome assertion functions
type OutcomeAssertion = Box<dyn FnOnce(&Result<(), InvalidPurchaseError>)>;

/// Type alias for collaborator assertion functions
type CallAssertion = Box<dyn FnOnce(&RecordingCollaborators)>;

/// Fluent API for testing purchases with Given-When-Then syntax
///
/// # Example
///
/// ```
/// use cinema_tickets_core::TicketType;
/// use cinema_tickets_testing::PurchaseTest;
///
/// PurchaseTest::new()
///     .given_account(1)
///     .when_requesting(TicketType::Adult, 2)
///     .when_requesting(TicketType::Child, 1)
///     .when_requesting(TicketType::Infant, 1)
///     .then_charged(65)
///     .then_reserved(3)
///     .run();
/// ```
pub struct PurchaseTest {
    account_id: Option<i64>,
    requests: Vec<TicketTypeRequest>,
    outcome_assertions: Vec<OutcomeAssertion>,
    call_assertions: Vec<CallAssertion>,
}

impl PurchaseTest {
    /// Create a new, empty purchase test
    #[must_use]
    pub fn new() -> Self {
        Self {
            account_id: None,
            requests: Vec::new(),
            outcome_assertions: Vec::new(),
            call_assertions: Vec::new(),
        }
    }

    /// Set the purchasing account (Given)
    #[must_use]
    pub fn given_account(mut self, account_id: i64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Add a ticket request (When)
    #[must_use]
    pub fn when_requesting(mut self, ticket_type: TicketType, count: u32) -> Self {
        self.requests.push(TicketTypeRequest::new(ticket_type, count));
        self
    }

    /// Add several ticket requests at once (When)
    #[must_use]
    pub fn when_requests(mut self, requests: impl IntoIterator<Item = TicketTypeRequest>) -> Self {
        self.requests.extend(requests);
        self
    }

    /// Expect success with exactly one payment of `amount` (Then)
    #[must_use]
    pub fn then_charged(self, amount: u32) -> Self {
        self.then_outcome(|outcome| {
            assert_eq!(outcome, &Ok(()), "Expected purchase to succeed");
        })
        .then_calls(move |calls| {
            let amounts: Vec<u32> = calls.payments().into_iter().map(|(_, a)| a).collect();
            assert_eq!(amounts, vec![amount], "Unexpected payments");
        })
    }

    /// Expect success with exactly one reservation of `seats` (Then)
    #[must_use]
    pub fn then_reserved(self, seats: u32) -> Self {
        self.then_outcome(|outcome| {
            assert_eq!(outcome, &Ok(()), "Expected purchase to succeed");
        })
        .then_calls(move |calls| {
            let reserved: Vec<u32> = calls.reservations().into_iter().map(|(_, s)| s).collect();
            assert_eq!(reserved, vec![seats], "Unexpected reservations");
        })
    }

    /// Expect rejection with `error` and no collaborator calls (Then)
    #[must_use]
    pub fn then_rejected(self, error: InvalidPurchaseError) -> Self {
        self.then_outcome(move |outcome| {
            assert_eq!(outcome, &Err(error), "Unexpected purchase outcome");
        })
        .then_calls(|calls| {
            assert!(
                calls.is_untouched(),
                "Rejected purchase must not call collaborators, but found {:?}",
                calls.calls()
            );
        })
    }

    /// Add an assertion about the purchase result (Then)
    #[must_use]
    pub fn then_outcome<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&Result<(), InvalidPurchaseError>) + 'static,
    {
        self.outcome_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion about the recorded collaborator calls (Then)
    #[must_use]
    pub fn then_calls<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&RecordingCollaborators) + 'static,
    {
        self.call_assertions.push(Box::new(assertion));
        self
    }

    /// Run the purchase and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if the account is not set, or if any assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let account_id = self
            .account_id
            .expect("Account must be set with given_account()");

        let collaborators = RecordingCollaborators::new();
        let service = TicketServiceImpl::new(collaborators.environment());

        let outcome = service.purchase_tickets(account_id, &self.requests);

        for assertion in self.outcome_assertions {
            assertion(&outcome);
        }

        for assertion in self.call_assertions {
            assertion(&collaborators);
        }
    }
}

impl Default for PurchaseTest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_test_success() {
        PurchaseTest::new()
            .given_account(1)
            .when_requesting(TicketType::Adult, 3)
            .then_charged(75)
            .then_reserved(3)
            .run();
    }

    #[test]
    fn test_purchase_test_rejection() {
        PurchaseTest::new()
            .given_account(1)
            .when_requesting(TicketType::Child, 1)
            .then_rejected(InvalidPurchaseError::UnaccompaniedMinors)
            .run();
    }

    #[test]
    fn test_purchase_test_custom_call_assertion() {
        PurchaseTest::new()
            .given_account(42)
            .when_requesting(TicketType::Adult, 1)
            .then_calls(|calls| {
                assert_eq!(calls.payments(), vec![(42, 25)]);
                assert_eq!(calls.calls().len(), 2);
            })
            .run();
    }
}
