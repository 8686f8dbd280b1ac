//! Handle validation state machine
//!
//! ```text
//! Idle ──submit──▶ Checking ──▶ Valid { id }
//!                     ▲    └──▶ Invalid
//!                     └──submit── Valid / Invalid
//! ```
//!
//! A submit is split in three steps so the caller controls where each runs:
//! [`Validator::begin`] flips the form to `Checking` synchronously,
//! [`Validator::check`] performs the network round trip (anywhere, any task),
//! and [`Validator::complete`] applies the answer back to the form.
//!
//! Every submission carries a [`Ticket`]. Only the newest ticket may complete
//! the form; answers to superseded submissions are discarded, so the form
//! always reflects the last request made rather than the last one to arrive.

use crate::error::{LookupError, ValidationError};
use crate::traits::HandleLookup;
use crate::types::{CheckNameResponse, FormState, ServiceErrorEntry, ValidationStatus};

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A started submission: what to send, and the ticket to answer with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    /// Handle as it was when submitted
    pub handle: String,
}

/// Result of one lookup round trip, ready to be applied with [`Validator::complete`]
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub ticket: Ticket,
    pub handle: String,
    pub result: Result<CheckNameResponse, LookupError>,
}

/// Why a submit was refused before any request was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Nothing but whitespace was entered
    EmptyHandle,
}

/// What [`Validator::complete`] did to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Valid { id: String },
    Invalid(ValidationError),
    /// A newer submission is pending; the form was not touched
    Stale,
}

/// Drives `FormState::status` through the request lifecycle
#[derive(Debug, Default)]
pub struct Validator {
    issued: u64,
    pending: Option<Ticket>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket of the submission the form is waiting on
    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Start a submission: the form shows `Checking` from this point until it completes.
    ///
    /// Any earlier in-flight submission is superseded.
    pub fn begin(&mut self, form: &mut FormState) -> Result<Submission, SubmitRejected> {
        if form.handle().trim().is_empty() {
            return Err(SubmitRejected::EmptyHandle);
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        if let Some(previous) = self.pending.replace(ticket) {
            log::debug!(
                "[Validator] Submission #{} supersedes #{}",
                ticket.0,
                previous.0
            );
        }

        form.set_status(ValidationStatus::Checking);
        log::info!("[Validator] Checking handle {:?} (#{})", form.handle(), ticket.0);

        Ok(Submission {
            ticket,
            handle: form.handle().to_string(),
        })
    }

    /// Perform the lookup for a submission
    pub async fn check(lookup: &dyn HandleLookup, submission: Submission) -> CheckOutcome {
        let result = lookup.check_name(&submission.handle).await;
        CheckOutcome {
            ticket: submission.ticket,
            handle: submission.handle,
            result,
        }
    }

    /// Decide what a lookup result means for the submitted handle.
    ///
    /// The echoed username must match the submitted handle exactly (case
    /// included); anything else is treated as a stale or foreign answer.
    pub fn interpret(
        submitted: &str,
        result: Result<CheckNameResponse, LookupError>,
    ) -> Result<String, ValidationError> {
        let response = result?;

        if let Some(errors) = response.errors {
            return Err(ValidationError::Service {
                messages: errors.iter().map(ServiceErrorEntry::message).collect(),
            });
        }

        match response.data {
            Some(data) if data.username == submitted => Ok(data.id),
            Some(data) => Err(ValidationError::Mismatch {
                submitted: submitted.to_string(),
                echoed: data.username,
            }),
            None => Err(ValidationError::Transport(LookupError::Malformed {
                status: None,
                detail: "response carries neither data nor errors".to_string(),
            })),
        }
    }

    /// Apply a finished lookup to the form
    pub fn complete(&mut self, form: &mut FormState, outcome: CheckOutcome) -> Completion {
        if self.pending != Some(outcome.ticket) {
            log::debug!(
                "[Validator] Dropping answer for superseded submission #{} ({:?})",
                outcome.ticket.0,
                outcome.handle
            );
            return Completion::Stale;
        }
        self.pending = None;

        match Self::interpret(&outcome.handle, outcome.result) {
            Ok(id) => {
                log::info!("[Validator] Handle {:?} resolved to id {id}", outcome.handle);
                form.set_status(ValidationStatus::Valid { id: id.clone() });
                Completion::Valid { id }
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("[Validator] Handle {:?} rejected: {e}", outcome.handle);
                } else {
                    log::error!("[Validator] Lookup for {:?} failed: {e}", outcome.handle);
                }
                form.set_status(ValidationStatus::Invalid);
                Completion::Invalid(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::MockHandleLookup;

    fn form_with(handle: &str) -> FormState {
        let mut form = FormState::new();
        form.set_handle(handle);
        form
    }

    fn transport_error() -> LookupError {
        LookupError::Transport {
            detail: "connection refused".to_string(),
        }
    }

    async fn submit(
        validator: &mut Validator,
        form: &mut FormState,
        lookup: &MockHandleLookup,
    ) -> Completion {
        let submission = validator.begin(form).unwrap();
        assert!(form.is_checking());
        let outcome = Validator::check(lookup, submission).await;
        validator.complete(form, outcome)
    }

    #[test]
    fn begin_sets_checking_before_any_response() {
        let mut validator = Validator::new();
        let mut form = form_with("TedTalks");

        let submission = validator.begin(&mut form).unwrap();

        assert_eq!(form.status(), &ValidationStatus::Checking);
        assert_eq!(form.resolved_id(), None);
        assert_eq!(submission.handle, "TedTalks");
        assert_eq!(validator.pending(), Some(submission.ticket));
    }

    #[test]
    fn blank_handle_is_rejected_without_state_change() {
        let mut validator = Validator::new();
        let mut form = form_with("   ");

        assert_eq!(validator.begin(&mut form), Err(SubmitRejected::EmptyHandle));
        assert_eq!(form.status(), &ValidationStatus::Idle);
        assert_eq!(validator.pending(), None);
    }

    #[test]
    fn handle_is_sent_verbatim() {
        let mut validator = Validator::new();
        let mut form = form_with(" TedTalks ");
        let submission = validator.begin(&mut form).unwrap();
        assert_eq!(submission.handle, " TedTalks ");
    }

    #[tokio::test]
    async fn matching_echo_resolves_to_valid() {
        let lookup = MockHandleLookup::new();
        lookup
            .push_ok("TedTalks", CheckNameResponse::success("TedTalks", "123"))
            .await;
        let mut validator = Validator::new();
        let mut form = form_with("TedTalks");

        let completion = submit(&mut validator, &mut form, &lookup).await;

        assert_eq!(completion, Completion::Valid { id: "123".to_string() });
        assert_eq!(form.status(), &ValidationStatus::Valid { id: "123".to_string() });
        assert_eq!(form.resolved_id(), Some("123"));
        assert_eq!(lookup.calls().await, vec!["TedTalks".to_string()]);
    }

    #[tokio::test]
    async fn case_mismatch_is_invalid() {
        let lookup = MockHandleLookup::new();
        lookup
            .push_ok("TedTalks", CheckNameResponse::success("tedtalks", "123"))
            .await;
        let mut validator = Validator::new();
        let mut form = form_with("TedTalks");

        let completion = submit(&mut validator, &mut form, &lookup).await;

        assert_eq!(
            completion,
            Completion::Invalid(ValidationError::Mismatch {
                submitted: "TedTalks".to_string(),
                echoed: "tedtalks".to_string(),
            })
        );
        assert_eq!(form.status(), &ValidationStatus::Invalid);
        assert_eq!(form.resolved_id(), None);
    }

    #[tokio::test]
    async fn error_payload_is_invalid_even_with_data() {
        let lookup = MockHandleLookup::new();
        let mut response = CheckNameResponse::success("TedTalks", "123");
        response.errors = CheckNameResponse::failure(["suspended"]).errors;
        lookup.push_ok("TedTalks", response).await;
        let mut validator = Validator::new();
        let mut form = form_with("TedTalks");

        let completion = submit(&mut validator, &mut form, &lookup).await;

        assert_eq!(
            completion,
            Completion::Invalid(ValidationError::Service {
                messages: vec!["suspended".to_string()],
            })
        );
        assert_eq!(form.resolved_id(), None);
    }

    #[tokio::test]
    async fn empty_error_list_still_counts_as_error() {
        let lookup = MockHandleLookup::new();
        lookup
            .push_ok("TedTalks", CheckNameResponse::failure(Vec::<String>::new()))
            .await;
        let mut validator = Validator::new();
        let mut form = form_with("TedTalks");

        let completion = submit(&mut validator, &mut form, &lookup).await;
        assert!(matches!(
            completion,
            Completion::Invalid(ValidationError::Service { .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_clears_previous_valid() {
        let lookup = MockHandleLookup::new();
        lookup
            .push_ok("TedTalks", CheckNameResponse::success("TedTalks", "123"))
            .await;
        lookup.push_err("TedTalks", transport_error()).await;
        let mut validator = Validator::new();
        let mut form = form_with("TedTalks");

        submit(&mut validator, &mut form, &lookup).await;
        assert_eq!(form.resolved_id(), Some("123"));

        let completion = submit(&mut validator, &mut form, &lookup).await;
        assert_eq!(
            completion,
            Completion::Invalid(ValidationError::Transport(transport_error()))
        );
        assert_eq!(form.status(), &ValidationStatus::Invalid);
        assert_eq!(form.resolved_id(), None);
    }

    #[tokio::test]
    async fn invalid_form_can_be_resubmitted() {
        let lookup = MockHandleLookup::new();
        lookup
            .push_ok("TedTalk", CheckNameResponse::failure(["not found"]))
            .await;
        lookup
            .push_ok("TedTalks", CheckNameResponse::success("TedTalks", "123"))
            .await;
        let mut validator = Validator::new();
        let mut form = form_with("TedTalk");

        submit(&mut validator, &mut form, &lookup).await;
        assert_eq!(form.status(), &ValidationStatus::Invalid);

        form.push_char('s');
        let completion = submit(&mut validator, &mut form, &lookup).await;
        assert_eq!(completion, Completion::Valid { id: "123".to_string() });
    }

    #[tokio::test]
    async fn echo_is_compared_to_submitted_not_current_handle() {
        let lookup = MockHandleLookup::new();
        lookup
            .push_ok("TedTalks", CheckNameResponse::success("TedTalks", "123"))
            .await;
        let mut validator = Validator::new();
        let mut form = form_with("TedTalks");

        let submission = validator.begin(&mut form).unwrap();
        form.set_handle("SomethingElse");
        let outcome = Validator::check(&lookup, submission).await;

        assert_eq!(
            validator.complete(&mut form, outcome),
            Completion::Valid { id: "123".to_string() }
        );
    }

    #[tokio::test]
    async fn later_submission_wins_over_slower_earlier_one() {
        let lookup = MockHandleLookup::new();
        lookup
            .push_ok("first", CheckNameResponse::success("first", "1"))
            .await;
        lookup
            .push_ok("second", CheckNameResponse::success("second", "2"))
            .await;
        let mut validator = Validator::new();
        let mut form = form_with("first");

        let first = validator.begin(&mut form).unwrap();
        form.set_handle("second");
        let second = validator.begin(&mut form).unwrap();
        assert!(second.ticket > first.ticket);

        let first_outcome = Validator::check(&lookup, first).await;
        let second_outcome = Validator::check(&lookup, second).await;

        // second answer arrives first
        assert_eq!(
            validator.complete(&mut form, second_outcome),
            Completion::Valid { id: "2".to_string() }
        );
        assert_eq!(validator.complete(&mut form, first_outcome), Completion::Stale);
        assert_eq!(form.resolved_id(), Some("2"));
    }

    #[tokio::test]
    async fn stale_answer_leaves_form_checking() {
        let lookup = MockHandleLookup::new();
        lookup.push_err("first", transport_error()).await;
        let mut validator = Validator::new();
        let mut form = form_with("first");

        let first = validator.begin(&mut form).unwrap();
        let _second = validator.begin(&mut form).unwrap();

        let outcome = Validator::check(&lookup, first).await;
        assert_eq!(validator.complete(&mut form, outcome), Completion::Stale);
        assert!(form.is_checking());
    }

    #[tokio::test]
    async fn concurrent_checks_apply_in_submission_order() {
        let lookup = std::sync::Arc::new(MockHandleLookup::new());
        lookup
            .push_delayed(
                "slow",
                Ok(CheckNameResponse::success("slow", "1")),
                Duration::from_millis(50),
            )
            .await;
        lookup
            .push_ok("fast", CheckNameResponse::success("fast", "2"))
            .await;
        let mut validator = Validator::new();
        let mut form = form_with("slow");

        let slow = validator.begin(&mut form).unwrap();
        form.set_handle("fast");
        let fast = validator.begin(&mut form).unwrap();

        let slow_task = {
            let lookup = std::sync::Arc::clone(&lookup);
            tokio::spawn(async move { Validator::check(lookup.as_ref(), slow).await })
        };
        let fast_outcome = Validator::check(lookup.as_ref(), fast).await;
        let slow_outcome = slow_task.await.unwrap();

        validator.complete(&mut form, fast_outcome);
        assert_eq!(validator.complete(&mut form, slow_outcome), Completion::Stale);
        assert_eq!(form.resolved_id(), Some("2"));
    }

    #[test]
    fn interpret_rejects_empty_response() {
        let err = Validator::interpret("TedTalks", Ok(CheckNameResponse::default())).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Transport(LookupError::Malformed { status: None, .. })
        ));
    }
}
