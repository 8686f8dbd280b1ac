//! Business logic services

mod validator;

pub use validator::{CheckOutcome, Completion, SubmitRejected, Submission, Ticket, Validator};
