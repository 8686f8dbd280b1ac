//! Handle Check Core Library
//!
//! Platform-independent logic behind the handle-check form:
//! - Form state (`FormState`) with its theme and validation lifecycle
//! - The validation state machine (`Validator`)
//! - The `checkName` collaborator client (`HttpHandleLookup`)
//!
//! The lookup service is abstracted behind the `HandleLookup` trait so the
//! state machine can be driven by any front end and tested without a network.

pub mod error;
pub mod http_client;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, LookupError, ValidationError};
pub use http_client::{HttpHandleLookup, DEFAULT_ENDPOINT};
pub use services::{CheckOutcome, Completion, SubmitRejected, Submission, Ticket, Validator};
pub use traits::HandleLookup;
pub use types::{FormState, ThemeMode, ValidationStatus};
