//! Handle lookup service trait

use async_trait::async_trait;

use crate::error::LookupError;
use crate::types::CheckNameResponse;

/// Resolves a handle to an account through the collaborator service.
///
/// An answer carrying an `errors` payload is still `Ok`: deciding what it
/// means is the validator's job. `Err` is reserved for transport and parse
/// failures.
#[async_trait]
pub trait HandleLookup: Send + Sync {
    /// Send one `checkName` request for `handle`
    async fn check_name(&self, handle: &str) -> Result<CheckNameResponse, LookupError>;
}
