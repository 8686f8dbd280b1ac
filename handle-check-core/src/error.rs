//! Unified error type definition

use thiserror::Error;

/// Failure to obtain a usable answer from the lookup service.
///
/// Both variants are operator-facing only; the form collapses them into
/// the plain `Invalid` state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request never produced a response (connection refused, reset, DNS failure, ...)
    #[error("Network error: {detail}")]
    Transport { detail: String },

    /// A response arrived but could not be understood
    #[error("Malformed response{}: {detail}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Malformed { status: Option<u16>, detail: String },
}

/// Why a submitted handle did not validate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The service answered with an explicit `errors` payload
    #[error("Service rejected handle: {}", .messages.join("; "))]
    Service { messages: Vec<String> },

    /// The echoed username differs from what was submitted
    #[error("Echoed username {echoed:?} does not match submitted handle {submitted:?}")]
    Mismatch { submitted: String, echoed: String },

    /// Network or parse failure
    #[error("{0}")]
    Transport(#[from] LookupError),
}

impl ValidationError {
    /// Whether this is an expected outcome of user input, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Service { .. } | Self::Mismatch { .. } => true,
            Self::Transport(_) => false,
        }
    }
}

/// Core layer error type (setup failures, never validation outcomes)
#[derive(Error, Debug)]
pub enum CoreError {
    /// The HTTP client could not be built
    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),

    /// The configured endpoint is not a valid URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_are_unexpected() {
        let err = ValidationError::from(LookupError::Transport {
            detail: "connection refused".to_string(),
        });
        assert!(!err.is_expected());
    }

    #[test]
    fn service_and_mismatch_are_expected() {
        assert!(ValidationError::Service { messages: vec![] }.is_expected());
        assert!(ValidationError::Mismatch {
            submitted: "TedTalks".to_string(),
            echoed: "tedtalks".to_string(),
        }
        .is_expected());
    }

    #[test]
    fn malformed_display_includes_status_when_known() {
        let with_status = LookupError::Malformed {
            status: Some(502),
            detail: "expected value".to_string(),
        };
        assert_eq!(
            with_status.to_string(),
            "Malformed response (HTTP 502): expected value"
        );

        let without_status = LookupError::Malformed {
            status: None,
            detail: "empty".to_string(),
        };
        assert_eq!(without_status.to_string(), "Malformed response: empty");
    }

    #[test]
    fn service_display_joins_messages() {
        let err = ValidationError::Service {
            messages: vec!["User not found".to_string(), "Try again".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Service rejected handle: User not found; Try again"
        );
    }
}
