//! Wire types of the `checkName` endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body: `{ "username": <string> }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckNameRequest {
    pub username: String,
}

/// Resolved account as echoed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckNameData {
    pub username: String,
    pub id: String,
}

/// One entry of the `errors` array.
///
/// The service sends plain strings, but upstream APIs it proxies report
/// objects such as `{ "message": "...", "code": 50 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceErrorEntry {
    Message(String),
    Other(Value),
}

impl ServiceErrorEntry {
    /// Human-readable text for logs
    pub fn message(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Other(value) => ["message", "detail", "title"]
                .iter()
                .find_map(|key| value.get(*key).and_then(Value::as_str))
                .map_or_else(|| value.to_string(), str::to_string),
        }
    }
}

/// Response body.
///
/// Success: `{ "data": { "username": ..., "id": ... } }`;
/// failure: `{ "errors": [ ... ] }`. A `null` field counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckNameResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CheckNameData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ServiceErrorEntry>>,
}

impl CheckNameResponse {
    pub fn success(username: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            data: Some(CheckNameData {
                username: username.into(),
                id: id.into(),
            }),
            errors: None,
        }
    }

    pub fn failure<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            errors: Some(
                messages
                    .into_iter()
                    .map(|m| ServiceErrorEntry::Message(m.into()))
                    .collect(),
            ),
        }
    }

    /// Neither `data` nor `errors` present
    pub fn is_empty(&self) -> bool {
        self.data.is_none() && self.errors.is_none()
    }
}
