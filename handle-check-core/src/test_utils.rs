//! Test helper module
//!
//! Provides a scripted `HandleLookup` for driving the validator.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::LookupError;
use crate::traits::HandleLookup;
use crate::types::CheckNameResponse;

type Scripted = (Result<CheckNameResponse, LookupError>, Option<Duration>);

/// Answers each handle with the responses scripted for it, in push order,
/// and records every handle asked for.
pub struct MockHandleLookup {
    responses: Mutex<HashMap<String, VecDeque<Scripted>>>,
    calls: Mutex<Vec<String>>,
}

impl MockHandleLookup {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    async fn push(&self, handle: &str, scripted: Scripted) {
        self.responses
            .lock()
            .await
            .entry(handle.to_string())
            .or_default()
            .push_back(scripted);
    }

    pub async fn push_ok(&self, handle: &str, response: CheckNameResponse) {
        self.push(handle, (Ok(response), None)).await;
    }

    pub async fn push_err(&self, handle: &str, error: LookupError) {
        self.push(handle, (Err(error), None)).await;
    }

    /// Queue an answer that is only returned after `delay`
    pub async fn push_delayed(
        &self,
        handle: &str,
        result: Result<CheckNameResponse, LookupError>,
        delay: Duration,
    ) {
        self.push(handle, (result, Some(delay))).await;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl HandleLookup for MockHandleLookup {
    async fn check_name(&self, handle: &str) -> Result<CheckNameResponse, LookupError> {
        self.calls.lock().await.push(handle.to_string());

        let next = self
            .responses
            .lock()
            .await
            .get_mut(handle)
            .and_then(VecDeque::pop_front);
        let Some((result, delay)) = next else {
            return Err(LookupError::Transport {
                detail: format!("no scripted response for {handle:?}"),
            });
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        result
    }
}
