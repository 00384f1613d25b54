//! Scripted in-memory model client (testing only)

use super::ModelClient;
use crate::error::ProviderError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// A recorded `generate` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub system: String,
    pub user: String,
}

/// Replies with queued responses in order and records every prompt pair.
/// An exhausted queue answers with an empty string.
#[derive(Debug, Default)]
pub struct StubClient {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<Call>>,
    delay: Option<Duration>,
}

impl StubClient {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Sleep this long inside every `generate` before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a transport failure (reported as a 503 status)
    pub fn then_fail(self, body: &str) -> Self {
        self.replies.lock().unwrap().push_back(Err(body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for StubClient {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(Call {
            system: system.to_string(),
            user: user.to_string(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(body)) => Err(ProviderError::Status { code: 503, body }),
            None => Ok(String::new()),
        }
    }
}
