//! Retry with linear backoff for remote model calls
//!
//! A call is attempted up to `max_attempts` times. After failed attempt k
//! the policy sleeps `base_delay * k` before trying again, so the default
//! policy waits 1s then 2s. The error of the final attempt is returned
//! unchanged.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which failures a [`RetryPolicy`] retries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetryMode {
    /// Retry every error, whatever its kind
    #[default]
    All,
    /// Retry only transport and provider errors; fail fast on the rest
    Transient,
}

impl RetryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetryMode::All => "all",
            RetryMode::Transient => "transient",
        }
    }

    fn should_retry(&self, err: &Error) -> bool {
        match self {
            RetryMode::All => true,
            RetryMode::Transient => err.is_transient(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub mode: RetryMode,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            mode: RetryMode::All,
        }
    }
}

impl RetryPolicy {
    /// Delay after the given failed attempt (1-based)
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }

    /// Run `operation` until it succeeds, the policy gives up, or it fails
    /// with an error the mode does not retry.
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if attempt < max_attempts && self.mode.should_retry(&e) => {
                    let delay = self.delay_for(attempt);
                    tracing::warn!(
                        error = %e,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis(),
                        "Model request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
