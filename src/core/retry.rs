//! Retry logic with a fixed delay
//!
//! This module provides the bounded retry loop used for publish attempts.
//! Registry publishes fail transiently often enough that a short fixed wait
//! and a second or third attempt resolves most failures.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Options for retry behavior
#[derive(Debug, Clone)]
pub struct RetryOptions {
    /// Maximum number of attempts (not retries after the first)
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub delay: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(10),
        }
    }
}

/// Retry manager for executing operations with a fixed delay between attempts
///
/// The operation receives the 1-based attempt number so callers can report
/// progress. No delay follows the final attempt.
pub struct RetryManager {
    options: RetryOptions,
}

impl RetryManager {
    /// Create a new RetryManager with the given options
    pub fn new(options: RetryOptions) -> Self {
        Self { options }
    }

    /// Maximum number of attempts this manager will make
    pub fn max_attempts(&self) -> u32 {
        self.options.max_attempts
    }

    /// Execute the given async operation, retrying every failure until the
    /// attempt budget is exhausted
    pub async fn retry<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let mut last_error: Option<E> = None;

        for attempt in 1..=self.options.max_attempts {
            match operation(attempt).await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    // Last attempt
                    if attempt >= self.options.max_attempts {
                        return Err(error);
                    }

                    println!(
                        "Publish failed: {}, waiting {}s before retry...",
                        error,
                        self.options.delay.as_secs()
                    );
                    last_error = Some(error);

                    sleep(self.options.delay).await;
                }
            }
        }

        // Unreachable for max_attempts >= 1, but satisfy the compiler
        Err(last_error.unwrap())
    }
}
