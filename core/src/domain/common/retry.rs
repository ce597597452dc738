use std::future::Future;
use std::time::Duration;

use tracing::{error, warn};

use crate::domain::common::{AnalyzerConfig, entities::app_errors::CoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    Fixed,
    Exponential { multiplier: u32, max_delay: Duration },
}

/// Retry policy shared by components that call an external provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
            backoff: Backoff::Fixed,
        }
    }

    pub fn exponential(
        max_attempts: u32,
        delay: Duration,
        multiplier: u32,
        max_delay: Duration,
    ) -> Self {
        Self {
            max_attempts,
            delay,
            backoff: Backoff::Exponential {
                multiplier,
                max_delay,
            },
        }
    }

    /// Delay to wait after the given (1-based) failed attempt.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.delay,
            Backoff::Exponential {
                multiplier,
                max_delay,
            } => {
                let factor = multiplier.max(1).saturating_pow(attempt.saturating_sub(1));
                self.delay.saturating_mul(factor).min(max_delay)
            }
        }
    }

    /// Runs `op` until it succeeds, fails with a non-retryable error, or the
    /// attempts run out. The last error is returned on exhaustion.
    pub async fn run<T, F, Fut, P>(
        &self,
        operation: &str,
        is_retryable: P,
        mut op: F,
    ) -> Result<T, CoreError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, CoreError>>,
        P: Fn(&CoreError) -> bool,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= max_attempts || !is_retryable(&e) => {
                    error!(
                        operation = %operation,
                        attempt,
                        max_attempts,
                        error = %e,
                        "Giving up"
                    );
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        operation = %operation,
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Attempt failed, retrying"
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::fixed(3, Duration::from_secs(1))
    }
}

impl From<&AnalyzerConfig> for RetryPolicy {
    fn from(config: &AnalyzerConfig) -> Self {
        if config.exponential_backoff {
            Self::exponential(
                config.max_attempts,
                config.retry_delay,
                2,
                config.retry_delay.saturating_mul(8),
            )
        } else {
            Self::fixed(config.max_attempts, config.retry_delay)
        }
    }
}
