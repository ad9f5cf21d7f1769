//! Bounded retry with exponential backoff for transient storage failures.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use receipthub_core::result::AppResult;

/// Retry policy for storage operations.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Base delay for the exponential backoff.
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay_ms: u64) -> Self {
        Self {
            max_retries,
            base_delay: Duration::from_millis(base_delay_ms),
        }
    }

    /// Backoff delay before the given retry attempt (1-based), with jitter.
    fn delay_for(&self, attempt: u32) -> Duration {
        let exp = self.base_delay.as_millis() as u64 * 2u64.pow(attempt.saturating_sub(1));
        let jitter = rand::thread_rng().gen_range(0..=exp / 4 + 1);
        Duration::from_millis(exp + jitter)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, 200)
    }
}

/// Run an async operation, retrying on transient errors.
///
/// Non-transient errors (validation, unknown provider, not found) are
/// returned immediately without retrying.
pub async fn with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    op_name: &str,
    mut operation: F,
) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.kind.is_transient() && attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.delay_for(attempt);
                warn!(
                    operation = op_name,
                    attempt,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Transient storage failure, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}
