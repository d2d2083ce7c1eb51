use std::{future::Future, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Retry logic for idempotent service operations
///
/// Only wrap operations that are safe to repeat. Report transitions are never retried, a
/// transient failure there rolls back the transaction and is returned to the caller.
pub struct RetryContext {
    /// Max attempts before failure
    max_attempts: u32,
    /// Initial backoff between attempts, doubled after each retry
    initial_backoff: Duration,
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Execute an operation with automatic retry logic
    ///
    /// Errors classified as [`ErrorRetryStrategy::Retry`] are retried with exponential
    /// backoff until `max_attempts` is reached, all other errors are returned immediately.
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (e.g., "get user ID 1")
    /// - `operation`: Function producing a fresh future for each attempt
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => return Err(e),
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicU32, Ordering},
        time::Duration,
    };

    use sea_orm::DbErr;

    use super::RetryContext;
    use crate::server::error::{report::ReportError, Error};

    fn retry_context() -> RetryContext {
        RetryContext::new().with_initial_backoff(Duration::ZERO)
    }

    fn connection_error() -> Error {
        Error::DbErr(DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "connection reset".to_string(),
        )))
    }

    /// Expect transient errors to be retried until the operation succeeds
    #[tokio::test]
    async fn retries_transient_errors() {
        let attempts = AtomicU32::new(0);
        let attempts = &attempts;

        let result = retry_context()
            .execute_with_retry("flaky read", move || async move {
                if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(connection_error())
                } else {
                    Ok(7)
                }
            })
            .await;

        assert!(matches!(result, Ok(7)));
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    /// Expect the last error once max attempts are exhausted
    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let attempts = AtomicU32::new(0);
        let attempts = &attempts;

        let result: Result<(), Error> = retry_context()
            .execute_with_retry("broken read", move || async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err(connection_error())
            })
            .await;

        assert!(matches!(result, Err(Error::DbErr(DbErr::Conn(_)))));
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    /// Expect domain errors to be returned without retrying
    #[tokio::test]
    async fn does_not_retry_domain_errors() {
        let attempts = AtomicU32::new(0);
        let attempts = &attempts;

        let result: Result<(), Error> = retry_context()
            .execute_with_retry("missing report", move || async move {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err(ReportError::NotFound(1).into())
            })
            .await;

        assert!(matches!(
            result,
            Err(Error::ReportError(ReportError::NotFound(1)))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
