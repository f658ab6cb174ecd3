//! Submission back ends
//!
//! No form on the site talks to a server yet. The simulated submitter waits
//! for the configured round-trip delay and reports success, or failure when
//! built with [`SimulatedSubmitter::failing`].

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Submission of form '{form}' was rejected")]
    Rejected { form: &'static str },
}

/// Snapshot of a valid form handed to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub form: &'static str,
    pub fields: BTreeMap<&'static str, String>,
}

/// Destination of validated form data.
pub trait Submitter: Send + Sync {
    /// Deliver `submission`.
    ///
    /// # Errors
    /// Returns an error if the submission did not go through.
    fn submit(
        &self,
        submission: &FormSubmission,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send;
}

/// Stand-in for a network call: a fixed delay, then a fixed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    delay: Duration,
    fail: bool,
}

impl SimulatedSubmitter {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Submitter whose every submission fails after the delay.
    #[must_use]
    pub const fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: &FormSubmission) -> Result<(), SubmitError> {
        tracing::debug!(
            form = submission.form,
            fields = submission.fields.len(),
            delay_ms = self.delay.as_millis(),
            "Simulating submission"
        );
        tokio::time::sleep(self.delay).await;

        if self.fail { Err(SubmitError::Rejected { form: submission.form }) } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use tokio::time::Instant;

    use super::*;

    fn submission() -> FormSubmission {
        FormSubmission {
            form: "newsletter",
            fields: BTreeMap::from([("nombre", "Ana".to_string()), ("email", "a@b.co".to_string())]),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submission_waits_for_delay() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1000));
        let started = Instant::now();

        let result = submitter.submit(&submission()).await;

        assert!(result.is_ok());
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn failing_submitter_rejects() {
        let submitter = SimulatedSubmitter::failing(Duration::from_millis(10));

        let result = submitter.submit(&submission()).await;

        assert_that!(result, err(eq(&SubmitError::Rejected { form: "newsletter" })));
    }
}
