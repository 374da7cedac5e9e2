//! Polling a search job until it reaches a terminal state.
//!
//! Responsibilities:
//! - Repeatedly read job status through a [`JobStatusSource`].
//! - Stop on success (`isDone` or `done`), fail on `failed`/`canceled`.
//! - Enforce the overall timeout, checked before every poll.
//!
//! Does NOT handle:
//! - The HTTP details of a single status read (see [`crate::endpoints::search`]).
//!
//! Invariants:
//! - Elapsed time is measured on the monotonic clock from the first poll.
//! - The timeout is cooperative: it can be overshot by at most one interval
//!   plus one status request.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, error, info};

use crate::error::{ClientError, Result};
use crate::models::{JobOutcome, SearchJobStatus};

/// Anything that can report the current status of a job.
pub trait JobStatusSource {
    fn job_status(&self, sid: &str) -> impl Future<Output = Result<SearchJobStatus>> + Send;
}

/// Poll cadence and give-up time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub timeout: Duration,
}

impl PollSettings {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }
}

/// Wait for job `sid` to finish.
///
/// Returns the final status on success.
///
/// # Errors
///
/// - [`ClientError::JobFailed`] when the job reports `failed` or `canceled`.
/// - [`ClientError::JobTimeout`] once more than `settings.timeout` has elapsed.
/// - Any error from the status source, unchanged.
pub async fn wait_for_job<S>(
    source: &S,
    sid: &str,
    settings: PollSettings,
) -> Result<SearchJobStatus>
where
    S: JobStatusSource + Sync,
{
    info!("Waiting for search job {} to complete...", sid);
    let start = Instant::now();
    let mut polls = 0usize;

    loop {
        if start.elapsed() > settings.timeout {
            error!("Timeout waiting for job {} after {} polls", sid, polls);
            return Err(ClientError::JobTimeout {
                sid: sid.to_string(),
                timeout: settings.timeout,
            });
        }

        let status = source.job_status(sid).await?;
        polls += 1;

        match status.outcome() {
            JobOutcome::Succeeded => {
                info!("Job {} completed", sid);
                return Ok(status);
            }
            JobOutcome::Failed => {
                error!("Search job ended with state {}", status.dispatch_state);
                return Err(ClientError::JobFailed {
                    sid: sid.to_string(),
                    state: status.dispatch_state,
                });
            }
            JobOutcome::Pending => {
                debug!(
                    sid,
                    dispatch_state = %status.dispatch_state,
                    polls,
                    "Job not finished yet"
                );
                tokio::time::sleep(settings.interval).await;
            }
        }
    }
}
