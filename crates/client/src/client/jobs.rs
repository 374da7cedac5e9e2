//! Read-only connectivity probe for [`SearchJobClient`].

use tracing::debug;

use crate::client::SearchJobClient;
use crate::endpoints;
use crate::error::Result;

impl SearchJobClient {
    /// List at most one job to prove the endpoint, token and proxy work.
    ///
    /// Returns the number of jobs the server sent back (0 or 1).
    pub async fn check_connection(&self) -> Result<usize> {
        debug!("Probing {}", self.base_url);
        endpoints::list_jobs(&self.http, &self.base_url, self.auth_token(), 1).await
    }
}
