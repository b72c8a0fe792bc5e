//! # Form relay client
//!
//! The contact form is not handled by our backend. Submissions go to a
//! third-party relay service that forwards them as email. The relay expects
//! plain multipart form fields and an `Accept: application/json` header, and
//! any HTTP-OK status counts as delivered.
//!
//! The browser original fired the request and hoped; here the call is a
//! plain async fn with an explicit timeout, so a hung relay surfaces as an
//! error instead of a spinner.
use std::time::Duration;

use reqwest::{Client, StatusCode, header::ACCEPT, multipart::Form};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::form::Submission;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay rejected the submission: {0}")]
    Rejected(StatusCode),

    #[error("failed to reach relay: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay did not respond within {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl RelayClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Forwards a validated submission to the relay.
    pub async fn submit(&self, submission: &Submission) -> Result<(), RelayError> {
        let mut fields = Form::new()
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("message", submission.message.clone());

        // Browsers only send checked checkboxes; the relay treats absence
        // as opted out.
        if submission.newsletter {
            fields = fields.text("newsletter", "on");
        }

        debug!("Submitting contact form to {}", self.endpoint);

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(fields);

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| RelayError::TimedOut(self.timeout))??;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected(response.status()))
        }
    }
}
