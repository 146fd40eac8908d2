use crate::form::state::SignupForm;
use crate::models::{ErrorResponse, SubmitRequest, SubmitResponse};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when submitting the form
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// HTTP client for the waitlist API
///
/// Drives one submit attempt per call against `POST /api/submit`. The form
/// only ever sees success or failure; the specific rejection (400 vs 409 vs
/// 500) is available on the error for callers that want to surface the
/// duplicate-email message verbatim.
pub struct WaitlistClient {
    base_url: String,
    client: Client,
}

impl WaitlistClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    /// Send one submission and decode the outcome.
    pub async fn submit(&self, request: &SubmitRequest) -> Result<SubmitResponse, SubmitError> {
        let url = format!("{}/api/submit", self.base_url.trim_end_matches('/'));

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.error)
            .unwrap_or_else(|_| "Submission failed".to_string());

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Run one full attempt on a form: take the payload, send it, and apply
    /// the matching transition. A `None` payload means an attempt is already
    /// in flight and this call does nothing.
    pub async fn submit_form(&self, form: &mut SignupForm) -> Option<Result<SubmitResponse, SubmitError>> {
        let payload = form.begin_submit()?;

        let result = self.submit(&payload).await;
        match &result {
            Ok(_) => form.submit_succeeded(),
            Err(e) => {
                tracing::info!("Waitlist submission failed: {}", e);
                form.submit_failed();
            }
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_keeps_base_url() {
        let client = WaitlistClient::new("http://localhost:8080/".to_string());
        assert_eq!(client.base_url, "http://localhost:8080/");
    }
}
