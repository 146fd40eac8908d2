use crate::models::WaitlistEntry;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Postgres error code for a unique-constraint violation, as surfaced in the
/// Supabase REST error body.
const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl SupabaseError {
    /// Capability check used by the submission handler: does this error mean
    /// the email is already on the waitlist? Keeps the handler free of any
    /// vendor-specific error codes.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, SupabaseError::UniqueViolation(_))
    }
}

/// Supabase REST client
///
/// Handles all communication with the hosted waitlist table. Constructed
/// once at startup and shared behind an `Arc`; holds only connection
/// configuration, so it is stateless between requests.
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
    table: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(base_url: String, anon_key: String, table: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            anon_key,
            table,
            client,
        }
    }

    /// Insert one waitlist entry and return the stored row.
    ///
    /// Exactly one attempt; the caller decides whether to resubmit on
    /// failure. Duplicate emails come back as
    /// [`SupabaseError::UniqueViolation`].
    pub async fn insert_entry(&self, entry: &WaitlistEntry) -> Result<WaitlistEntry, SupabaseError> {
        let url = format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        );

        tracing::debug!("Inserting waitlist entry at: {}", url);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Prefer", "return=representation")
            .json(entry)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(classify_error(status, &body));
        }

        let rows: Vec<WaitlistEntry> = response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse rows: {}", e)))?;

        rows.into_iter()
            .next()
            .ok_or_else(|| SupabaseError::InvalidResponse("Empty representation array".into()))
    }
}

/// Map a non-success REST response to a [`SupabaseError`].
///
/// PostgREST reports database errors as `{"code": "...", "message": "..."}`;
/// code 23505 is the unique index on `email` rejecting a duplicate signup.
fn classify_error(status: StatusCode, body: &str) -> SupabaseError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return SupabaseError::Unauthorized;
    }

    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(|c| c.as_str());
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or(body);

    if code == Some(UNIQUE_VIOLATION_CODE) {
        return SupabaseError::UniqueViolation(message.to_string());
    }

    SupabaseError::Api {
        status: status.as_u16(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_client_creation() {
        let client = SupabaseClient::new(
            "https://project.supabase.co".to_string(),
            "test_key".to_string(),
            "waitlist_entries".to_string(),
        );

        assert_eq!(client.base_url, "https://project.supabase.co");
        assert_eq!(client.table, "waitlist_entries");
    }

    #[test]
    fn test_classifies_duplicate_email() {
        let body = r#"{"code":"23505","details":"Key (email)=(jane@example.com) already exists.","hint":null,"message":"duplicate key value violates unique constraint \"waitlist_entries_email_key\""}"#;
        let err = classify_error(StatusCode::CONFLICT, body);
        assert!(err.is_unique_violation());
    }

    #[test]
    fn test_other_db_errors_are_not_conflicts() {
        let body = r#"{"code":"42P01","message":"relation \"waitlist_entries\" does not exist"}"#;
        let err = classify_error(StatusCode::NOT_FOUND, body);
        assert!(!err.is_unique_violation());
        assert!(matches!(err, SupabaseError::Api { status: 404, .. }));
    }

    #[test]
    fn test_unauthorized_is_classified() {
        let err = classify_error(StatusCode::UNAUTHORIZED, "{}");
        assert!(matches!(err, SupabaseError::Unauthorized));
    }

    #[test]
    fn test_unparseable_body_falls_back_to_raw_text() {
        let err = classify_error(StatusCode::INTERNAL_SERVER_ERROR, "upstream timeout");
        match err {
            SupabaseError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream timeout");
            }
            other => panic!("unexpected classification: {:?}", other),
        }
    }
}
