use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single row of the waitlist table.
///
/// Created exactly once per signup, never updated or deleted. The `id` is
/// assigned by the database and is only present on rows read back from it;
/// insert payloads omit the field entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl WaitlistEntry {
    /// Build a fresh entry from already-validated, already-normalized input.
    ///
    /// `created_at` is stamped here, at insert time, not by the database.
    pub fn new(name: String, email: String, features: Vec<String>) -> Self {
        Self {
            id: None,
            name,
            email,
            features,
            created_at: chrono::Utc::now(),
        }
    }
}

/// One entry of the fixed feature-option list shown on the landing page.
///
/// `value` is what the client submits; `label` is the human-readable text
/// next to the checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_id() {
        let entry = WaitlistEntry::new(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            vec!["Meal planning".to_string()],
        );
        assert!(entry.id.is_none());
        assert_eq!(entry.email, "jane@example.com");
    }

    #[test]
    fn test_insert_payload_omits_id() {
        let entry = WaitlistEntry::new("Jane".to_string(), "jane@example.com".to_string(), vec![]);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_some());
    }
}
