use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Waitlist signup submission
///
/// Missing keys deserialize to empty defaults so that an absent field and an
/// empty field take the same validation path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SubmitRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub email: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Rejects values that are empty or whitespace-only.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: SubmitRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
        assert!(req.email.is_empty());
        assert!(req.features.is_empty());
    }

    #[test]
    fn test_whitespace_only_fields_fail_validation() {
        let req = SubmitRequest {
            name: "   ".to_string(),
            email: "jane@example.com".to_string(),
            features: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_populated_request_passes_validation() {
        let req = SubmitRequest {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            features: vec!["Community".to_string()],
        };
        assert!(req.validate().is_ok());
    }
}
