//! Submission validation and normalization.
//!
//! Validation order is fixed: presence first, then email shape. Normalization
//! (trim the name, trim and lowercase the email) only happens once both
//! checks have passed, immediately before the insert is attempted.

use crate::models::SubmitRequest;
use validator::Validate;

/// Why a submission was rejected before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    /// `name` or `email` is missing, empty, or whitespace-only.
    MissingFields,
    /// `email` does not look like `local@domain.tld`.
    InvalidEmail,
}

impl ValidationFailure {
    /// The exact message the API returns for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationFailure::MissingFields => "Name and email are required",
            ValidationFailure::InvalidEmail => "Invalid email format",
        }
    }
}

/// Checks that an email has the shape `local@domain.tld`: no whitespace,
/// exactly one `@` with a non-empty local part, and at least one `.` in the
/// domain with a character on each side. Deliberately loose beyond that;
/// deliverability is not this service's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Trims a submitted name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

/// Trims and lowercases a submitted email so that `" Jane@Example.com "`
/// and `"jane@example.com"` hit the same uniqueness key.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Runs the full pre-insert pipeline on a submission: presence (missing,
/// empty, and whitespace-only all count as absent), then email shape. This
/// is the one validation path; the endpoint calls it before every insert.
pub fn validate_submission(req: &SubmitRequest) -> Result<(), ValidationFailure> {
    if req.validate().is_err() {
        return Err(ValidationFailure::MissingFields);
    }
    if !is_valid_email(req.email.trim()) {
        return Err(ValidationFailure::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("jane.doe+waitlist@mail.example.co.uk"));
    }

    #[test]
    fn test_rejects_missing_at_or_tld() {
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
    }

    #[test]
    fn test_rejects_whitespace_and_empty_parts() {
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@@example.com"));
    }

    #[test]
    fn test_domain_dot_needs_neighbours() {
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@example."));
        // An interior dot somewhere in the domain is enough.
        assert!(is_valid_email("jane@.example.com"));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_name("  Jane  "), "Jane");
        assert_eq!(normalize_email(" Jane@Example.com "), "jane@example.com");
    }

    fn submission(name: &str, email: &str) -> SubmitRequest {
        SubmitRequest {
            name: name.to_string(),
            email: email.to_string(),
            features: vec![],
        }
    }

    #[test]
    fn test_presence_checked_before_format() {
        // A blank email must report the missing-field message, not the
        // format one, even though it also fails the shape check.
        assert_eq!(
            validate_submission(&submission("Jane", "   ")),
            Err(ValidationFailure::MissingFields)
        );
        assert_eq!(
            validate_submission(&submission("", "not-an-email")),
            Err(ValidationFailure::MissingFields)
        );
        assert_eq!(
            validate_submission(&submission("Jane", "not-an-email")),
            Err(ValidationFailure::InvalidEmail)
        );
        assert_eq!(
            validate_submission(&submission("Jane", "jane@example.com")),
            Ok(())
        );
    }
}
