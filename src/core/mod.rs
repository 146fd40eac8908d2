// Core exports
pub mod options;
pub mod validate;

pub use options::{is_known_feature, FEATURE_OPTIONS};
pub use validate::{
    is_valid_email, normalize_email, normalize_name, validate_submission, ValidationFailure,
};
