// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FeatureOption, WaitlistEntry};
pub use requests::SubmitRequest;
pub use responses::{ErrorResponse, HealthResponse, SubmitResponse};
