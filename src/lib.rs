//! Flourish Waitlist - signup service for the Flourish landing page
//!
//! This library implements the waitlist submission endpoint (validate,
//! normalize, insert into the hosted Supabase table, map storage errors to
//! HTTP outcomes) and the signup-form state machine the landing page drives.

pub mod config;
pub mod core;
pub mod form;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    is_valid_email, normalize_email, normalize_name, ValidationFailure, FEATURE_OPTIONS,
};
pub use crate::form::{SignupForm, SubmitPhase, WaitlistClient};
pub use crate::models::{SubmitRequest, SubmitResponse, WaitlistEntry};
