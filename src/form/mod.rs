// Signup form exports
pub mod client;
pub mod state;

pub use client::{SubmitError, WaitlistClient};
pub use state::{Banner, SignupForm, SubmitPhase};
