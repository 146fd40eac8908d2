//! Draft state for the signup form.
//!
//! The landing page keeps one of these per visitor: the in-progress field
//! values plus where the last submit attempt stands. The page itself only
//! renders; every transition lives here so it can be tested without a
//! browser.

use crate::models::SubmitRequest;

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Banner shown above the form, derived from the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error,
}

/// The signup form's draft fields and submit phase.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    name: String,
    email: String,
    features: Vec<String>,
    phase: SubmitPhase,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Toggle one feature checkbox: deselects it if already selected,
    /// appends it otherwise. Toggling twice is a no-op.
    pub fn toggle_feature(&mut self, value: &str) {
        if let Some(pos) = self.features.iter().position(|f| f == value) {
            self.features.remove(pos);
        } else {
            self.features.push(value.to_string());
        }
    }

    /// Start a submit attempt.
    ///
    /// Returns the payload to send and moves to `Submitting`, clearing any
    /// banner from the previous attempt. Returns `None` while an attempt is
    /// already in flight, which is what keeps the submit button disabled.
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.phase == SubmitPhase::Submitting {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(SubmitRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            features: self.features.clone(),
        })
    }

    /// The attempt came back with a success status: reset the draft and
    /// show the success banner.
    pub fn submit_succeeded(&mut self) {
        self.name.clear();
        self.email.clear();
        self.features.clear();
        self.phase = SubmitPhase::Succeeded;
    }

    /// The attempt failed (non-success status or the request itself died):
    /// keep the draft so the visitor can resubmit, show the error banner.
    pub fn submit_failed(&mut self) {
        self.phase = SubmitPhase::Failed;
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn banner(&self) -> Option<Banner> {
        match self.phase {
            SubmitPhase::Succeeded => Some(Banner::Success),
            SubmitPhase::Failed => Some(Banner::Error),
            SubmitPhase::Idle | SubmitPhase::Submitting => None,
        }
    }
}
