//! The fixed feature-option list shown on the landing page.
//!
//! This is a static lookup table, not runtime configuration; the client
//! renders one checkbox per entry and submits the `value` strings.

use crate::models::FeatureOption;

/// The seven options offered on the signup form, in display order.
pub const FEATURE_OPTIONS: [FeatureOption; 7] = [
    FeatureOption {
        value: "Symptom tracking",
        label: "Easy symptom tracking",
    },
    FeatureOption {
        value: "Meal planning",
        label: "Meal planning & nutrition guidance",
    },
    FeatureOption {
        value: "Mental health",
        label: "Mental health & mood support",
    },
    FeatureOption {
        value: "Community",
        label: "Community forums & peer support",
    },
    FeatureOption {
        value: "Cycle tracking",
        label: "Cycle & fertility tracking",
    },
    FeatureOption {
        value: "Workout plans",
        label: "PCOS-friendly workout plans",
    },
    FeatureOption {
        value: "Expert access",
        label: "Access to PCOS experts (RD, therapist, etc.)",
    },
];

/// Whether a submitted feature label is one the form actually offers.
pub fn is_known_feature(value: &str) -> bool {
    FEATURE_OPTIONS.iter().any(|opt| opt.value == value)
}
