use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Milestones a new account works through after signup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    WelcomeSeen,
    ProfileCompleted,
    FirstQuoteRequested,
    FirstOrderPlaced,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::WelcomeSeen,
        OnboardingStep::ProfileCompleted,
        OnboardingStep::FirstQuoteRequested,
        OnboardingStep::FirstOrderPlaced,
    ];
}

/// A user's completed onboarding milestones. Serialized as JSON into the
/// host's key-value store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingProgress {
    #[serde(default)]
    pub completed: BTreeSet<OnboardingStep>,
}

impl OnboardingProgress {
    pub fn is_complete(&self, step: OnboardingStep) -> bool {
        self.completed.contains(&step)
    }

    /// Whole-percent completion across all known steps.
    pub fn percent_complete(&self) -> u8 {
        (self.completed.len() * 100 / OnboardingStep::ALL.len()) as u8
    }
}
