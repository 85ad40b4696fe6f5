use std::sync::Arc;

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::contract::model::{OnboardingProgress, OnboardingStep};
use crate::domain::ports::{KeyValueStore, StoreError};

/// Tracks onboarding milestones against the injected storage port.
///
/// Depends only on the [`KeyValueStore`] port, not on any concrete store, so
/// the same logic runs in the web host and in tests.
#[derive(Clone)]
pub struct OnboardingTracker {
    store: Arc<dyn KeyValueStore>,
}

impl OnboardingTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn key(user_id: Uuid) -> String {
        format!("onboarding/{user_id}")
    }

    /// Load the user's progress. A missing record means a fresh account;
    /// a corrupt record is treated the same and logged, a wrong welcome
    /// banner being preferable to a broken page.
    #[instrument(name = "onboarding.tracker.progress", skip(self), fields(user_id = %user_id))]
    pub async fn progress(&self, user_id: Uuid) -> Result<OnboardingProgress, StoreError> {
        let Some(raw) = self.store.get(&Self::key(user_id)).await? else {
            return Ok(OnboardingProgress::default());
        };

        match serde_json::from_str(&raw) {
            Ok(progress) => Ok(progress),
            Err(error) => {
                warn!(%error, "stored onboarding progress is corrupt, treating as empty");
                Ok(OnboardingProgress::default())
            }
        }
    }

    /// Record a completed milestone and return the updated progress.
    /// Completing an already-completed step is a no-op.
    #[instrument(
        name = "onboarding.tracker.complete_step",
        skip(self),
        fields(user_id = %user_id, step = ?step)
    )]
    pub async fn complete_step(
        &self,
        user_id: Uuid,
        step: OnboardingStep,
    ) -> Result<OnboardingProgress, StoreError> {
        let mut progress = self.progress(user_id).await?;
        if !progress.completed.insert(step) {
            return Ok(progress);
        }

        let key = Self::key(user_id);
        let raw = serde_json::to_string(&progress)
            .map_err(|e| StoreError::encoding(&key, e.to_string()))?;
        self.store.put(&key, raw).await?;

        debug!(percent = progress.percent_complete(), "onboarding step recorded");
        Ok(progress)
    }

    pub async fn has_seen_welcome(&self, user_id: Uuid) -> Result<bool, StoreError> {
        Ok(self
            .progress(user_id)
            .await?
            .is_complete(OnboardingStep::WelcomeSeen))
    }

    pub async fn mark_welcome_seen(&self, user_id: Uuid) -> Result<(), StoreError> {
        self.complete_step(user_id, OnboardingStep::WelcomeSeen)
            .await
            .map(|_| ())
    }
}
