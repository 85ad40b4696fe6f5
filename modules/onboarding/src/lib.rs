// === PUBLIC CONTRACT ===
pub mod contract;

// Re-export the public contract components
pub use contract::model::{OnboardingProgress, OnboardingStep};

// === DOMAIN ===
pub mod domain;
pub use domain::ports::{KeyValueStore, StoreError};
pub use domain::service::OnboardingTracker;

// === INFRA ===
// Concrete adapters for the storage port
pub mod infra;
pub use infra::memory::InMemoryStore;
