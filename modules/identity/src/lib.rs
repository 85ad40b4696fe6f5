// === PUBLIC CONTRACT ===
// Models shared with the presentation layer and other modules
pub mod contract;

// Re-export the public contract components
pub use contract::model::{DisplayContext, Profile, Role};

// === CONFIGURATION ===
pub mod config;
pub use config::IdentityConfig;

// === DOMAIN ===
// The resolver itself is the public API of this module; the decision table
// and name helpers stay internal.
pub mod domain;
pub use domain::resolver::DisplayResolver;
