// === PUBLIC CONTRACT ===
// Models shared with the presentation layer and other modules
pub mod contract;

// Re-export the public contract components
pub use contract::model::{Confidence, Order, OrderStatus, PredictiveOrder};

// === CONFIGURATION ===
pub mod config;
pub use config::{PredictorConfig, PredictorConfigError};

// === DOMAIN ===
pub mod domain;
pub use domain::calculators::{self, QuoteOption};
pub use domain::predictor::ReorderPredictor;
