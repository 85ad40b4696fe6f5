use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the reorder module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictorConfig {
    /// How many days in the past a predicted reorder point may lie and still
    /// be surfaced.
    #[serde(default = "default_past_window_days")]
    pub past_window_days: i64,
    /// How many days in the future a predicted reorder point may lie and
    /// still be surfaced.
    #[serde(default = "default_future_window_days")]
    pub future_window_days: i64,
    /// Minimum delivered orders of a product before a cadence exists.
    #[serde(default = "default_min_orders_per_product")]
    pub min_orders_per_product: usize,
    /// Order count at which a prediction is reported as high confidence.
    #[serde(default = "default_high_confidence_orders")]
    pub high_confidence_orders: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            past_window_days: default_past_window_days(),
            future_window_days: default_future_window_days(),
            min_orders_per_product: default_min_orders_per_product(),
            high_confidence_orders: default_high_confidence_orders(),
        }
    }
}

impl PredictorConfig {
    pub fn validate(&self) -> Result<(), PredictorConfigError> {
        if self.past_window_days < 0 || self.future_window_days < 0 {
            return Err(PredictorConfigError::NegativeWindow {
                past: self.past_window_days,
                future: self.future_window_days,
            });
        }
        if self.min_orders_per_product < 2 {
            return Err(PredictorConfigError::MinOrdersTooLow {
                got: self.min_orders_per_product,
            });
        }
        if self.high_confidence_orders < self.min_orders_per_product {
            return Err(PredictorConfigError::ConfidenceBelowMinimum {
                high: self.high_confidence_orders,
                min: self.min_orders_per_product,
            });
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictorConfigError {
    #[error("minimum orders per product must be at least 2, got {got}")]
    MinOrdersTooLow { got: usize },

    #[error("high-confidence threshold {high} is below the minimum group size {min}")]
    ConfidenceBelowMinimum { high: usize, min: usize },

    #[error("prediction window must not be negative: past {past} days, future {future} days")]
    NegativeWindow { past: i64, future: i64 },
}

fn default_past_window_days() -> i64 {
    3
}

fn default_future_window_days() -> i64 {
    7
}

fn default_min_orders_per_product() -> usize {
    2
}

fn default_high_confidence_orders() -> usize {
    4
}
