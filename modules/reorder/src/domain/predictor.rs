use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

use crate::config::PredictorConfig;
use crate::contract::model::{Confidence, Order, OrderStatus, PredictiveOrder};

const SECONDS_PER_DAY: i64 = 86_400;

/// Predicts which products a buyer is due to reorder from the cadence of
/// their delivered orders.
///
/// Pure computation over the order list passed in: fetching history is the
/// data source's job, and `now` is an explicit argument so a given input
/// always yields the same output.
#[derive(Debug, Clone, Default)]
pub struct ReorderPredictor {
    config: PredictorConfig,
}

impl ReorderPredictor {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    /// Rank the buyer's products by predicted reorder date, soonest first.
    ///
    /// Only products with enough delivered orders to establish a cadence are
    /// considered, and only predictions whose reorder point falls inside the
    /// configured window around `now` (default 3 days past to 7 days future)
    /// are surfaced. Empty input yields empty output.
    #[instrument(
        name = "reorder.predictor.predict",
        level = "debug",
        skip(self, orders),
        fields(order_count = orders.len())
    )]
    pub fn predict(&self, orders: &[Order], now: DateTime<Utc>) -> Vec<PredictiveOrder> {
        let mut groups: BTreeMap<&str, Vec<&Order>> = BTreeMap::new();
        for order in orders {
            if order.status == OrderStatus::Delivered {
                groups
                    .entry(order.product_name.as_str())
                    .or_default()
                    .push(order);
            }
        }

        let mut predictions: Vec<PredictiveOrder> = groups
            .into_values()
            .filter(|group| group.len() >= self.config.min_orders_per_product)
            .filter_map(|group| self.predict_product(group, now))
            .collect();

        predictions.sort_by_key(|prediction| prediction.next_predicted_date);
        debug!(surfaced = predictions.len(), "predictions inside reorder window");
        predictions
    }

    fn predict_product(
        &self,
        mut group: Vec<&Order>,
        now: DateTime<Utc>,
    ) -> Option<PredictiveOrder> {
        group.sort_by_key(|order| order.created_at);
        let span = group.len().saturating_sub(1);
        if span == 0 {
            return None;
        }

        let total_days: i64 = group
            .windows(2)
            .map(|pair| (pair[1].created_at - pair[0].created_at).num_days())
            .sum();
        // Average rounded to whole days before projecting, so the projection
        // is stable across runs.
        let average_days = (total_days as f64 / span as f64).round() as i64;

        let last = group.last()?;
        let next_predicted = last.created_at + Duration::days(average_days);

        // Floor, not truncate: 2.5 days overdue must count as 3 days past so
        // the window check matches "within N days" semantics.
        let days_until = (next_predicted - now)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY);
        if days_until < -self.config.past_window_days
            || days_until > self.config.future_window_days
        {
            return None;
        }

        Some(PredictiveOrder {
            product_name: last.product_name.clone(),
            last_order_date: last.created_at,
            average_days_between_orders: average_days,
            next_predicted_date: next_predicted,
            confidence: self.confidence(group.len()),
            supplier_id: last.supplier_id.clone(),
            supplier_name: last.supplier_name.clone(),
            quantity: last.quantity,
            unit_price: last.unit_price,
        })
    }

    fn confidence(&self, order_count: usize) -> Confidence {
        if order_count >= self.config.high_confidence_orders {
            Confidence::High
        } else if order_count == self.config.min_orders_per_product {
            Confidence::Low
        } else {
            Confidence::Medium
        }
    }
}
