use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order as reported by the order history source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// A single historical order line for one buyer, as supplied by the order
/// history source. Only `Delivered` orders count toward reorder cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub product_name: String,
    pub created_at: DateTime<Utc>,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub supplier_id: String,
    pub supplier_name: Option<String>,
    pub status: OrderStatus,
}

/// How much history backs a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// A product the buyer is statistically due to reorder. Supplier, quantity
/// and price are carried over from the most recent order of the product so
/// the presentation layer can offer a one-click repeat order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveOrder {
    pub product_name: String,
    pub last_order_date: DateTime<Utc>,
    pub average_days_between_orders: i64,
    pub next_predicted_date: DateTime<Utc>,
    pub confidence: Confidence,
    pub supplier_id: String,
    pub supplier_name: Option<String>,
    pub quantity: u32,
    pub unit_price: Decimal,
}
