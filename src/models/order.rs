use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Source data is schemaless: some exports carry `premium_customer` as a
/// JSON boolean, others as the strings "true"/"false".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PremiumFlag {
    Bool(bool),
    Text(String),
}

impl fmt::Display for PremiumFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PremiumFlag::Bool(b) => write!(f, "{}", b),
            PremiumFlag::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    // Absent in the source file; the store generates it on insert.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub order_id: i64,
    pub customer_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub order_date: String,
    pub state: String,
    pub city: String,
    pub premium_customer: PremiumFlag,
}
