use serde::{Deserialize, Serialize};

/// One `$group` output row keyed by `state` ($group puts the key in `_id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateCount {
    #[serde(rename = "_id")]
    pub state: String,
    pub count: i64,
}

/// One `$group` output row keyed by `product_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCount {
    #[serde(rename = "_id")]
    pub product_id: i64,
    pub count: i64,
}
