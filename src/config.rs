use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub mongodb_uri: String,
    pub mongodb_db: String,
    pub orders_collection: String,

    pub orders_file: String,
    pub report_date: String,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let mongodb_uri = env::var("MONGODB_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

    let mongodb_db = env::var("MONGODB_DB")
        .unwrap_or_else(|_| "ecommerce".to_string());

    let orders_collection = env::var("ORDERS_COLLECTION")
        .unwrap_or_else(|_| "orders".to_string());

    let orders_file = env::var("ORDERS_FILE")
        .unwrap_or_else(|_| "data/mock_orders.json".to_string());

    // Matched against order_date by exact string equality, M/D/YYYY.
    let report_date = env::var("REPORT_DATE").unwrap_or_else(|_| "1/9/2021".to_string());

    Settings {
        mongodb_uri,
        mongodb_db,
        orders_collection,
        orders_file,
        report_date,
    }
}
