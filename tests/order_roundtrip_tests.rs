use mongodb::bson::{from_document, to_document};
use orderscope::models::{Order, PremiumFlag};
use orderscope::services::import_service::parse_orders;

const RECORD_BOOL_FLAG: &str = r#"[
    {"order_id": 1006, "customer_id": 506, "product_id": 7, "quantity": 1,
     "unit_price": 1200.0, "total_price": 1200.0, "order_date": "1/9/2021",
     "state": "New York", "city": "New York City", "premium_customer": true}
]"#;

const RECORD_TEXT_FLAG: &str = r#"[
    {"order_id": 1003, "customer_id": 503, "product_id": 7, "quantity": 4,
     "unit_price": 500.0, "total_price": 2000.0, "order_date": "5/20/2021",
     "state": "California", "city": "San Diego", "premium_customer": "true"}
]"#;

#[test]
fn order_survives_json_to_bson_round_trip() {
    let parsed = parse_orders(RECORD_BOOL_FLAG).unwrap();
    let original = parsed.into_iter().next().unwrap();

    let doc = to_document(&original).unwrap();
    let restored: Order = from_document(doc).unwrap();

    assert_eq!(restored, original);
    assert_eq!(restored.premium_customer, PremiumFlag::Bool(true));
}

#[test]
fn string_premium_flag_survives_round_trip() {
    let parsed = parse_orders(RECORD_TEXT_FLAG).unwrap();
    let original = parsed.into_iter().next().unwrap();

    let doc = to_document(&original).unwrap();
    let restored: Order = from_document(doc).unwrap();

    assert_eq!(restored, original);
    assert_eq!(
        restored.premium_customer,
        PremiumFlag::Text("true".to_string())
    );
}

#[test]
fn missing_id_is_not_serialized() {
    let parsed = parse_orders(RECORD_BOOL_FLAG).unwrap();
    let doc = to_document(&parsed[0]).unwrap();
    assert!(!doc.contains_key("_id"));
}

#[test]
fn shipped_sample_file_covers_every_report() {
    let raw = std::fs::read_to_string("data/mock_orders.json").unwrap();
    let records = parse_orders(&raw).unwrap();
    assert!(!records.is_empty());

    // High-value California orders above $1000
    assert!(records
        .iter()
        .any(|o| o.state == "California" && o.total_price > 1000.0));
    // Premium Texas orders above $2000
    assert!(records
        .iter()
        .any(|o| o.state == "Texas" && o.total_price > 2000.0));
    // A New York City order on the default report date
    assert!(records
        .iter()
        .any(|o| o.city == "New York City" && o.order_date == "1/9/2021"));
    // Both premium flag shapes appear in the sample
    assert!(records
        .iter()
        .any(|o| matches!(o.premium_customer, PremiumFlag::Bool(_))));
    assert!(records
        .iter()
        .any(|o| matches!(o.premium_customer, PremiumFlag::Text(_))));
}
