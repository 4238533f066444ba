use mongodb::bson::Bson;

use crate::models::{Order, ProductCount, StateCount};
use crate::services::reports_service::OrderTotals;

// Section separator printed after every report except the by-date one.
pub const RULE: &str = "==========================================";

fn order_line(order: &Order) -> String {
    format!(
        "Order ID: {}, Customer ID: {}, Quantity: {}, Unit Price: {}, Order Date: {}, State: {}, Total Price: {}, Premium Customer: {}, City: {}",
        order.order_id,
        order.customer_id,
        order.quantity,
        order.unit_price,
        order.order_date,
        order.state,
        order.total_price,
        order.premium_customer,
        order.city,
    )
}

pub fn render_inserted_ids(ids: &[Bson]) -> String {
    let parts: Vec<String> = ids
        .iter()
        .map(|id| match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
        .collect();

    format!("Inserted ids: {}", parts.join(", "))
}

pub fn render_order_totals(totals: &OrderTotals) -> String {
    let mut lines = vec![
        format!("Total number of orders: {}", totals.total),
        "Number of orders per state:".to_string(),
    ];
    for row in &totals.per_state {
        lines.push(format!("State: {}, Count: {}", row.state, row.count));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn render_product_frequencies(rows: &[ProductCount]) -> String {
    let mut lines = vec!["Product Frequencies:".to_string()];
    for row in rows {
        lines.push(format!(
            "Product ID: {}, Frequency: {}",
            row.product_id, row.count
        ));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn render_high_value_orders(state_name: &str, orders: &[Order]) -> String {
    let mut lines = vec![format!(
        "Total high-value orders in {}: {}",
        state_name,
        orders.len()
    )];
    if orders.is_empty() {
        lines.push("High-value orders details: None".to_string());
    } else {
        lines.push("High-value orders details:".to_string());
        for order in orders {
            lines.push(order_line(order));
        }
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn render_top_states(min_total: f64, limit: i64, rows: &[StateCount]) -> String {
    let mut lines = vec![format!(
        "Top {} States with High-Value Orders (>${}):",
        limit, min_total
    )];
    for (i, row) in rows.iter().enumerate() {
        lines.push(format!(
            "Rank {}: State: {}, Order Count: {}",
            i + 1,
            row.state,
            row.count
        ));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

// Unlike the high-value report, an empty result set here prints a zero count
// and an empty detail section rather than a None marker.
pub fn render_premium_customers(state_name: &str, orders: &[Order]) -> String {
    let mut lines = vec![
        format!(
            "Total premium customers in {}: {}",
            state_name,
            orders.len()
        ),
        "Premium customer details:".to_string(),
    ];
    for order in orders {
        lines.push(order_line(order));
    }
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn render_orders_by_date(city: &str, order_date: &str, orders: &[Order]) -> String {
    let mut lines = vec![format!(
        "Total orders placed in {} on {}: {}",
        city,
        order_date,
        orders.len()
    )];
    if orders.is_empty() {
        lines.push("Order details: None".to_string());
    } else {
        lines.push("Order details:".to_string());
        for order in orders {
            lines.push(order_line(order));
        }
    }
    lines.join("\n")
}
