use mongodb::bson::Bson;
use mongodb::Collection;

use crate::{models::Order, AppState};

fn orders(state: &AppState) -> Collection<Order> {
    state.db.collection(&state.settings.orders_collection)
}

/// Parses the source file contents: a JSON array of order records.
pub fn parse_orders(raw: &str) -> Result<Vec<Order>, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// Reads the order file and inserts the whole set in one batch. Returns the
/// store-generated identifiers in insertion order.
pub async fn load_orders(state: &AppState, path: &str) -> Result<Vec<Bson>, String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("failed to read {path}: {e}"))?;

    let records = parse_orders(&raw).map_err(|e| format!("failed to parse {path}: {e}"))?;
    if records.is_empty() {
        return Err(format!("{path} contains no orders"));
    }

    tracing::info!("inserting {} orders from {}", records.len(), path);

    let result = orders(state)
        .insert_many(records, None)
        .await
        .map_err(|e| e.to_string())?;

    // inserted_ids is keyed by batch index; restore insertion order.
    let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
    ids.sort_by_key(|&(i, _)| i);

    Ok(ids.into_iter().map(|(_, id)| id).collect())
}
