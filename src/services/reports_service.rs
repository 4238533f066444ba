use futures_util::StreamExt;

use mongodb::bson::{doc, from_document, Document};
use mongodb::Collection;

use crate::{
    models::{Order, ProductCount, StateCount},
    AppState,
};

#[derive(Debug, Clone)]
pub struct OrderTotals {
    pub total: u64,
    pub per_state: Vec<StateCount>,
}

fn orders(state: &AppState) -> Collection<Order> {
    state.db.collection(&state.settings.orders_collection)
}

fn order_docs(state: &AppState) -> Collection<Document> {
    state.db.collection(&state.settings.orders_collection)
}

fn state_counts_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$state", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": 1 } },
    ]
}

fn product_frequencies_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$product_id", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
    ]
}

fn top_states_pipeline(min_total: f64, limit: i64) -> Vec<Document> {
    vec![
        doc! { "$match": { "total_price": { "$gt": min_total } } },
        doc! { "$group": { "_id": "$state", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
        doc! { "$limit": limit },
    ]
}

/// Grand total plus per-state counts, ascending by count. Relative order of
/// states with equal counts is whatever the store returns.
pub async fn order_totals(state: &AppState) -> Result<OrderTotals, String> {
    let total = orders(state)
        .count_documents(doc! {}, None)
        .await
        .map_err(|e| e.to_string())?;

    let mut cursor = order_docs(state)
        .aggregate(state_counts_pipeline(), None)
        .await
        .map_err(|e| e.to_string())?;

    let mut per_state: Vec<StateCount> = vec![];
    while let Some(res) = cursor.next().await {
        let row = res.map_err(|e| e.to_string())?;
        per_state.push(from_document(row).map_err(|e| e.to_string())?);
    }

    Ok(OrderTotals { total, per_state })
}

/// Order count per product, descending by count.
pub async fn product_frequencies(state: &AppState) -> Result<Vec<ProductCount>, String> {
    let mut cursor = order_docs(state)
        .aggregate(product_frequencies_pipeline(), None)
        .await
        .map_err(|e| e.to_string())?;

    let mut out: Vec<ProductCount> = vec![];
    while let Some(res) = cursor.next().await {
        let row = res.map_err(|e| e.to_string())?;
        out.push(from_document(row).map_err(|e| e.to_string())?);
    }

    Ok(out)
}

/// All orders in a state with total_price strictly above the threshold.
/// Callers derive the report count from the listing length, so the count and
/// the detail section always come from one round-trip.
pub async fn orders_in_state_over(
    state: &AppState,
    state_name: &str,
    min_total: f64,
) -> Result<Vec<Order>, String> {
    let mut cursor = orders(state)
        .find(
            doc! { "state": state_name, "total_price": { "$gt": min_total } },
            None,
        )
        .await
        .map_err(|e| e.to_string())?;

    let mut out: Vec<Order> = vec![];
    while let Some(res) = cursor.next().await {
        out.push(res.map_err(|e| e.to_string())?);
    }

    Ok(out)
}

/// Top `limit` states by number of orders with total_price above the
/// threshold, descending by count.
pub async fn top_states(
    state: &AppState,
    min_total: f64,
    limit: i64,
) -> Result<Vec<StateCount>, String> {
    let mut cursor = order_docs(state)
        .aggregate(top_states_pipeline(min_total, limit), None)
        .await
        .map_err(|e| e.to_string())?;

    let mut out: Vec<StateCount> = vec![];
    while let Some(res) = cursor.next().await {
        let row = res.map_err(|e| e.to_string())?;
        out.push(from_document(row).map_err(|e| e.to_string())?);
    }

    Ok(out)
}

/// Orders in a city on an exact order_date string (no date-range semantics).
pub async fn orders_in_city_on(
    state: &AppState,
    city: &str,
    order_date: &str,
) -> Result<Vec<Order>, String> {
    let mut cursor = orders(state)
        .find(doc! { "city": city, "order_date": order_date }, None)
        .await
        .map_err(|e| e.to_string())?;

    let mut out: Vec<Order> = vec![];
    while let Some(res) = cursor.next().await {
        out.push(res.map_err(|e| e.to_string())?);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_counts_pipeline_groups_by_state_and_sorts_ascending() {
        let pipeline = state_counts_pipeline();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline[0],
            doc! { "$group": { "_id": "$state", "count": { "$sum": 1 } } }
        );
        assert_eq!(pipeline[1], doc! { "$sort": { "count": 1 } });
    }

    #[test]
    fn product_frequencies_pipeline_sorts_descending() {
        let pipeline = product_frequencies_pipeline();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline[0],
            doc! { "$group": { "_id": "$product_id", "count": { "$sum": 1 } } }
        );
        assert_eq!(pipeline[1], doc! { "$sort": { "count": -1 } });
    }

    #[test]
    fn top_states_pipeline_matches_groups_sorts_and_limits() {
        let pipeline = top_states_pipeline(500.0, 10);
        assert_eq!(pipeline.len(), 4);
        assert_eq!(
            pipeline[0],
            doc! { "$match": { "total_price": { "$gt": 500.0 } } }
        );
        assert_eq!(
            pipeline[1],
            doc! { "$group": { "_id": "$state", "count": { "$sum": 1 } } }
        );
        assert_eq!(pipeline[2], doc! { "$sort": { "count": -1 } });
        assert_eq!(pipeline[3], doc! { "$limit": 10_i64 });
    }

    #[test]
    fn top_states_pipeline_threads_its_parameters() {
        let pipeline = top_states_pipeline(2000.0, 3);
        assert_eq!(
            pipeline[0],
            doc! { "$match": { "total_price": { "$gt": 2000.0 } } }
        );
        assert_eq!(pipeline[3], doc! { "$limit": 3_i64 });
    }
}
