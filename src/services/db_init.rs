use mongodb::{bson::doc, IndexModel};

use crate::AppState;

pub async fn ensure_indexes(state: &AppState) -> Result<(), String> {
    let col = state
        .db
        .collection::<mongodb::bson::Document>(&state.settings.orders_collection);

    // orders: per-state high-value scans (match on state, range on total_price)
    {
        let model = IndexModel::builder()
            .keys(doc! { "state": 1, "total_price": -1 })
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // orders: product frequency grouping
    {
        let model = IndexModel::builder().keys(doc! { "product_id": 1 }).build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // orders: city + exact order_date lookups
    {
        let model = IndexModel::builder()
            .keys(doc! { "city": 1, "order_date": 1 })
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    // orders: helpful for the top-states threshold match
    {
        let model = IndexModel::builder().keys(doc! { "total_price": -1 }).build();

        let _ = col.create_index(model, None).await;
    }

    Ok(())
}
