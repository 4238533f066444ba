use mongodb::bson::doc;
use mongodb::Client;
use tracing_subscriber;

use orderscope::{config, render, services, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    // Mongo connection
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");
    let db = client.database(&settings.mongodb_db);

    let state = AppState { db, settings };

    // Fail fast if the store is unreachable; nothing below can recover.
    state
        .db
        .run_command(doc! { "ping": 1 }, None)
        .await
        .expect("MongoDB is unreachable");
    tracing::info!("connected to database {}", state.settings.mongodb_db);

    services::db_init::ensure_indexes(&state)
        .await
        .expect("Failed to create indexes");

    let ids = services::import_service::load_orders(&state, &state.settings.orders_file)
        .await
        .expect("Failed to load orders");
    println!("Data inserted successfully");
    println!("{}", render::render_inserted_ids(&ids));

    let totals = services::reports_service::order_totals(&state)
        .await
        .expect("Order totals report failed");
    println!("{}", render::render_order_totals(&totals));

    let products = services::reports_service::product_frequencies(&state)
        .await
        .expect("Product frequencies report failed");
    println!("{}", render::render_product_frequencies(&products));

    let high_value = services::reports_service::orders_in_state_over(&state, "California", 1000.0)
        .await
        .expect("High-value orders report failed");
    println!("{}", render::render_high_value_orders("California", &high_value));

    let top = services::reports_service::top_states(&state, 500.0, 10)
        .await
        .expect("Top states report failed");
    println!("{}", render::render_top_states(500.0, 10, &top));

    let premium = services::reports_service::orders_in_state_over(&state, "Texas", 2000.0)
        .await
        .expect("Premium customers report failed");
    println!("{}", render::render_premium_customers("Texas", &premium));

    let report_date = state.settings.report_date.clone();
    let by_date = services::reports_service::orders_in_city_on(&state, "New York City", &report_date)
        .await
        .expect("Orders-by-date report failed");
    println!(
        "{}",
        render::render_orders_by_date("New York City", &report_date, &by_date)
    );
}
