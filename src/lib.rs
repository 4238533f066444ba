//! Library entrypoint for orderscope.
//!
//! This file exists mainly to make the reports easy to test (integration
//! tests under `tests/` can import the app state, services, and render
//! functions).

pub mod config;
pub mod models;

pub mod services;

#[path = "views/render.rs"]
pub mod render;

#[derive(Clone)]
pub struct AppState {
    pub db: mongodb::Database,
    pub settings: config::Settings,
}
