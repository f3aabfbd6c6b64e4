pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::services::response_store::ResponseStore;
use crate::storage::json_file::JsonFileStorage;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub store: ResponseStore,
    pub admin_password: Arc<String>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, admin_password: impl Into<String>) -> Self {
        Self {
            store: ResponseStore::new(storage),
            admin_password: Arc::new(admin_password.into()),
        }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            Arc::new(JsonFileStorage::new(config.data_file.clone())),
            config.admin_password.clone(),
        )
    }
}

/// Full application router, shared by the binary and the integration tests.
pub fn app(state: AppState) -> Router {
    let admin_api = Router::new()
        .route("/api/admin/statistics", get(routes::admin::statistics))
        .route("/api/admin/export.csv", get(routes::admin::export_csv))
        .route("/api/admin/export.xlsx", get(routes::admin::export_xlsx))
        .route("/api/admin/clear", delete(routes::admin::clear))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin,
        ));

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/response", post(routes::feedback::submit_response))
        .route("/api/admin/verify", post(routes::admin::verify))
        .merge(admin_api)
        .with_state(state)
}
