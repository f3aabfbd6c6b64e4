use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::dto::feedback_dto::VerifyRequest;
use crate::middleware::auth::secret_matches;
use crate::services::export_service::ExportService;
use crate::services::stats_service::StatsService;
use crate::AppState;

#[axum::debug_handler]
pub async fn statistics(State(state): State<AppState>) -> crate::error::Result<Response> {
    let records = state.store.load();
    let data = StatsService::statistics(&records);
    Ok(Json(json!({ "success": true, "data": data })).into_response())
}

#[axum::debug_handler]
pub async fn export_csv(State(state): State<AppState>) -> crate::error::Result<Response> {
    let records = state.store.load();
    let csv = ExportService::generate_csv(&records);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=feedback.csv".to_string(),
            ),
        ],
        csv,
    )
        .into_response())
}

#[axum::debug_handler]
pub async fn export_xlsx(State(state): State<AppState>) -> crate::error::Result<Response> {
    let records = state.store.load();
    let buffer = ExportService::generate_xlsx(&records)?;
    let filename = format!("feedback_{}.xlsx", chrono::Utc::now().timestamp_millis());
    let disposition = format!("attachment; filename={}", filename);
    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    )
        .into_response())
}

#[axum::debug_handler]
pub async fn clear(State(state): State<AppState>) -> crate::error::Result<Response> {
    let deleted = state.store.clear().await?;
    tracing::info!(deleted, "response store cleared");
    Ok(Json(json!({ "success": true, "deleted": deleted })).into_response())
}

/// Password check used by the admin front-end before it starts sending
/// bearer-authenticated requests. Deliberately unauthenticated; it gates
/// nothing by itself.
#[axum::debug_handler]
pub async fn verify(
    State(state): State<AppState>,
    Json(payload): Json<VerifyRequest>,
) -> Response {
    let success = payload
        .password
        .as_deref()
        .is_some_and(|password| secret_matches(password, &state.admin_password));
    Json(json!({ "success": success })).into_response()
}
