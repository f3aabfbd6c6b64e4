use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::dto::feedback_dto::SubmitResponseRequest;
use crate::error::Error;
use crate::models::response::Reaction;
use crate::AppState;

/// Accept one feedback submission from a kiosk. Only the reaction is
/// validated; device id and timestamp are stored as supplied.
#[axum::debug_handler]
pub async fn submit_response(
    State(state): State<AppState>,
    Json(payload): Json<SubmitResponseRequest>,
) -> crate::error::Result<Response> {
    let reaction = payload
        .reaction
        .as_ref()
        .and_then(Reaction::coerce)
        .ok_or_else(|| Error::BadRequest("invalid reaction, expected 1, 2 or 3".to_string()))?;

    let record = state
        .store
        .append(
            reaction,
            payload.device_id,
            payload.timestamp.unwrap_or_default(),
        )
        .await?;
    tracing::info!(id = record.id, reaction = reaction.code(), "response recorded");

    Ok(Json(json!({ "success": true })).into_response())
}
