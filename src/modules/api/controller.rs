use axum::{extract::Query, Json};

use super::error::ApiError;
use super::schema::{MessageResponse, TriggerQuery};

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, from telemetry-lab!",
    })
}

/// Shared handler for /users, /comments and /posts.
///
/// The `test` query parameter forces a specific response status so the
/// instrumentation can be exercised; any other value (or none) succeeds.
pub async fn resource(
    Query(query): Query<TriggerQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    match query.test.as_deref() {
        Some("trigger-not-found") => Err(ApiError::NotFound),
        Some("trigger-forbidden") => Err(ApiError::Forbidden),
        Some("trigger-server-error") => Err(ApiError::Internal),
        _ => Ok(Json(MessageResponse {
            message: "everything is ok",
        })),
    }
}
