use crate::error::{AppError, Result};
use crate::model::{parse_request, HashResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::debug;

/// `POST /hash`
///
/// The body is parsed by hand: a missing `Content-Type` is accepted and every
/// parse failure maps to [`AppError::InvalidJson`].
pub async fn hash_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<HashResponse>> {
    let request = parse_request(&body).map_err(|e| {
        debug!(error = %e, "rejecting malformed request body");
        AppError::InvalidJson
    })?;

    let hash = state.cache().get_or_create(request.validate()?).await?;

    Ok(Json(HashResponse {
        input: request.input,
        hash,
    }))
}
