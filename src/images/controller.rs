use axum::{
    extract::{rejection::BytesRejection, State},
    http::Method,
    Json,
};
use bytes::Bytes;

use crate::{app::models::api_error::ApiError, AppState};

use super::{models::generate_image_response::GenerateImageResponse, service};

pub async fn generate_image(
    State(state): State<AppState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GenerateImageResponse>, ApiError> {
    match service::generate_image(&method, body, &state.envy).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(e),
    }
}
