use axum::{extract::rejection::BytesRejection, http::Method};
use bytes::Bytes;

use crate::app::{envy::Envy, models::api_error::ApiError};

use super::{
    apis::novelai, dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError,
    models::generate_image_response::GenerateImageResponse, util::archive,
};

pub async fn generate_image(
    method: &Method,
    body: Result<Bytes, BytesRejection>,
    envy: &Envy,
) -> Result<GenerateImageResponse, ApiError> {
    let Some(novelai_api_key) = envy.novelai_api_key() else {
        tracing::error!("NOVELAI_API_KEY is not set");
        return Err(ImagesApiError::ApiKeyNotSet.value());
    };

    if *method != Method::POST {
        return Err(ImagesApiError::MethodNotAllowed.value());
    }

    let body = match body {
        Ok(body) => body,
        Err(e) => return Err(ImagesApiError::InvalidInput(e.body_text()).value()),
    };

    let dto = match GenerateImageDto::from_slice(&body) {
        Ok(dto) => dto,
        Err(e) => {
            tracing::warn!(%e, "rejected generation request body");
            return Err(ImagesApiError::InvalidInput(e.to_string()).value());
        }
    };

    tracing::info!(
        width = dto.width,
        height = dto.height,
        steps = dto.steps,
        sampler = %dto.sampler,
        "generating image"
    );

    let data = novelai::service::generate_image(&dto, novelai_api_key, envy).await?;

    match archive::read_first_entry(&data) {
        Ok(image) => Ok(GenerateImageResponse::from_png(&image)),
        Err(e) => {
            tracing::error!(%e, len = data.len(), "failed to unpack novelai archive");
            Err(ImagesApiError::InvalidArchive(e.to_string()).value())
        }
    }
}
