use bytes::Bytes;
use reqwest::{
    header::{self, HeaderValue},
    StatusCode,
};

use crate::{
    app::{envy::Envy, models::api_error::ApiError, util::reqwest::build_client},
    images::{dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError},
};

use super::{
    config::{ACTION, MODEL, NOISE_SCHEDULE},
    models::input_spec::{InputSpec, InputSpecParameters},
};

/// Sends one generation request and returns the raw zip body on a 200.
pub async fn generate_image(
    dto: &GenerateImageDto,
    novelai_api_key: &str,
    envy: &Envy,
) -> Result<Bytes, ApiError> {
    let input_spec = provide_input_spec(dto);

    let Ok(authorization) = HeaderValue::from_str(&format!("Bearer {}", novelai_api_key))
    else {
        return Err(ImagesApiError::Unexpected(
            "NOVELAI_API_KEY contains characters not allowed in a header.".to_string(),
        )
        .value());
    };

    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::AUTHORIZATION, authorization);

    let client = build_client(envy)?;
    let result = client
        .post(envy.novelai_api_url())
        .headers(headers)
        .json(&input_spec)
        .send()
        .await;

    let res = match result {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e, timeout = e.is_timeout(), "novelai request failed");
            return Err(ImagesApiError::Unexpected(e.to_string()).value());
        }
    };

    let status = res.status();

    if status != StatusCode::OK {
        let body = match res.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(%e);
                return Err(ImagesApiError::Unexpected(e.to_string()).value());
            }
        };

        tracing::warn!(%status, %body, "novelai returned an error");
        return Err(ImagesApiError::Upstream { status, body }.value());
    }

    match res.bytes().await {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            tracing::error!(%e);
            Err(ImagesApiError::Unexpected(e.to_string()).value())
        }
    }
}

fn provide_input_spec(dto: &GenerateImageDto) -> InputSpec {
    InputSpec {
        input: dto.prompt.to_string(),
        model: MODEL.to_string(),
        action: ACTION.to_string(),
        parameters: InputSpecParameters {
            width: dto.width,
            height: dto.height,
            scale: dto.scale,
            sampler: dto.sampler.to_string(),
            steps: dto.steps,
            n_samples: 1,
            uc_preset: 0,
            quality_toggle: true,
            sm: dto.sm,
            sm_dyn: dto.sm_dyn,
            dynamic_thresholding: false,
            controlnet_strength: 1,
            legacy: false,
            add_original_image: false,
            uncond_scale: 1,
            cfg_rescale: 0,
            noise_schedule: NOISE_SCHEDULE.to_string(),
            negative_prompt: dto.negative_prompt.to_string(),
        },
    }
}
