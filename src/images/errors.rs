use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    ApiKeyNotSet,
    MethodNotAllowed,
    InvalidInput(String),
    Upstream { status: StatusCode, body: String },
    InvalidArchive(String),
    Unexpected(String),
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::ApiKeyNotSet => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "NOVELAI_API_KEY environment variable not set in Cloudflare.".to_string(),
            },
            Self::MethodNotAllowed => ApiError {
                code: StatusCode::METHOD_NOT_ALLOWED,
                message: "Method not allowed. Please use POST.".to_string(),
            },
            Self::InvalidInput(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
            Self::Upstream { status, body } => ApiError {
                code: *status,
                message: format!("NovelAI API Error: {}", body),
            },
            Self::InvalidArchive(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Failed to process image data: {}", message),
            },
            Self::Unexpected(message) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: message.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_passed_through() {
        let error = ImagesApiError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "{\"statusCode\":429}".to_string(),
        }
        .value();

        assert_eq!(error.code, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(error.message, "NovelAI API Error: {\"statusCode\":429}");
    }

    #[test]
    fn archive_failures_are_prefixed() {
        let error = ImagesApiError::InvalidArchive("invalid Zip archive".to_string()).value();

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.message,
            "Failed to process image data: invalid Zip archive"
        );
    }

    #[test]
    fn unexpected_keeps_message() {
        let error = ImagesApiError::Unexpected("operation timed out".to_string()).value();

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "operation timed out");
    }
}
