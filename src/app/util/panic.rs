use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::app::errors::DefaultApiError;

/// Used by `CatchPanicLayer` so a panicking handler still answers with the
/// JSON error envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = err.downcast_ref::<String>() {
        Some(message.clone())
    } else {
        err.downcast_ref::<&str>().map(|message| message.to_string())
    };

    tracing::error!(?message, "handler panicked");

    let error = match message {
        Some(message) => DefaultApiError::HandlerPanicked(message),
        None => DefaultApiError::InternalServerError,
    };

    error.value().into_response()
}
