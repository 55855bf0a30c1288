use std::sync::Arc;

use axum::{
    routing::{any, get},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::app::{envy::Envy, util::panic::handle_panic};

pub mod app;
pub mod images;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
}

impl AppState {
    pub fn new(envy: Envy) -> Self {
        Self {
            envy: Arc::new(envy),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(app::controller::get_root))
        // images
        .route("/generate", any(images::controller::generate_image))
        // layers
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(state)
}
