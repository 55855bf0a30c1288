use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::enums::api_status::ApiStatus;

/// Liveness probe. Reports whether the API key is present, never the key.
pub async fn get_root(State(state): State<AppState>) -> Json<Value> {
    let status = match state.envy.novelai_api_key() {
        Some(_) => ApiStatus::Online,
        None => ApiStatus::Unconfigured,
    };

    Json(json!({ "status": status.value() }))
}
