use reqwest::{Client, Proxy, StatusCode};

use crate::app::{envy::Envy, models::api_error::ApiError};

/// Client for a single upstream call, honoring the configured timeout and
/// HTTPS proxy. System proxy variables are ignored; only `PROXY_URL` counts.
pub fn build_client(envy: &Envy) -> Result<Client, ApiError> {
    let mut builder = Client::builder().timeout(envy.novelai_timeout());

    if let Some(proxy_url) = envy.proxy_url() {
        match Proxy::https(proxy_url) {
            Ok(proxy) => builder = builder.proxy(proxy),
            Err(e) => {
                tracing::error!(%e, "invalid proxy url");
                return Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: e.to_string(),
                });
            }
        }
    } else {
        builder = builder.no_proxy();
    }

    match builder.build() {
        Ok(client) => Ok(client),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}
