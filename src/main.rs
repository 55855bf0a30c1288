use std::{env, net::SocketAddr};

use novelai_relay::{app::envy::Envy, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match ::envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    if envy.novelai_api_key().is_none() {
        tracing::warn!("NOVELAI_API_KEY is not set, generation requests will fail");
    }

    // properties
    let port = envy.port.unwrap_or(3000);
    tracing::info!(
        upstream = envy.novelai_api_url(),
        timeout = ?envy.novelai_timeout(),
        proxy = envy.proxy_url().is_some(),
        "relay configured"
    );

    // app
    let app = router(AppState::new(envy));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e, "server error");
    }
}
