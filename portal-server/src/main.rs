use portal_server::api;
use portal_server::config::Config;
use portal_server::state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    if config.uses_fallback_secret() {
        tracing::warn!(
            "JWT_SECRET not set! Using the development fallback secret; \
             every token is forgeable. Set JWT_SECRET before exposing this server."
        );
    }

    tracing::info!("Starting portal-server");

    let state = AppState::new(config.clone()).await?;
    let app = api::build_app(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("portal-server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
