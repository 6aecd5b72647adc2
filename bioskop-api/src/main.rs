//! bioskop-api: cinema CRUD service over PostgreSQL

use bioskop_api::{AppState, Config, config, create_router, logger};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load settings file before tracing so RUST_LOG from it applies
    let env_file = config::load_env_file();

    logger::init_logger();

    match env_file {
        Some(path) => tracing::info!("Loaded settings from {}", path.display()),
        None => tracing::warn!(
            "No {} or .env file found, using system environment variables",
            config::SETTINGS_FILE
        ),
    }

    let config = Config::from_env()?;

    // Database unreachable or migration failure ends the process here
    let state = AppState::connect(&config).await.inspect_err(|e| {
        tracing::error!("Failed to initialize database: {e}");
    })?;

    let app = create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("bioskop-api HTTP listening on {http_addr}");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("HTTP server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
