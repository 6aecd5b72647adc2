//! Logging Infrastructure

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "bioskop_api=info,tower_http=info";

/// Initialize the global tracing subscriber
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_target(false)
        .init();
}
