//! HTTP server: router assembly, logging setup and the serve loop

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use leptos::prelude::{LeptosOptions, get_configuration};
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::app::{App, shell};
use crate::core::config::{Config, ConfigError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid log filter: {0}")]
    LogFilter(String),

    #[error("failed to load Leptos options: {0}")]
    Leptos(String),

    #[error("invalid header value: {0}")]
    Header(#[from] header::InvalidHeaderValue),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Raised before the tracing subscriber is installed
    pub fn precedes_tracing(&self) -> bool {
        matches!(self, ServerError::Config(_) | ServerError::LogFilter(_))
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &Config) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| ServerError::LogFilter(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| ServerError::LogFilter(e.to_string()))
}

async fn healthz() -> &'static str {
    "ok"
}

/// Build the application router
pub fn router(config: &Config, leptos_options: LeptosOptions) -> Result<Router, ServerError> {
    let routes = generate_route_list(App);

    let cache_control = HeaderValue::from_str(&config.cache_control())?;

    // Serves .br and .gz variants of the bundle when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let pkg_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ));

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .merge(pkg_router)
        .merge(leptos_router);

    let app = if config.compression {
        app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
    } else {
        app
    };

    Ok(app.layer(TraceLayer::new_for_http()))
}

/// Load configuration, bind the listener and serve until Ctrl-C
pub async fn run() -> Result<(), ServerError> {
    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_tracing(&config)?;

    tracing::info!(
        compression = config.compression,
        asset_max_age = config.asset_max_age,
        "config loaded"
    );

    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = router(&config, leptos_options)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", &addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_healthz_body() {
        assert_eq!(healthz().await, "ok");
    }

    #[test]
    fn test_config_error_converts() {
        let err: ServerError = ConfigError::InvalidNumber {
            key: "HALI_ASSET_MAX_AGE",
            value: "x".to_string(),
        }
        .into();

        assert!(err.to_string().starts_with("invalid configuration"));
        assert!(err.to_string().contains("HALI_ASSET_MAX_AGE"));
    }

    #[test]
    fn test_only_setup_errors_precede_tracing() {
        let config: ServerError = ConfigError::InvalidBool {
            key: "HALI_COMPRESSION",
            value: "maybe".to_string(),
        }
        .into();
        assert!(config.precedes_tracing());
        assert!(ServerError::LogFilter("bad directive".to_string()).precedes_tracing());

        assert!(!ServerError::Leptos("missing Cargo.toml".to_string()).precedes_tracing());
        let io: ServerError = std::io::Error::other("address in use").into();
        assert!(!io.precedes_tracing());
    }
}
