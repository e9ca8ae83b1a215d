//! Bootstrap: logging, middleware composition and the server loop.
//!
//! Middleware, outermost first: request tracing, forwarded headers, HTTPS
//! redirection (when an HTTPS port is configured), HSTS on HTTPS requests
//! (outside development), the "CorsPolicy" CORS policy, then the API routes
//! with static files as the fallback.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::application;
use crate::config::Settings;
use crate::presentation::{self, middleware};
use crate::repository::{InMemoryRepositoryManager, RepositoryManager};

/// Initialize the tracing subscriber. `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

/// The "CorsPolicy" policy: any origin, any method, any header.
pub fn cors_policy() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wrap `router` with static files and the cross-cutting middleware.
pub fn with_middleware(router: Router, settings: &Settings) -> Router {
    let mut app = router
        .fallback_service(ServeDir::new(&settings.static_dir))
        .layer(cors_policy());

    if !settings.environment.is_development() {
        app = app.layer(from_fn(middleware::strict_transport_security));
    }

    if let Some(https_port) = settings.https_port {
        app = app.layer(from_fn_with_state(https_port, middleware::https_redirection));
    }

    app.layer(from_fn(middleware::forwarded_headers))
        .layer(TraceLayer::new_for_http())
}

/// Compose the full application over `repository`.
pub fn build(settings: &Settings, repository: Arc<dyn RepositoryManager>) -> Result<Router> {
    let mediator = application::mediator(repository).context("Failed to register handlers")?;
    let router = presentation::router(Arc::new(mediator)).context("Incomplete handler registry")?;
    Ok(with_middleware(router, settings))
}

/// Bind and serve until Ctrl-C.
pub async fn serve(settings: Settings) -> Result<()> {
    let repository: Arc<dyn RepositoryManager> = Arc::new(InMemoryRepositoryManager::new());
    let app = build(&settings, repository)?;

    let address = settings.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(
        %address,
        environment = ?settings.environment,
        https_port = ?settings.https_port,
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
