//! codex HTTP surface.
//!
//! Wires the core [`RecordLoader`] into an axum [`Router`]:
//!
//! | Route | Serves |
//! |-------|--------|
//! | `GET /character_ids` | normalized character index |
//! | `GET /characters/{id}` | one normalized character record |
//! | `GET /characters` | every indexed character, normalized |
//! | `GET /weapon_ids` | normalized weapon index |
//! | `GET /weapons/{id}` | one normalized weapon record |
//! | `GET /health` | liveness probe |

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use codex_core::config::{Config, CorsConfig};
use codex_core::RecordLoader;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Shared application state. Cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<RecordLoader>,
}

impl AppState {
    pub fn new(loader: RecordLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/character_ids", get(handlers::character_ids))
        .route("/characters", get(handlers::all_characters))
        .route("/characters/{id}", get(handlers::character))
        .route("/weapon_ids", get(handlers::weapon_ids))
        .route("/weapons/{id}", get(handlers::weapon))
        .fallback(handlers::no_route)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors.allow_any_origin {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

/// Serve `app` on an already-bound listener until SIGINT/SIGTERM.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Bind the configured address and serve the configured data directory.
pub async fn run(config: &Config) -> std::io::Result<()> {
    let state = AppState::new(config.loader());
    let app = router(state, &config.cors);

    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        addr = %local_addr,
        data_dir = %config.data.dir.display(),
        "codex listening"
    );

    serve(listener, app).await?;
    tracing::info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to set up SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
        _ = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
