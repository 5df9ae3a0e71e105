//! API server for the Gestor de Tareas
//!
//! Serves the REST API and the embedded frontend on port 5000.

mod routes;
mod state;

use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tareas_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The task store lives for the lifetime of the process; nothing persists
    // across restarts.
    let app_state = AppState::new();

    // CORS is wide open so the frontend can be served from anywhere
    let app = Router::new()
        .merge(routes::frontend::router())
        .merge(routes::info::router())
        .merge(routes::task::router())
        .with_state(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));

    tracing::info!("🚀 Iniciando Gestor de Tareas...");
    tracing::info!("🌐 Frontend: http://localhost:{}", addr.port());
    tracing::info!("🔌 API: http://localhost:{}/api", addr.port());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
