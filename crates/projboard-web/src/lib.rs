//! Project Board Web Server
//!
//! Axum server hosting one board: page, form and drop endpoints, JSON API
//! and a WebSocket carrying live list updates.

pub mod board_loop;
pub mod config;
pub mod routes;
pub mod state;
pub mod websocket;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use config::{ConfigError, ServerConfig};
use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/projects", get(routes::projects::list_projects))
        .with_state(state.clone());

    let board_routes = Router::new()
        .route("/", get(routes::board_html::index))
        .route("/projects", post(routes::board_html::create_project))
        .route("/lists/{status}/drop", post(routes::board_html::drop_project))
        .with_state(state.clone());

    Router::new()
        .nest("/api", api_routes)
        .merge(board_routes)
        .route("/ws", get(websocket::ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;
    let state = AppState::new(config.broadcast_capacity)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Web server listening on http://{}", config.bind_addr());

    axum::serve(listener, app).await?;
    Ok(())
}
