// Public API for integration tests and potential library usage

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod protocol;
pub mod state;
pub mod types;
pub mod view;
pub mod ws;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Build the application router: WebSocket, JSON API and the static front-end
pub fn app(state: Arc<state::AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/api/screen", get(api::get_screen))
        .route("/api/action", post(api::post_action))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
