//! HTTP API endpoints.
//!
//! Plain request/response access to the same session the WebSocket views
//! show, for scripting or a view without WebSocket support.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::GameError;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use crate::view::Screen;

/// Current screen.
///
/// GET /api/screen
pub async fn get_screen(State(state): State<Arc<AppState>>) -> Json<Screen> {
    Json(state.screen().await)
}

/// Apply one client message and return the resulting screen.
///
/// POST /api/action
pub async fn post_action(
    State(state): State<Arc<AppState>>,
    Json(msg): Json<ClientMessage>,
) -> Response {
    let Some(action) = msg.into_action() else {
        return Json(state.screen().await).into_response();
    };

    match state.dispatch(action).await {
        Ok(game) => Json(Screen::from_state(&game)).into_response(),
        Err(e) => {
            let status = match e {
                GameError::UnknownPlayer(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::CONFLICT,
            };
            (status, Json(ServerMessage::from(&e))).into_response()
        }
    }
}
