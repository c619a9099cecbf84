//! WebSocket message dispatch
//!
//! Every client shares the same device-local session, so there is no role
//! check here: a message either asks for the current screen or carries an
//! action for the game.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::AppState;
use std::sync::Arc;

/// Handle a client message and return an optional direct response.
///
/// Successful actions answer through the broadcast channel, which also
/// reaches the sender, so they return `None` here.
pub async fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    let Some(action) = msg.into_action() else {
        return Some(ServerMessage::screen(state.screen().await));
    };

    match state.dispatch(action).await {
        Ok(_) => None,
        Err(e) => Some(ServerMessage::from(&e)),
    }
}
