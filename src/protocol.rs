use crate::error::GameError;
use crate::state::Action;
use crate::view::Screen;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask for the current screen (e.g. after reconnecting)
    Sync,
    AddPlayer,
    RenamePlayer {
        index: usize,
        name: String,
    },
    RemovePlayer {
        index: usize,
    },
    /// "Show roles and subject" on the roster screen
    StartGame,
    RevealRole,
    NextPlayer,
    /// "We're done" after drawing
    FinishDrawing,
    Vote {
        identified: bool,
    },
    Guess {
        correct: bool,
    },
    NextRound,
    NewGame,
}

impl ClientMessage {
    /// Game action carried by this message, if any
    pub fn into_action(self) -> Option<Action> {
        Some(match self {
            ClientMessage::Sync => return None,
            ClientMessage::AddPlayer => Action::AddPlayer,
            ClientMessage::RenamePlayer { index, name } => Action::RenamePlayer { index, name },
            ClientMessage::RemovePlayer { index } => Action::RemovePlayer { index },
            ClientMessage::StartGame => Action::StartGame,
            ClientMessage::RevealRole => Action::RevealRole,
            ClientMessage::NextPlayer => Action::NextPlayer,
            ClientMessage::FinishDrawing => Action::FinishDrawing,
            ClientMessage::Vote { identified } => Action::Vote { identified },
            ClientMessage::Guess { correct } => Action::Guess { correct },
            ClientMessage::NextRound => Action::NextRound,
            ClientMessage::NewGame => Action::NewGame,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full screen to render
    Screen { screen: Screen, server_now: String },
    Error { code: String, msg: String },
}

impl ServerMessage {
    pub fn screen(screen: Screen) -> Self {
        ServerMessage::Screen {
            screen,
            server_now: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl From<&GameError> for ServerMessage {
    fn from(e: &GameError) -> Self {
        ServerMessage::Error {
            code: e.code().to_string(),
            msg: e.to_string(),
        }
    }
}
