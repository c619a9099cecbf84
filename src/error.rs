use crate::types::Phase;

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised when an action cannot be applied to the current game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Cannot {action} during {phase:?}")]
    InvalidAction { action: &'static str, phase: Phase },

    #[error("Invalid phase transition from {from:?} to {to:?}")]
    InvalidTransition { from: Phase, to: Phase },

    #[error("No player at position {0}")]
    UnknownPlayer(usize),

    #[error("Player at position {0} has no name")]
    EmptyName(usize),

    #[error("At least {min} players are needed, have {have}")]
    NotEnoughPlayers { min: usize, have: usize },

    #[error("Subject catalog is empty")]
    EmptyCatalog,
}

impl GameError {
    /// Stable code sent to clients alongside the message
    pub fn code(&self) -> &'static str {
        match self {
            GameError::InvalidAction { .. } => "INVALID_ACTION",
            GameError::InvalidTransition { .. } => "INVALID_TRANSITION",
            GameError::UnknownPlayer(_) => "UNKNOWN_PLAYER",
            GameError::EmptyName(_) => "EMPTY_NAME",
            GameError::NotEnoughPlayers { .. } => "NOT_ENOUGH_PLAYERS",
            GameError::EmptyCatalog => "EMPTY_CATALOG",
        }
    }
}

/// Errors that can occur while loading an external subject catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no subjects")]
    Empty,
}
