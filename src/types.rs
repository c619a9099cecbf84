use serde::{Deserialize, Serialize};

/// Opaque ID type for the running session
pub type GameId = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Waiting,
    Preparing,
    Playing,
    Voting,
    Guessing,
    Summary,
    Finished,
}

/// Which side took the round
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    FakeArtist,
    RealArtists,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub fake_artist: bool,
    pub points: u32,
}

impl Player {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether this player scores when `winner` takes the round
    pub fn is_on_side(&self, winner: Winner) -> bool {
        match winner {
            Winner::FakeArtist => self.fake_artist,
            Winner::RealArtists => !self.fake_artist,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub subject: String,
    pub category: String,
}

impl Subject {
    pub fn new(subject: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub current_round: u32,
    pub current_round_winner: Option<Winner>,
}

/// Cursor for the one-player-at-a-time role reveal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reveal {
    pub index: usize,
    pub role_visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Rounds per game
    pub rounds: u32,
    pub max_players: usize,
    pub min_players: usize,
    /// Empty name slots shown on a fresh game
    pub initial_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: 3,
            max_players: 10,
            min_players: 3,
            initial_players: 3,
        }
    }
}
