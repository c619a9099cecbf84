use super::GameState;
use crate::error::{GameError, GameResult};
use crate::types::*;

impl GameState {
    /// Append an empty player slot. Returns false when the roster is full.
    pub(super) fn add_player(&mut self) -> bool {
        if self.players.len() >= self.config.max_players {
            tracing::debug!(
                "Roster full at {} players, ignoring add",
                self.config.max_players
            );
            return false;
        }
        self.players.push(Player::default());
        true
    }

    pub(super) fn rename_player(&mut self, index: usize, name: String) -> GameResult<()> {
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::UnknownPlayer(index))?;
        player.name = name;
        Ok(())
    }

    pub(super) fn remove_player(&mut self, index: usize) -> GameResult<()> {
        if index >= self.players.len() {
            return Err(GameError::UnknownPlayer(index));
        }
        if self.players.len() <= self.config.min_players {
            return Err(GameError::NotEnoughPlayers {
                min: self.config.min_players,
                have: self.players.len() - 1,
            });
        }
        let removed = self.players.remove(index);
        tracing::info!("Removed player {:?}", removed.name);
        Ok(())
    }

    /// First player whose name is blank, if any
    pub fn first_unnamed(&self) -> Option<usize> {
        self.players.iter().position(|p| p.name.trim().is_empty())
    }

    pub fn can_add_player(&self) -> bool {
        self.players.len() < self.config.max_players
    }

    pub fn can_remove_player(&self) -> bool {
        self.players.len() > self.config.min_players
    }

    /// Preconditions for leaving the waiting screen
    pub fn validate_roster(&self) -> GameResult<()> {
        if self.players.len() < self.config.min_players {
            return Err(GameError::NotEnoughPlayers {
                min: self.config.min_players,
                have: self.players.len(),
            });
        }
        if let Some(index) = self.first_unnamed() {
            return Err(GameError::EmptyName(index));
        }
        Ok(())
    }
}
