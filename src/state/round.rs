use super::GameState;
use crate::catalog::Catalog;
use crate::error::{GameError, GameResult};
use crate::types::*;
use rand::Rng;

/// What a player sees when their role is revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCard<'a> {
    FakeArtist,
    RealArtist { subject: &'a Subject },
}

impl GameState {
    /// Pick a subject and a fake artist, bump the round counter and start the reveal
    pub(super) fn setup_round<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> GameResult<()> {
        if self.players.is_empty() {
            return Err(GameError::NotEnoughPlayers {
                min: self.config.min_players,
                have: 0,
            });
        }

        let subject = catalog.pick(rng)?.clone();
        let fake_index = rng.random_range(0..self.players.len());
        for (index, player) in self.players.iter_mut().enumerate() {
            player.fake_artist = index == fake_index;
        }

        self.transition(Phase::Preparing)?;
        self.subject = Some(subject);
        self.session.current_round += 1;
        self.reveal = Reveal::default();

        tracing::info!(
            "Round {}/{} set up with {} players",
            self.session.current_round,
            self.config.rounds,
            self.players.len()
        );
        Ok(())
    }

    pub(super) fn reveal_role(&mut self, action: &'static str) -> GameResult<()> {
        if self.reveal.role_visible {
            return Err(GameError::InvalidAction {
                action,
                phase: self.phase,
            });
        }
        self.reveal.role_visible = true;
        Ok(())
    }

    /// Hand the device to the next player, or start drawing after the last one
    pub(super) fn next_player(&mut self, action: &'static str) -> GameResult<()> {
        if !self.reveal.role_visible {
            return Err(GameError::InvalidAction {
                action,
                phase: self.phase,
            });
        }

        if self.is_last_reveal() {
            self.transition(Phase::Playing)?;
            self.reveal = Reveal::default();
        } else {
            self.reveal = Reveal {
                index: self.reveal.index + 1,
                role_visible: false,
            };
        }
        Ok(())
    }

    pub fn is_last_reveal(&self) -> bool {
        self.reveal.index + 1 >= self.players.len()
    }

    /// Player currently holding the device during the reveal
    pub fn revealing_player(&self) -> Option<&Player> {
        if self.phase != Phase::Preparing {
            return None;
        }
        self.players.get(self.reveal.index)
    }

    pub fn role_card(&self, index: usize) -> Option<RoleCard<'_>> {
        let player = self.players.get(index)?;
        let subject = self.subject.as_ref()?;
        Some(if player.fake_artist {
            RoleCard::FakeArtist
        } else {
            RoleCard::RealArtist { subject }
        })
    }
}
