use crate::catalog::Catalog;
use crate::error::{GameError, GameResult};
use crate::types::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A user action on the shared screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddPlayer,
    RenamePlayer { index: usize, name: String },
    RemovePlayer { index: usize },
    StartGame,
    RevealRole,
    NextPlayer,
    FinishDrawing,
    Vote { identified: bool },
    Guess { correct: bool },
    NextRound,
    NewGame,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddPlayer => "add a player",
            Action::RenamePlayer { .. } => "rename a player",
            Action::RemovePlayer { .. } => "remove a player",
            Action::StartGame => "start the game",
            Action::RevealRole => "reveal a role",
            Action::NextPlayer => "move to the next player",
            Action::FinishDrawing => "finish drawing",
            Action::Vote { .. } => "vote",
            Action::Guess { .. } => "guess",
            Action::NextRound => "start the next round",
            Action::NewGame => "start a new game",
        }
    }

    /// Phase in which the action is accepted
    fn phase(&self) -> Phase {
        match self {
            Action::AddPlayer
            | Action::RenamePlayer { .. }
            | Action::RemovePlayer { .. }
            | Action::StartGame => Phase::Waiting,
            Action::RevealRole | Action::NextPlayer => Phase::Preparing,
            Action::FinishDrawing => Phase::Playing,
            Action::Vote { .. } => Phase::Voting,
            Action::Guess { .. } => Phase::Guessing,
            Action::NextRound => Phase::Summary,
            Action::NewGame => Phase::Finished,
        }
    }
}

/// The whole game: roster, round bookkeeping and the active screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub id: GameId,
    pub version: u64,
    pub phase: Phase,
    pub players: Vec<Player>,
    pub subject: Option<Subject>,
    pub session: Session,
    pub reveal: Reveal,
    pub config: GameConfig,
}

impl GameState {
    /// Fresh game in the waiting phase with `initial_players` unnamed slots
    pub fn new(config: GameConfig) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            version: 1,
            phase: Phase::Waiting,
            players: vec![Player::default(); config.initial_players],
            subject: None,
            session: Session::default(),
            reveal: Reveal::default(),
            config,
        }
    }

    /// Check if a phase transition is valid
    pub fn is_valid_phase_transition(from: Phase, to: Phase) -> bool {
        use Phase::*;

        matches!(
            (from, to),
            (Waiting, Preparing)
                | (Preparing, Playing)
                | (Playing, Voting)
                | (Voting, Guessing)
                | (Voting, Summary)
                | (Voting, Finished)
                | (Guessing, Summary)
                | (Guessing, Finished)
                | (Summary, Preparing)
                | (Summary, Finished)
                | (Finished, Waiting)
        )
    }

    pub(super) fn transition(&mut self, to: Phase) -> GameResult<()> {
        if !Self::is_valid_phase_transition(self.phase, to) {
            return Err(GameError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        tracing::debug!("Phase {:?} -> {:?}", self.phase, to);
        self.phase = to;
        Ok(())
    }

    /// The round limit has been reached
    pub fn is_last_round(&self) -> bool {
        self.session.current_round >= self.config.rounds
    }

    pub fn fake_artist(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.fake_artist)
    }

    /// Apply an action to a snapshot of this state and return the next state.
    ///
    /// `self` is never modified, so a failed action leaves the caller's state as it was.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        action: Action,
        catalog: &Catalog,
        rng: &mut R,
    ) -> GameResult<GameState> {
        let action_name = action.name();
        if action.phase() != self.phase {
            return Err(GameError::InvalidAction {
                action: action_name,
                phase: self.phase,
            });
        }

        let mut next = self.clone();
        let changed = match action {
            Action::AddPlayer => next.add_player(),
            Action::RenamePlayer { index, name } => {
                next.rename_player(index, name)?;
                true
            }
            Action::RemovePlayer { index } => {
                next.remove_player(index)?;
                true
            }
            Action::StartGame => {
                next.validate_roster()?;
                next.setup_round(catalog, rng)?;
                true
            }
            Action::RevealRole => {
                next.reveal_role(action_name)?;
                true
            }
            Action::NextPlayer => {
                next.next_player(action_name)?;
                true
            }
            Action::FinishDrawing => {
                next.transition(Phase::Voting)?;
                true
            }
            Action::Vote { identified: true } => {
                next.transition(Phase::Guessing)?;
                true
            }
            Action::Vote { identified: false } => {
                next.finish_round(Winner::FakeArtist)?;
                true
            }
            Action::Guess { correct } => {
                let winner = if correct {
                    Winner::FakeArtist
                } else {
                    Winner::RealArtists
                };
                next.finish_round(winner)?;
                true
            }
            Action::NextRound => {
                if next.is_last_round() {
                    next.transition(Phase::Finished)?;
                } else {
                    next.setup_round(catalog, rng)?;
                }
                true
            }
            Action::NewGame => {
                next.reset_for_new_game()?;
                true
            }
        };

        if changed {
            next.version += 1;
        }
        Ok(next)
    }
}
