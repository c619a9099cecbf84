mod game;
mod roster;
mod round;
mod score;

pub use game::{Action, GameState};
pub use round::RoleCard;

use crate::catalog::Catalog;
use crate::error::GameResult;
use crate::protocol::ServerMessage;
use crate::types::GameConfig;
use crate::view::Screen;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex, RwLock};

/// Shared application state: the one game session every open view shows
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<RwLock<GameState>>,
    pub catalog: Arc<Catalog>,
    rng: Arc<Mutex<StdRng>>,
    /// Broadcast channel for pushing fresh screens to all views
    pub broadcast: broadcast::Sender<ServerMessage>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_parts(GameConfig::default(), Catalog::builtin(), StdRng::from_os_rng())
    }

    /// Deterministic state for tests and reproducible sessions
    pub fn with_seed(config: GameConfig, catalog: Catalog, seed: u64) -> Self {
        Self::with_parts(config, catalog, StdRng::seed_from_u64(seed))
    }

    pub fn with_parts(config: GameConfig, catalog: Catalog, rng: StdRng) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            game: Arc::new(RwLock::new(GameState::new(config))),
            catalog: Arc::new(catalog),
            rng: Arc::new(Mutex::new(rng)),
            broadcast: tx,
        }
    }

    /// Current game snapshot
    pub async fn get_game(&self) -> GameState {
        self.game.read().await.clone()
    }

    pub async fn screen(&self) -> Screen {
        Screen::from_state(&*self.game.read().await)
    }

    /// Apply an action and install the resulting state in one step.
    ///
    /// The write lock is held across compute, install and broadcast, so views
    /// only ever see whole transitions and receive screens in version order.
    pub async fn dispatch(&self, action: Action) -> GameResult<GameState> {
        let mut game = self.game.write().await;
        let next = {
            let mut rng = self.rng.lock().await;
            game.apply(action.clone(), &self.catalog, &mut *rng)
        };

        let next = match next {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!("Rejected {:?} in {:?}: {}", action, game.phase, e);
                return Err(e);
            }
        };

        let changed = next.version != game.version;
        *game = next.clone();

        if changed {
            tracing::debug!("Applied {:?}, now at version {}", action, next.version);
            self.broadcast_screen(&next);
        }
        drop(game);
        Ok(next)
    }

    fn broadcast_screen(&self, game: &GameState) {
        // No receivers connected is fine
        let _ = self.broadcast.send(ServerMessage::screen(Screen::from_state(game)));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
