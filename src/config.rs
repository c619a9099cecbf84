//! Runtime configuration read from the environment

use crate::catalog::Catalog;
use crate::types::GameConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

// 7065 is ascii for "FA"
const DEFAULT_PORT: u16 = 7065;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub game: GameConfig,
    /// JSON catalog replacing the built-in subjects
    pub catalog_path: Option<PathBuf>,
    /// Fixed rng seed for reproducible sessions
    pub seed: Option<u64>,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            game: GameConfig::default(),
            catalog_path: None,
            seed: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Parse an env var, warning and falling back on garbage
fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value {:?} for {}", raw, key);
            None
        }
    }
}

impl AppConfig {
    /// Load config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = parse_env("FAKEARTIST_PORT").unwrap_or(defaults.port);

        let rounds = match parse_env::<u32>("FAKEARTIST_ROUNDS") {
            Some(0) => {
                tracing::warn!("FAKEARTIST_ROUNDS must be at least 1, using default");
                defaults.game.rounds
            }
            Some(rounds) => rounds,
            None => defaults.game.rounds,
        };

        let min_players = parse_env::<usize>("FAKEARTIST_MIN_PLAYERS")
            .unwrap_or(defaults.game.min_players)
            .max(1);

        let mut max_players =
            parse_env::<usize>("FAKEARTIST_MAX_PLAYERS").unwrap_or(defaults.game.max_players);
        if max_players < min_players {
            tracing::warn!(
                "FAKEARTIST_MAX_PLAYERS ({}) is below the minimum ({}), raising it",
                max_players,
                min_players
            );
            max_players = min_players;
        }

        let initial_players = parse_env::<usize>("FAKEARTIST_INITIAL_PLAYERS")
            .unwrap_or(defaults.game.initial_players)
            .clamp(min_players, max_players);

        let catalog_path = std::env::var("FAKEARTIST_CATALOG")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let seed = parse_env("FAKEARTIST_SEED");

        let static_dir = std::env::var("FAKEARTIST_STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let config = Self {
            port,
            game: GameConfig {
                rounds,
                max_players,
                min_players,
                initial_players,
            },
            catalog_path,
            seed,
            static_dir,
        };

        tracing::info!(
            port = config.port,
            rounds = config.game.rounds,
            min_players = config.game.min_players,
            max_players = config.game.max_players,
            seeded = config.seed.is_some(),
            "Config loaded"
        );
        config
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], self.port))
    }

    /// Configured catalog, or the built-in one if none is set or it fails to load
    pub fn load_catalog(&self) -> Catalog {
        let Some(path) = &self.catalog_path else {
            return Catalog::builtin();
        };

        match Catalog::from_json_file(path) {
            Ok(catalog) => {
                tracing::info!("Loaded {} subjects from {}", catalog.len(), path.display());
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load catalog from {}: {}. Using built-in subjects.",
                    path.display(),
                    e
                );
                Catalog::builtin()
            }
        }
    }
}
