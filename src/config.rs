//! Session configuration.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// Where to write the JSON event log, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JsonOutput {
    #[default]
    Off,
    /// Timestamped file in the working directory.
    Auto,
    Path(PathBuf),
}

/// Configuration for a demo run.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    pub json: JsonOutput,

    /// Suppress console lines for combat events
    pub quiet: bool,

    /// `tracing` filter directive used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: None,
            json: JsonOutput::Off,
            quiet: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl ArenaConfig {
    /// The session RNG. Built once and handed to the arena.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Resolve the JSON log path for a run started at `now`.
    pub fn json_path(&self, now: DateTime<Utc>) -> Option<PathBuf> {
        match &self.json {
            JsonOutput::Off => None,
            JsonOutput::Auto => Some(PathBuf::from(format!(
                "arena_log_{}.json",
                now.format("%Y%m%d_%H%M%S")
            ))),
            JsonOutput::Path(path) => Some(path.clone()),
        }
    }
}
