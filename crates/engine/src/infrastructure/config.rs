//! Runner configuration from environment variables.
//!
//! `main` loads a `.env` file first (if present), so every variable here can
//! also live there.

use std::path::PathBuf;

pub const NOTIFICATIONS_PATH_VAR: &str = "RECONBOT_NOTIFICATIONS_PATH";
pub const NAMES_PATH_VAR: &str = "RECONBOT_NAMES_PATH";

const DEFAULT_NOTIFICATIONS_PATH: &str = "notifications.json";
const DEFAULT_NAMES_PATH: &str = "names.json";

/// Where the runner reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// JSON array of notifications as returned by the API.
    pub notifications_path: PathBuf,
    /// JSON name directory, see `JsonNameDirectory`.
    pub names_path: PathBuf,
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            notifications_path: var(NOTIFICATIONS_PATH_VAR, DEFAULT_NOTIFICATIONS_PATH).into(),
            names_path: var(NAMES_PATH_VAR, DEFAULT_NAMES_PATH).into(),
        }
    }
}
