use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

pub const DATA_DIR_VAR: &str = "CLUB_STATS_DATA_DIR";
pub const CLUB_NAME_VAR: &str = "CLUB_STATS_CLUB_NAME";
pub const COACH_VAR: &str = "CLUB_STATS_COACH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub club_name: String,
    /// Coach assigned to a match when none is given.
    pub current_coach: String,
    /// The league whose matches carry a table position.
    pub top_flight_competition: String,
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            club_name: "Club".to_string(),
            current_coach: "Unknown".to_string(),
            top_flight_competition: "Top-Flight League".to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        let body = std::fs::read_to_string(path)?;
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup; environment variables in production.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(dir) = non_empty(DATA_DIR_VAR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(name) = non_empty(CLUB_NAME_VAR) {
            self.club_name = name;
        }
        if let Some(coach) = non_empty(COACH_VAR) {
            self.current_coach = coach;
        }
        self
    }
}
