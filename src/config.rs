//! Game configuration file
//!
//! `game_config.json` is read once at startup:
//!
//! ```json
//! {
//!     "game": {
//!         "title": "Agar.io",
//!         "initial_lives": 3,
//!         "difficulty_levels": ["easy", "medium", "hard"]
//!     }
//! }
//! ```
//!
//! The game cannot run without these values, so every failure here is fatal.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "game_config.json";

/// Errors that can occur while loading the config file
#[derive(Debug)]
pub enum ConfigError {
    /// None of the candidate paths exist
    NotFound(Vec<PathBuf>),
    Io(PathBuf, std::io::Error),
    Parse(serde_json::Error),
    /// Parsed fine but the values can't drive a game
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(paths) => {
                let tried: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(f, "Config file not found (tried: {})", tried.join(", "))
            }
            ConfigError::Io(path, e) => write!(f, "Failed to read {}: {}", path.display(), e),
            ConfigError::Parse(e) => write!(f, "Malformed config: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    game: GameConfig,
}

/// Resolved startup values
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GameConfig {
    pub title: String,
    pub initial_lives: u32,
    /// Ordered, non-empty; the menu cycles through these
    pub difficulty_levels: Vec<String>,
}

impl GameConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(content)?;
        file.game.validate()?;
        Ok(file.game)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_json(&content)
    }

    /// Load from the first candidate path that exists
    pub fn load(candidates: &[PathBuf]) -> Result<(Self, PathBuf), ConfigError> {
        let path = candidates
            .iter()
            .find(|path| path.is_file())
            .ok_or_else(|| ConfigError::NotFound(candidates.to_vec()))?;

        let config = Self::load_from_file(path)?;
        Ok((config, path.clone()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.difficulty_levels.is_empty() {
            return Err(ConfigError::Invalid("difficulty_levels is empty".to_string()));
        }
        if self.difficulty_levels.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Invalid("difficulty_levels contains a blank name".to_string()));
        }
        Ok(())
    }
}

/// Where to look for the config, in order
///
/// 1. An explicit path (first command-line argument)
/// 2. `game_config.json` in the working directory
/// 3. `agar/game_config.json` in the user's config directory
pub fn candidate_paths(explicit: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = explicit {
        paths.push(path);
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("agar").join(CONFIG_FILE_NAME));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "game": {
            "title": "Agar.io",
            "initial_lives": 3,
            "difficulty_levels": ["easy", "medium", "hard"]
        }
    }"#;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("agar-config-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_parse_valid() {
        let config = GameConfig::from_json(VALID).unwrap();
        assert_eq!(config.title, "Agar.io");
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.difficulty_levels, vec!["easy", "medium", "hard"]);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let content = r#"{"game": {"title": "Agar.io", "initial_lives": 3}}"#;
        assert!(matches!(GameConfig::from_json(content), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_negative_lives_rejected() {
        let content = r#"{"game": {"title": "x", "initial_lives": -1, "difficulty_levels": ["easy"]}}"#;
        assert!(matches!(GameConfig::from_json(content), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_difficulties_rejected() {
        let content = r#"{"game": {"title": "x", "initial_lives": 3, "difficulty_levels": []}}"#;
        assert!(matches!(GameConfig::from_json(content), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_blank_difficulty_rejected() {
        let content = r#"{"game": {"title": "x", "initial_lives": 3, "difficulty_levels": ["easy", "  "]}}"#;
        assert!(matches!(GameConfig::from_json(content), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_first_existing_candidate() {
        let missing = temp_path("missing.json");
        let present = temp_path("present.json");
        fs::write(&present, VALID).unwrap();

        let (config, used) = GameConfig::load(&[missing, present.clone()]).unwrap();
        assert_eq!(used, present);
        assert_eq!(config.initial_lives, 3);

        fs::remove_file(&present).unwrap();
    }

    #[test]
    fn test_load_nothing_found() {
        let result = GameConfig::load(&[temp_path("nope.json")]);
        assert!(matches!(result, Err(ConfigError::NotFound(paths)) if paths.len() == 1));
    }

    #[test]
    fn test_explicit_path_comes_first() {
        let paths = candidate_paths(Some(PathBuf::from("custom.json")));
        assert_eq!(paths[0], PathBuf::from("custom.json"));
        assert_eq!(paths[1], PathBuf::from(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_error_converts_to_string() {
        let message: String = ConfigError::Invalid("difficulty_levels is empty".to_string()).into();
        assert_eq!(message, "Invalid config: difficulty_levels is empty");
    }
}
