//! User configuration: persisted settings for display, sound, players and
//! race defaults
//!
//! The config screens edit the in-memory [`UserConfig`]; the shell decides
//! when to persist it through [`ConfigStore`] (typically on exit, like a
//! save file). Files are pretty-printed JSON so a user can hand-edit them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current config file version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

const CONFIG_FILENAME: &str = "config.json";

/// The root config structure, serialized as one JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    pub version: u32,
    pub display: DisplaySettings,
    pub sound: SoundSettings,
    pub players: Vec<PlayerSettings>,
    pub race: RaceDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSettings {
    pub sfx: bool,
    pub music: bool,
}

/// Per-player profile: display name plus control bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub name: String,
    pub controls: ControlBindings,
}

/// Key names per action; the shell resolves them to scancodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlBindings {
    pub steer_left: String,
    pub steer_right: String,
    pub accelerate: String,
    pub brake: String,
    pub drift: String,
    pub rescue: String,
}

impl ControlBindings {
    /// Arrow-key layout, the default for player one
    pub fn arrows() -> Self {
        ControlBindings {
            steer_left: "Left".to_string(),
            steer_right: "Right".to_string(),
            accelerate: "Up".to_string(),
            brake: "Down".to_string(),
            drift: "RShift".to_string(),
            rescue: "Backspace".to_string(),
        }
    }

    /// WASD layout, the default for a second local player
    pub fn wasd() -> Self {
        ControlBindings {
            steer_left: "A".to_string(),
            steer_right: "D".to_string(),
            accelerate: "W".to_string(),
            brake: "S".to_string(),
            drift: "LShift".to_string(),
            rescue: "Q".to_string(),
        }
    }
}

/// Defaults seeded into a new race session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceDefaults {
    pub num_laps: u32,
}

impl Default for UserConfig {
    fn default() -> Self {
        let players = (1..=crate::race::MAX_PLAYERS)
            .map(|n| PlayerSettings {
                name: format!("Player {}", n),
                controls: if n == 1 {
                    ControlBindings::arrows()
                } else {
                    ControlBindings::wasd()
                },
            })
            .collect();

        UserConfig {
            version: CURRENT_CONFIG_VERSION,
            display: DisplaySettings {
                width: 800,
                height: 600,
                fullscreen: false,
            },
            sound: SoundSettings {
                sfx: true,
                music: true,
            },
            players,
            race: RaceDefaults { num_laps: 3 },
        }
    }
}

/// Error types for config load/save operations
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    /// File was written by a newer build than this one
    InvalidVersion(u32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            ConfigError::InvalidVersion(v) => write!(f, "Invalid config version: {}", v),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err)
    }
}

/// Loads and saves the config file in a given directory
pub struct ConfigStore {
    config_directory: PathBuf,
}

impl ConfigStore {
    /// Creates a store rooted at the given directory, creating it if needed
    pub fn new(config_directory: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = config_directory.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(ConfigStore {
            config_directory: dir,
        })
    }

    /// Platform config directory for this game, if one can be determined
    pub fn default_directory() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rallykart"))
    }

    fn config_path(&self) -> PathBuf {
        self.config_directory.join(CONFIG_FILENAME)
    }

    /// Load the config file
    ///
    /// An outdated (older-version) file is moved aside to a timestamped
    /// backup and reported as not found, so the caller falls back to
    /// defaults without losing the user's old file.
    pub fn load(&self) -> Result<UserConfig, ConfigError> {
        let path = self.config_path();
        if !path.exists() {
            return Err(ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Config file not found: {}", path.display()),
            )));
        }

        let json = fs::read_to_string(&path)?;
        let config: UserConfig = serde_json::from_str(&json)?;

        if config.version > CURRENT_CONFIG_VERSION {
            return Err(ConfigError::InvalidVersion(config.version));
        }
        if config.version < CURRENT_CONFIG_VERSION {
            let backup = self.backup_outdated(&path)?;
            log::warn!(
                "outdated config (version {}) moved to {}",
                config.version,
                backup.display()
            );
            return Err(ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "outdated config file was backed up",
            )));
        }

        Ok(config)
    }

    /// Load the config, falling back to defaults on any failure
    pub fn load_or_default(&self) -> UserConfig {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("using default config: {}", e);
                UserConfig::default()
            }
        }
    }

    /// Write the config file, pretty-printed
    pub fn save(&self, config: &UserConfig) -> Result<PathBuf, ConfigError> {
        let path = self.config_path();
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&path, json)?;
        log::info!("config saved to {}", path.display());
        Ok(path)
    }

    fn backup_outdated(&self, path: &Path) -> Result<PathBuf, ConfigError> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let backup = self
            .config_directory
            .join(format!("config_backup_{}.json", timestamp));
        fs::rename(path, &backup)?;
        Ok(backup)
    }
}
