use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_THEME;
use crate::utils::{GameError, GameResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub provider: ProviderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before a matched pair is locked in.
    pub match_delay_ms: u64,
    /// Pause before a mismatched pair flips back; longer than the match delay
    /// so players get time to memorize the wrong pair.
    pub mismatch_delay_ms: u64,
    /// Fixed board layout seed; omit for a random board each game.
    pub shuffle_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub style: String,
    pub grid_columns: usize,
    pub text_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub default_theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                match_delay_ms: 500,
                mismatch_delay_ms: 1000,
                shuffle_seed: None,
            },
            ui: UiConfig {
                style: "default".to_string(),
                grid_columns: 4,
                text_width: 80,
            },
            provider: ProviderConfig {
                default_theme: DEFAULT_THEME.to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Create default config file
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| GameError::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| GameError::configuration(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GameError::configuration(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| GameError::configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        if self.game.mismatch_delay_ms < self.game.match_delay_ms {
            return Err(GameError::configuration(
                "Mismatch delay must be at least the match delay",
            ));
        }
        if self.ui.grid_columns == 0 {
            return Err(GameError::configuration("Grid columns must be greater than 0"));
        }
        if self.ui.text_width < 40 {
            return Err(GameError::configuration("Text width must be at least 40"));
        }
        if self.provider.default_theme.trim().is_empty() {
            return Err(GameError::configuration("Default theme cannot be empty"));
        }

        Ok(())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        // An explicit log level beats the debug shorthand
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if let Some(seed) = cli_config.seed {
            self.game.shuffle_seed = Some(seed);
        }
        if let Some(style) = cli_config.style {
            self.ui.style = style;
        }
    }

    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.game.match_delay_ms)
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.game.mismatch_delay_ms)
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub log_level: Option<String>,
    pub debug: bool,
    pub seed: Option<u64>,
    pub style: Option<String>,
}
