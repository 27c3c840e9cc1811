use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::LeaderboardPeriod;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    #[serde(default)]
    pub settings: UserSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Width in cells of the green/red ratio bar
    #[serde(default = "default_bar_width")]
    pub bar_width: u16,
    /// Suffix shown after PnL amounts
    #[serde(default = "default_pnl_unit")]
    pub pnl_unit: String,
    /// Coin rows shown on the profile page
    #[serde(default = "default_show_count")]
    pub show_count: usize,
    /// Latency figure shown in the footer, in milliseconds
    #[serde(default = "default_performance_ms")]
    pub performance_ms: u64,
}

fn default_bar_width() -> u16 {
    20
}

fn default_pnl_unit() -> String {
    "≋".to_string()
}

fn default_show_count() -> usize {
    20
}

fn default_performance_ms() -> u64 {
    115
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            pnl_unit: default_pnl_unit(),
            show_count: default_show_count(),
            performance_ms: default_performance_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Tab selected on startup
    #[serde(default)]
    pub default_period: LeaderboardPeriod,
}

/// Options from the settings dropdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub dark_theme: bool,
    #[serde(default)]
    pub sounds: bool,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub helius_api_key: Option<String>,
    /// Comma separated list of RPC endpoints
    #[serde(default)]
    pub rpc_urls: String,
}

fn default_platform() -> String {
    "Pump/Dexs".to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            sounds: false,
            platform: default_platform(),
            helius_api_key: None,
            rpc_urls: String::new(),
        }
    }
}

impl UserSettings {
    /// Split the comma separated RPC list, dropping blanks
    pub fn rpc_url_list(&self) -> Vec<String> {
        self.rpc_urls
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("display.bar_width", 20)?
            .set_default("leaderboard.default_period", "daily")?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("PNL_BOARD_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (PNL_BOARD__DISPLAY__BAR_WIDTH, etc.)
            .add_source(
                Environment::with_prefix("PNL_BOARD")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.display.bar_width == 0 {
            errors.push("display.bar_width must be positive".to_string());
        }

        if self.display.show_count == 0 {
            errors.push("display.show_count must be positive".to_string());
        }

        if !matches!(
            self.logging.level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            errors.push(format!("unknown logging.level: {}", self.logging.level));
        }

        for rpc in self.settings.rpc_url_list() {
            if url::Url::parse(&rpc).is_err() {
                errors.push(format!("settings.rpc_urls contains an invalid URL: {rpc}"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
