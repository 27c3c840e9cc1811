use thiserror::Error;

/// Main error type for the leaderboard dashboard
#[derive(Error, Debug)]
pub enum BoardError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    // Ratio input errors
    #[error("Invalid ratio input: {0}")]
    InvalidRatioInput(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid wallet address: {0}")]
    InvalidWallet(String),

    #[error("Invalid social link: {0}")]
    InvalidSocial(String),

    // Wallet session errors
    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("No wallet provider found, install one from {install_url}")]
    WalletProviderMissing { install_url: String },

    #[error("Wallet error: {0}")]
    Wallet(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for BoardError
pub type Result<T> = std::result::Result<T, BoardError>;
