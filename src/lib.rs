pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod leaderboard;
pub mod profile;
pub mod provider;
pub mod session;
pub mod tui;
pub mod validation;

pub use config::AppConfig;
pub use domain::{compute_trade_ratio, LeaderboardPeriod, SocialLink, Trader, TradeRatio, WalletAddress};
pub use error::{BoardError, Result};
pub use leaderboard::{Leaderboard, LeaderboardView, PodiumEntry};
pub use profile::ProfilePage;
pub use provider::{DemoWalletProvider, WalletProvider};
pub use session::{DashboardSession, SessionEvent, WalletStatus};
