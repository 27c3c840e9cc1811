//! pnl-board CLI
//!
//! Commands:
//! - `pnl-board leaderboard` - Podium and ranked traders
//! - `pnl-board ratio` - Green/red trade split for a count pair
//! - `pnl-board profile` - Trader profile tables
//! - `pnl-board dashboard` - Interactive terminal dashboard
//! - `pnl-board config` - Show effective configuration

pub mod leaderboard;
pub mod output;
pub mod profile;
pub mod ratio;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::{LeaderboardPeriod, WalletAddress};
use crate::error::Result;
use crate::profile::{MarketTab, SortColumn};

/// Realized PnL leaderboard and trader profile dashboard
#[derive(Parser, Debug)]
#[command(name = "pnl-board")]
#[command(author, version, about = "Realized PnL leaderboard and trader profile dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config directory
    #[arg(short, long, global = true, default_value = "config", env = "PNL_BOARD_CONFIG_DIR")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the leaderboard for a period
    Leaderboard {
        /// daily, weekly or monthly (defaults to config)
        #[arg(short, long)]
        period: Option<LeaderboardPeriod>,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compute the green/red percentage split of two trade counts
    #[command(allow_negative_numbers = true)]
    Ratio {
        /// Favorable trade count (negative values count as zero)
        green: f64,
        /// Unfavorable trade count (negative values count as zero)
        red: f64,
        /// Bar width in cells (defaults to config)
        #[arg(short, long)]
        width: Option<u16>,
        #[arg(long)]
        json: bool,
    },

    /// Show the trader profile
    Profile {
        /// Market tab (top-gainers, top-loser, new-in-market, top-in-trading, top-in-volume)
        #[arg(short, long, default_value = "top-gainers")]
        tab: MarketTab,
        /// Sort coins by price or change24h
        #[arg(short, long)]
        sort: Option<SortColumn>,
        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,
        /// Number of coin rows to show (defaults to config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
        #[arg(long)]
        json: bool,
    },

    /// Interactive terminal dashboard
    Dashboard {
        /// Wallet address the demo provider connects with
        #[arg(short, long)]
        wallet: Option<WalletAddress>,
        /// Let the demo wallet reconnect silently on startup
        #[arg(long)]
        trusted: bool,
        /// Run without any wallet provider installed
        #[arg(long, conflicts_with_all = ["wallet", "trusted"])]
        no_provider: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Render the effective configuration
pub fn render_config(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
