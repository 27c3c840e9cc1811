use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ratio::TradeRatio;
use crate::domain::social::SocialLink;
use crate::domain::wallet::short_address;
use crate::error::{BoardError, Result};

/// A trader row on the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    /// 1-based rank, assigned by the leaderboard
    pub rank: u32,
    pub name: String,
    pub wallet_address: String,
    /// Realized PnL in SOL
    pub pnl: Decimal,
    /// USD value of the realized PnL
    pub value: Decimal,
    pub green_trades: u64,
    pub red_trades: u64,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Entry added through the "Listed" toggle rather than demo data
    #[serde(default)]
    pub listed_user: bool,
}

impl Trader {
    pub fn new(
        name: &str,
        wallet_address: &str,
        pnl: Decimal,
        value: Decimal,
        green_trades: u64,
        red_trades: u64,
    ) -> Self {
        Self {
            rank: 0,
            name: name.to_string(),
            wallet_address: wallet_address.to_string(),
            pnl,
            value,
            green_trades,
            red_trades,
            socials: Vec::new(),
            listed_user: false,
        }
    }

    pub fn trade_ratio(&self) -> TradeRatio {
        TradeRatio::from_counts(self.green_trades, self.red_trades)
    }

    pub fn total_trades(&self) -> u64 {
        self.green_trades.saturating_add(self.red_trades)
    }

    pub fn short_address(&self) -> String {
        short_address(&self.wallet_address)
    }
}

/// Position of a card on the top-three podium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PodiumSlot {
    Left,
    Center,
    Right,
}

impl PodiumSlot {
    /// Display order, left to right
    pub const ORDER: [PodiumSlot; 3] = [PodiumSlot::Left, PodiumSlot::Center, PodiumSlot::Right];

    /// Slot for a podium rank (1 = center)
    pub fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(PodiumSlot::Center),
            2 => Some(PodiumSlot::Left),
            3 => Some(PodiumSlot::Right),
            _ => None,
        }
    }

    pub fn rank(&self) -> u32 {
        match self {
            PodiumSlot::Center => 1,
            PodiumSlot::Left => 2,
            PodiumSlot::Right => 3,
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            PodiumSlot::Center => Badge::Gold,
            PodiumSlot::Left => Badge::Silver,
            PodiumSlot::Right => Badge::Bronze,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    Gold,
    Silver,
    Bronze,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::Gold => "gold",
            Badge::Silver => "silver",
            Badge::Bronze => "bronze",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaderboard time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl LeaderboardPeriod {
    pub const ALL: [LeaderboardPeriod; 3] = [
        LeaderboardPeriod::Daily,
        LeaderboardPeriod::Weekly,
        LeaderboardPeriod::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardPeriod::Daily => "daily",
            LeaderboardPeriod::Weekly => "weekly",
            LeaderboardPeriod::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaderboardPeriod::Daily => "Daily",
            LeaderboardPeriod::Weekly => "Weekly",
            LeaderboardPeriod::Monthly => "Monthly",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            LeaderboardPeriod::Daily => LeaderboardPeriod::Weekly,
            LeaderboardPeriod::Weekly => LeaderboardPeriod::Monthly,
            LeaderboardPeriod::Monthly => LeaderboardPeriod::Daily,
        }
    }

    /// Multiplier applied to daily demo figures
    pub fn scale(&self) -> Decimal {
        match self {
            LeaderboardPeriod::Daily => Decimal::ONE,
            LeaderboardPeriod::Weekly => Decimal::from(4),
            LeaderboardPeriod::Monthly => Decimal::from(13),
        }
    }
}

impl fmt::Display for LeaderboardPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardPeriod {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(LeaderboardPeriod::Daily),
            "weekly" => Ok(LeaderboardPeriod::Weekly),
            "monthly" => Ok(LeaderboardPeriod::Monthly),
            other => Err(BoardError::Validation(format!("unknown period: {other}"))),
        }
    }
}
