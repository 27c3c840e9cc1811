//! `pnl-board leaderboard` - podium and ranked list for a period.

use serde::Serialize;
use tabled::Tabled;

use super::output::{self, OutputMode};
use super::ratio::text_bar;
use crate::config::DisplayConfig;
use crate::domain::{LeaderboardPeriod, Trader};
use crate::leaderboard::{Leaderboard, LeaderboardView};
use crate::profile::{format_grouped, format_price};
use crate::error::Result;

#[derive(Debug, Serialize, Tabled)]
pub struct TraderRow {
    #[tabled(rename = "#")]
    pub rank: u32,
    pub badge: String,
    pub name: String,
    pub wallet: String,
    pub pnl: String,
    pub value: String,
    #[tabled(rename = "W/L")]
    pub trades: String,
    pub ratio: String,
}

impl TraderRow {
    pub fn from_trader(trader: &Trader, badge: Option<&str>, display: &DisplayConfig) -> Self {
        Self {
            rank: trader.rank,
            badge: badge.unwrap_or("").to_string(),
            name: trader.name.clone(),
            wallet: trader.short_address(),
            pnl: format!("{} {}", format_grouped(trader.pnl, 2), display.pnl_unit),
            value: format_price(trader.value),
            trades: format!("{}/{}", trader.green_trades, trader.red_trades),
            ratio: text_bar(&trader.trade_ratio(), display.bar_width),
        }
    }
}

/// Table rows in rank order, podium first
pub fn rows(view: &LeaderboardView, display: &DisplayConfig) -> Vec<TraderRow> {
    let mut podium: Vec<_> = view.top_traders.iter().collect();
    podium.sort_by_key(|e| e.trader.rank);

    podium
        .into_iter()
        .map(|e| TraderRow::from_trader(&e.trader, Some(e.badge.as_str()), display))
        .chain(
            view.ranked_traders
                .iter()
                .map(|t| TraderRow::from_trader(t, None, display)),
        )
        .collect()
}

pub fn run(
    board: &Leaderboard,
    period: LeaderboardPeriod,
    display: &DisplayConfig,
    mode: OutputMode,
) -> Result<()> {
    let view = board.view(period);
    match mode {
        OutputMode::Json => output::print_json(&view),
        OutputMode::Table => {
            output::print_heading(&format!("Realized PnL Leaderboard ({})", period.label()));
            output::print_items(&rows(&view, display), mode)
        }
    }
}
