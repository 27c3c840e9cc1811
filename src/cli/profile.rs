//! `pnl-board profile` - trader profile tables.

use serde::Serialize;
use tabled::Tabled;

use super::output::{self, OutputMode};
use super::ratio::text_bar;
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::profile::{format_change, format_price, CoinRow, ProfilePage};

#[derive(Debug, Serialize, Tabled)]
pub struct CoinTableRow {
    #[tabled(rename = "★")]
    pub favorite: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    #[tabled(rename = "24h")]
    pub change: String,
    pub high: String,
    pub low: String,
}

impl From<&CoinRow> for CoinTableRow {
    fn from(coin: &CoinRow) -> Self {
        Self {
            favorite: if coin.favorite { "★" } else { "" }.to_string(),
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            price: format_price(coin.price),
            change: format_change(coin.change_24h),
            high: format_price(coin.high_24h),
            low: format_price(coin.low_24h),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct HoldingRow {
    token: String,
    amount: String,
    value: String,
}

#[derive(Debug, Serialize, Tabled)]
struct TradeRow {
    side: String,
    amount: String,
    token: String,
    price: String,
    age: String,
}

#[derive(Debug, Serialize)]
struct ProfileOutput<'a> {
    summary: &'a crate::profile::ProfileSummary,
    coins: Vec<CoinRow>,
    holdings: &'a [crate::profile::Holding],
    trades: &'a [crate::profile::DefiTrade],
    token_pnl: &'a [crate::profile::TokenPnl],
}

pub fn run(page: &ProfilePage, display: &DisplayConfig, mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Json {
        return output::print_json(&ProfileOutput {
            summary: &page.summary,
            coins: page.visible_coins(),
            holdings: &page.holdings,
            trades: &page.trades,
            token_pnl: &page.token_pnl,
        });
    }

    output::print_heading("Profile");
    println!(
        "{}  {}",
        page.summary.headline(),
        text_bar(&page.summary.trade_ratio(), display.bar_width)
    );
    println!();

    output::print_heading(&format!("Coins: {}", page.tab.label()));
    let coins: Vec<CoinTableRow> = page.visible_coins().iter().map(CoinTableRow::from).collect();
    output::print_items(&coins, mode)?;
    println!();

    output::print_heading("Top Holdings");
    let holdings: Vec<HoldingRow> = page
        .holdings
        .iter()
        .map(|h| HoldingRow {
            token: format!("{} {}", h.icon, h.name),
            amount: h.amount.clone(),
            value: h.value.clone(),
        })
        .collect();
    output::print_items(&holdings, mode)?;
    println!();

    output::print_heading("DeFi Trades");
    let trades: Vec<TradeRow> = page
        .trades
        .iter()
        .map(|t| TradeRow {
            side: t.kind.to_string(),
            amount: t.amount.clone(),
            token: t.token.clone(),
            price: t.price.clone(),
            age: t.time.clone(),
        })
        .collect();
    output::print_items(&trades, mode)?;
    println!();

    output::print_heading("Token PnL");
    for token in &page.token_pnl {
        println!("{} {}  {}", token.icon, token.token, token.pnl);
        for trade in &token.trades {
            println!("    {:<5} {:<20} {}", trade.kind, trade.amount, trade.detail);
        }
    }
    Ok(())
}
