//! Trader profile page model
//!
//! Coin table sorting, market tabs, holdings and per-token PnL breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::data;
use crate::domain::TradeRatio;
use crate::error::{BoardError, Result};

/// Default number of coin rows shown
pub const DEFAULT_SHOW_COUNT: usize = 20;

/// A row in the coins table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinRow {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
    /// 24h change in percent
    pub change_24h: Decimal,
    pub high_24h: Decimal,
    pub low_24h: Decimal,
    #[serde(default)]
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedCoin {
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
    pub change: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    pub amount: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeKind {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeKind::Buy => f.write_str("Buy"),
            TradeKind::Sell => f.write_str("Sell"),
            TradeKind::Hold => f.write_str("Hold"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefiTrade {
    pub kind: TradeKind,
    pub amount: String,
    pub token: String,
    pub price: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTrade {
    pub kind: TradeKind,
    pub amount: String,
    /// Age for buys/sells, current value for holds
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPnl {
    pub token: String,
    pub icon: String,
    pub pnl: String,
    pub trades: Vec<TokenTrade>,
}

impl TokenPnl {
    pub fn is_gain(&self) -> bool {
        self.pnl.starts_with('+')
    }
}

/// Sortable columns of the coins table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Price,
    Change24h,
}

impl FromStr for SortColumn {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(SortColumn::Price),
            "change24h" | "change_24h" | "change" => Ok(SortColumn::Change24h),
            other => Err(BoardError::Validation(format!("unknown sort column: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flip(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort of the coins table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoinSort {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl CoinSort {
    /// Clicking the active column flips direction, a new column starts descending
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.flip();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Desc;
        }
    }

    pub fn apply(&self, coins: &mut [CoinRow]) {
        let Some(column) = self.column else {
            return;
        };
        coins.sort_by(|a, b| {
            let ord = match column {
                SortColumn::Price => a.price.cmp(&b.price),
                SortColumn::Change24h => a.change_24h.cmp(&b.change_24h),
            };
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}

/// Market filter tabs above the coins table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketTab {
    #[default]
    TopGainers,
    TopLoser,
    NewInMarket,
    TopInTrading,
    TopInVolume,
}

impl MarketTab {
    pub const ALL: [MarketTab; 5] = [
        MarketTab::TopGainers,
        MarketTab::TopLoser,
        MarketTab::NewInMarket,
        MarketTab::TopInTrading,
        MarketTab::TopInVolume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketTab::TopGainers => "top-gainers",
            MarketTab::TopLoser => "top-loser",
            MarketTab::NewInMarket => "new-in-market",
            MarketTab::TopInTrading => "top-in-trading",
            MarketTab::TopInVolume => "top-in-volume",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketTab::TopGainers => "Top Gainers",
            MarketTab::TopLoser => "Top Loser",
            MarketTab::NewInMarket => "New in Market",
            MarketTab::TopInTrading => "Top in Trading",
            MarketTab::TopInVolume => "Top in Volume",
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Gainers and losers are filtered by sign and ordered by change;
    /// the remaining tabs have no extra data in the demo set and pass through.
    pub fn filter(&self, coins: &[CoinRow]) -> Vec<CoinRow> {
        match self {
            MarketTab::TopGainers => {
                let mut out: Vec<CoinRow> = coins
                    .iter()
                    .filter(|c| c.change_24h >= Decimal::ZERO)
                    .cloned()
                    .collect();
                out.sort_by(|a, b| b.change_24h.cmp(&a.change_24h));
                out
            }
            MarketTab::TopLoser => {
                let mut out: Vec<CoinRow> = coins
                    .iter()
                    .filter(|c| c.change_24h < Decimal::ZERO)
                    .cloned()
                    .collect();
                out.sort_by(|a, b| a.change_24h.cmp(&b.change_24h));
                out
            }
            _ => coins.to_vec(),
        }
    }
}

impl FromStr for MarketTab {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| BoardError::Validation(format!("unknown market tab: {s}")))
    }
}

/// Headline trade stats of the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub green_trades: u64,
    pub red_trades: u64,
    pub pnl_sol: Decimal,
    pub pnl_usd: Decimal,
}

impl ProfileSummary {
    pub fn trade_ratio(&self) -> TradeRatio {
        TradeRatio::from_counts(self.green_trades, self.red_trades)
    }

    /// e.g. `946/232 +5,066.60 Sol ($993,206.70)`
    pub fn headline(&self) -> String {
        let sign = if self.pnl_sol >= Decimal::ZERO { "+" } else { "-" };
        format!(
            "{}/{} {}{} Sol ({})",
            self.green_trades,
            self.red_trades,
            sign,
            format_grouped(self.pnl_sol.abs(), 2),
            format_price(self.pnl_usd)
        )
    }
}

/// Full state of the profile page
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub sort: CoinSort,
    pub tab: MarketTab,
    pub show_count: usize,
    pub summary: ProfileSummary,
    pub featured: Vec<FeaturedCoin>,
    pub coins: Vec<CoinRow>,
    pub holdings: Vec<Holding>,
    pub trades: Vec<DefiTrade>,
    pub token_pnl: Vec<TokenPnl>,
}

impl ProfilePage {
    /// Profile populated with the demo data set
    pub fn demo() -> Self {
        Self {
            sort: CoinSort::default(),
            tab: MarketTab::default(),
            show_count: DEFAULT_SHOW_COUNT,
            summary: data::demo_profile_summary(),
            featured: data::demo_featured_coins(),
            coins: data::demo_coins(),
            holdings: data::demo_holdings(),
            trades: data::demo_defi_trades(),
            token_pnl: data::demo_token_pnl(),
        }
    }

    pub fn with_show_count(mut self, show_count: usize) -> Self {
        self.show_count = show_count;
        self
    }

    /// Coins after tab filter, user sort, and row limit
    pub fn visible_coins(&self) -> Vec<CoinRow> {
        let mut coins = self.tab.filter(&self.coins);
        self.sort.apply(&mut coins);
        coins.truncate(self.show_count);
        coins
    }

    pub fn toggle_favorite(&mut self, coin_id: &str) -> bool {
        match self.coins.iter_mut().find(|c| c.id == coin_id) {
            Some(coin) => {
                coin.favorite = !coin.favorite;
                true
            }
            None => false,
        }
    }
}

/// Format a USD price: 4 decimals below $1, otherwise 2, with thousands separators
pub fn format_price(price: Decimal) -> String {
    let dp = if price.abs() < Decimal::ONE { 4 } else { 2 };
    let sign = if price < Decimal::ZERO { "-" } else { "" };
    format!("{}${}", sign, format_grouped(price.abs(), dp))
}

/// Format a signed percent change, e.g. `+7.05%`
pub fn format_change(change: Decimal) -> String {
    match change.cmp(&Decimal::ZERO) {
        Ordering::Less => format!("{:.2}%", change),
        _ => format!("+{:.2}%", change),
    }
}

/// Format a decimal with commas and fixed decimal places
pub fn format_grouped(value: Decimal, dp: u32) -> String {
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    let rounded = value.abs().round_dp(dp);
    let text = format!("{:.*}", dp as usize, rounded);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text.clone(), None),
    };

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, c);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn coin(id: &str, price: Decimal, change: Decimal) -> CoinRow {
        CoinRow {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_uppercase(),
            price,
            change_24h: change,
            high_24h: price,
            low_24h: price,
            favorite: false,
        }
    }

    #[test]
    fn test_sort_toggle() {
        let mut sort = CoinSort::default();
        assert_eq!(sort.column, None);

        sort.toggle(SortColumn::Price);
        assert_eq!(sort.column, Some(SortColumn::Price));
        assert_eq!(sort.direction, SortDirection::Desc);

        sort.toggle(SortColumn::Price);
        assert_eq!(sort.direction, SortDirection::Asc);

        sort.toggle(SortColumn::Change24h);
        assert_eq!(sort.column, Some(SortColumn::Change24h));
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_apply() {
        let mut coins = vec![
            coin("a", dec!(2), dec!(1)),
            coin("b", dec!(3), dec!(-1)),
            coin("c", dec!(1), dec!(5)),
        ];
        let mut sort = CoinSort::default();
        sort.apply(&mut coins);
        assert_eq!(coins[0].id, "a");

        sort.toggle(SortColumn::Price);
        sort.apply(&mut coins);
        let ids: Vec<_> = coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);

        sort.toggle(SortColumn::Change24h);
        sort.toggle(SortColumn::Change24h);
        sort.apply(&mut coins);
        let ids: Vec<_> = coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn test_tab_filter() {
        let coins = vec![
            coin("a", dec!(2), dec!(1)),
            coin("b", dec!(3), dec!(-1)),
            coin("c", dec!(1), dec!(5)),
            coin("d", dec!(1), dec!(-4)),
        ];
        let gainers: Vec<_> = MarketTab::TopGainers.filter(&coins).into_iter().map(|c| c.id).collect();
        assert_eq!(gainers, ["c", "a"]);
        let losers: Vec<_> = MarketTab::TopLoser.filter(&coins).into_iter().map(|c| c.id).collect();
        assert_eq!(losers, ["d", "b"]);
        assert_eq!(MarketTab::TopInVolume.filter(&coins).len(), 4);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(43975.72)), "$43,975.72");
        assert_eq!(format_price(dec!(0.123456)), "$0.1235");
        assert_eq!(format_price(dec!(1)), "$1.00");
        assert_eq!(format_price(dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(dec!(7.05)), "+7.05%");
        assert_eq!(format_change(dec!(-2.78)), "-2.78%");
    }

    #[test]
    fn test_format_grouped_negative() {
        assert_eq!(format_grouped(dec!(-123), 2), "-123.00");
        assert_eq!(format_grouped(dec!(-1234567.891), 2), "-1,234,567.89");
        assert_eq!(format_grouped(dec!(999), 0), "999");
    }

    #[test]
    fn test_summary_headline() {
        let summary = ProfileSummary {
            green_trades: 946,
            red_trades: 232,
            pnl_sol: dec!(5066.6),
            pnl_usd: dec!(993206.7),
        };
        assert_eq!(summary.headline(), "946/232 +5,066.60 Sol ($993,206.70)");
        let ratio = summary.trade_ratio();
        assert!((ratio.green_percentage + ratio.red_percentage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_visible_coins_respects_count() {
        let page = ProfilePage::demo().with_show_count(1);
        assert_eq!(page.visible_coins().len(), 1);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("top-loser".parse::<MarketTab>().unwrap(), MarketTab::TopLoser);
        assert!("hot".parse::<MarketTab>().is_err());
        assert_eq!(MarketTab::TopInVolume.next(), MarketTab::TopGainers);
    }
}
