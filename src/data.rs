//! Demo data set for the leaderboard and profile views.
//!
//! Figures are static; there is no live price or leaderboard feed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::Trader;
use crate::profile::{
    CoinRow, DefiTrade, FeaturedCoin, Holding, ProfileSummary, TokenPnl, TokenTrade, TradeKind,
};

/// Wallet the dashboard's demo provider connects with by default
pub const DEMO_WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

/// Daily leaderboard traders, unranked
pub fn demo_traders() -> Vec<Trader> {
    vec![
        Trader::new("Cented", "CyaE1VxvBrahnPWkqm5VsdCvyS2QmNht2UFrKJHga54o", dec!(4512.37), dec!(884425.11), 1204, 311),
        Trader::new("Euris", "DfMxre4cKmvogbLrPigxmibVTTQDuzjdXojWzjCXXhzj", dec!(3977.90), dec!(779668.40), 946, 232),
        Trader::new("Cupsey", "suqh5sHtr8HyJ7q8scBimULPkPpA557prMG47xCHQfK", dec!(3120.02), dec!(611523.92), 1530, 802),
        Trader::new("Jijo", "4BdKaxN8G6ka4GYtQQWk4G4dZRUTX2vQH9GcXdBREFUk", dec!(2785.44), dec!(545946.24), 612, 198),
        Trader::new("Orangie", "96sErVjEN7LNJ6Uvj63bdRWZxNuBngj56fnT9biHLKBf", dec!(2410.16), dec!(472391.36), 388, 140),
        Trader::new("Gake", "DNfuF1L62WWyW3pNakVkyGGFzVVhj4Yr52jSmdTyeBHm", dec!(1988.71), dec!(389787.16), 720, 451),
        Trader::new("Loopierr", "9yMwSPk9mrXSN7yDHUuZurAh1sjbJsfpUqjZ7SvVtdco", dec!(1502.05), dec!(294401.80), 233, 97),
        Trader::new("Kev", "BTf4A2exGK9BCVDNzy65b9dUzXgMqB4weVkvTMFQsadd", dec!(1210.88), dec!(237332.48), 150, 150),
        Trader::new("Daumen", "8MaVa9kdt3NW4Q5HyNAm1X5LbR8PQRVDc1W8NMVK88D5", dec!(874.30), dec!(171362.80), 95, 61),
        Trader::new("Heyitsyolo", "Av3xWHJ5EsoLZag6pr7LKbrGgLRTaykXomDD5kBhL9YQ", dec!(455.12), dec!(89203.52), 41, 0),
        Trader::new("Fresh Wallet", "5B52w1ZW9tuwUduueP5J7HXz5AcGfruGoX6YoAudvyxG", dec!(12.50), dec!(2450.00), 0, 0),
    ]
}

pub fn demo_profile_summary() -> ProfileSummary {
    ProfileSummary {
        green_trades: 946,
        red_trades: 232,
        pnl_sol: dec!(5066.60),
        pnl_usd: dec!(993206.7),
    }
}

pub fn demo_featured_coins() -> Vec<FeaturedCoin> {
    [("Ethereum", "ETH"), ("Binance", "BNB"), ("Litecoin", "LTC"), ("Polygon", "MATIC")]
        .into_iter()
        .map(|(name, symbol)| FeaturedCoin {
            name: name.to_string(),
            symbol: symbol.to_string(),
            price: dec!(38.4),
            change: dec!(7.05),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn coin(
    id: &str,
    name: &str,
    symbol: &str,
    price: Decimal,
    change_24h: Decimal,
    high_24h: Decimal,
    low_24h: Decimal,
    favorite: bool,
) -> CoinRow {
    CoinRow {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change_24h,
        high_24h,
        low_24h,
        favorite,
    }
}

pub fn demo_coins() -> Vec<CoinRow> {
    vec![
        coin("bitcoin", "Bitcoin", "BTC", dec!(43975.72), dec!(0.6), dec!(44727.8), dec!(43318.64), true),
        coin("ethereum", "Ethereum", "ETH", dec!(3187.82), dec!(-2.78), dec!(3263.18), dec!(3077.03), false),
        coin("solana", "Solana", "SOL", dec!(196.12), dec!(4.31), dec!(199.40), dec!(184.75), true),
        coin("chainlink", "Chainlink", "LINK", dec!(14.83), dec!(-1.12), dec!(15.20), dec!(14.51), false),
        coin("uniswap", "Uniswap", "UNI", dec!(6.42), dec!(2.05), dec!(6.55), dec!(6.21), false),
        coin("dogecoin", "Dogecoin", "DOGE", dec!(0.0832), dec!(-5.40), dec!(0.0891), dec!(0.0815), false),
        coin("bonk", "Bonk", "BONK", dec!(0.00002134), dec!(12.80), dec!(0.00002210), dec!(0.00001870), false),
    ]
}

pub fn demo_holdings() -> Vec<Holding> {
    [
        ("Sol", "2.03k", "$393,456.6", "☀️"),
        ("USDC", "587k", "$587,419.1", "💰"),
        ("PAIN", "1.29m", "$45,333.1", "😢"),
        ("Nikita", "3m", "$29,987.6", "👤"),
        ("streamer", "24.6m", "$6,662.3", "📺"),
        ("ETH", "45.2", "$78,234.5", "💎"),
        ("BTC", "1.5", "$45,678.9", "🔶"),
        ("LINK", "5.6k", "$32,456.7", "🔗"),
        ("UNI", "12.3k", "$18,765.4", "🦄"),
        ("AAVE", "789", "$87,654.3", "👻"),
    ]
    .into_iter()
    .map(|(name, amount, value, icon)| Holding {
        name: name.to_string(),
        amount: amount.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

pub fn demo_defi_trades() -> Vec<DefiTrade> {
    [
        (TradeKind::Sell, "2.52m", "streamer", "3.83 Sol", "30s"),
        (TradeKind::Sell, "26.8m", "bro", "5.68 Sol", "10m"),
        (TradeKind::Buy, "10.1", "Sol", "23.9m bro", "11m"),
        (TradeKind::Buy, "15.1", "Sol", "27.1m streamer", "12m"),
        (TradeKind::Buy, "1.35", "Sol", "2.93m bro", "13m"),
        (TradeKind::Sell, "5.6k", "LINK", "12.3 ETH", "15m"),
        (TradeKind::Buy, "789", "AAVE", "45.6 ETH", "18m"),
        (TradeKind::Sell, "0.5", "YFI", "18.9 ETH", "22m"),
    ]
    .into_iter()
    .map(|(kind, amount, token, price, time)| DefiTrade {
        kind,
        amount: amount.to_string(),
        token: token.to_string(),
        price: price.to_string(),
        time: time.to_string(),
    })
    .collect()
}

fn token_pnl(token: &str, icon: &str, pnl: &str, trades: [(TradeKind, &str, &str); 3]) -> TokenPnl {
    TokenPnl {
        token: token.to_string(),
        icon: icon.to_string(),
        pnl: pnl.to_string(),
        trades: trades
            .into_iter()
            .map(|(kind, amount, detail)| TokenTrade {
                kind,
                amount: amount.to_string(),
                detail: detail.to_string(),
            })
            .collect(),
    }
}

pub fn demo_token_pnl() -> Vec<TokenPnl> {
    use TradeKind::{Buy, Hold, Sell};

    vec![
        token_pnl("streamer", "📺", "+22.50 Sol ($4,410.8)", [
            (Buy, "35.39 Sol (44.5m)", "32m"),
            (Sell, "23.91 Sol (19.9m)", "30s"),
            (Hold, "33.99 Sol (24.6m)", "$6,662"),
        ]),
        token_pnl("ETH", "💎", "+1.23 ETH ($2,460)", [
            (Buy, "2.5 ETH", "2h"),
            (Sell, "1.27 ETH", "45m"),
            (Hold, "1.23 ETH", "$2,460"),
        ]),
        token_pnl("LINK", "🔗", "-450 LINK ($1,350)", [
            (Buy, "1000 LINK", "1d"),
            (Sell, "550 LINK", "4h"),
            (Hold, "450 LINK", "$1,350"),
        ]),
        token_pnl("UNI", "🦄", "+1.2k UNI ($7,200)", [
            (Buy, "5k UNI", "3d"),
            (Sell, "3.8k UNI", "1d"),
            (Hold, "1.2k UNI", "$7,200"),
        ]),
        token_pnl("SNX", "⚡", "-230 SNX ($1,150)", [
            (Buy, "1000 SNX", "1w"),
            (Sell, "770 SNX", "3d"),
            (Hold, "230 SNX", "$1,150"),
        ]),
    ]
}
