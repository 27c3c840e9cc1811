//! In-memory realized PnL leaderboard
//!
//! Holds demo traders plus any wallets the user chose to list, and produces
//! the podium/ranked-list view for a period.

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, info};

use crate::data;
use crate::domain::{Badge, LeaderboardPeriod, PodiumSlot, SocialLink, Trader, WalletAddress};

/// Number of traders shown as podium cards
pub const PODIUM_SIZE: usize = 3;

/// A podium card
#[derive(Debug, Clone, Serialize)]
pub struct PodiumEntry {
    pub slot: PodiumSlot,
    pub badge: Badge,
    pub trader: Trader,
}

/// What the leaderboard page renders for one period
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardView {
    pub period: LeaderboardPeriod,
    /// Podium cards in Left, Center, Right order
    pub top_traders: Vec<PodiumEntry>,
    /// Everyone from rank 4 down
    pub ranked_traders: Vec<Trader>,
}

impl LeaderboardView {
    /// All traders in rank order
    pub fn all_ranked(&self) -> Vec<&Trader> {
        let mut podium: Vec<&Trader> = self.top_traders.iter().map(|e| &e.trader).collect();
        podium.sort_by_key(|t| t.rank);
        podium.into_iter().chain(self.ranked_traders.iter()).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    /// Always kept in rank order
    traders: Vec<Trader>,
}

impl Leaderboard {
    pub fn new(traders: Vec<Trader>) -> Self {
        let mut board = Self { traders };
        board.rerank();
        board
    }

    /// Leaderboard seeded with the demo traders
    pub fn demo() -> Self {
        Self::new(data::demo_traders())
    }

    pub fn len(&self) -> usize {
        self.traders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traders.is_empty()
    }

    pub fn traders(&self) -> &[Trader] {
        &self.traders
    }

    pub fn find(&self, wallet: &str) -> Option<&Trader> {
        self.traders.iter().find(|t| t.wallet_address == wallet)
    }

    /// List a wallet on the board, or update its socials if already present
    pub fn add_user_data(&mut self, wallet: &WalletAddress, socials: &[SocialLink]) -> &Trader {
        match self
            .traders
            .iter_mut()
            .find(|t| t.wallet_address == wallet.as_str())
        {
            Some(existing) => {
                debug!(wallet = %wallet, socials = socials.len(), "updating listed wallet socials");
                existing.socials = socials.to_vec();
            }
            None => {
                info!(wallet = %wallet, socials = socials.len(), "listing wallet on leaderboard");
                let mut trader = Trader::new(
                    &wallet.short(),
                    wallet.as_str(),
                    Decimal::ZERO,
                    Decimal::ZERO,
                    0,
                    0,
                );
                trader.socials = socials.to_vec();
                trader.listed_user = true;
                self.traders.push(trader);
            }
        }

        self.rerank();
        // rerank never drops entries, so the wallet is present
        let idx = self
            .traders
            .iter()
            .position(|t| t.wallet_address == wallet.as_str())
            .unwrap_or(self.traders.len() - 1);
        &self.traders[idx]
    }

    /// Remove a wallet listed through [`Leaderboard::add_user_data`].
    ///
    /// Demo traders are never removed. Returns whether anything was removed.
    pub fn remove_user_data(&mut self, wallet: &WalletAddress) -> bool {
        let before = self.traders.len();
        self.traders
            .retain(|t| !(t.listed_user && t.wallet_address == wallet.as_str()));
        let removed = self.traders.len() != before;
        if removed {
            info!(wallet = %wallet, "unlisted wallet from leaderboard");
            self.rerank();
        }
        removed
    }

    /// Podium and ranked list for a period
    pub fn view(&self, period: LeaderboardPeriod) -> LeaderboardView {
        let scale = period.scale();
        let scaled: Vec<Trader> = self
            .traders
            .iter()
            .map(|t| {
                let mut t = t.clone();
                t.pnl *= scale;
                t.value *= scale;
                t
            })
            .collect();

        let top_traders = PodiumSlot::ORDER
            .iter()
            .filter_map(|slot| {
                scaled
                    .iter()
                    .find(|t| t.rank == slot.rank())
                    .map(|t| PodiumEntry {
                        slot: *slot,
                        badge: slot.badge(),
                        trader: t.clone(),
                    })
            })
            .collect();

        let ranked_traders = scaled.into_iter().skip(PODIUM_SIZE).collect();

        LeaderboardView {
            period,
            top_traders,
            ranked_traders,
        }
    }

    /// Sort by PnL descending and assign 1-based ranks
    fn rerank(&mut self) {
        self.traders.sort_by(|a, b| match b.pnl.cmp(&a.pnl) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        });
        for (i, trader) in self.traders.iter_mut().enumerate() {
            trader.rank = i as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet() -> WalletAddress {
        WalletAddress::parse("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap()
    }

    #[test]
    fn test_ranks_by_pnl() {
        let board = Leaderboard::new(vec![
            Trader::new("low", "a", dec!(1), dec!(1), 1, 1),
            Trader::new("high", "b", dec!(10), dec!(1), 1, 1),
        ]);
        assert_eq!(board.traders()[0].name, "high");
        assert_eq!(board.traders()[0].rank, 1);
        assert_eq!(board.traders()[1].rank, 2);
    }

    #[test]
    fn test_podium_order() {
        let view = Leaderboard::demo().view(LeaderboardPeriod::Daily);
        let slots: Vec<_> = view.top_traders.iter().map(|e| (e.slot, e.trader.rank)).collect();
        assert_eq!(
            slots,
            vec![(PodiumSlot::Left, 2), (PodiumSlot::Center, 1), (PodiumSlot::Right, 3)]
        );
        assert_eq!(view.top_traders[1].badge, Badge::Gold);
        assert_eq!(view.ranked_traders[0].rank, 4);
        assert_eq!(view.all_ranked().len(), Leaderboard::demo().len());
    }

    #[test]
    fn test_small_board_podium() {
        let board = Leaderboard::new(vec![Trader::new("solo", "a", dec!(1), dec!(1), 0, 0)]);
        let view = board.view(LeaderboardPeriod::Daily);
        assert_eq!(view.top_traders.len(), 1);
        assert_eq!(view.top_traders[0].slot, PodiumSlot::Center);
        assert!(view.ranked_traders.is_empty());
    }

    #[test]
    fn test_period_scaling() {
        let board = Leaderboard::demo();
        let daily = board.view(LeaderboardPeriod::Daily);
        let weekly = board.view(LeaderboardPeriod::Weekly);
        assert_eq!(
            weekly.top_traders[1].trader.pnl,
            daily.top_traders[1].trader.pnl * dec!(4)
        );
        // trade counts are not scaled
        assert_eq!(
            weekly.top_traders[1].trader.green_trades,
            daily.top_traders[1].trader.green_trades
        );
    }

    #[test]
    fn test_add_and_remove_user() {
        let mut board = Leaderboard::demo();
        let before = board.len();
        let socials: Vec<SocialLink> = vec!["twitter:@me".parse().unwrap()];

        let entry = board.add_user_data(&wallet(), &socials);
        assert!(entry.listed_user);
        assert_eq!(entry.name, "7xKX...gAsU");
        assert_eq!(board.len(), before + 1);

        // re-adding updates in place
        board.add_user_data(&wallet(), &[]);
        assert_eq!(board.len(), before + 1);
        assert!(board.find(wallet().as_str()).unwrap().socials.is_empty());

        assert!(board.remove_user_data(&wallet()));
        assert_eq!(board.len(), before);
        assert!(!board.remove_user_data(&wallet()));
    }

    #[test]
    fn test_demo_trader_not_removable() {
        let demo_wallet = WalletAddress::parse("So11111111111111111111111111111111111111112").unwrap();
        let mut board = Leaderboard::new(vec![Trader::new(
            "demo",
            demo_wallet.as_str(),
            dec!(5),
            dec!(5),
            1,
            1,
        )]);
        board.add_user_data(&demo_wallet, &["github:demo".parse::<SocialLink>().unwrap()]);
        assert!(!board.remove_user_data(&demo_wallet));
        assert_eq!(board.len(), 1);
        assert_eq!(board.traders()[0].socials.len(), 1);
    }
}
