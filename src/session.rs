//! Dashboard session state
//!
//! Wallet connection, the "Listed" toggle, and the socials modal are kept as
//! one explicit state value mutated through [`SessionEvent`]s.

use tracing::{info, warn};

use crate::domain::{LeaderboardPeriod, SocialLink, SocialsDraft, WalletAddress};
use crate::error::{BoardError, Result};
use crate::leaderboard::Leaderboard;
use crate::provider::{ConnectOpts, WalletProvider, PROVIDER_INSTALL_URL};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletStatus {
    /// Silent reconnect has not finished yet
    #[default]
    Checking,
    Disconnected,
    Connected(WalletAddress),
}

impl WalletStatus {
    pub fn address(&self) -> Option<&WalletAddress> {
        match self {
            WalletStatus::Connected(addr) => Some(addr),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, WalletStatus::Connected(_))
    }
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    Connected(WalletAddress),
    Disconnected,
    ToggleListed(bool),
    OpenSocials,
    CloseSocials,
    SubmitSocials(Vec<SocialLink>),
    SelectPeriod(LeaderboardPeriod),
}

#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    pub wallet: WalletStatus,
    pub is_listed: bool,
    pub user_socials: Vec<SocialLink>,
    /// Open socials modal, if any
    pub socials_modal: Option<SocialsDraft>,
    pub period: LeaderboardPeriod,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period(mut self, period: LeaderboardPeriod) -> Self {
        self.period = period;
        self
    }

    pub fn is_initial_check_complete(&self) -> bool {
        self.wallet != WalletStatus::Checking
    }

    /// Finish the startup check with the silently reconnected wallet, if any
    pub fn complete_initial_check(&mut self, wallet: Option<WalletAddress>) {
        self.wallet = match wallet {
            Some(addr) => {
                info!(wallet = %addr, "wallet reconnected");
                WalletStatus::Connected(addr)
            }
            None => WalletStatus::Disconnected,
        };
    }

    /// Label of the header's primary button
    pub fn primary_action_label(&self) -> &'static str {
        match &self.wallet {
            WalletStatus::Checking => "Loading...",
            WalletStatus::Disconnected => "Connect Wallet",
            WalletStatus::Connected(_) if self.user_socials.is_empty() => "Add Socials",
            WalletStatus::Connected(_) => "Edit Socials",
        }
    }

    pub fn listed_label(&self) -> &'static str {
        if self.is_listed {
            "Listed"
        } else {
            "Not Listed"
        }
    }

    /// Apply an event, writing to the leaderboard where the event requires it
    pub fn handle(&mut self, event: SessionEvent, board: &mut Leaderboard) -> Result<()> {
        match event {
            SessionEvent::Connected(addr) => {
                if let Some(previous) = self.wallet.address() {
                    if *previous != addr {
                        info!(from = %previous, to = %addr, "wallet account switched");
                        board.remove_user_data(previous);
                    }
                }
                info!(wallet = %addr, "wallet connected");
                // listed flag follows the board entry of the new wallet
                self.is_listed = board
                    .find(addr.as_str())
                    .is_some_and(|t| t.listed_user);
                self.wallet = WalletStatus::Connected(addr);
            }
            SessionEvent::Disconnected => {
                if let Some(addr) = self.wallet.address() {
                    info!(wallet = %addr, "wallet disconnected");
                    board.remove_user_data(addr);
                }
                self.wallet = WalletStatus::Disconnected;
                self.is_listed = false;
            }
            SessionEvent::ToggleListed(listed) => {
                let addr = self
                    .wallet
                    .address()
                    .cloned()
                    .ok_or(BoardError::WalletNotConnected)?;
                self.is_listed = listed;
                if listed {
                    board.add_user_data(&addr, &self.user_socials);
                } else {
                    board.remove_user_data(&addr);
                }
            }
            SessionEvent::OpenSocials => {
                self.socials_modal = Some(SocialsDraft::new(&self.user_socials));
            }
            SessionEvent::CloseSocials => {
                self.socials_modal = None;
            }
            SessionEvent::SubmitSocials(socials) => {
                self.user_socials = socials;
                self.socials_modal = None;
                match self.wallet.address() {
                    Some(addr) if self.is_listed => {
                        board.add_user_data(addr, &self.user_socials);
                    }
                    Some(_) => {}
                    None => {
                        warn!("socials saved locally, wallet not connected");
                    }
                }
            }
            SessionEvent::SelectPeriod(period) => {
                self.period = period;
            }
        }
        Ok(())
    }

    /// Silent reconnect at startup. Provider errors just mean "not connected".
    pub async fn initial_check(&mut self, provider: Option<&dyn WalletProvider>) {
        let wallet = match provider {
            Some(p) => p.connect(ConnectOpts::trusted_only()).await.ok(),
            None => None,
        };
        self.complete_initial_check(wallet);
    }

    /// Interactive connect. On failure the session is left unchanged.
    pub async fn connect_wallet(
        &mut self,
        provider: Option<&dyn WalletProvider>,
        board: &mut Leaderboard,
    ) -> Result<WalletAddress> {
        let Some(provider) = provider else {
            return Err(BoardError::WalletProviderMissing {
                install_url: PROVIDER_INSTALL_URL.to_string(),
            });
        };

        let addr = provider.connect(ConnectOpts::default()).await.map_err(|e| {
            warn!(error = %e, "wallet connection failed");
            match e {
                BoardError::Wallet(_) => e,
                other => BoardError::Wallet(other.to_string()),
            }
        })?;

        self.handle(SessionEvent::Connected(addr.clone()), board)?;
        Ok(addr)
    }

    pub async fn disconnect_wallet(
        &mut self,
        provider: &dyn WalletProvider,
        board: &mut Leaderboard,
    ) -> Result<()> {
        provider.disconnect().await?;
        self.handle(SessionEvent::Disconnected, board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockWalletProvider;

    fn addr() -> WalletAddress {
        WalletAddress::parse("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap()
    }

    fn connected() -> DashboardSession {
        let mut session = DashboardSession::new();
        session.complete_initial_check(Some(addr()));
        session
    }

    #[test]
    fn test_initial_labels() {
        let mut session = DashboardSession::new();
        assert!(!session.is_initial_check_complete());
        assert_eq!(session.primary_action_label(), "Loading...");

        session.complete_initial_check(None);
        assert!(session.is_initial_check_complete());
        assert_eq!(session.primary_action_label(), "Connect Wallet");
    }

    #[test]
    fn test_toggle_listed_requires_wallet() {
        let mut session = DashboardSession::new();
        session.complete_initial_check(None);
        let mut board = Leaderboard::demo();
        let err = session
            .handle(SessionEvent::ToggleListed(true), &mut board)
            .unwrap_err();
        assert!(matches!(err, BoardError::WalletNotConnected));
        assert!(!session.is_listed);
    }

    #[test]
    fn test_toggle_listed_adds_and_removes() {
        let mut session = connected();
        let mut board = Leaderboard::demo();
        let before = board.len();

        session.handle(SessionEvent::ToggleListed(true), &mut board).unwrap();
        assert!(session.is_listed);
        assert_eq!(session.listed_label(), "Listed");
        assert_eq!(board.len(), before + 1);

        session.handle(SessionEvent::ToggleListed(false), &mut board).unwrap();
        assert_eq!(session.listed_label(), "Not Listed");
        assert_eq!(board.len(), before);
    }

    #[test]
    fn test_submit_socials_updates_listed_entry() {
        let mut session = connected();
        let mut board = Leaderboard::demo();
        session.handle(SessionEvent::ToggleListed(true), &mut board).unwrap();

        session.handle(SessionEvent::OpenSocials, &mut board).unwrap();
        assert!(session.socials_modal.is_some());

        let socials = vec!["twitter:@me".parse().unwrap()];
        session
            .handle(SessionEvent::SubmitSocials(socials), &mut board)
            .unwrap();
        assert!(session.socials_modal.is_none());
        assert_eq!(session.primary_action_label(), "Edit Socials");
        assert_eq!(board.find(addr().as_str()).unwrap().socials.len(), 1);
    }

    #[test]
    fn test_submit_socials_unlisted_does_not_write_board() {
        let mut session = connected();
        let mut board = Leaderboard::demo();
        let before = board.len();
        session
            .handle(SessionEvent::SubmitSocials(vec!["github:me".parse().unwrap()]), &mut board)
            .unwrap();
        assert_eq!(session.user_socials.len(), 1);
        assert_eq!(board.len(), before);
    }

    #[test]
    fn test_disconnect_clears_listed() {
        let mut session = connected();
        let mut board = Leaderboard::demo();
        let before = board.len();
        session.handle(SessionEvent::ToggleListed(true), &mut board).unwrap();
        session.handle(SessionEvent::Disconnected, &mut board).unwrap();
        assert_eq!(session.wallet, WalletStatus::Disconnected);
        assert!(!session.is_listed);
        assert_eq!(session.listed_label(), "Not Listed");
        assert!(board.find(addr().as_str()).is_none());
        assert_eq!(board.len(), before);

        // reconnecting starts unlisted, matching the board
        session.handle(SessionEvent::Connected(addr()), &mut board).unwrap();
        assert!(!session.is_listed);
        assert!(board.find(addr().as_str()).is_none());
    }

    #[test]
    fn test_account_switch_unlists_previous_wallet() {
        let other = WalletAddress::parse("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").unwrap();
        let mut session = connected();
        let mut board = Leaderboard::demo();
        let before = board.len();
        session.handle(SessionEvent::ToggleListed(true), &mut board).unwrap();

        session.handle(SessionEvent::Connected(other.clone()), &mut board).unwrap();
        assert_eq!(session.wallet.address(), Some(&other));
        assert!(!session.is_listed);
        assert!(board.find(addr().as_str()).is_none());
        assert!(board.find(other.as_str()).is_none());
        assert_eq!(board.len(), before);

        // listing again goes under the new address
        session.handle(SessionEvent::ToggleListed(true), &mut board).unwrap();
        assert!(board.find(other.as_str()).unwrap().listed_user);
    }

    #[test]
    fn test_reconnect_same_wallet_keeps_listing() {
        let mut session = connected();
        let mut board = Leaderboard::demo();
        session.handle(SessionEvent::ToggleListed(true), &mut board).unwrap();
        session.handle(SessionEvent::Connected(addr()), &mut board).unwrap();
        assert!(session.is_listed);
        assert!(board.find(addr().as_str()).is_some());
    }

    #[tokio::test]
    async fn test_connect_without_provider() {
        let mut session = DashboardSession::new();
        session.complete_initial_check(None);
        let mut board = Leaderboard::demo();
        let err = session.connect_wallet(None, &mut board).await.unwrap_err();
        assert!(matches!(err, BoardError::WalletProviderMissing { .. }));
        assert_eq!(session.wallet, WalletStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_connect_failure_leaves_session_unchanged() {
        let mut provider = MockWalletProvider::new();
        provider
            .expect_connect()
            .returning(|_| Err(BoardError::Wallet("user rejected".to_string())));

        let mut session = DashboardSession::new();
        session.complete_initial_check(None);
        let mut board = Leaderboard::demo();
        let err = session
            .connect_wallet(Some(&provider), &mut board)
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::Wallet(_)));
        assert_eq!(session.wallet, WalletStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_connect_success() {
        let mut provider = MockWalletProvider::new();
        provider
            .expect_connect()
            .withf(|opts| !opts.only_if_trusted)
            .returning(|_| Ok(addr()));

        let mut session = DashboardSession::new();
        let mut board = Leaderboard::demo();
        let wallet = session
            .connect_wallet(Some(&provider), &mut board)
            .await
            .unwrap();
        assert_eq!(wallet, addr());
        assert_eq!(session.primary_action_label(), "Add Socials");
    }

    #[tokio::test]
    async fn test_initial_check_ignores_errors() {
        let mut provider = MockWalletProvider::new();
        provider
            .expect_connect()
            .withf(|opts| opts.only_if_trusted)
            .returning(|_| Err(BoardError::Wallet("not trusted".to_string())));

        let mut session = DashboardSession::new();
        session.initial_check(Some(&provider)).await;
        assert_eq!(session.wallet, WalletStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_disconnect_wallet_calls_provider() {
        let mut provider = MockWalletProvider::new();
        provider.expect_disconnect().times(1).returning(|| Ok(()));

        let mut session = connected();
        let mut board = Leaderboard::demo();
        session.disconnect_wallet(&provider, &mut board).await.unwrap();
        assert!(!session.wallet.is_connected());
    }
}
