//! TUI Application state management
//!
//! Wraps the leaderboard, the dashboard session, and the profile page.

use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;
use std::sync::Arc;
use tracing::warn;

use crate::config::{AppConfig, DisplayConfig};
use crate::domain::SocialsDraft;
use crate::leaderboard::{Leaderboard, LeaderboardView};
use crate::profile::{ProfilePage, SortColumn};
use crate::provider::WalletProvider;
use crate::session::{DashboardSession, SessionEvent};
use crate::tui::event::{KeyAction, ModalKey};

/// Which page is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Leaderboard,
    Profile,
}

/// Work the event loop has to await
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    ConnectWallet,
    DisconnectWallet,
}

/// TUI Application state
pub struct BoardApp {
    pub board: Leaderboard,
    pub session: DashboardSession,
    pub profile: ProfilePage,
    pub display: DisplayConfig,
    /// Trading platform from settings, shown in the footer
    pub platform: String,
    pub provider: Option<Arc<dyn WalletProvider>>,
    pub view_mode: ViewMode,
    /// Scroll offset for the ranked list
    pub scroll_offset: usize,
    /// Is the app running
    pub running: bool,
    /// Show help overlay
    pub show_help: bool,
    /// Last action result shown in the header
    pub status: Option<String>,
    pub last_update: DateTime<Utc>,
}

impl Default for BoardApp {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl BoardApp {
    /// Create a new app over the demo data set
    pub fn new(config: &AppConfig) -> Self {
        Self {
            board: Leaderboard::demo(),
            session: DashboardSession::new().with_period(config.leaderboard.default_period),
            profile: ProfilePage::demo().with_show_count(config.display.show_count),
            display: config.display.clone(),
            platform: config.settings.platform.clone(),
            provider: None,
            view_mode: ViewMode::default(),
            scroll_offset: 0,
            running: true,
            show_help: false,
            status: None,
            last_update: Utc::now(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Check if app should continue running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Signal the app to quit
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn view(&self) -> LeaderboardView {
        self.board.view(self.session.period)
    }

    pub fn socials_modal(&self) -> Option<&SocialsDraft> {
        self.session.socials_modal.as_ref()
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let rows = match self.view_mode {
            ViewMode::Leaderboard => self.view().ranked_traders.len(),
            ViewMode::Profile => self.profile.visible_coins().len(),
        };
        if self.scroll_offset < rows.saturating_sub(1) {
            self.scroll_offset += 1;
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Leaderboard => ViewMode::Profile,
            ViewMode::Profile => ViewMode::Leaderboard,
        };
        self.scroll_offset = 0;
    }

    pub fn next_period(&mut self) {
        let next = self.session.period.next();
        self.apply(SessionEvent::SelectPeriod(next));
        self.scroll_offset = 0;
    }

    /// Star the coin under the cursor on the profile page
    pub fn toggle_selected_favorite(&mut self) {
        if self.view_mode != ViewMode::Profile {
            return;
        }
        let visible = self.profile.visible_coins();
        if let Some(coin) = visible.get(self.scroll_offset) {
            self.profile.toggle_favorite(&coin.id);
        }
    }

    /// Apply a session event, reporting failures in the status line
    pub fn apply(&mut self, event: SessionEvent) {
        if let Err(e) = self.session.handle(event, &mut self.board) {
            warn!(error = %e, "session event rejected");
            self.status = Some(e.to_string());
        }
        self.last_update = Utc::now();
    }

    /// Handle a key press. Returns async work for the event loop, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppCommand> {
        if self.session.socials_modal.is_some() {
            self.handle_modal_key(ModalKey::from(key));
            return None;
        }

        match KeyAction::from(key) {
            KeyAction::Quit => self.quit(),
            KeyAction::ScrollUp => self.scroll_up(),
            KeyAction::ScrollDown => self.scroll_down(),
            KeyAction::Help => self.toggle_help(),
            KeyAction::NextPeriod => self.next_period(),
            KeyAction::ToggleView => self.toggle_view(),
            KeyAction::ConnectWallet => return Some(AppCommand::ConnectWallet),
            KeyAction::DisconnectWallet => return Some(AppCommand::DisconnectWallet),
            KeyAction::ToggleListed => {
                let listed = !self.session.is_listed;
                self.apply(SessionEvent::ToggleListed(listed));
            }
            KeyAction::EditSocials => {
                if self.session.wallet.is_connected() {
                    self.apply(SessionEvent::OpenSocials);
                } else {
                    self.status = Some("Connect a wallet first".to_string());
                }
            }
            KeyAction::NextMarketTab => {
                self.profile.tab = self.profile.tab.next();
                self.scroll_offset = 0;
            }
            KeyAction::SortByPrice => self.profile.sort.toggle(SortColumn::Price),
            KeyAction::SortByChange => self.profile.sort.toggle(SortColumn::Change24h),
            KeyAction::ToggleFavorite => self.toggle_selected_favorite(),
            KeyAction::None => {}
        }
        None
    }

    fn handle_modal_key(&mut self, key: ModalKey) {
        let Some(draft) = self.session.socials_modal.as_mut() else {
            return;
        };

        match key {
            ModalKey::Close => self.apply(SessionEvent::CloseSocials),
            ModalKey::NextPlatform => draft.select_platform(draft.selected_platform.next()),
            ModalKey::Backspace => {
                draft.link.pop();
            }
            ModalKey::Input(c) => draft.link.push(c),
            ModalKey::AddAnother => {
                if let Err(e) = draft.add_another() {
                    self.status = Some(e.to_string());
                }
            }
            ModalKey::Submit => match draft.submit() {
                Ok(Some(socials)) => {
                    self.apply(SessionEvent::SubmitSocials(socials));
                    self.status = Some("Socials saved".to_string());
                }
                Ok(None) => {}
                Err(e) => self.status = Some(e.to_string()),
            },
            ModalKey::None => {}
        }
    }

    /// Run an [`AppCommand`] against the wallet provider
    pub async fn run_command(&mut self, command: AppCommand) {
        let provider = self.provider.clone();
        let result = match command {
            AppCommand::ConnectWallet => self
                .session
                .connect_wallet(provider.as_deref(), &mut self.board)
                .await
                .map(|addr| format!("Connected {}", addr.short())),
            AppCommand::DisconnectWallet => match provider.as_deref() {
                Some(p) => self
                    .session
                    .disconnect_wallet(p, &mut self.board)
                    .await
                    .map(|_| "Disconnected".to_string()),
                None => Ok("No wallet connected".to_string()),
            },
        };

        self.status = Some(match result {
            Ok(msg) => msg,
            Err(e) => e.to_string(),
        });
        self.last_update = Utc::now();
    }
}
