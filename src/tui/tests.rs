#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use crate::config::AppConfig;
    use crate::domain::{LeaderboardPeriod, SocialPlatform, WalletAddress};
    use crate::profile::{MarketTab, SortColumn, SortDirection};
    use crate::provider::DemoWalletProvider;
    use crate::tui::{ui, AppCommand, BoardApp, ViewMode};

    const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    fn demo_app() -> BoardApp {
        let provider = DemoWalletProvider::new(WalletAddress::parse(WALLET).unwrap(), false);
        BoardApp::new(&AppConfig::default()).with_provider(Arc::new(provider))
    }

    async fn connected_app() -> BoardApp {
        let mut app = demo_app();
        app.session.complete_initial_check(None);
        let command = app.handle_key(key('c'));
        assert_eq!(command, Some(AppCommand::ConnectWallet));
        app.run_command(AppCommand::ConnectWallet).await;
        assert!(app.session.wallet.is_connected());
        app
    }

    fn screen(app: &BoardApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| ui::render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_board_app_new() {
        let app = BoardApp::default();
        assert!(app.is_running());
        assert!(!app.show_help);
        assert_eq!(app.view_mode, ViewMode::Leaderboard);
        assert_eq!(app.session.period, LeaderboardPeriod::Daily);
        assert_eq!(app.view().top_traders.len(), 3);
    }

    #[test]
    fn test_toggle_help() {
        let mut app = BoardApp::default();
        app.handle_key(key('?'));
        assert!(app.show_help);
        app.handle_key(key('?'));
        assert!(!app.show_help);
    }

    #[test]
    fn test_period_cycles_with_tab() {
        let mut app = BoardApp::default();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        app.handle_key(tab);
        assert_eq!(app.session.period, LeaderboardPeriod::Weekly);
        app.handle_key(tab);
        assert_eq!(app.session.period, LeaderboardPeriod::Monthly);
        app.handle_key(tab);
        assert_eq!(app.session.period, LeaderboardPeriod::Daily);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut app = BoardApp::default();
        app.scroll_up();
        assert_eq!(app.scroll_offset, 0);

        let rows = app.view().ranked_traders.len();
        for _ in 0..rows + 5 {
            app.scroll_down();
        }
        assert_eq!(app.scroll_offset, rows - 1);

        app.toggle_view();
        assert_eq!(app.view_mode, ViewMode::Profile);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_listed_toggle_needs_wallet() {
        let mut app = BoardApp::default();
        app.session.complete_initial_check(None);
        app.handle_key(key('l'));
        assert!(!app.session.is_listed);
        assert!(app.status.is_some());

        app.handle_key(key('s'));
        assert!(app.socials_modal().is_none());
    }

    #[test]
    fn test_profile_keys() {
        let mut app = BoardApp::default();
        app.handle_key(key('p'));
        app.handle_key(key('t'));
        assert_eq!(app.profile.tab, MarketTab::TopLoser);

        app.handle_key(key('1'));
        assert_eq!(app.profile.sort.column, Some(SortColumn::Price));
        assert_eq!(app.profile.sort.direction, SortDirection::Desc);
        app.handle_key(key('1'));
        assert_eq!(app.profile.sort.direction, SortDirection::Asc);

        let first = app.profile.visible_coins()[0].clone();
        app.handle_key(key('f'));
        let toggled = app.profile.coins.iter().find(|c| c.id == first.id).unwrap();
        assert_ne!(toggled.favorite, first.favorite);
    }

    #[test]
    fn test_quit() {
        let mut app = BoardApp::default();
        app.handle_key(key('q'));
        assert!(!app.is_running());
    }

    #[tokio::test]
    async fn test_connect_list_and_add_socials() {
        let mut app = connected_app().await;
        let before = app.board.len();

        app.handle_key(key('l'));
        assert!(app.session.is_listed);
        assert_eq!(app.board.len(), before + 1);

        app.handle_key(key('s'));
        assert!(app.socials_modal().is_some());

        // typed keys go to the modal, not the key map
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        for c in "github.com/me".chars() {
            app.handle_key(key(c));
        }
        assert_eq!(app.session.period, LeaderboardPeriod::Daily);
        let draft = app.socials_modal().unwrap();
        assert_eq!(draft.selected_platform, SocialPlatform::Discord);
        assert_eq!(draft.link, "github.com/me");

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.socials_modal().is_none());
        assert_eq!(app.session.user_socials.len(), 1);
        assert_eq!(app.session.primary_action_label(), "Edit Socials");
        assert_eq!(app.board.find(WALLET).unwrap().socials.len(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_clears_session() {
        let mut app = connected_app().await;
        app.handle_key(key('l'));
        let command = app.handle_key(key('d'));
        assert_eq!(command, Some(AppCommand::DisconnectWallet));
        app.run_command(AppCommand::DisconnectWallet).await;
        assert!(!app.session.wallet.is_connected());
        assert!(!app.session.is_listed);
    }

    #[tokio::test]
    async fn test_connect_without_provider_reports_install_url() {
        let mut app = BoardApp::default();
        app.run_command(AppCommand::ConnectWallet).await;
        assert!(app.status.as_deref().unwrap_or_default().contains("phantom.app"));
    }

    #[test]
    fn test_render_leaderboard() {
        let app = BoardApp::default();
        let text = screen(&app);
        assert!(text.contains("REALIZED PNL LEADERBOARD"));
        assert!(text.contains("Cented"));
        assert!(text.contains("GOLD"));
    }

    #[test]
    fn test_render_profile_and_help() {
        let mut app = BoardApp::default();
        app.toggle_view();
        let text = screen(&app);
        assert!(text.contains("MARKETS"));
        assert!(text.contains("HOLDINGS"));

        app.toggle_help();
        assert!(screen(&app).contains("HELP"));
    }
}
