//! Terminal User Interface module
//!
//! Leaderboard and profile dashboard drawn with ratatui.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use app::{AppCommand, BoardApp, ViewMode};
pub use event::{KeyAction, ModalKey};
pub use theme::Theme;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::AppConfig;
use crate::provider::WalletProvider;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal mode
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub async fn run_tui(mut app: BoardApp) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app).await;
    // Restore even when the loop failed
    restore_terminal()?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut BoardApp,
) -> io::Result<()> {
    // Silent reconnect before the first interactive frame
    let provider = app.provider.clone();
    terminal.draw(|f| ui::render(f, app))?;
    app.session.initial_check(provider.as_deref()).await;

    while app.is_running() {
        terminal.draw(|f| ui::render(f, app))?;

        if crossterm::event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = crossterm::event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = app.handle_key(key) {
                    app.run_command(command).await;
                }
            }
        }
    }

    info!("dashboard closed");
    Ok(())
}

/// Build the app from config and run the dashboard
pub async fn run_dashboard(
    config: &AppConfig,
    provider: Option<Arc<dyn WalletProvider>>,
) -> io::Result<()> {
    let mut app = BoardApp::new(config);
    if let Some(provider) = provider {
        app = app.with_provider(provider);
    }
    info!(period = %app.session.period, "starting dashboard");
    run_tui(app).await
}
