//! Main UI rendering logic
//!
//! Orchestrates the layout and renders all widgets.

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::tui::app::{BoardApp, ViewMode};
use crate::tui::widgets;

/// Render the entire UI
pub fn render(f: &mut Frame, app: &BoardApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Page body
        Constraint::Length(1), // Footer status bar
    ])
    .split(f.area());

    widgets::render_header(f, chunks[0], app);

    match app.view_mode {
        ViewMode::Leaderboard => {
            let body = Layout::vertical([
                Constraint::Length(7), // Podium
                Constraint::Min(5),    // Ranked list
            ])
            .split(chunks[1]);
            widgets::render_podium(f, body[0], app);
            widgets::render_ranked(f, body[1], app);
        }
        ViewMode::Profile => widgets::render_profile(f, chunks[1], app),
    }

    widgets::render_footer(f, chunks[2], app);

    if let Some(draft) = app.socials_modal() {
        widgets::render_socials_modal(f, f.area(), draft);
    } else if app.show_help {
        widgets::render_help(f, f.area());
    }
}
