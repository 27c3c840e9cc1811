//! Footer status bar widget
//!
//! Displays platform, performance figure, last update, and key hints.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::BoardApp;
use crate::tui::theme::THEME;

/// Render the footer status bar
pub fn render_footer(f: &mut Frame, area: Rect, app: &BoardApp) {
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(app.platform.clone(), THEME.accent_style()),
        Span::raw("  Performance: "),
        Span::styled(format!("{}ms", app.display.performance_ms), THEME.highlight_style()),
        Span::raw("  Updated: "),
        Span::styled(app.last_update.format("%H:%M:%S").to_string(), THEME.inactive_style()),
        Span::raw("  "),
        Span::styled("[?] help  [q] quit", THEME.inactive_style()),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
