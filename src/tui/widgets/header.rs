//! Header bar: period tabs, wallet button, listed toggle

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::domain::{formatted_date, LeaderboardPeriod};
use crate::session::WalletStatus;
use crate::tui::app::{BoardApp, ViewMode};
use crate::tui::theme::THEME;

/// Render the header bar
pub fn render_header(f: &mut Frame, area: Rect, app: &BoardApp) {
    let title = match app.view_mode {
        ViewMode::Leaderboard => " REALIZED PNL LEADERBOARD ",
        ViewMode::Profile => " PROFILE ",
    };
    let block = Block::default()
        .title(title)
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::horizontal([Constraint::Length(28), Constraint::Min(20)]).split(inner);

    let selected = LeaderboardPeriod::ALL
        .iter()
        .position(|p| *p == app.session.period)
        .unwrap_or(0);
    let tabs = Tabs::new(LeaderboardPeriod::ALL.iter().map(|p| p.label()))
        .select(selected)
        .style(THEME.inactive_style())
        .highlight_style(THEME.accent_style())
        .divider(" ");
    f.render_widget(tabs, chunks[0]);

    let wallet = match &app.session.wallet {
        WalletStatus::Connected(addr) => Span::styled(addr.short(), THEME.text_style()),
        _ => Span::styled("no wallet", THEME.inactive_style()),
    };
    let listed_style = if app.session.is_listed {
        THEME.green_style()
    } else {
        THEME.inactive_style()
    };

    let mut spans = vec![
        Span::styled(formatted_date(app.last_update.date_naive()), THEME.inactive_style()),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.session.primary_action_label()), THEME.accent_style()),
        Span::raw(" "),
        wallet,
        Span::raw("  "),
        Span::styled(app.session.listed_label(), listed_style),
    ];
    if let Some(status) = &app.status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(status.clone(), THEME.highlight_style()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).right_aligned(), chunks[1]);
}
