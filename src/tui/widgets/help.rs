//! Key binding overlay

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::theme::THEME;
use crate::tui::widgets::socials_modal::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("Tab", "next period (Daily / Weekly / Monthly)"),
    ("p", "switch leaderboard / profile"),
    ("c", "connect wallet"),
    ("d", "disconnect wallet"),
    ("l", "toggle listed"),
    ("s", "add or edit socials"),
    ("t", "next market tab"),
    ("1 / 2", "sort by price / 24h change"),
    ("f", "favorite selected coin"),
    ("j k", "scroll"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(52, BINDINGS.len() as u16 + 2, area);
    f.render_widget(Clear, popup);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {key:<7}"), THEME.highlight_style()),
                Span::styled(*desc, THEME.text_style()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" HELP ")
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
