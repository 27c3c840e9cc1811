//! Top three traders as podium cards, silver / gold / bronze left to right

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::DisplayConfig;
use crate::leaderboard::PodiumEntry;
use crate::profile::format_grouped;
use crate::tui::app::BoardApp;
use crate::tui::theme::THEME;
use crate::tui::widgets::ratio_bar::ratio_line_with_counts;

/// Render the podium row
pub fn render_podium(f: &mut Frame, area: Rect, app: &BoardApp) {
    let view = app.view();
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (i, column) in columns.iter().enumerate() {
        match view.top_traders.get(i) {
            Some(entry) => render_card(f, *column, entry, &app.display),
            None => {
                let empty = Block::default()
                    .borders(Borders::ALL)
                    .border_style(THEME.border_style());
                f.render_widget(empty, *column);
            }
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, entry: &PodiumEntry, display: &DisplayConfig) {
    let trader = &entry.trader;
    // the center card sits higher than its neighbours
    let area = if trader.rank == 1 || area.height < 2 {
        area
    } else {
        Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        }
    };

    let block = Block::default()
        .title(format!(" #{} {} ", trader.rank, entry.badge.as_str().to_uppercase()))
        .title_style(THEME.badge_style(entry.badge))
        .borders(Borders::ALL)
        .border_style(THEME.badge_style(entry.badge));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = display.bar_width.min(inner.width.saturating_sub(12));
    let lines = vec![
        Line::from(Span::styled(trader.name.clone(), THEME.title_style())),
        Line::from(Span::styled(trader.short_address(), THEME.inactive_style())),
        Line::from(Span::styled(
            format!("{} {}", format_grouped(trader.pnl, 2), display.pnl_unit),
            THEME.pnl_style(!trader.pnl.is_sign_negative()),
        )),
        ratio_line_with_counts(trader.green_trades, trader.red_trades, bar_width),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}
