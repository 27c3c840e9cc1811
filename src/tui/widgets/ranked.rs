//! Ranked list below the podium (rank 4 and beyond)

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::profile::{format_grouped, format_price};
use crate::tui::app::BoardApp;
use crate::tui::theme::THEME;
use crate::tui::widgets::ratio_bar::ratio_line_with_counts;

/// Render the ranked traders table
pub fn render_ranked(f: &mut Frame, area: Rect, app: &BoardApp) {
    let view = app.view();
    let block = Block::default()
        .title(format!(" RANKED ({}) ", view.ranked_traders.len()))
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style());

    if view.ranked_traders.is_empty() {
        let empty = Paragraph::new("No other traders yet")
            .style(THEME.inactive_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["#", "Trader", "Wallet", "PnL", "Value", "Trades"])
        .style(THEME.inactive_style());

    let rows: Vec<Row> = view
        .ranked_traders
        .iter()
        .skip(app.scroll_offset)
        .map(|trader| {
            let name = if trader.listed_user {
                Line::from(vec![
                    Span::styled(trader.name.clone(), THEME.accent_style()),
                    Span::styled(" (you)", THEME.inactive_style()),
                ])
            } else {
                Line::from(Span::styled(trader.name.clone(), THEME.text_style()))
            };
            Row::new(vec![
                Cell::from(trader.rank.to_string()),
                Cell::from(name),
                Cell::from(Span::styled(trader.short_address(), THEME.inactive_style())),
                Cell::from(Span::styled(
                    format!("{} {}", format_grouped(trader.pnl, 2), app.display.pnl_unit),
                    THEME.pnl_style(!trader.pnl.is_sign_negative()),
                )),
                Cell::from(format_price(trader.value)),
                Cell::from(ratio_line_with_counts(
                    trader.green_trades,
                    trader.red_trades,
                    app.display.bar_width,
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(18),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(14),
        Constraint::Min(app.display.bar_width + 10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
