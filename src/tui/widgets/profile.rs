//! Profile page: trade summary, featured coins, market table, holdings

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::profile::{format_change, format_price, MarketTab, ProfilePage, SortColumn, SortDirection};
use crate::tui::app::BoardApp;
use crate::tui::theme::THEME;
use crate::tui::widgets::ratio_bar::ratio_line;

/// Render the profile page
pub fn render_profile(f: &mut Frame, area: Rect, app: &BoardApp) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // summary
        Constraint::Length(3), // featured coins
        Constraint::Min(8),    // markets + side panels
    ])
    .split(area);

    render_summary(f, chunks[0], app);
    render_featured(f, chunks[1], &app.profile);

    let body = Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);
    render_markets(f, body[0], app);
    render_side_panels(f, body[1], &app.profile);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(THEME.title_style())
        .borders(Borders::ALL)
        .border_style(THEME.border_style())
}

fn render_summary(f: &mut Frame, area: Rect, app: &BoardApp) {
    let summary = &app.profile.summary;
    let block = panel("PNL");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            summary.headline(),
            THEME.pnl_style(!summary.pnl_sol.is_sign_negative()),
        )),
        ratio_line(&summary.trade_ratio(), inner.width.min(app.display.bar_width * 2)),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_featured(f: &mut Frame, area: Rect, profile: &ProfilePage) {
    let block = panel("FEATURED");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = Vec::new();
    for coin in &profile.featured {
        spans.push(Span::styled(coin.symbol.clone(), THEME.title_style()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format_price(coin.price), THEME.text_style()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format_change(coin.change),
            THEME.pnl_style(!coin.change.is_sign_negative()),
        ));
        spans.push(Span::raw("   "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn sort_marker(profile: &ProfilePage, column: SortColumn) -> &'static str {
    match (profile.sort.column, profile.sort.direction) {
        (Some(c), SortDirection::Asc) if c == column => " ▲",
        (Some(c), SortDirection::Desc) if c == column => " ▼",
        _ => "",
    }
}

fn render_markets(f: &mut Frame, area: Rect, app: &BoardApp) {
    let profile = &app.profile;
    let block = panel("MARKETS");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).split(inner);

    let selected = MarketTab::ALL
        .iter()
        .position(|t| *t == profile.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(MarketTab::ALL.iter().map(|t| t.label()))
        .select(selected)
        .style(THEME.inactive_style())
        .highlight_style(THEME.accent_style());
    f.render_widget(tabs, chunks[0]);

    let coins = profile.visible_coins();
    if coins.is_empty() {
        let empty = Paragraph::new("No coins in this tab").style(THEME.inactive_style());
        f.render_widget(empty, chunks[1]);
        return;
    }

    let header = Row::new(vec![
        " ".to_string(),
        "Coin".to_string(),
        format!("Price{}", sort_marker(profile, SortColumn::Price)),
        format!("24h{}", sort_marker(profile, SortColumn::Change24h)),
        "24h High".to_string(),
        "24h Low".to_string(),
    ])
    .style(THEME.inactive_style());

    let rows: Vec<Row> = coins
        .iter()
        .enumerate()
        .map(|(i, coin)| {
            let star = if coin.favorite { "★" } else { "☆" };
            let row = Row::new(vec![
                Cell::from(Span::styled(star, THEME.highlight_style())),
                Cell::from(format!("{} {}", coin.name, coin.symbol.to_uppercase())),
                Cell::from(format_price(coin.price)),
                Cell::from(Span::styled(
                    format_change(coin.change_24h),
                    THEME.pnl_style(!coin.change_24h.is_sign_negative()),
                )),
                Cell::from(format_price(coin.high_24h)),
                Cell::from(format_price(coin.low_24h)),
            ]);
            if i == app.scroll_offset {
                row.style(THEME.accent_style())
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Min(14),
        Constraint::Length(13),
        Constraint::Length(9),
        Constraint::Length(13),
        Constraint::Length(13),
    ];
    f.render_widget(Table::new(rows, widths).header(header), chunks[1]);
}

fn render_side_panels(f: &mut Frame, area: Rect, profile: &ProfilePage) {
    let chunks = Layout::vertical([
        Constraint::Percentage(30),
        Constraint::Percentage(35),
        Constraint::Percentage(35),
    ])
    .split(area);

    let holdings: Vec<Line> = profile
        .holdings
        .iter()
        .map(|h| {
            Line::from(vec![
                Span::styled(format!("{:<10}", h.name), THEME.text_style()),
                Span::styled(format!("{:>14}", h.amount), THEME.inactive_style()),
                Span::styled(format!("{:>12}", h.value), THEME.text_style()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(holdings).block(panel("HOLDINGS")), chunks[0]);

    let trades: Vec<Line> = profile
        .trades
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled(format!("{:<5}", t.kind.to_string()), THEME.accent_style()),
                Span::styled(format!("{} {}", t.amount, t.token), THEME.text_style()),
                Span::styled(format!(" @ {}", t.price), THEME.inactive_style()),
                Span::styled(format!("  {}", t.time), THEME.inactive_style()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(trades).block(panel("DEFI TRADES")), chunks[1]);

    let pnl: Vec<Line> = profile
        .token_pnl
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled(format!("{:<8}", t.token), THEME.text_style()),
                Span::styled(t.pnl.clone(), THEME.pnl_style(t.is_gain())),
                Span::styled(format!("  {} trades", t.trades.len()), THEME.inactive_style()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(pnl).block(panel("PNL BY TOKEN")), chunks[2]);
}
