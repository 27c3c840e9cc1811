//! Green/red trade ratio bar

use ratatui::text::{Line, Span};

use crate::domain::TradeRatio;
use crate::tui::theme::THEME;

const CELL: &str = "█";

/// Bar line sized to `width` cells, green from the left and red from the right
pub fn ratio_line(ratio: &TradeRatio, width: u16) -> Line<'static> {
    bar_line(ratio, width, false)
}

/// Bar followed by the raw trade counts, e.g. `██████ 946/232`
pub fn ratio_line_with_counts(green_trades: u64, red_trades: u64, width: u16) -> Line<'static> {
    let ratio = TradeRatio::from_counts(green_trades, red_trades);
    // no trades yet: draw a neutral track
    let neutral = green_trades == 0 && red_trades == 0;
    let mut spans = bar_line(&ratio, width, neutral).spans;
    spans.push(Span::raw(" "));
    spans.push(Span::styled(green_trades.to_string(), THEME.green_style()));
    spans.push(Span::styled("/", THEME.inactive_style()));
    spans.push(Span::styled(red_trades.to_string(), THEME.red_style()));
    Line::from(spans)
}

fn bar_line(ratio: &TradeRatio, width: u16, neutral: bool) -> Line<'static> {
    let (green, red) = ratio.bar_cells(width);
    let (green_style, red_style) = if neutral {
        (THEME.track_style(), THEME.track_style())
    } else {
        (THEME.green_style(), THEME.red_style())
    };

    Line::from(vec![
        Span::styled(CELL.repeat(green as usize), green_style),
        Span::styled(CELL.repeat(red as usize), red_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute_trade_ratio;

    fn cells(line: &Line) -> Vec<usize> {
        line.spans.iter().map(|s| s.content.chars().count()).collect()
    }

    #[test]
    fn test_ratio_line_fills_width() {
        let line = ratio_line(&compute_trade_ratio(3, 7), 10);
        assert_eq!(cells(&line), vec![3, 7]);

        let line = ratio_line(&compute_trade_ratio(5, 0), 8);
        assert_eq!(cells(&line), vec![8, 0]);
    }

    #[test]
    fn test_no_trades_uses_track_color() {
        let line = ratio_line_with_counts(0, 0, 6);
        assert_eq!(cells(&line)[..2], [3, 3]);
        assert_eq!(line.spans[0].style, THEME.track_style());

        // an even split with trades is still colored
        let line = ratio_line_with_counts(4, 4, 6);
        assert_eq!(line.spans[0].style, THEME.green_style());
    }

    #[test]
    fn test_counts_suffix() {
        let line = ratio_line_with_counts(946, 232, 10);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.ends_with(" 946/232"));
    }
}
