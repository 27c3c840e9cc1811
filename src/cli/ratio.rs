//! `pnl-board ratio` - split a green/red trade count pair.

use serde::Serialize;

use super::output::{self, OutputMode};
use crate::domain::TradeRatio;
use crate::error::Result;

const GREEN_CELL: char = '█';
const RED_CELL: char = '░';

#[derive(Debug, Serialize)]
pub struct RatioOutput {
    pub green_trades: f64,
    pub red_trades: f64,
    #[serde(flatten)]
    pub ratio: TradeRatio,
    /// Segment widths as CSS percentages
    pub green_width: String,
    pub red_width: String,
}

/// Plain-text ratio bar: green cells grow from the left, red from the right
pub fn text_bar(ratio: &TradeRatio, width: u16) -> String {
    let (green, red) = ratio.bar_cells(width);
    let mut bar = String::with_capacity(width as usize * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(GREEN_CELL).take(green as usize));
    bar.extend(std::iter::repeat(RED_CELL).take(red as usize));
    bar.push(']');
    bar
}

/// Ratio for raw command-line counts. Negative counts are clamped,
/// non-finite ones rejected.
pub fn compute(green: f64, red: f64) -> Result<RatioOutput> {
    let ratio = TradeRatio::try_from_f64(green, red)?;
    let (green_width, red_width) = ratio.css_widths();
    Ok(RatioOutput {
        green_trades: green,
        red_trades: red,
        ratio,
        green_width,
        red_width,
    })
}

pub fn run(green: f64, red: f64, width: u16, mode: OutputMode) -> Result<()> {
    let out = compute(green, red)?;
    match mode {
        OutputMode::Json => output::print_json(&out)?,
        OutputMode::Table => {
            println!(
                "{} {:.2}% / {:.2}%",
                text_bar(&out.ratio, width),
                out.ratio.green_percentage,
                out.ratio.red_percentage
            );
            if green <= 0.0 && red <= 0.0 {
                println!("(no trades, showing neutral split)");
            }
        }
    }
    Ok(())
}
