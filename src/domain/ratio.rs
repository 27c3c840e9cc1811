//! Green/red trade ratio used to size the two halves of a ratio bar.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoardError, Result};

/// Percentage given to each side when there are no trades at all.
pub const FALLBACK_PERCENTAGE: f64 = 50.0;

/// Percentage split between favorable and unfavorable trades
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRatio {
    /// Share of green trades, 0..=100
    pub green_percentage: f64,
    /// Share of red trades, 0..=100
    pub red_percentage: f64,
}

impl Default for TradeRatio {
    fn default() -> Self {
        Self::fallback()
    }
}

impl TradeRatio {
    /// Neutral split used when both counts are zero
    pub const fn fallback() -> Self {
        Self {
            green_percentage: FALLBACK_PERCENTAGE,
            red_percentage: FALLBACK_PERCENTAGE,
        }
    }

    /// Compute the ratio from raw trade counts
    pub fn from_counts(green_trades: u64, red_trades: u64) -> Self {
        // f64 addition so u64::MAX + u64::MAX cannot overflow
        let total = green_trades as f64 + red_trades as f64;
        if total == 0.0 {
            return Self::fallback();
        }

        let green_percentage = green_trades as f64 * 100.0 / total;
        Self {
            green_percentage,
            red_percentage: 100.0 - green_percentage,
        }
    }

    /// Compute the ratio from untrusted numeric input.
    ///
    /// Non-finite values are rejected. Negative values are clamped to zero.
    pub fn try_from_f64(green_trades: f64, red_trades: f64) -> Result<Self> {
        if !green_trades.is_finite() || !red_trades.is_finite() {
            return Err(BoardError::InvalidRatioInput(format!(
                "trade counts must be finite: green={green_trades}, red={red_trades}"
            )));
        }

        if green_trades < 0.0 || red_trades < 0.0 {
            debug!(green_trades, red_trades, "clamping negative trade counts to zero");
        }
        let green = green_trades.max(0.0);
        let red = red_trades.max(0.0);

        let total = green + red;
        if total == 0.0 {
            return Ok(Self::fallback());
        }
        if !total.is_finite() {
            return Err(BoardError::InvalidRatioInput(format!(
                "trade count total overflows: green={green}, red={red}"
            )));
        }

        // divide first: green * 100.0 overflows for counts near f64::MAX
        let green_percentage = (green / total * 100.0).clamp(0.0, 100.0);
        Ok(Self {
            green_percentage,
            red_percentage: 100.0 - green_percentage,
        })
    }

    /// Whether this equals the 50/50 fallback split (an even split with trades also matches)
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }

    /// Split a bar of `width` cells into (green, red) cell counts.
    ///
    /// The two counts always sum to `width`.
    pub fn bar_cells(&self, width: u16) -> (u16, u16) {
        let green = (self.green_percentage / 100.0 * f64::from(width)).round();
        let green = (green.max(0.0) as u16).min(width);
        (green, width - green)
    }

    /// CSS-style width strings, e.g. `("30%", "70%")`
    pub fn css_widths(&self) -> (String, String) {
        (
            format!("{}%", self.green_percentage),
            format!("{}%", self.red_percentage),
        )
    }
}

/// Compute the green/red percentage split for a pair of trade counts.
///
/// Returns 50/50 when both counts are zero.
pub fn compute_trade_ratio(green_trades: u64, red_trades: u64) -> TradeRatio {
    TradeRatio::from_counts(green_trades, red_trades)
}
