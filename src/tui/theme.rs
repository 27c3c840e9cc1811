//! Theme and color definitions for the TUI dashboard
//!
//! Dark scheme with emerald for green trades, red for red trades, purple accents.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Badge;

/// Theme configuration for the dashboard
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border color
    pub border: Color,
    /// Title color
    pub title: Color,
    /// Green trade / profit color
    pub green: Color,
    /// Red trade / loss color
    pub red: Color,
    /// Button and selection accent
    pub accent: Color,
    /// Highlight color (yellow)
    pub highlight: Color,
    /// Inactive/dim color
    pub inactive: Color,
    /// Normal text color
    pub text: Color,
    /// Empty part of a bar track
    pub track: Color,
    pub gold: Color,
    pub silver: Color,
    pub bronze: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            title: Color::White,
            green: Color::Rgb(52, 211, 153),
            red: Color::Rgb(248, 113, 113),
            accent: Color::Rgb(157, 94, 244),
            highlight: Color::Yellow,
            inactive: Color::Gray,
            text: Color::White,
            track: Color::DarkGray,
            gold: Color::Rgb(234, 179, 8),
            silver: Color::Rgb(203, 213, 225),
            bronze: Color::Rgb(180, 83, 9),
        }
    }
}

impl Theme {
    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get style for titles
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn green_style(&self) -> Style {
        Style::default().fg(self.green)
    }

    pub fn red_style(&self) -> Style {
        Style::default().fg(self.red)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Get style for highlighted text
    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    /// Get style for inactive/dim text
    pub fn inactive_style(&self) -> Style {
        Style::default().fg(self.inactive)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn track_style(&self) -> Style {
        Style::default().fg(self.track)
    }

    /// Get style for PnL based on value (positive = profit, negative = loss)
    pub fn pnl_style(&self, is_positive: bool) -> Style {
        if is_positive {
            self.green_style().add_modifier(Modifier::BOLD)
        } else {
            self.red_style().add_modifier(Modifier::BOLD)
        }
    }

    pub fn badge_style(&self, badge: Badge) -> Style {
        let color = match badge {
            Badge::Gold => self.gold,
            Badge::Silver => self.silver,
            Badge::Bronze => self.bronze,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);
