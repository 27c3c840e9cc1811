//! Keyboard mapping for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action derived from key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Show help
    Help,
    /// Cycle Daily / Weekly / Monthly
    NextPeriod,
    /// Switch between leaderboard and profile
    ToggleView,
    ConnectWallet,
    DisconnectWallet,
    ToggleListed,
    EditSocials,
    /// Profile: next market tab
    NextMarketTab,
    /// Profile: sort coins by price
    SortByPrice,
    /// Profile: sort coins by 24h change
    SortByChange,
    /// Profile: star or unstar the selected coin
    ToggleFavorite,
    /// No action
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
            KeyCode::Char('?') => KeyAction::Help,
            KeyCode::Tab => KeyAction::NextPeriod,
            KeyCode::Char('p') => KeyAction::ToggleView,
            KeyCode::Char('c') => KeyAction::ConnectWallet,
            KeyCode::Char('d') => KeyAction::DisconnectWallet,
            KeyCode::Char('l') => KeyAction::ToggleListed,
            KeyCode::Char('s') => KeyAction::EditSocials,
            KeyCode::Char('t') => KeyAction::NextMarketTab,
            KeyCode::Char('1') => KeyAction::SortByPrice,
            KeyCode::Char('2') => KeyAction::SortByChange,
            KeyCode::Char('f') => KeyAction::ToggleFavorite,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

/// Keys accepted while the socials modal is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKey {
    Close,
    Submit,
    AddAnother,
    NextPlatform,
    Backspace,
    Input(char),
    None,
}

impl From<KeyEvent> for ModalKey {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Esc => ModalKey::Close,
            KeyCode::Enter => ModalKey::Submit,
            KeyCode::Tab => ModalKey::NextPlatform,
            KeyCode::Backspace => ModalKey::Backspace,
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                ModalKey::AddAnother
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                ModalKey::Input(c)
            }
            _ => ModalKey::None,
        }
    }
}
