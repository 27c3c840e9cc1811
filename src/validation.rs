//! Input validation for user-entered data
//!
//! Social links come straight from form input, so they are checked before
//! they reach the leaderboard. Wallet addresses validate themselves in
//! `WalletAddress::parse`.

use crate::error::{BoardError, Result};
use url::Url;

/// Maximum length of a social link or handle
pub const MAX_SOCIAL_LINK_LEN: usize = 256;

/// Validate a social profile link or handle
///
/// # Arguments
/// * `link` - Raw link text from the socials form
///
/// # Returns
/// * `Ok(String)` with surrounding whitespace removed
/// * `Err` if empty, too long, contains whitespace, or is a malformed URL
pub fn validate_social_link(link: &str) -> Result<String> {
    let link = link.trim();

    if link.is_empty() {
        return Err(BoardError::InvalidSocial("link cannot be empty".to_string()));
    }

    if link.len() > MAX_SOCIAL_LINK_LEN {
        return Err(BoardError::InvalidSocial(format!(
            "link exceeds {} characters",
            MAX_SOCIAL_LINK_LEN
        )));
    }

    if link.chars().any(char::is_whitespace) {
        return Err(BoardError::InvalidSocial(format!(
            "link cannot contain whitespace: {}",
            link
        )));
    }

    if link.starts_with("http://") || link.starts_with("https://") {
        let url = Url::parse(link)
            .map_err(|e| BoardError::InvalidSocial(format!("{}: {}", link, e)))?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(BoardError::InvalidSocial(format!("{} has no host", link)));
        }
    }

    Ok(link.to_string())
}
