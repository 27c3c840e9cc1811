//! Social links attached to a leaderboard entry, and the form state used to
//! edit them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};
use crate::validation;

/// Supported social platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    #[default]
    Twitter,
    Discord,
    Github,
    Linkedin,
    Instagram,
    Facebook,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 6] = [
        SocialPlatform::Twitter,
        SocialPlatform::Discord,
        SocialPlatform::Github,
        SocialPlatform::Linkedin,
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Discord => "discord",
            SocialPlatform::Github => "github",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Facebook => "facebook",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Discord => "Discord",
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
        }
    }

    /// Next platform in selector order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| BoardError::InvalidSocial(format!("unknown platform: {s}")))
    }
}

/// A `platform:link` entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub link: String,
}

impl SocialLink {
    pub fn new(platform: SocialPlatform, link: &str) -> Result<Self> {
        let link = validation::validate_social_link(link)?;
        Ok(Self { platform, link })
    }
}

impl fmt::Display for SocialLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.platform, self.link)
    }
}

impl FromStr for SocialLink {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let (platform, link) = s
            .split_once(':')
            .ok_or_else(|| BoardError::InvalidSocial(format!("expected platform:link, got {s}")))?;
        Self::new(platform.parse()?, link)
    }
}

impl TryFrom<String> for SocialLink {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SocialLink> for String {
    fn from(link: SocialLink) -> Self {
        link.to_string()
    }
}

/// Form state of the "Add Socials" modal
#[derive(Debug, Clone, Default)]
pub struct SocialsDraft {
    pub selected_platform: SocialPlatform,
    /// Link text being typed
    pub link: String,
    /// Entries collected so far
    pub socials: Vec<SocialLink>,
}

impl SocialsDraft {
    /// Open the form seeded with the user's current socials
    pub fn new(initial: &[SocialLink]) -> Self {
        Self {
            selected_platform: SocialPlatform::default(),
            link: String::new(),
            socials: initial.to_vec(),
        }
    }

    /// Both action buttons are disabled while the link is empty
    pub fn is_disabled(&self) -> bool {
        self.link.trim().is_empty()
    }

    pub fn select_platform(&mut self, platform: SocialPlatform) {
        self.selected_platform = platform;
    }

    /// Append the pending link and reset the form for another entry
    pub fn add_another(&mut self) -> Result<()> {
        if self.is_disabled() {
            return Ok(());
        }
        let entry = SocialLink::new(self.selected_platform, &self.link)?;
        self.socials.push(entry);
        self.link.clear();
        self.selected_platform = SocialPlatform::default();
        Ok(())
    }

    /// Append the pending link and return the complete list.
    ///
    /// Returns `Ok(None)` while the link is empty.
    pub fn submit(&mut self) -> Result<Option<Vec<SocialLink>>> {
        if self.is_disabled() {
            return Ok(None);
        }
        let entry = SocialLink::new(self.selected_platform, &self.link)?;
        self.socials.push(entry);
        self.link.clear();
        Ok(Some(self.socials.clone()))
    }

    pub fn summary(&self) -> String {
        format!("{} social(s) added", self.socials.len())
    }

    pub fn placeholder(&self) -> String {
        format!("Enter your {} profile link...", self.selected_platform)
    }
}

/// Upper-case header date, e.g. `OCT 19, 2026`
pub fn formatted_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_link_roundtrip_with_url() {
        let link: SocialLink = "twitter:https://x.com/trader".parse().unwrap();
        assert_eq!(link.platform, SocialPlatform::Twitter);
        assert_eq!(link.link, "https://x.com/trader");
        assert_eq!(link.to_string(), "twitter:https://x.com/trader");
    }

    #[test]
    fn test_social_link_rejects_unknown_platform() {
        assert!("myspace:tom".parse::<SocialLink>().is_err());
        assert!("no-separator".parse::<SocialLink>().is_err());
        assert!("github:".parse::<SocialLink>().is_err());
    }

    #[test]
    fn test_platform_cycle_wraps() {
        assert_eq!(SocialPlatform::Twitter.next(), SocialPlatform::Discord);
        assert_eq!(SocialPlatform::Facebook.next(), SocialPlatform::Twitter);
    }

    #[test]
    fn test_draft_add_another_resets_platform() {
        let mut draft = SocialsDraft::new(&[]);
        draft.select_platform(SocialPlatform::Github);
        draft.link = "octocat".to_string();
        draft.add_another().unwrap();

        assert_eq!(draft.socials.len(), 1);
        assert_eq!(draft.socials[0].to_string(), "github:octocat");
        assert!(draft.link.is_empty());
        assert_eq!(draft.selected_platform, SocialPlatform::Twitter);
        assert_eq!(draft.summary(), "1 social(s) added");
    }

    #[test]
    fn test_draft_disabled_on_empty_link() {
        let mut draft = SocialsDraft::new(&[]);
        assert!(draft.is_disabled());
        draft.add_another().unwrap();
        assert!(draft.socials.is_empty());
        assert!(draft.submit().unwrap().is_none());
    }

    #[test]
    fn test_draft_submit_keeps_initial_entries() {
        let initial = vec!["discord:trader#0001".parse::<SocialLink>().unwrap()];
        let mut draft = SocialsDraft::new(&initial);
        draft.link = "@trader".to_string();

        let socials = draft.submit().unwrap().unwrap();
        assert_eq!(socials.len(), 2);
        assert_eq!(socials[1].to_string(), "twitter:@trader");
    }

    #[test]
    fn test_placeholder_follows_platform() {
        let mut draft = SocialsDraft::new(&[]);
        draft.select_platform(SocialPlatform::Linkedin);
        assert_eq!(draft.placeholder(), "Enter your linkedin profile link...");
    }

    #[test]
    fn test_formatted_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        assert_eq!(formatted_date(date), "OCT 9, 2026");
    }
}
