use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};

/// Length in bytes of a decoded Solana public key
pub const PUBKEY_LEN: usize = 32;

/// A base58 encoded Solana wallet address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Parse and validate a base58 address
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BoardError::InvalidWallet("address is empty".to_string()));
        }

        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| BoardError::InvalidWallet(format!("{s}: {e}")))?;

        if bytes.len() != PUBKEY_LEN {
            return Err(BoardError::InvalidWallet(format!(
                "{s}: decodes to {} bytes, expected {PUBKEY_LEN}",
                bytes.len()
            )));
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form, e.g. `7xKX...gAsU`
    pub fn short(&self) -> String {
        short_address(&self.0)
    }
}

/// Abbreviate a long address to its first and last four characters
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 11 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<WalletAddress> for String {
    fn from(addr: WalletAddress) -> Self {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_address() {
        let addr = WalletAddress::parse("So11111111111111111111111111111111111111112").unwrap();
        assert_eq!(addr.as_str(), "So11111111111111111111111111111111111111112");
        assert_eq!(addr.short(), "So11...1112");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let addr = WalletAddress::parse("  7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU\n").unwrap();
        assert_eq!(addr.short(), "7xKX...gAsU");
    }

    #[test]
    fn test_parse_rejects_bad_alphabet() {
        // '0' and 'O' are not in the base58 alphabet
        assert!(WalletAddress::parse("0OOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOOO").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(WalletAddress::parse("abc").is_err());
        assert!(WalletAddress::parse("").is_err());
    }

    #[test]
    fn test_short_address_keeps_short_input() {
        assert_eq!(short_address("NOT-A-KEY"), "NOT-A-KEY");
    }
}
