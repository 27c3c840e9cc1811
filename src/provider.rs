//! Browser-extension style wallet provider seam.
//!
//! Connecting only reveals a public key; nothing is signed.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::domain::WalletAddress;
use crate::error::{BoardError, Result};

/// Where users are sent when no provider is installed
pub const PROVIDER_INSTALL_URL: &str = "https://phantom.app/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectOpts {
    /// Only succeed if the user approved this app before, without prompting
    pub only_if_trusted: bool,
}

impl ConnectOpts {
    pub fn trusted_only() -> Self {
        Self {
            only_if_trusted: true,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request the wallet's public key
    async fn connect(&self, opts: ConnectOpts) -> Result<WalletAddress>;

    async fn disconnect(&self) -> Result<()>;
}

/// Provider backed by a fixed address, used by the dashboard demo
#[derive(Debug)]
pub struct DemoWalletProvider {
    address: WalletAddress,
    trusted: bool,
    connected: AtomicBool,
}

impl DemoWalletProvider {
    pub fn new(address: WalletAddress, trusted: bool) -> Self {
        Self {
            address,
            trusted,
            connected: AtomicBool::new(false),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for DemoWalletProvider {
    async fn connect(&self, opts: ConnectOpts) -> Result<WalletAddress> {
        if opts.only_if_trusted && !self.trusted {
            return Err(BoardError::Wallet(
                "app has not been approved by this wallet".to_string(),
            ));
        }
        self.connected.store(true, Ordering::SeqCst);
        debug!(wallet = %self.address, "demo wallet connected");
        Ok(self.address.clone())
    }

    async fn disconnect(&self) -> Result<()> {
        self.connected.store(false, Ordering::SeqCst);
        debug!(wallet = %self.address, "demo wallet disconnected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> WalletAddress {
        WalletAddress::parse("So11111111111111111111111111111111111111112").unwrap()
    }

    #[tokio::test]
    async fn test_untrusted_silent_connect_fails() {
        let provider = DemoWalletProvider::new(address(), false);
        assert!(provider.connect(ConnectOpts::trusted_only()).await.is_err());
        assert!(!provider.is_connected());

        let addr = provider.connect(ConnectOpts::default()).await.unwrap();
        assert_eq!(addr, address());
        assert!(provider.is_connected());
    }

    #[tokio::test]
    async fn test_trusted_silent_connect_and_disconnect() {
        let provider = DemoWalletProvider::new(address(), true);
        provider.connect(ConnectOpts::trusted_only()).await.unwrap();
        assert!(provider.is_connected());
        provider.disconnect().await.unwrap();
        assert!(!provider.is_connected());
    }
}
