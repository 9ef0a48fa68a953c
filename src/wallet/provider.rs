//! Capability interfaces for the wallet adapter and RPC connection.
//!
//! The dashboard consumes these; concrete providers (browser wallet
//! adapters, RPC nodes) live outside this crate. Tests drive the SDK
//! with in-memory implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;
use tokio::sync::mpsc;

use crate::wallet::error::{NetworkError, TokenError, WalletError};

/// Callback invoked when a watched account's lamport balance changes.
pub type AccountChangeCallback = Box<dyn FnMut(u64) + Send + 'static>;

/// A user's wallet: connection lifecycle and signing authority.
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Request a connection; resolves to the wallet's public key.
    async fn connect(&self) -> Result<Pubkey, WalletError>;

    /// Drop the connection. Safe to call when not connected.
    async fn disconnect(&self);

    /// Currently connected address, if any.
    fn address(&self) -> Option<Pubkey>;
}

/// A node connection scoped to one network endpoint.
///
/// Consumers re-derive a connection after every network switch instead of
/// mutating a shared one.
#[async_trait]
pub trait RpcConnection: Send + Sync {
    /// Account balance in lamports.
    async fn get_balance(&self, address: &Pubkey) -> Result<u64, NetworkError>;

    /// Node software version string.
    async fn get_version(&self) -> Result<String, NetworkError>;

    /// Circulating supply of a token mint.
    async fn get_token_supply(&self, mint: &Pubkey) -> Result<TokenAmount, TokenError>;

    /// Watch an account for balance changes.
    async fn on_account_change(
        &self,
        address: &Pubkey,
        callback: AccountChangeCallback,
    ) -> Result<AccountSubscription, NetworkError>;
}

/// Token supply or balance with its display scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenAmount {
    /// Raw amount in the token's base unit.
    pub amount: u64,
    /// Decimal places of the base unit.
    pub decimals: u8,
}

impl TokenAmount {
    /// Amount scaled for display.
    pub fn ui_amount(&self) -> f64 {
        self.amount as f64 / 10f64.powi(self.decimals as i32)
    }
}

/// Handle for an account-change watch.
///
/// Removing is idempotent, mirrors the tick-subscription handle: the
/// first `remove` signals the provider, later calls and Drop are no-ops.
#[derive(Debug)]
pub struct AccountSubscription {
    remove: Option<mpsc::Sender<()>>,
}

impl AccountSubscription {
    /// Wrap a removal channel to the provider's listener task.
    pub fn new(remove: mpsc::Sender<()>) -> Self {
        Self {
            remove: Some(remove),
        }
    }

    /// Stop watching the account.
    pub fn remove(&mut self) {
        if let Some(tx) = self.remove.take() {
            let _ = tx.try_send(());
        }
    }

    /// Whether the watch is still registered.
    pub fn is_active(&self) -> bool {
        self.remove.is_some()
    }
}

impl Drop for AccountSubscription {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_amount_scaling() {
        let amount = TokenAmount {
            amount: 1_500_000_000,
            decimals: 9,
        };
        assert_eq!(amount.ui_amount(), 1.5);

        let whole = TokenAmount {
            amount: 42,
            decimals: 0,
        };
        assert_eq!(whole.ui_amount(), 42.0);
    }

    #[tokio::test]
    async fn test_account_subscription_remove_is_idempotent() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut sub = AccountSubscription::new(tx);

        assert!(sub.is_active());
        sub.remove();
        sub.remove();
        assert!(!sub.is_active());

        assert_eq!(rx.recv().await, Some(()));
        assert_eq!(rx.try_recv().ok(), None);
    }
}
