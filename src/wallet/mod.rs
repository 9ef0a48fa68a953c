//! Wallet and RPC boundary.
//!
//! The SDK consumes wallets and node connections through the capability
//! traits in [`provider`]; it never owns a concrete transport. What lives
//! here besides the traits: typed domain errors, display helpers, and the
//! periodic connection health monitor.

pub mod error;
pub mod monitor;
pub mod provider;

pub use error::{NetworkError, TokenError, TransactionError, WalletError};
pub use monitor::{ConnectionHealth, ConnectionMonitor, DEFAULT_PROBE_PERIOD};
pub use provider::{
    AccountChangeCallback, AccountSubscription, RpcConnection, TokenAmount, WalletAdapter,
};

use solana_pubkey::Pubkey;

/// Lamports per SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert a lamport amount to whole SOL for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Shorten an address for display ("4Nd1...pXqQ").
pub fn truncate_address(address: &Pubkey) -> String {
    let full = address.to_string();
    format!("{}...{}", &full[..4], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(LAMPORTS_PER_SOL), 1.0);
        assert_eq!(lamports_to_sol(2_500_000_000), 2.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[test]
    fn test_truncate_address() {
        let address = Pubkey::new_unique();
        let full = address.to_string();
        let short = truncate_address(&address);

        assert_eq!(short.len(), 11);
        assert!(short.starts_with(&full[..4]));
        assert!(short.ends_with(&full[full.len() - 4..]));
        assert!(short.contains("..."));
    }
}
