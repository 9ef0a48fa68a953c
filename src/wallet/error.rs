//! Domain error types surfaced from the wallet/RPC boundary.
//!
//! Each error is constructed at the point of failure with its own
//! variant; callers match on the type instead of inspecting messages.

use thiserror::Error;

/// Wallet connection and signing errors.
#[derive(Debug, Clone, Error)]
pub enum WalletError {
    /// No wallet is connected
    #[error("wallet not connected")]
    NotConnected,

    /// The user or adapter rejected the connection request
    #[error("connection rejected: {0}")]
    ConnectionRejected(String),

    /// Balance lookup failed
    #[error("failed to fetch wallet balance: {0}")]
    Balance(String),
}

/// RPC transport errors.
#[derive(Debug, Clone, Error)]
pub enum NetworkError {
    /// The endpoint could not be reached
    #[error("rpc unreachable: {0}")]
    Unreachable(String),

    /// The endpoint answered with an error
    #[error("rpc request failed: {0}")]
    Request(String),
}

/// Token account errors.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// No account exists at the mint address
    #[error("token not found: {0}")]
    NotFound(String),

    /// The account exists but is not a token mint
    #[error("invalid token account: {0}")]
    InvalidAccount(String),
}

/// Transfer submission errors.
#[derive(Debug, Clone, Error)]
pub enum TransactionError {
    /// The signer declined
    #[error("transaction rejected: {0}")]
    Rejected(String),

    /// The cluster rejected or dropped the transaction
    #[error("transaction failed: {0}")]
    Failed(String),

    /// The payer cannot cover the transfer
    #[error("insufficient balance: needed {needed} lamports, available {available}")]
    InsufficientBalance { needed: u64, available: u64 },
}
