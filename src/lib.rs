//! # Tokendeck SDK
//!
//! Data backbone for the Tokendeck token dashboard: interval-driven
//! price-history fetching, live trade-tick streaming, a rolling chart
//! series, network selection, and the wallet/RPC capability boundary the
//! UI layer consumes.
//!
//! ## Modules
//!
//! - [`intervals`]: the fixed catalog of charting time ranges
//! - [`history`]: REST client for historical and spot prices
//! - [`stream`]: WebSocket client for live trade ticks
//! - [`chart`]: the rolling series and its tracking state machine
//! - [`network`]: network registry and selection state
//! - [`wallet`]: wallet/RPC capability traits, domain errors, health monitor
//!
//! ## Quick Start — live chart
//!
//! ```rust,ignore
//! use tokendeck::chart::ChartTracker;
//! use tokendeck::history::PriceHistoryClient;
//! use tokendeck::intervals::Interval;
//! use tokendeck::stream::TradeStreamClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tracker = ChartTracker::new(
//!         PriceHistoryClient::default_endpoint()?,
//!         TradeStreamClient::default_endpoint(),
//!     );
//!
//!     // Seed the hourly window; live ticks merge in as they arrive.
//!     tracker.track("solana", Interval::OneHour).await?;
//!
//!     if let Some(series) = tracker.series() {
//!         println!("{} points, latest {:?}", series.len(), series.latest());
//!     }
//!
//!     tracker.stop();
//!     Ok(())
//! }
//! ```
//!
//! ## Quick Start — network selection
//!
//! ```rust,ignore
//! use tokendeck::network::{NetworkRegistry, NetworkState};
//!
//! let state = NetworkState::new(NetworkRegistry::solana_clusters(), "mainnet-beta")?;
//! let mut changes = state.subscribe();
//!
//! state.switch_network("devnet")?;
//! // Consumers re-derive their connection from the new endpoint.
//! assert_eq!(*changes.borrow_and_update(), "devnet");
//! ```

/// Charting time-range catalog.
pub mod intervals;

/// Configuration error types.
pub mod error;

/// Rolling chart series and tracking state machine.
pub mod chart;

/// Historical and spot price data over REST.
pub mod history;

/// Live trade-tick streaming.
pub mod stream;

/// Network registry and selection state.
pub mod network;

/// Wallet/RPC capability boundary.
pub mod wallet;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use tokendeck::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::{ChartTracker, PricePoint, PriceSeries, TrackerState};
    pub use crate::error::ConfigError;
    pub use crate::history::{
        FetchError, FetchResult, HistorySource, PriceHistoryClient, DEFAULT_API_URL,
    };
    pub use crate::intervals::{Granularity, Interval, IntervalSpec};
    pub use crate::network::{NetworkInfo, NetworkRegistry, NetworkState};
    pub use crate::stream::{
        StreamError, StreamResult, TickSource, TickSubscription, TradeStreamClient,
        DEFAULT_STREAM_URL,
    };
    pub use crate::wallet::{
        lamports_to_sol, truncate_address, AccountSubscription, ConnectionHealth,
        ConnectionMonitor, NetworkError, RpcConnection, TokenAmount, TokenError,
        TransactionError, WalletAdapter, WalletError, LAMPORTS_PER_SOL,
    };
}
