//! Live trade-tick streaming.
//!
//! [`TradeStreamClient`] opens one WebSocket connection per subscription
//! and delivers price ticks to a caller-supplied callback in arrival
//! order. The [`TickSource`] trait is the seam the chart tracker consumes,
//! so tests can substitute an in-memory feed.

pub mod client;
pub mod error;
pub mod subscription;
pub mod types;

pub use client::{TradeStreamClient, DEFAULT_STREAM_URL};
pub use error::{StreamError, StreamResult};
pub use subscription::TickSubscription;
pub use types::{StreamRequest, TradeMessage};

use async_trait::async_trait;

/// Callback invoked once per inbound tick, in arrival order.
pub type TickCallback = Box<dyn FnMut(f64) + Send + 'static>;

/// Source of live price ticks.
#[async_trait]
pub trait TickSource: Send + Sync {
    /// Open a live tick subscription for one asset.
    ///
    /// Each call opens its own connection. A tracking context keeps at
    /// most one subscription open at a time: it closes the previous
    /// handle before requesting a new one.
    async fn subscribe(&self, asset: &str, on_tick: TickCallback)
        -> StreamResult<TickSubscription>;
}
