//! Historical and spot price data over REST.
//!
//! [`PriceHistoryClient`] talks to the public market-data API; the
//! [`HistorySource`] trait is the seam the chart tracker is driven
//! through, so tests can substitute an in-memory source.

pub mod client;
pub mod error;
pub mod types;

pub use client::{PriceHistoryClient, PriceHistoryClientBuilder, DEFAULT_API_URL};
pub use error::{FetchError, FetchResult};
pub use types::MarketChartResponse;

use async_trait::async_trait;

use crate::chart::PriceSeries;
use crate::intervals::Interval;

/// Source of historical price series.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Fetch a finite, ordered series for one asset and interval.
    ///
    /// The returned series' capacity equals the interval's point count;
    /// its length is whatever the source had available, never padded.
    async fn fetch_history(&self, asset: &str, interval: Interval) -> FetchResult<PriceSeries>;
}
