//! REST client for historical and spot price data.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::chart::{PricePoint, PriceSeries};
use crate::history::error::{FetchError, FetchResult};
use crate::history::types::{MarketChartResponse, SpotPriceResponse};
use crate::history::HistorySource;
use crate::intervals::Interval;

/// Default market-data API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`PriceHistoryClient`].
#[derive(Debug, Clone)]
pub struct PriceHistoryClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl PriceHistoryClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> FetchResult<PriceHistoryClient> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http_client = Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(PriceHistoryClient {
            http_client,
            base_url: self.base_url,
        })
    }
}

/// REST client for the market-data API.
///
/// Issues one request per call and surfaces every failure as a
/// [`FetchError`]; retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct PriceHistoryClient {
    http_client: Client,
    base_url: String,
}

impl PriceHistoryClient {
    /// Create a new client with the given base URL and default settings.
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        PriceHistoryClientBuilder::new(base_url).build()
    }

    /// Create a client against the default public endpoint.
    pub fn default_endpoint() -> FetchResult<Self> {
        Self::new(DEFAULT_API_URL)
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> PriceHistoryClientBuilder {
        PriceHistoryClientBuilder::new(base_url)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Current spot price of one asset in USD.
    pub async fn fetch_spot_price(&self, asset: &str) -> FetchResult<f64> {
        let query = [("ids", asset.to_string()), ("vs_currencies", "usd".to_string())];
        let prices: SpotPriceResponse = self.get_json("/simple/price", &query).await?;

        prices
            .get(asset)
            .and_then(|currencies| currencies.get("usd"))
            .copied()
            .ok_or_else(|| FetchError::Malformed(format!("no usd price for {asset}")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http_client.get(&url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl HistorySource for PriceHistoryClient {
    async fn fetch_history(&self, asset: &str, interval: Interval) -> FetchResult<PriceSeries> {
        let spec = interval.spec();
        let query = [
            ("vs_currency", "usd".to_string()),
            ("days", format_days(spec.lookback_days)),
            ("interval", spec.granularity.as_str().to_string()),
        ];

        let chart: MarketChartResponse = self
            .get_json(&format!("/coins/{asset}/market_chart"), &query)
            .await?;

        tracing::debug!(
            asset,
            interval = %interval,
            points = chart.prices.len(),
            "fetched price history"
        );

        let mut series = PriceSeries::with_capacity(spec.point_count);
        for (timestamp_ms, price) in chart.prices {
            let Some(at) = Local.timestamp_millis_opt(timestamp_ms).single() else {
                tracing::warn!(timestamp_ms, "skipping point with out-of-range timestamp");
                continue;
            };
            series.push(PricePoint::new(interval.format_timestamp(at), price));
        }

        Ok(series)
    }
}

/// Render the lookback span as the API expects: whole days unadorned,
/// fractional days as-is.
fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{}", days as u64)
    } else {
        days.to_string()
    }
}
