//! Wire types for the market-data REST API.

use std::collections::HashMap;

use serde::Deserialize;

/// Response body of `GET /coins/{asset}/market_chart`.
///
/// Prices arrive oldest-first as `[timestampMillis, priceUsd]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(i64, f64)>,
}

/// Response body of `GET /simple/price`: asset id → currency → price.
pub type SpotPriceResponse = HashMap<String, HashMap<String, f64>>;
