//! Wire types for the trade-stream protocol.

use serde::{Deserialize, Serialize};

/// Fixed quote currency for trade-pair subscriptions.
pub const QUOTE_CURRENCY: &str = "usdt";

/// Channel name for an asset's trade stream (e.g. `solusdt@trade`).
pub fn trade_channel(asset: &str) -> String {
    format!("{}{}@trade", asset.to_lowercase(), QUOTE_CURRENCY)
}

/// Client → server subscription request.
#[derive(Debug, Clone, Serialize)]
pub struct StreamRequest {
    pub method: String,
    pub params: Vec<String>,
    pub id: u64,
}

impl StreamRequest {
    /// Subscribe to trade events for one asset, lower-cased and paired
    /// against the fixed quote currency.
    pub fn subscribe_trades(asset: &str) -> Self {
        Self {
            method: "SUBSCRIBE".to_string(),
            params: vec![trade_channel(asset)],
            id: 1,
        }
    }

    /// Unsubscribe from an asset's trade events.
    pub fn unsubscribe_trades(asset: &str) -> Self {
        Self {
            method: "UNSUBSCRIBE".to_string(),
            params: vec![trade_channel(asset)],
            id: 2,
        }
    }
}

/// Server → client trade event.
///
/// Only the price field matters; acks and any other message shape simply
/// carry no price and are dropped by the reader.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeMessage {
    /// Trade price as a decimal string.
    #[serde(rename = "p")]
    pub price: Option<String>,
}

impl TradeMessage {
    /// Parsed price, if the message carried a well-formed one.
    pub fn price_value(&self) -> Option<f64> {
        self.price.as_deref().and_then(|p| p.parse::<f64>().ok())
    }
}
