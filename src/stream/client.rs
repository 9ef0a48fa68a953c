//! Live trade-stream client.
//!
//! Opens one streaming connection per subscription. Transport errors are
//! logged and end the feed — there is no automatic reconnection; the feed
//! simply goes quiet until the next seed opens a fresh subscription.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::stream::error::{StreamError, StreamResult};
use crate::stream::subscription::TickSubscription;
use crate::stream::types::{trade_channel, StreamRequest, TradeMessage};
use crate::stream::{TickCallback, TickSource};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// Default public trade-stream endpoint.
pub const DEFAULT_STREAM_URL: &str = "wss://stream.binance.com:9443/ws";

/// Connection timeout for the stream handshake.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// WebSocket client for live trade ticks.
#[derive(Debug, Clone)]
pub struct TradeStreamClient {
    url: String,
}

impl TradeStreamClient {
    /// Create a client against the given stream URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Create a client against the default public endpoint.
    pub fn default_endpoint() -> Self {
        Self::new(DEFAULT_STREAM_URL)
    }

    /// The configured stream URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TickSource for TradeStreamClient {
    async fn subscribe(
        &self,
        asset: &str,
        on_tick: TickCallback,
    ) -> StreamResult<TickSubscription> {
        let (ws_stream, _) = tokio::time::timeout(CONNECTION_TIMEOUT, connect_async(&self.url))
            .await
            .map_err(|_| StreamError::Timeout)?
            .map_err(StreamError::from)?;

        let (mut sink, source) = ws_stream.split();

        let request = StreamRequest::subscribe_trades(asset);
        let json = serde_json::to_string(&request)?;
        sink.send(Message::Text(json.into()))
            .await
            .map_err(StreamError::from)?;

        let channel = trade_channel(asset);
        tracing::debug!(%channel, url = %self.url, "trade stream subscribed");

        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
        tokio::spawn(read_task(sink, source, shutdown_rx, on_tick, channel));

        Ok(TickSubscription::new(shutdown_tx))
    }
}

/// Pump inbound messages until the server closes, the transport fails, or
/// the subscription handle asks for shutdown.
async fn read_task(
    mut sink: WsSink,
    mut source: WsSource,
    mut shutdown_rx: mpsc::Receiver<()>,
    mut on_tick: TickCallback,
    channel: String,
) {
    loop {
        tokio::select! {
            msg = source.next() => match msg {
                Some(Ok(Message::Text(text))) => {
                    // Only messages carrying a well-formed price field are
                    // ticks; acks and malformed frames are dropped without
                    // surfacing an error.
                    match serde_json::from_str::<TradeMessage>(&text) {
                        Ok(trade) => {
                            if let Some(price) = trade.price_value() {
                                on_tick(price);
                            }
                        }
                        Err(err) => {
                            tracing::trace!(%channel, error = %err, "ignoring unparseable stream message");
                        }
                    }
                }
                Some(Ok(Message::Ping(data))) => {
                    if let Err(err) = sink.send(Message::Pong(data)).await {
                        tracing::warn!(%channel, error = %err, "failed to answer ping");
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    tracing::info!(%channel, ?frame, "trade stream closed by server");
                    return;
                }
                // Binary, pong and raw frames carry no ticks.
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::error!(%channel, error = %err, "trade stream transport error");
                    return;
                }
                None => {
                    tracing::info!(%channel, "trade stream ended");
                    return;
                }
            },
            // Both an explicit unsubscribe and a dropped handle land here.
            _ = shutdown_rx.recv() => {
                let _ = sink
                    .send(Message::Close(Some(CloseFrame {
                        code: CloseCode::Normal,
                        reason: "client unsubscribe".into(),
                    })))
                    .await;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_urls() {
        let client = TradeStreamClient::default_endpoint();
        assert_eq!(client.url(), DEFAULT_STREAM_URL);

        let client = TradeStreamClient::new("wss://localhost:9443/ws");
        assert_eq!(client.url(), "wss://localhost:9443/ws");
    }
}
