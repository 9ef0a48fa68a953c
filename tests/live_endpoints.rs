//! Integration tests against the public market-data endpoints.
//!
//! These tests require network access and are marked as ignored by
//! default. Run with: `cargo test --test live_endpoints -- --ignored`

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokendeck::history::{HistorySource, PriceHistoryClient};
use tokendeck::intervals::Interval;
use tokendeck::stream::{TickSource, TradeStreamClient};

/// Test fetching a daily history window
#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_history() {
    let client = PriceHistoryClient::default_endpoint().expect("failed to build client");

    let series = client
        .fetch_history("solana", Interval::OneDay)
        .await
        .expect("history fetch failed");

    assert_eq!(series.capacity(), 24);
    assert!(!series.is_empty());
    assert!(series.values().iter().all(|&v| v >= 0.0));
}

/// Test fetching a spot price
#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_spot_price() {
    let client = PriceHistoryClient::default_endpoint().expect("failed to build client");

    let price = client
        .fetch_spot_price("solana")
        .await
        .expect("spot price fetch failed");

    assert!(price > 0.0);
}

/// Test an unknown asset surfaces an error rather than an empty series
#[tokio::test]
#[ignore = "requires network access"]
async fn test_fetch_history_unknown_asset() {
    let client = PriceHistoryClient::default_endpoint().expect("failed to build client");

    let result = client
        .fetch_history("not-a-real-asset-id", Interval::OneDay)
        .await;

    assert!(result.is_err());
}

/// Test receiving at least one live trade tick
#[tokio::test]
#[ignore = "requires network access"]
async fn test_receive_live_tick() {
    let client = TradeStreamClient::default_endpoint();
    let ticks: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));

    let sink = Arc::clone(&ticks);
    let mut subscription = client
        .subscribe(
            "sol",
            Box::new(move |price| sink.lock().unwrap().push(price)),
        )
        .await
        .expect("subscribe failed");

    // SOL/USDT trades continuously; a few seconds is plenty.
    tokio::time::sleep(Duration::from_secs(10)).await;
    subscription.unsubscribe();

    let ticks = ticks.lock().unwrap();
    assert!(!ticks.is_empty(), "no ticks received");
    assert!(ticks.iter().all(|&p| p > 0.0));
}
