//! Chart tracking state machine.
//!
//! Maintains a bounded, continuously-updated price series for exactly one
//! (asset, interval) pair at a time, combining a full-history seed with
//! incremental live ticks. Exactly one series and at most one open tick
//! subscription are owned per tracker; both are replaced wholesale when
//! the tracked pair changes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;

use crate::chart::series::{PricePoint, PriceSeries};
use crate::history::{FetchError, HistorySource};
use crate::intervals::Interval;
use crate::stream::{TickCallback, TickSource, TickSubscription};

/// Lifecycle of a tracked chart.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    /// No asset is being tracked.
    Uninitialized,
    /// A history fetch is in flight.
    Seeding { asset: String, interval: Interval },
    /// Series populated; live ticks merge in when the interval allows.
    Live {
        asset: String,
        interval: Interval,
        series: PriceSeries,
    },
    /// Seeding failed; waiting for a caller-triggered retry.
    Error {
        asset: String,
        interval: Interval,
        message: String,
    },
}

impl TrackerState {
    /// The current series, when one is populated.
    pub fn series(&self) -> Option<&PriceSeries> {
        match self {
            Self::Live { series, .. } => Some(series),
            _ => None,
        }
    }

    /// The seed failure message, when in the error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

struct Shared {
    state: TrackerState,
    /// Bumped by every `track`/`stop`; async completions and tick
    /// callbacks compare against it and discard themselves when stale.
    epoch: u64,
    subscription: Option<TickSubscription>,
}

fn lock_shared(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State machine owning one rolling chart series.
///
/// # Example
///
/// ```rust,ignore
/// use tokendeck::chart::ChartTracker;
/// use tokendeck::history::PriceHistoryClient;
/// use tokendeck::intervals::Interval;
/// use tokendeck::stream::TradeStreamClient;
///
/// let tracker = ChartTracker::new(
///     PriceHistoryClient::default_endpoint()?,
///     TradeStreamClient::default_endpoint(),
/// );
/// tracker.track("solana", Interval::OneHour).await?;
///
/// // Ticks now merge into the series until the pair changes.
/// let series = tracker.series().unwrap();
/// println!("latest: {:?}", series.latest());
/// ```
pub struct ChartTracker<H, T> {
    history: H,
    ticks: T,
    shared: Arc<Mutex<Shared>>,
}

impl<H, T> ChartTracker<H, T>
where
    H: HistorySource,
    T: TickSource,
{
    /// Create a tracker over the given history and tick sources.
    pub fn new(history: H, ticks: T) -> Self {
        Self {
            history,
            ticks,
            shared: Arc::new(Mutex::new(Shared {
                state: TrackerState::Uninitialized,
                epoch: 0,
                subscription: None,
            })),
        }
    }

    /// Begin tracking `asset` at `interval`, replacing whatever was
    /// tracked before.
    ///
    /// The previous live subscription is closed and the previous series
    /// discarded before the seed starts, so no effect of the old context
    /// can land once this call begins. Returns the seed failure when this
    /// call's fetch fails while still current; a call superseded mid-flight
    /// by a newer `track`/`stop` resolves to `Ok` without touching state.
    pub async fn track(&self, asset: &str, interval: Interval) -> Result<(), FetchError> {
        let epoch = {
            let mut shared = lock_shared(&self.shared);
            shared.epoch += 1;
            if let Some(mut subscription) = shared.subscription.take() {
                subscription.unsubscribe();
            }
            shared.state = TrackerState::Seeding {
                asset: asset.to_string(),
                interval,
            };
            shared.epoch
        };
        tracing::debug!(asset, interval = %interval, "seeding chart series");

        let seeded = self.history.fetch_history(asset, interval).await;

        {
            let mut shared = lock_shared(&self.shared);
            if shared.epoch != epoch {
                tracing::debug!(asset, "discarding stale seed result");
                return Ok(());
            }
            match seeded {
                Ok(series) => {
                    shared.state = TrackerState::Live {
                        asset: asset.to_string(),
                        interval,
                        series,
                    };
                }
                Err(err) => {
                    tracing::warn!(asset, error = %err, "chart seed failed");
                    shared.state = TrackerState::Error {
                        asset: asset.to_string(),
                        interval,
                        message: err.to_string(),
                    };
                    return Err(err);
                }
            }
        }

        if interval.is_live() {
            match self.ticks.subscribe(asset, self.tick_callback(epoch)).await {
                Ok(subscription) => {
                    let mut shared = lock_shared(&self.shared);
                    if shared.epoch == epoch {
                        shared.subscription = Some(subscription);
                    } else {
                        // The tracked pair changed while the feed was
                        // connecting; close it straight away.
                        let mut subscription = subscription;
                        subscription.unsubscribe();
                    }
                }
                Err(err) => {
                    // A missing live feed never fails the chart; it simply
                    // stops updating until the next seed.
                    tracing::warn!(asset, error = %err, "live feed unavailable");
                }
            }
        }

        Ok(())
    }

    /// Re-attempt a failed seed with the same parameters.
    ///
    /// No-op unless the tracker is in the error state.
    pub async fn retry(&self) -> Result<(), FetchError> {
        let target = match &lock_shared(&self.shared).state {
            TrackerState::Error {
                asset, interval, ..
            } => Some((asset.clone(), *interval)),
            _ => None,
        };

        match target {
            Some((asset, interval)) => self.track(&asset, interval).await,
            None => Ok(()),
        }
    }

    /// Stop tracking, releasing the live subscription.
    pub fn stop(&self) {
        let mut shared = lock_shared(&self.shared);
        shared.epoch += 1;
        if let Some(mut subscription) = shared.subscription.take() {
            subscription.unsubscribe();
        }
        shared.state = TrackerState::Uninitialized;
        tracing::debug!("chart tracking stopped");
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> TrackerState {
        lock_shared(&self.shared).state.clone()
    }

    /// Snapshot of the current series, when one is populated.
    pub fn series(&self) -> Option<PriceSeries> {
        lock_shared(&self.shared).state.series().cloned()
    }

    fn tick_callback(&self, epoch: u64) -> TickCallback {
        let shared = Arc::clone(&self.shared);
        Box::new(move |price: f64| {
            let mut shared = lock_shared(&shared);
            // Ticks from a superseded subscription, or arriving before the
            // series is populated, are dropped without buffering.
            if shared.epoch != epoch {
                return;
            }
            if let TrackerState::Live {
                interval, series, ..
            } = &mut shared.state
            {
                if !interval.is_live() {
                    return;
                }
                let label = interval.format_timestamp(Local::now());
                series.push(PricePoint::new(label, price));
            }
        })
    }
}
