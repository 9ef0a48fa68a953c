//! Chart series state: the rolling window and the tracker that owns it.
//!
//! [`ChartTracker`] is the piece UI bindings talk to: it seeds a
//! [`PriceSeries`] from the history source, folds live ticks into it for
//! the live-eligible interval, and exposes an explicit lifecycle whose
//! transitions happen only on `track`/`stop`/`retry` calls — never behind
//! the caller's back.

pub mod series;
pub mod tracker;

pub use series::{PricePoint, PriceSeries};
pub use tracker::{ChartTracker, TrackerState};
