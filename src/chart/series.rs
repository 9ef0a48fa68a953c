//! Rolling price series backing one chart.

use std::collections::VecDeque;

/// One charted observation: a formatted timestamp label and a price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    /// Timestamp formatted for the owning interval's x-axis.
    pub label: String,
    /// Price in the quote currency.
    pub value: f64,
}

impl PricePoint {
    /// Create a new point.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Bounded, ordered sequence of price points.
///
/// Capacity is fixed at the owning interval's point count. Pushing beyond
/// capacity drops the oldest point, so a live series keeps constant length
/// once full. Replaced wholesale — never reused — when the tracked asset or
/// interval changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    points: VecDeque<PricePoint>,
    capacity: usize,
}

impl PriceSeries {
    /// Create an empty series holding at most `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of points this series holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of points currently held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the series is at capacity.
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    /// Append a point, dropping the oldest one when at capacity.
    pub fn push(&mut self, point: PricePoint) {
        if self.capacity > 0 && self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Points in chronological order, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// The most recent point.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.back()
    }

    /// X-axis labels in chronological order.
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    /// Price values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}
