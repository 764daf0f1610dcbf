use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One observation from the price-history provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp (milliseconds).
    pub time: i64,
    pub close: f64,
    pub volume: i64,
}

impl PricePoint {
    pub fn new(time: i64, close: f64, volume: i64) -> Self {
        Self { time, close, volume }
    }
}

/// Validated, time-ordered price history for one instrument.
///
/// Construction is the only validation point: a `PriceSeries` always holds
/// at least one point, strictly increasing timestamps, positive finite
/// closes and non-negative volumes. Nothing is reordered or clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a history.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, AnalysisError> {
        if points.is_empty() {
            return Err(AnalysisError::InsufficientHistory { provided: 0 });
        }

        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() {
                return Err(malformed(index, "close must be a finite number"));
            }
            if point.close <= 0.0 {
                return Err(malformed(
                    index,
                    format!("close must be positive, got {}", point.close),
                ));
            }
            if point.volume < 0 {
                return Err(malformed(
                    index,
                    format!("volume must be non-negative, got {}", point.volume),
                ));
            }
            if index > 0 && point.time <= points[index - 1].time {
                return Err(malformed(
                    index,
                    format!(
                        "timestamp {} does not follow {}",
                        point.time,
                        points[index - 1].time
                    ),
                ));
            }
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Volumes, oldest first.
    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume as f64).collect()
    }

    pub fn last_close(&self) -> f64 {
        // Non-empty by construction.
        self.points[self.points.len() - 1].close
    }
}

fn malformed(index: usize, reason: impl Into<String>) -> AnalysisError {
    AnalysisError::MalformedSeries {
        index,
        reason: reason.into(),
    }
}
