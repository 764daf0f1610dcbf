//! Volume trend classification.

use super::Indicator;
use crate::types::{VolumeSummary, VolumeTrend};

/// Compares mean volume over the most recent periods to the mean over the
/// periods just before them.
///
/// With the defaults, the last 5 periods are compared against the 20 before
/// them and a move of more than 10% either way is a trend. Shorter histories
/// shrink both windows proportionally; fewer than 2 periods is always stable.
#[derive(Debug, Clone)]
pub struct VolumeTrendClassifier {
    recent_window: usize,
    prior_window: usize,
    threshold: f64,
}

impl Default for VolumeTrendClassifier {
    fn default() -> Self {
        Self {
            recent_window: 5,
            prior_window: 20,
            threshold: 0.10,
        }
    }
}

impl VolumeTrendClassifier {
    pub fn new(recent_window: usize, prior_window: usize, threshold: f64) -> Self {
        Self {
            recent_window: recent_window.max(1),
            prior_window: prior_window.max(1),
            threshold,
        }
    }

    /// Window sizes (recent, prior) to use for `len` available periods.
    fn windows(&self, len: usize) -> (usize, usize) {
        let full = self.recent_window + self.prior_window;
        if len >= full {
            return (self.recent_window, self.prior_window);
        }
        let recent = (len * self.recent_window / full).max(1);
        let prior = (len - recent).min(self.prior_window);
        (recent, prior)
    }

    fn classify(&self, recent_mean: f64, prior_mean: f64) -> VolumeTrend {
        if prior_mean <= 0.0 {
            return if recent_mean > 0.0 {
                VolumeTrend::Increasing
            } else {
                VolumeTrend::Stable
            };
        }

        if recent_mean > prior_mean * (1.0 + self.threshold) {
            VolumeTrend::Increasing
        } else if recent_mean < prior_mean * (1.0 - self.threshold) {
            VolumeTrend::Decreasing
        } else {
            VolumeTrend::Stable
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

impl Indicator for VolumeTrendClassifier {
    type Output = VolumeSummary;

    fn id(&self) -> &str {
        "volume"
    }

    fn min_periods(&self) -> usize {
        0
    }

    fn calculate(&self, volumes: &[f64]) -> Option<VolumeSummary> {
        if volumes.len() < 2 {
            return Some(VolumeSummary {
                trend: VolumeTrend::Stable,
                average: volumes.first().copied().unwrap_or(0.0),
            });
        }

        let (recent, prior) = self.windows(volumes.len());
        let window = &volumes[volumes.len() - recent - prior..];
        let (prior_slice, recent_slice) = window.split_at(prior);

        Some(VolumeSummary {
            trend: self.classify(mean(recent_slice), mean(prior_slice)),
            average: mean(window),
        })
    }
}
