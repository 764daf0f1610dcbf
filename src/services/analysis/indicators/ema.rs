//! Exponential Moving Average (EMA) indicator.

use super::Indicator;

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. Smoothing factor is
/// `2 / (period + 1)`, seeded with the simple average of the first `period`
/// values.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// EMA at every index from `period - 1` onwards.
    ///
    /// The first element corresponds to `values[period - 1]`. Empty when
    /// there are fewer than `period` values.
    pub fn series(&self, values: &[f64]) -> Vec<f64> {
        let period = self.period;
        if period == 0 || values.len() < period {
            return Vec::new();
        }

        let multiplier = 2.0 / (period as f64 + 1.0);
        let mut ema = Vec::with_capacity(values.len() - period + 1);

        // First EMA is SMA
        let mut current = values.iter().take(period).sum::<f64>() / period as f64;
        ema.push(current);

        for value in &values[period..] {
            current = (value - current) * multiplier + current;
            ema.push(current);
        }

        ema
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn id(&self) -> &str {
        "ema"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, values: &[f64]) -> Option<f64> {
        self.series(values).last().copied()
    }
}
