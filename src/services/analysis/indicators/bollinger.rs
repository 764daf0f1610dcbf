//! Bollinger Bands indicator.

use super::{Indicator, Sma};
use crate::types::BollingerValues;

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(20)
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
///
/// StdDev is the population standard deviation of the same window. A flat
/// window collapses all three bands onto the price.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    sma: Sma,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            sma: Sma::new(20),
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self {
            sma: Sma::new(period),
            std_dev_multiplier,
        }
    }

    /// Calculate population standard deviation.
    fn std_dev(values: &[f64], mean: f64) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let variance: f64 =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerValues;

    fn id(&self) -> &str {
        "bollinger"
    }

    fn min_periods(&self) -> usize {
        self.sma.period()
    }

    fn calculate(&self, closes: &[f64]) -> Option<BollingerValues> {
        let window = self.sma.window(closes)?;

        // Same computation as the standalone SMA so the middle band matches it exactly
        let middle = self.sma.calculate(closes)?;
        let std_dev = Self::std_dev(window, middle);

        Some(BollingerValues {
            upper: middle + self.std_dev_multiplier * std_dev,
            middle,
            lower: middle - self.std_dev_multiplier * std_dev,
        })
    }
}
