//! MACD (Moving Average Convergence Divergence) indicator.

use super::{Ema, Indicator};
use crate::types::MacdValues;

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
#[derive(Debug, Clone)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

impl Indicator for Macd {
    type Output = MacdValues;

    fn id(&self) -> &str {
        "macd"
    }

    fn min_periods(&self) -> usize {
        self.slow_period + self.signal_period
    }

    fn calculate(&self, closes: &[f64]) -> Option<MacdValues> {
        if self.fast_period > self.slow_period || closes.len() < self.min_periods() {
            return None;
        }

        let fast_ema = Ema::new(self.fast_period).series(closes);
        let slow_ema = Ema::new(self.slow_period).series(closes);

        if fast_ema.is_empty() || slow_ema.is_empty() {
            return None;
        }

        // Align the EMAs (fast starts earlier)
        let offset = self.slow_period - self.fast_period;
        let macd_line: Vec<f64> = fast_ema
            .iter()
            .skip(offset)
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal = Ema::new(self.signal_period).calculate(&macd_line)?;
        let value = *macd_line.last()?;

        Some(MacdValues {
            value,
            signal,
            histogram: value - signal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rising(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 * 1.01_f64.powi(i as i32)).collect()
    }

    #[test]
    fn test_macd_min_periods() {
        let macd = Macd::default();
        assert_eq!(macd.id(), "macd");
        assert_eq!(macd.min_periods(), 35);
    }

    #[test]
    fn test_macd_insufficient_data() {
        let macd = Macd::default();
        assert!(macd.calculate(&rising(34)).is_none());
        assert!(macd.calculate(&rising(35)).is_some());
    }

    #[test]
    fn test_macd_flat_series_is_zero() {
        let values = Macd::default().calculate(&[100.0; 200]).unwrap();
        assert_eq!(values.value, 0.0);
        assert_eq!(values.signal, 0.0);
        assert_eq!(values.histogram, 0.0);
    }

    #[test]
    fn test_macd_uptrend_positive() {
        let values = Macd::default().calculate(&rising(200)).unwrap();
        assert!(values.value > 0.0);
        assert!(values.histogram > 0.0);
    }

    #[test]
    fn test_macd_histogram_identity() {
        let closes: Vec<f64> = (0..120).map(|i| 50.0 + (i as f64 * 0.2).cos() * 3.0).collect();
        let values = Macd::default().calculate(&closes).unwrap();
        assert_eq!(values.histogram, values.value - values.signal);
    }
}
