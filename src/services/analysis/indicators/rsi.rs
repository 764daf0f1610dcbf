//! Relative Strength Index (RSI) indicator.

use super::Indicator;

/// RSI (Relative Strength Index) indicator with Wilder smoothing.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate RSI value from price changes.
    fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
        if period == 0 || closes.len() < period + 1 {
            return None;
        }

        let (gains, losses): (Vec<f64>, Vec<f64>) = closes
            .windows(2)
            .map(|w| {
                let change = w[1] - w[0];
                if change > 0.0 {
                    (change, 0.0)
                } else {
                    (0.0, -change)
                }
            })
            .unzip();

        // Seed with simple averages, then Wilder-smooth the rest
        let mut avg_gain = gains.iter().take(period).sum::<f64>() / period as f64;
        let mut avg_loss = losses.iter().take(period).sum::<f64>() / period as f64;

        for i in period..gains.len() {
            avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
            avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
        }

        // No movement at all reads as neutral
        if avg_gain == 0.0 && avg_loss == 0.0 {
            return Some(50.0);
        }
        if avg_loss == 0.0 {
            return Some(100.0);
        }
        if avg_gain == 0.0 {
            return Some(0.0);
        }

        let rs = avg_gain / avg_loss;
        Some((100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0))
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn id(&self) -> &str {
        "rsi"
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn calculate(&self, closes: &[f64]) -> Option<f64> {
        Self::calculate_rsi(closes, self.period)
    }
}
