//! Simple Moving Average (SMA) indicator.

use super::Indicator;

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the last `period` closes.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// The trailing `period` values, or None if there are not enough.
    pub fn window<'a>(&self, values: &'a [f64]) -> Option<&'a [f64]> {
        if self.period == 0 || values.len() < self.period {
            return None;
        }
        Some(&values[values.len() - self.period..])
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn id(&self) -> &str {
        match self.period {
            20 => "sma20",
            50 => "sma50",
            200 => "sma200",
            _ => "sma",
        }
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, values: &[f64]) -> Option<f64> {
        let window = self.window(values)?;
        Some(window.iter().sum::<f64>() / window.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_ids() {
        assert_eq!(Sma::new(20).id(), "sma20");
        assert_eq!(Sma::new(50).id(), "sma50");
        assert_eq!(Sma::new(200).id(), "sma200");
        assert_eq!(Sma::new(7).id(), "sma");
    }

    #[test]
    fn test_sma_uses_trailing_window() {
        let values: Vec<f64> = (1..=25).map(|v| v as f64).collect();
        // Last 20 values are 6..=25, mean 15.5
        assert_eq!(Sma::new(20).calculate(&values), Some(15.5));
    }

    #[test]
    fn test_sma_insufficient_data() {
        assert!(Sma::new(50).calculate(&[1.0; 49]).is_none());
        assert_eq!(Sma::new(50).calculate(&[1.0; 50]), Some(1.0));
    }

    #[test]
    fn test_sma_zero_period() {
        assert!(Sma::new(0).calculate(&[1.0, 2.0]).is_none());
    }
}
