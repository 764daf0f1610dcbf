//! Technical indicator implementations and the engine that runs them.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod volume;

pub use bollinger::BollingerBands;
pub use ema::Ema;
pub use macd::Macd;
pub use rsi::Rsi;
pub use sma::Sma;
pub use volume::VolumeTrendClassifier;

use tracing::trace;

use crate::types::{IndicatorSet, MovingAverages, PriceSeries, Reading};

/// Trait for implementing technical indicators over a value series.
pub trait Indicator {
    type Output;

    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Minimum number of periods required for calculation.
    fn min_periods(&self) -> usize;

    /// Calculate the latest reading from oldest-first values.
    /// Returns None if there is not enough data.
    fn calculate(&self, values: &[f64]) -> Option<Self::Output>;

    /// Calculate into a [`Reading`], marking short input as unavailable.
    fn reading(&self, values: &[f64]) -> Reading<Self::Output> {
        if values.len() < self.min_periods() {
            trace!(
                "{} unavailable: {} of {} periods",
                self.id(),
                values.len(),
                self.min_periods()
            );
            return Reading::Unavailable;
        }
        self.calculate(values).into()
    }
}

/// Runs the fixed indicator set over a price series.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    rsi: Rsi,
    macd: Macd,
    sma_20: Sma,
    sma_50: Sma,
    sma_200: Sma,
    bollinger: BollingerBands,
    volume: VolumeTrendClassifier,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self {
            rsi: Rsi::default(),
            macd: Macd::default(),
            sma_20: Sma::new(20),
            sma_50: Sma::new(50),
            sma_200: Sma::new(200),
            bollinger: BollingerBands::default(),
            volume: VolumeTrendClassifier::default(),
        }
    }
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute every indicator. Never fails: indicators lacking history are
    /// reported as unavailable.
    pub fn compute(&self, series: &PriceSeries) -> IndicatorSet {
        let closes = series.closes();
        let volumes = series.volumes();

        IndicatorSet {
            rsi: self.rsi.reading(&closes),
            macd: self.macd.reading(&closes),
            moving_averages: MovingAverages {
                sma_20: self.sma_20.reading(&closes),
                sma_50: self.sma_50.reading(&closes),
                sma_200: self.sma_200.reading(&closes),
            },
            bollinger_bands: self.bollinger.reading(&closes),
            volume: self.volume.calculate(&volumes).unwrap_or_default(),
        }
    }
}

/// Compute the standard indicator set for a series.
pub fn compute(series: &PriceSeries) -> IndicatorSet {
    IndicatorEngine::default().compute(series)
}
