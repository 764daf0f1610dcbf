use serde::{Deserialize, Serialize};

/// An indicator value, or an explicit marker that the history was too short
/// to compute it.
///
/// Serializes as the bare value when available and as `null` otherwise, so a
/// short history can never pass for a zero reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading<T> {
    Available(T),
    Unavailable,
}

impl<T> Default for Reading<T> {
    fn default() -> Self {
        Reading::Unavailable
    }
}

impl<T> Reading<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Reading::Available(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Reading::Available(v) => Some(v),
            Reading::Unavailable => None,
        }
    }
}

impl<T: Copy> Reading<T> {
    /// The value, if available.
    pub fn get(&self) -> Option<T> {
        self.as_option().copied()
    }
}

impl<T> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Reading::Available(v),
            None => Reading::Unavailable,
        }
    }
}

/// MACD line, signal line and histogram at the latest period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValues {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Simple moving averages over the 20, 50 and 200 most recent closes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MovingAverages {
    pub sma_20: Reading<f64>,
    pub sma_50: Reading<f64>,
    pub sma_200: Reading<f64>,
}

/// Bollinger band levels. `upper >= middle >= lower` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerValues {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerValues {
    /// True when the bands have zero width (flat price window).
    pub fn is_collapsed(&self) -> bool {
        self.upper <= self.lower
    }
}

/// Direction of recent volume relative to the preceding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VolumeTrend {
    Increasing,
    Decreasing,
    #[default]
    Stable,
}

impl VolumeTrend {
    pub fn name(&self) -> &'static str {
        match self {
            VolumeTrend::Increasing => "increasing",
            VolumeTrend::Decreasing => "decreasing",
            VolumeTrend::Stable => "stable",
        }
    }
}

/// Volume classification plus the mean volume over the analysed window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct VolumeSummary {
    pub trend: VolumeTrend,
    pub average: f64,
}

/// Every indicator computed for one price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct IndicatorSet {
    pub rsi: Reading<f64>,
    pub macd: Reading<MacdValues>,
    pub moving_averages: MovingAverages,
    pub bollinger_bands: Reading<BollingerValues>,
    pub volume: VolumeSummary,
}

impl IndicatorSet {
    /// Number of unavailable readings among RSI, MACD, the three SMAs and
    /// the Bollinger bands (0 to 6). Volume is always available.
    pub fn unavailable_count(&self) -> usize {
        [
            self.rsi.is_available(),
            self.macd.is_available(),
            self.moving_averages.sma_20.is_available(),
            self.moving_averages.sma_50.is_available(),
            self.moving_averages.sma_200.is_available(),
            self.bollinger_bands.is_available(),
        ]
        .iter()
        .filter(|available| !**available)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_serializes_unavailable_as_null() {
        let reading: Reading<f64> = Reading::Unavailable;
        assert_eq!(serde_json::to_string(&reading).unwrap(), "null");

        let reading = Reading::Available(42.5);
        assert_eq!(serde_json::to_string(&reading).unwrap(), "42.5");
    }

    #[test]
    fn test_reading_deserializes_null() {
        let reading: Reading<f64> = serde_json::from_str("null").unwrap();
        assert_eq!(reading, Reading::Unavailable);

        let reading: Reading<f64> = serde_json::from_str("7.0").unwrap();
        assert_eq!(reading, Reading::Available(7.0));
    }

    #[test]
    fn test_reading_from_option() {
        assert_eq!(Reading::from(Some(1.0)), Reading::Available(1.0));
        assert_eq!(Reading::<f64>::from(None), Reading::Unavailable);
    }

    #[test]
    fn test_unavailable_count_for_empty_set() {
        assert_eq!(IndicatorSet::default().unavailable_count(), 6);
    }

    #[test]
    fn test_unavailable_count_partial() {
        let set = IndicatorSet {
            rsi: Reading::Available(55.0),
            moving_averages: MovingAverages {
                sma_20: Reading::Available(100.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(set.unavailable_count(), 4);
    }

    #[test]
    fn test_volume_trend_serialization() {
        let json = serde_json::to_string(&VolumeTrend::Increasing).unwrap();
        assert_eq!(json, "\"increasing\"");
    }
}
