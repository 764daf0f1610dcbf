//! Recommendation classifier.

use crate::types::{IndicatorSet, Recommendation};

/// Confidence with no net signal and full indicator coverage.
const BASE_CONFIDENCE: i32 = 50;
/// Confidence gained per net bullish signal.
const NET_SCORE_WEIGHT: i32 = 10;
/// Confidence lost per unavailable indicator.
const UNAVAILABLE_PENALTY: i32 = 5;

/// Verdict, confidence and label for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub recommendation: Recommendation,
    /// 0 to 100.
    pub confidence: u8,
    pub action_text: String,
}

/// `clamp(50 + 10 * net - 5 * unavailable, 0, 100)`.
pub fn confidence(net: i32, unavailable: usize) -> u8 {
    let raw = BASE_CONFIDENCE + NET_SCORE_WEIGHT * net - UNAVAILABLE_PENALTY * unavailable as i32;
    raw.clamp(0, 100) as u8
}

/// Classify signal tallies into a recommendation.
pub fn classify(bullish_count: u32, bearish_count: u32, indicators: &IndicatorSet) -> Classification {
    let net = bullish_count as i32 - bearish_count as i32;
    let recommendation = Recommendation::from_net_score(net);

    Classification {
        recommendation,
        confidence: confidence(net, indicators.unavailable_count()),
        action_text: recommendation.label().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MovingAverages, Reading};

    fn full_set() -> IndicatorSet {
        IndicatorSet {
            rsi: Reading::Available(50.0),
            macd: Reading::Available(crate::types::MacdValues {
                value: 0.0,
                signal: 0.0,
                histogram: 0.0,
            }),
            moving_averages: MovingAverages {
                sma_20: Reading::Available(1.0),
                sma_50: Reading::Available(1.0),
                sma_200: Reading::Available(1.0),
            },
            bollinger_bands: Reading::Available(crate::types::BollingerValues {
                upper: 1.0,
                middle: 1.0,
                lower: 1.0,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_neutral() {
        let result = classify(0, 0, &full_set());
        assert_eq!(result.recommendation, Recommendation::Hold);
        assert_eq!(result.confidence, 50);
        assert_eq!(result.action_text, "Hold");
    }

    #[test]
    fn test_classify_strong_buy() {
        let result = classify(4, 1, &full_set());
        assert_eq!(result.recommendation, Recommendation::StrongBuy);
        assert_eq!(result.confidence, 80);
        assert_eq!(result.action_text, "Strong Buy");
    }

    #[test]
    fn test_classify_sell_and_strong_sell() {
        let result = classify(0, 2, &full_set());
        assert_eq!(result.recommendation, Recommendation::Sell);
        assert_eq!(result.confidence, 30);

        let result = classify(0, 5, &full_set());
        assert_eq!(result.recommendation, Recommendation::StrongSell);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.action_text, "Strong Sell");
    }

    #[test]
    fn test_confidence_penalised_by_missing_indicators() {
        let result = classify(0, 0, &IndicatorSet::default());
        assert_eq!(result.confidence, 20);
    }

    #[test]
    fn test_confidence_saturates() {
        assert_eq!(confidence(10, 0), 100);
        assert_eq!(confidence(-10, 6), 0);
        assert_eq!(confidence(5, 0), 100);
    }

    #[test]
    fn test_confidence_monotonic_in_net() {
        for unavailable in 0..=6 {
            let mut previous = confidence(-12, unavailable);
            for net in -11..=12 {
                let current = confidence(net, unavailable);
                assert!(current >= previous);
                previous = current;
            }
        }
    }
}
