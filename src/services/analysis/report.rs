//! Report assembly.

use crate::types::{AnalysisReport, IndicatorSet, PositionEconomics};

use super::classifier::Classification;
use super::synthesizer::Synthesis;

/// Assemble the final report. Position economics are copied as supplied.
pub fn build(
    symbol: &str,
    indicators: IndicatorSet,
    synthesis: Synthesis,
    classification: Classification,
    position: PositionEconomics,
) -> AnalysisReport {
    AnalysisReport {
        symbol: symbol.to_uppercase(),
        position,
        indicators,
        recommendation: classification.recommendation,
        action_text: classification.action_text,
        confidence: classification.confidence,
        signals: synthesis.signals,
        bullish_factors: synthesis.bullish_count,
        bearish_factors: synthesis.bearish_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Polarity, Recommendation, Signal};

    #[test]
    fn test_build_copies_inputs() {
        let position = PositionEconomics::from_holding(90.0, 3.0, 100.0);
        let synthesis = Synthesis::from_signals(vec![
            Signal::new("MACD bullish momentum", Polarity::Bullish),
            Signal::new("Overbought — potential pullback", Polarity::Bearish),
        ]);
        let classification = Classification {
            recommendation: Recommendation::Hold,
            confidence: 20,
            action_text: "Hold".to_string(),
        };

        let report = build(
            "msft",
            IndicatorSet::default(),
            synthesis,
            classification,
            position,
        );

        assert_eq!(report.symbol, "MSFT");
        assert_eq!(report.position, position);
        assert_eq!(report.bullish_factors, 1);
        assert_eq!(report.bearish_factors, 1);
        assert_eq!(
            report.signal_texts(),
            vec!["MACD bullish momentum", "Overbought — potential pullback"]
        );
        assert_eq!(report.action_text, "Hold");
    }

    #[test]
    fn test_report_json_shape() {
        let position = PositionEconomics::from_holding(10.0, 1.0, 12.0);
        let report = build(
            "abc",
            IndicatorSet::default(),
            Synthesis::from_signals(vec![Signal::new("MACD bearish momentum", Polarity::Bearish)]),
            Classification {
                recommendation: Recommendation::Hold,
                confidence: 10,
                action_text: "Hold".to_string(),
            },
            position,
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["symbol"], "ABC");
        assert_eq!(json["current_price"], 12.0);
        assert_eq!(json["recommendation"], "hold");
        assert_eq!(json["signals"][0], "MACD bearish momentum");
        assert!(json["indicators"]["rsi"].is_null());
        assert!(json["indicators"]["macd"].is_null());
        assert!(json["indicators"]["moving_averages"]["sma_20"].is_null());
        assert_eq!(json["indicators"]["volume"]["trend"], "stable");
        assert_eq!(json["bearish_factors"], 1);
    }
}
