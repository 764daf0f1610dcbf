use serde::{Deserialize, Serialize, Serializer};

use super::{IndicatorSet, PricePoint, Recommendation, Signal};

/// Position economics supplied by the portfolio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionEconomics {
    pub current_price: f64,
    pub purchase_price: f64,
    pub quantity: f64,
    pub invested_value: f64,
    pub current_value: f64,
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
}

impl PositionEconomics {
    /// Derive position economics from a holding.
    ///
    /// Percentage gain is 0 when nothing was invested.
    pub fn from_holding(purchase_price: f64, quantity: f64, current_price: f64) -> Self {
        let invested_value = purchase_price * quantity;
        let current_value = current_price * quantity;
        let gain_loss = current_value - invested_value;
        let gain_loss_percentage = if invested_value > 0.0 {
            gain_loss / invested_value * 100.0
        } else {
            0.0
        };

        Self {
            current_price,
            purchase_price,
            quantity,
            invested_value,
            current_value,
            gain_loss,
            gain_loss_percentage,
        }
    }
}

/// One instrument to analyse: its history and the held position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub symbol: String,
    pub history: Vec<PricePoint>,
    pub position: PositionEconomics,
}

/// The complete verdict for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub symbol: String,
    #[serde(flatten)]
    pub position: PositionEconomics,
    pub indicators: IndicatorSet,
    pub recommendation: Recommendation,
    pub action_text: String,
    /// 0 to 100.
    pub confidence: u8,
    /// Fired signals in rule order. Serialized as their texts.
    #[serde(serialize_with = "serialize_signal_texts")]
    pub signals: Vec<Signal>,
    pub bullish_factors: u32,
    pub bearish_factors: u32,
}

impl AnalysisReport {
    /// Signal texts in rule order.
    pub fn signal_texts(&self) -> Vec<&str> {
        self.signals.iter().map(|s| s.text.as_str()).collect()
    }
}

fn serialize_signal_texts<S>(signals: &[Signal], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(signals.iter().map(|s| s.text.as_str()))
}

/// Result of one instrument in a batch. Exactly one of `report` and `error`
/// is set.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchOutcome {
    pub fn success(report: AnalysisReport) -> Self {
        Self {
            symbol: report.symbol.clone(),
            report: Some(report),
            error: None,
        }
    }

    pub fn failure(symbol: String, error: impl ToString) -> Self {
        Self {
            symbol,
            report: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.report.is_some()
    }
}
