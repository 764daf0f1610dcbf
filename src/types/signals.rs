use serde::{Deserialize, Serialize};

/// Whether a signal argues for or against the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Bullish,
    Bearish,
}

/// A single explainable observation derived from one indicator condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    /// Human-readable explanation.
    pub text: String,
    pub polarity: Polarity,
}

impl Signal {
    pub fn new(text: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            text: text.into(),
            polarity,
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.polarity == Polarity::Bullish
    }
}

/// Five-level graded verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Recommendation {
    /// Map a net score (bullish minus bearish signal count) to a verdict.
    ///
    /// The band is asymmetric: a single net bearish signal still reads as
    /// hold, while a single net bullish one is already a buy.
    pub fn from_net_score(net: i32) -> Self {
        match net {
            n if n >= 3 => Recommendation::StrongBuy,
            n if n >= 1 => Recommendation::Buy,
            n if n >= -1 => Recommendation::Hold,
            n if n >= -3 => Recommendation::Sell,
            _ => Recommendation::StrongSell,
        }
    }

    /// Get display label for this recommendation.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
            Recommendation::StrongSell => "Strong Sell",
        }
    }
}
