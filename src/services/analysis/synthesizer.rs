//! Signal synthesis.
//!
//! Turns an [`IndicatorSet`] plus the current price into discrete bullish or
//! bearish signals. The rules live in a static, ordered table; each one looks
//! at a single condition and fires at most once. A rule whose indicator is
//! unavailable does not fire.

use crate::types::{IndicatorSet, Polarity, PositionEconomics, Signal, VolumeTrend};

use super::AnalysisOptions;

/// Relative tolerance under which two readings count as equal.
const TOLERANCE: f64 = 1e-9;

/// Inputs every indicator rule can inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub indicators: &'a IndicatorSet,
    pub current_price: f64,
}

/// One row of the rule table.
pub struct SignalRule {
    pub id: &'static str,
    pub text: &'static str,
    pub polarity: Polarity,
    predicate: fn(&RuleContext<'_>) -> bool,
}

impl SignalRule {
    /// Evaluate this rule, returning its signal if it fires.
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Signal> {
        (self.predicate)(ctx).then(|| Signal::new(self.text, self.polarity))
    }
}

/// Indicator rules in display order.
pub static INDICATOR_RULES: &[SignalRule] = &[
    SignalRule {
        id: "rsi_oversold",
        text: "Oversold — potential reversal",
        polarity: Polarity::Bullish,
        predicate: rsi_oversold,
    },
    SignalRule {
        id: "rsi_overbought",
        text: "Overbought — potential pullback",
        polarity: Polarity::Bearish,
        predicate: rsi_overbought,
    },
    SignalRule {
        id: "macd_bullish",
        text: "MACD bullish momentum",
        polarity: Polarity::Bullish,
        predicate: macd_bullish,
    },
    SignalRule {
        id: "macd_bearish",
        text: "MACD bearish momentum",
        polarity: Polarity::Bearish,
        predicate: macd_bearish,
    },
    SignalRule {
        id: "golden_cross",
        text: "Golden cross alignment",
        polarity: Polarity::Bullish,
        predicate: golden_cross,
    },
    SignalRule {
        id: "death_cross",
        text: "Death cross alignment",
        polarity: Polarity::Bearish,
        predicate: death_cross,
    },
    SignalRule {
        id: "lower_band",
        text: "Trading near lower Bollinger Band",
        polarity: Polarity::Bullish,
        predicate: near_lower_band,
    },
    SignalRule {
        id: "upper_band",
        text: "Trading near upper Bollinger Band",
        polarity: Polarity::Bearish,
        predicate: near_upper_band,
    },
    SignalRule {
        id: "volume_uptrend",
        text: "Rising volume confirms uptrend",
        polarity: Polarity::Bullish,
        predicate: volume_confirms_uptrend,
    },
    SignalRule {
        id: "volume_downtrend",
        text: "Falling volume confirms downtrend",
        polarity: Polarity::Bearish,
        predicate: volume_confirms_downtrend,
    },
];

/// `a > b` beyond floating-point noise.
fn exceeds(a: f64, b: f64) -> bool {
    a - b > TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

fn rsi_oversold(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators.rsi.get().is_some_and(|rsi| rsi < 30.0)
}

fn rsi_overbought(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators.rsi.get().is_some_and(|rsi| rsi > 70.0)
}

fn macd_bullish(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators
        .macd
        .get()
        .is_some_and(|m| exceeds(m.histogram, 0.0))
}

fn macd_bearish(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators
        .macd
        .get()
        .is_some_and(|m| exceeds(0.0, m.histogram))
}

fn moving_averages(ctx: &RuleContext<'_>) -> Option<(f64, f64, f64)> {
    let ma = &ctx.indicators.moving_averages;
    Some((ma.sma_20.get()?, ma.sma_50.get()?, ma.sma_200.get()?))
}

fn golden_cross(ctx: &RuleContext<'_>) -> bool {
    moving_averages(ctx).is_some_and(|(s20, s50, s200)| exceeds(s20, s50) && exceeds(s50, s200))
}

fn death_cross(ctx: &RuleContext<'_>) -> bool {
    moving_averages(ctx).is_some_and(|(s20, s50, s200)| exceeds(s50, s20) && exceeds(s200, s50))
}

// Collapsed bands are a single point. A price on that point touches both
// bands, so only a price strictly past it fires.
fn near_lower_band(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators.bollinger_bands.get().is_some_and(|b| {
        if b.is_collapsed() {
            exceeds(b.lower, ctx.current_price)
        } else {
            ctx.current_price <= b.lower
        }
    })
}

fn near_upper_band(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators.bollinger_bands.get().is_some_and(|b| {
        if b.is_collapsed() {
            exceeds(ctx.current_price, b.upper)
        } else {
            ctx.current_price >= b.upper
        }
    })
}

fn volume_confirms_uptrend(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators.volume.trend == VolumeTrend::Increasing
        && ctx
            .indicators
            .moving_averages
            .sma_20
            .get()
            .is_some_and(|sma| exceeds(ctx.current_price, sma))
}

fn volume_confirms_downtrend(ctx: &RuleContext<'_>) -> bool {
    ctx.indicators.volume.trend == VolumeTrend::Decreasing
        && ctx
            .indicators
            .moving_averages
            .sma_20
            .get()
            .is_some_and(|sma| exceeds(sma, ctx.current_price))
}

/// Fired signals with their tallies by polarity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Synthesis {
    pub signals: Vec<Signal>,
    pub bullish_count: u32,
    pub bearish_count: u32,
}

impl Synthesis {
    pub fn from_signals(signals: Vec<Signal>) -> Self {
        let bullish_count = signals.iter().filter(|s| s.is_bullish()).count() as u32;
        let bearish_count = signals.len() as u32 - bullish_count;
        Self {
            signals,
            bullish_count,
            bearish_count,
        }
    }

    pub fn net_score(&self) -> i32 {
        self.bullish_count as i32 - self.bearish_count as i32
    }
}

/// Apply the indicator rule table.
pub fn synthesize(indicators: &IndicatorSet, current_price: f64) -> Synthesis {
    let ctx = RuleContext {
        indicators,
        current_price,
    };
    let signals = INDICATOR_RULES
        .iter()
        .filter_map(|rule| rule.evaluate(&ctx))
        .collect();
    Synthesis::from_signals(signals)
}

/// Position-level signals, appended after the indicator rules when enabled.
pub fn position_signals(position: &PositionEconomics, options: &AnalysisOptions) -> Vec<Signal> {
    if !options.position_rules_enabled {
        return Vec::new();
    }

    let mut signals = Vec::new();
    if position.gain_loss_percentage > options.profit_booking_threshold_pct {
        signals.push(Signal::new(
            format!(
                "Position up {:.1}% — consider partial profit booking",
                position.gain_loss_percentage
            ),
            Polarity::Bearish,
        ));
    }
    signals
}

/// Apply the indicator rules against the position's current price, followed
/// by the position rules if enabled.
pub fn synthesize_with_position(
    indicators: &IndicatorSet,
    position: &PositionEconomics,
    options: &AnalysisOptions,
) -> Synthesis {
    let mut synthesis = synthesize(indicators, position.current_price);
    if options.position_rules_enabled {
        let mut signals = synthesis.signals;
        signals.extend(position_signals(position, options));
        synthesis = Synthesis::from_signals(signals);
    }
    synthesis
}
