//! Technical analysis service.
//!
//! Runs the full pipeline for one instrument: indicator computation, signal
//! synthesis, classification and report assembly. Every step is pure, so
//! separate instruments can be analysed in parallel with no coordination.

pub mod classifier;
pub mod indicators;
pub mod report;
pub mod synthesizer;

pub use classifier::{classify, Classification};
pub use indicators::{compute, IndicatorEngine};
pub use synthesizer::{synthesize, synthesize_with_position, Synthesis};

use futures_util::future::join_all;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::error::AnalysisError;
use crate::types::{AnalysisReport, AnalysisRequest, BatchOutcome, PositionEconomics, PriceSeries};

/// Tunables for the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    /// Append position-level signals (profit booking) after the indicator rules.
    pub position_rules_enabled: bool,
    /// Gain percentage above which the profit-booking signal fires.
    pub profit_booking_threshold_pct: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            position_rules_enabled: false,
            profit_booking_threshold_pct: 20.0,
        }
    }
}

impl From<&Config> for AnalysisOptions {
    fn from(config: &Config) -> Self {
        Self {
            position_rules_enabled: config.position_rules_enabled,
            profit_booking_threshold_pct: config.profit_booking_threshold_pct,
        }
    }
}

/// Run the pipeline over an already validated series.
pub fn analyze(
    symbol: &str,
    series: &PriceSeries,
    position: &PositionEconomics,
    options: &AnalysisOptions,
) -> AnalysisReport {
    let indicators = compute(series);
    let synthesis = synthesize_with_position(&indicators, position, options);
    let classification = classify(synthesis.bullish_count, synthesis.bearish_count, &indicators);
    report::build(symbol, indicators, synthesis, classification, *position)
}

/// Validates requests and runs the analysis pipeline.
#[derive(Debug, Clone)]
pub struct AnalysisService {
    options: AnalysisOptions,
    max_history_points: usize,
}

impl AnalysisService {
    /// Create a new analysis service.
    pub fn new(options: AnalysisOptions, max_history_points: usize) -> Self {
        Self {
            options,
            max_history_points,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(AnalysisOptions::from(config), config.max_history_points)
    }

    /// Validate one request and analyse it.
    ///
    /// All validation happens before any indicator is computed.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, AnalysisError> {
        if request.history.len() > self.max_history_points {
            return Err(AnalysisError::HistoryTooLong {
                provided: request.history.len(),
                max: self.max_history_points,
            });
        }

        let current_price = request.position.current_price;
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(AnalysisError::InvalidPosition(format!(
                "current price must be positive, got {}",
                current_price
            )));
        }

        let series = PriceSeries::new(request.history.clone())?;

        debug!(
            "Computing analysis for {} with {} price points",
            request.symbol,
            series.len()
        );

        let report = analyze(&request.symbol, &series, &request.position, &self.options);

        debug!(
            "{}: {} ({} bullish, {} bearish, confidence {}, volume {})",
            report.symbol,
            report.action_text,
            report.bullish_factors,
            report.bearish_factors,
            report.confidence,
            report.indicators.volume.trend.name()
        );

        Ok(report)
    }

    /// Analyse independent instruments concurrently on the blocking pool.
    ///
    /// Output order matches input order. One instrument failing never
    /// affects the others.
    pub async fn analyze_batch(&self, requests: Vec<AnalysisRequest>) -> Vec<BatchOutcome> {
        let tasks = requests.into_iter().map(|request| {
            let service = self.clone();
            async move {
                let symbol = request.symbol.to_uppercase();
                match tokio::task::spawn_blocking(move || service.analyze(&request)).await {
                    Ok(Ok(report)) => BatchOutcome::success(report),
                    Ok(Err(e)) => {
                        warn!("Analysis rejected for {}: {}", symbol, e);
                        BatchOutcome::failure(symbol, e)
                    }
                    Err(e) => {
                        error!("Analysis task for {} failed: {}", symbol, e);
                        BatchOutcome::failure(symbol, format!("analysis task failed: {}", e))
                    }
                }
            }
        });

        join_all(tasks).await
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new(AnalysisOptions::default(), 10_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PricePoint, Recommendation};

    fn request(symbol: &str, closes: &[f64]) -> AnalysisRequest {
        let history = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| PricePoint::new(1_700_000_000_000 + i as i64 * 86_400_000, c, 5_000))
            .collect();
        let last = closes.last().copied().unwrap_or(1.0);
        AnalysisRequest {
            symbol: symbol.to_string(),
            history,
            position: PositionEconomics::from_holding(last, 1.0, last),
        }
    }

    #[test]
    fn test_service_rejects_empty_history() {
        let service = AnalysisService::default();
        let mut req = request("aapl", &[100.0]);
        req.history.clear();
        let err = service.analyze(&req).unwrap_err();
        assert_eq!(err, AnalysisError::InsufficientHistory { provided: 0 });
    }

    #[test]
    fn test_service_rejects_long_history() {
        let service = AnalysisService::new(AnalysisOptions::default(), 10);
        let err = service.analyze(&request("aapl", &[100.0; 11])).unwrap_err();
        assert_eq!(err, AnalysisError::HistoryTooLong { provided: 11, max: 10 });
    }

    #[test]
    fn test_service_rejects_bad_current_price() {
        let service = AnalysisService::default();
        let mut req = request("aapl", &[100.0; 3]);
        req.position.current_price = 0.0;
        assert!(matches!(
            service.analyze(&req),
            Err(AnalysisError::InvalidPosition(_))
        ));
    }

    #[test]
    fn test_service_flat_history_holds() {
        let service = AnalysisService::default();
        let report = service.analyze(&request("aapl", &[100.0; 200])).unwrap();
        assert_eq!(report.recommendation, Recommendation::Hold);
        assert!(report.signals.is_empty());
        assert_eq!(report.confidence, 50);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let service = AnalysisService::default();
        let mut bad = request("bad", &[100.0, 101.0]);
        bad.history[1].close = -3.0;
        let requests = vec![
            request("one", &[100.0; 40]),
            bad,
            request("two", &[100.0; 5]),
        ];

        let outcomes = tokio_test::block_on(service.analyze_batch(requests));

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].symbol, "ONE");
        assert!(outcomes[0].is_success());
        assert_eq!(outcomes[1].symbol, "BAD");
        assert!(outcomes[1].error.as_deref().unwrap().contains("point 1"));
        assert!(outcomes[2].is_success());
    }
}
