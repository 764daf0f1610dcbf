use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Longest accepted price history per instrument.
    pub max_history_points: usize,
    /// Most instruments accepted in one batch request.
    pub max_batch_size: usize,
    /// Emit position-level signals alongside the indicator signals.
    pub position_rules_enabled: bool,
    /// Gain percentage above which the profit-booking signal fires.
    pub profit_booking_threshold_pct: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            max_history_points: 10_000,
            max_batch_size: 100,
            position_rules_enabled: false,
            profit_booking_threshold_pct: 20.0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_history_points: lookup("MAX_HISTORY_POINTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_history_points),
            max_batch_size: lookup("MAX_BATCH_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_batch_size),
            position_rules_enabled: lookup("POSITION_RULES_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.position_rules_enabled),
            profit_booking_threshold_pct: lookup("PROFIT_BOOKING_THRESHOLD_PCT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.profit_booking_threshold_pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.max_history_points, 10_000);
        assert_eq!(config.max_batch_size, 100);
        assert!(!config.position_rules_enabled);
        assert_eq!(config.profit_booking_threshold_pct, 20.0);
    }

    #[test]
    fn test_config_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PORT", "8080"),
            ("MAX_BATCH_SIZE", "5"),
            ("POSITION_RULES_ENABLED", "true"),
            ("PROFIT_BOOKING_THRESHOLD_PCT", "35.5"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_batch_size, 5);
        assert!(config.position_rules_enabled);
        assert_eq!(config.profit_booking_threshold_pct, 35.5);
    }

    #[test]
    fn test_config_ignores_unparseable_values() {
        let config = Config::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            "POSITION_RULES_ENABLED" => Some("yes please".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 3001);
        assert!(!config.position_rules_enabled);
    }
}
