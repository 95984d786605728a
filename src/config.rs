use crate::logging::LogLevel;

pub const DEFAULT_TICKER_PERIOD_MS: i32 = 5_000;
pub const DEFAULT_PARALLAX_FACTOR: f64 = 0.5;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const TICKER_PERIOD_MS_BOUNDS: (i32, i32) = (500, 60_000);
const PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 2.0);

const TICKER_PERIOD_ATTR: &str = "data-ticker-ms";
const PARALLAX_FACTOR_ATTR: &str = "data-parallax";
const LOG_LEVEL_ATTR: &str = "data-log-level";

/// Runtime knobs read from `data-*` attributes on the mount element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub ticker_period_ms: i32,
    pub parallax_factor: f64,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ticker_period_ms: DEFAULT_TICKER_PERIOD_MS,
            parallax_factor: DEFAULT_PARALLAX_FACTOR,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            ticker_period_ms: parse_i32_with_bounds(
                lookup(TICKER_PERIOD_ATTR),
                DEFAULT_TICKER_PERIOD_MS,
                TICKER_PERIOD_MS_BOUNDS,
            ),
            parallax_factor: parse_f64_with_bounds(
                lookup(PARALLAX_FACTOR_ATTR),
                DEFAULT_PARALLAX_FACTOR,
                PARALLAX_FACTOR_BOUNDS,
            ),
            log_level: lookup(LOG_LEVEL_ATTR)
                .as_deref()
                .and_then(LogLevel::from_str)
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_mount(root: &web_sys::Element) -> Self {
        Self::from_lookup(|name| root.get_attribute(name))
    }
}

fn parse_i32_with_bounds(raw: Option<String>, default: i32, bounds: (i32, i32)) -> i32 {
    raw.and_then(|value| value.trim().parse::<i32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(raw: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> PageConfig {
        let attrs: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        PageConfig::from_lookup(|name| attrs.get(name).cloned())
    }

    #[test]
    fn missing_attributes_use_defaults() {
        assert_eq!(config_from(&[]), PageConfig::default());
    }

    #[test]
    fn valid_attributes_are_applied() {
        let config = config_from(&[
            ("data-ticker-ms", " 2500 "),
            ("data-parallax", "0.25"),
            ("data-log-level", "debug"),
        ]);

        assert_eq!(config.ticker_period_ms, 2_500);
        assert_eq!(config.parallax_factor, 0.25);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_values_fall_back() {
        let config = config_from(&[
            ("data-ticker-ms", "10"),
            ("data-parallax", "9.5"),
            ("data-log-level", "verbose"),
        ]);

        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn unparsable_values_fall_back() {
        let config = config_from(&[("data-ticker-ms", "soon"), ("data-parallax", "NaN")]);

        assert_eq!(config.ticker_period_ms, DEFAULT_TICKER_PERIOD_MS);
        assert_eq!(config.parallax_factor, DEFAULT_PARALLAX_FACTOR);
    }

    #[test]
    fn bounds_are_inclusive() {
        let config = config_from(&[("data-ticker-ms", "60000"), ("data-parallax", "0")]);

        assert_eq!(config.ticker_period_ms, 60_000);
        assert_eq!(config.parallax_factor, 0.0);
    }
}
