//! Runtime configuration from environment variables.
//!
//! Unset or unparsable values fall back to defaults; configuration problems
//! never stop the game from starting.

use crate::types::TICK_MS;

/// Finer scales would make the play area wider than any terminal.
pub const MIN_UNITS_PER_COL: f32 = 1.0;

/// Front-end settings. The game rules themselves are not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Target frame interval for the render/tick loop.
    pub frame_ms: u32,
    /// Track units per terminal column.
    pub units_per_col: f32,
    /// Where tracing output goes. Logging is off when unset.
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_ms: TICK_MS,
            units_per_col: 10.0,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    ///
    /// - `CHEESE_STACK_FRAME_MS`: frame interval in ms (1..=1000, default 16)
    /// - `CHEESE_STACK_UNITS_PER_COL`: horizontal scale (>= 1, default 10)
    /// - `CHEESE_STACK_LOG_PATH`: file receiving tracing output
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let frame_ms = lookup("CHEESE_STACK_FRAME_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|ms| (1..=1000).contains(ms))
            .unwrap_or(defaults.frame_ms);

        let units_per_col = lookup("CHEESE_STACK_UNITS_PER_COL")
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|u| u.is_finite() && *u >= MIN_UNITS_PER_COL)
            .unwrap_or(defaults.units_per_col);

        let log_path = lookup("CHEESE_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            frame_ms,
            units_per_col,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn parses_all_values() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("CHEESE_STACK_FRAME_MS", " 33 "),
            ("CHEESE_STACK_UNITS_PER_COL", "8.5"),
            ("CHEESE_STACK_LOG_PATH", "/tmp/cheese.log"),
        ]));
        assert_eq!(cfg.frame_ms, 33);
        assert_eq!(cfg.units_per_col, 8.5);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/cheese.log"));
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("CHEESE_STACK_FRAME_MS", "0"),
            ("CHEESE_STACK_UNITS_PER_COL", "-3"),
            ("CHEESE_STACK_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg, AppConfig::default());

        let cfg = AppConfig::from_lookup(lookup(&[("CHEESE_STACK_FRAME_MS", "fast")]));
        assert_eq!(cfg.frame_ms, TICK_MS);
    }

    #[test]
    fn tiny_scale_falls_back() {
        let cfg = AppConfig::from_lookup(lookup(&[("CHEESE_STACK_UNITS_PER_COL", "0.001")]));
        assert_eq!(cfg.units_per_col, AppConfig::default().units_per_col);

        let cfg = AppConfig::from_lookup(lookup(&[("CHEESE_STACK_UNITS_PER_COL", "1")]));
        assert_eq!(cfg.units_per_col, MIN_UNITS_PER_COL);
    }
}
