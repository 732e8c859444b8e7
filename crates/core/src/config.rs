//! Session configuration
//!
//! Defaults match the classic game (10x20 board, one row per second, 10 points
//! for the first cleared row). Every value can be overridden from the
//! environment:
//!
//! - `BLOCKFALL_COLS`: board width in cells (default 10)
//! - `BLOCKFALL_ROWS`: board height in cells (default 20)
//! - `BLOCKFALL_DROP_MS`: gravity interval in milliseconds (default 1000)
//! - `BLOCKFALL_SEED`: RNG seed (default: chosen by the caller)

use std::str::FromStr;

use thiserror::Error;

use crate::types::{
    DEFAULT_COLS, DEFAULT_ROWS, DROP_INTERVAL_MS, LINE_CLEAR_BASE, MAX_SHAPE_SIDE,
};

/// Smallest board side that fits every piece in every facing
pub const MIN_BOARD_SIDE: u8 = MAX_SHAPE_SIDE as u8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("board must be at least {min}x{min} cells, got {cols}x{rows}")]
    BoardTooSmall { cols: u8, rows: u8, min: u8 },

    #[error("drop interval must be greater than zero")]
    ZeroDropInterval,
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cols: u8,
    pub rows: u8,
    pub drop_interval_ms: u32,
    pub line_clear_base: u32,
    /// `None` leaves the choice to the caller; `Session` falls back to 1.
    pub seed: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            drop_interval_ms: DROP_INTERVAL_MS,
            line_clear_base: LINE_CLEAR_BASE,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create from an arbitrary variable source.
    ///
    /// Unset or blank variables keep their defaults; anything else must parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            cols: parse_var(&lookup, "BLOCKFALL_COLS")?.unwrap_or(defaults.cols),
            rows: parse_var(&lookup, "BLOCKFALL_ROWS")?.unwrap_or(defaults.rows),
            drop_interval_ms: parse_var(&lookup, "BLOCKFALL_DROP_MS")?
                .unwrap_or(defaults.drop_interval_ms),
            line_clear_base: defaults.line_clear_base,
            seed: parse_var(&lookup, "BLOCKFALL_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < MIN_BOARD_SIDE || self.rows < MIN_BOARD_SIDE {
            return Err(ConfigError::BoardTooSmall {
                cols: self.cols,
                rows: self.rows,
                min: MIN_BOARD_SIDE,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }

    pub fn with_size(mut self, cols: u8, rows: u8) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_drop_interval_ms(mut self, drop_interval_ms: u32) -> Self {
        self.drop_interval_ms = drop_interval_ms;
        self
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = SessionConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!((config.cols, config.rows), (10, 20));
        assert_eq!(config.drop_interval_ms, 1000);
        assert_eq!(config.line_clear_base, 10);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = SessionConfig::from_lookup(lookup_from(&[
            ("BLOCKFALL_COLS", "12"),
            ("BLOCKFALL_ROWS", " 24 "),
            ("BLOCKFALL_DROP_MS", "500"),
            ("BLOCKFALL_SEED", "42"),
        ]))
        .unwrap();

        assert_eq!((config.cols, config.rows), (12, 24));
        assert_eq!(config.drop_interval_ms, 500);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_blank_value_keeps_default() {
        let config = SessionConfig::from_lookup(lookup_from(&[("BLOCKFALL_COLS", "  ")])).unwrap();
        assert_eq!(config.cols, 10);
    }

    #[test]
    fn test_unparsable_value_is_an_error() {
        let err =
            SessionConfig::from_lookup(lookup_from(&[("BLOCKFALL_ROWS", "tall")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                var: "BLOCKFALL_ROWS",
                value: "tall".to_string()
            }
        );
        assert_eq!(err.to_string(), "BLOCKFALL_ROWS must be a number, got \"tall\"");
    }

    #[test]
    fn test_validation() {
        assert!(SessionConfig::default().validate().is_ok());
        assert!(matches!(
            SessionConfig::default().with_size(3, 20).validate(),
            Err(ConfigError::BoardTooSmall { cols: 3, .. })
        ));
        assert_eq!(
            SessionConfig::default().with_drop_interval_ms(0).validate(),
            Err(ConfigError::ZeroDropInterval)
        );
    }
}
