use std::path::PathBuf;

use log::debug;
use thiserror::Error;

use crate::notation::{Notation, UnknownNotation};

pub const NOTATION_VAR: &str = "CALC_NOTATION";
pub const HISTORY_VAR: &str = "CALC_HISTORY";
pub const COLOR_VAR: &str = "CALC_COLOR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`CALC_NOTATION` is invalid: {0}")]
    Notation(#[from] UnknownNotation),

    #[error("`{0}` must be a boolean, got `{1}`")]
    NotABool(&'static str, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skips the menu when set.
    pub notation: Option<Notation>,
    pub history_file: Option<PathBuf>,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notation: None,
            history_file: None,
            use_color: true,
        }
    }
}

impl Config {
    /// Reads the process environment. Call after `dotenvy::dotenv()` so a
    /// `.env` file can supply the same variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(v) = non_empty(lookup(NOTATION_VAR)) {
            config.notation = Some(v.parse()?);
        }
        if let Some(v) = non_empty(lookup(HISTORY_VAR)) {
            config.history_file = Some(PathBuf::from(v));
        }
        if let Some(v) = non_empty(lookup(COLOR_VAR)) {
            config.use_color = parse_bool(COLOR_VAR, &v)?;
        }

        debug!("{:?}", config);
        Ok(config)
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

fn parse_bool(var: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::NotABool(var, v.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Ok(Config::default()));
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (NOTATION_VAR, "postfix"),
            (HISTORY_VAR, "/tmp/calc_history"),
            (COLOR_VAR, "false"),
        ]);
        assert_eq!(
            config,
            Ok(Config {
                notation: Some(Notation::Postfix),
                history_file: Some(PathBuf::from("/tmp/calc_history")),
                use_color: false,
            })
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(
            config_from(&[(NOTATION_VAR, "  "), (COLOR_VAR, "")]),
            Ok(Config::default())
        );
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            config_from(&[(NOTATION_VAR, "rpn")]),
            Err(ConfigError::Notation(UnknownNotation("rpn".to_string())))
        );
        assert_eq!(
            config_from(&[(COLOR_VAR, "maybe")]),
            Err(ConfigError::NotABool(COLOR_VAR, "maybe".to_string()))
        );
    }
}
