use std::str::FromStr;

use thiserror::Error;

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
pub const ERROR_MODE_ENV: &str = "ERROR_MODE";

/// How handler failures are reported to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Error kind mapped to an HTTP status, JSON `{"message": ...}` body.
    #[default]
    Status,
    /// Status 200 with the bare `"<Kind>: <message>"` string as body, for
    /// clients that only ever check the body.
    Legacy,
}

impl FromStr for ErrorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "legacy" => Ok(Self::Legacy),
            other => Err(ConfigError::Invalid {
                name: ERROR_MODE_ENV,
                value: other.to_string(),
            }),
        }
    }
}

/// Errors raised while reading configuration at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has unsupported value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Handler configuration, read once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    /// DynamoDB table holding announcements.
    pub table_name: String,
    pub error_mode: ErrorMode,
}

impl HandlerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let table_name = lookup(TABLE_NAME_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(TABLE_NAME_ENV))?;

        let error_mode = match lookup(ERROR_MODE_ENV) {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => ErrorMode::default(),
        };

        Ok(Self {
            table_name,
            error_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name: &str| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn table_name_is_required() {
        assert_eq!(
            HandlerConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(TABLE_NAME_ENV))
        );
    }

    #[test]
    fn blank_table_name_counts_as_missing() {
        assert_eq!(
            HandlerConfig::from_lookup(lookup(&[(TABLE_NAME_ENV, "  ")])),
            Err(ConfigError::Missing(TABLE_NAME_ENV))
        );
    }

    #[test]
    fn defaults_to_status_mode() {
        let config = HandlerConfig::from_lookup(lookup(&[(TABLE_NAME_ENV, "announcements")]))
            .unwrap();
        assert_eq!(config.table_name, "announcements");
        assert_eq!(config.error_mode, ErrorMode::Status);
    }

    #[test]
    fn legacy_mode_is_case_insensitive() {
        let config = HandlerConfig::from_lookup(lookup(&[
            (TABLE_NAME_ENV, "announcements"),
            (ERROR_MODE_ENV, "Legacy"),
        ]))
        .unwrap();
        assert_eq!(config.error_mode, ErrorMode::Legacy);
    }

    #[test]
    fn rejects_unknown_error_mode() {
        let err = HandlerConfig::from_lookup(lookup(&[
            (TABLE_NAME_ENV, "announcements"),
            (ERROR_MODE_ENV, "quiet"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: ERROR_MODE_ENV, .. }));
    }
}
