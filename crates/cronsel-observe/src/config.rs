use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::{
    error::LoggerResult,
    format::LoggerFormat,
    level::LoggerLevel,
    timer::LoggerTimeZone,
};

/// Environment variable holding the filter directives.
pub const ENV_LOG: &str = "CRONSEL_LOG";
/// Environment variable holding the output format.
pub const ENV_LOG_FORMAT: &str = "CRONSEL_LOG_FORMAT";
/// Environment variable holding the timestamp timezone.
pub const ENV_LOG_TZ: &str = "CRONSEL_LOG_TZ";

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: LoggerLevel,
    pub tz: LoggerTimeZone,
    /// Include module targets in each line.
    pub with_targets: bool,
    /// Colorize text output when stdout is a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `CRONSEL_LOG`, `CRONSEL_LOG_FORMAT` and `CRONSEL_LOG_TZ`.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LoggerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(level) = lookup(ENV_LOG) {
            cfg.level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            cfg.format = format.parse()?;
        }
        if let Some(tz) = lookup(ENV_LOG_TZ) {
            cfg.tz = tz.parse()?;
        }
        Ok(cfg)
    }

    /// Color only when enabled and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::LoggerError;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = LoggerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, LoggerConfig::default());
    }

    #[test]
    fn environment_overrides_fields() {
        let cfg = LoggerConfig::from_lookup(lookup(&[
            (ENV_LOG, "cronsel_core=trace,warn"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_LOG_TZ, "local"),
        ]))
        .unwrap();

        assert_eq!(cfg.level.as_str(), "cronsel_core=trace,warn");
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert_eq!(cfg.tz, LoggerTimeZone::Local);
        assert!(cfg.with_targets);
    }

    #[test]
    fn invalid_environment_value_is_an_error() {
        let err = LoggerConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFormat(_)));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: LoggerConfig =
            serde_json::from_str(r#"{"format": "json", "withTargets": false}"#).unwrap();
        assert_eq!(cfg.format, LoggerFormat::Json);
        assert!(!cfg.with_targets);
        assert!(cfg.use_color);
        assert_eq!(cfg.level.as_str(), "info");
    }
}
