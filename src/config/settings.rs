//! Logging settings loaded from `TOOLBELT_*` variables

use super::env_vars::{env_int, env_string};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Filter directive variable, e.g. `TOOLBELT_LOG=toolbelt=debug`
pub const LOG_FILTER_VAR: &str = "TOOLBELT_LOG";
/// Verbosity variable, 0 through 3
pub const LOG_VERBOSE_VAR: &str = "TOOLBELT_LOG_VERBOSE";

const DEFAULT_FILTER: &str = "warn";
const MAX_VERBOSITY: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive string
    pub filter: String,
    /// 0 = plain, 2 = show targets, 3 = also thread ids and line numbers
    pub verbosity: u8,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            verbosity: 0,
        }
    }
}

impl LoggingSettings {
    /// Load settings from the process environment
    pub fn load() -> Result<Self> {
        Self::from_env(&ProcessEnv)
    }

    /// Load settings from any environment source
    ///
    /// A blank filter falls back to the default; verbosity is clamped to 0..=3.
    pub fn from_env<E: EnvSource>(env: &E) -> Result<Self> {
        let filter = env_string(env, LOG_FILTER_VAR, DEFAULT_FILTER)?;
        let filter = if filter.trim().is_empty() {
            DEFAULT_FILTER.to_string()
        } else {
            filter.trim().to_string()
        };

        let raw_verbosity = env_int(env, LOG_VERBOSE_VAR, 0)?;
        let verbosity = raw_verbosity.clamp(0, MAX_VERBOSITY as i64) as u8;
        if raw_verbosity != verbosity as i64 {
            warn!(
                "${} = {} is outside 0..={}, using {}",
                LOG_VERBOSE_VAR, raw_verbosity, MAX_VERBOSITY, verbosity
            );
        }

        Ok(Self { filter, verbosity })
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity.min(MAX_VERBOSITY);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;

    #[test]
    fn test_defaults_when_unset() {
        let settings = LoggingSettings::from_env(&MockEnv::new()).unwrap();
        assert_eq!(settings, LoggingSettings::default());
    }

    #[test]
    fn test_reads_filter_and_verbosity() {
        let env = MockEnv::new()
            .with_var(LOG_FILTER_VAR, " toolbelt=debug ")
            .with_var(LOG_VERBOSE_VAR, "2");
        let settings = LoggingSettings::from_env(&env).unwrap();
        assert_eq!(settings.filter, "toolbelt=debug");
        assert_eq!(settings.verbosity, 2);
    }

    #[test]
    fn test_verbosity_is_clamped() {
        let env = MockEnv::new().with_var(LOG_VERBOSE_VAR, "9");
        assert_eq!(LoggingSettings::from_env(&env).unwrap().verbosity, 3);

        let env = MockEnv::new().with_var(LOG_VERBOSE_VAR, "-1");
        assert_eq!(LoggingSettings::from_env(&env).unwrap().verbosity, 0);
    }

    #[test]
    fn test_blank_filter_uses_default() {
        let env = MockEnv::new().with_var(LOG_FILTER_VAR, "  ");
        assert_eq!(LoggingSettings::from_env(&env).unwrap().filter, "warn");
    }

    #[test]
    fn test_builders() {
        let settings = LoggingSettings::default()
            .with_filter("trace")
            .with_verbosity(7);
        assert_eq!(settings.filter, "trace");
        assert_eq!(settings.verbosity, 3);
    }
}
