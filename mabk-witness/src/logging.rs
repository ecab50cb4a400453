//! Subscriber setup for the `mabk` binary
//!
//! Library code only emits `tracing` events. Executables install a
//! subscriber once through [`init_tracing`]. Filter resolution order:
//! explicit directives, then `RUST_LOG`, then the default directive.

use crate::{Result, WitnessError};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// How the tracing subscriber should behave
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracingConfig {
    /// Explicit filter directives (e.g. `mabk_backend=trace,info`)
    pub directives: Option<String>,
    /// Used when neither `directives` nor `RUST_LOG` yield a filter
    pub default_directive: String,
    /// Show module paths in output
    pub include_targets: bool,
    /// Colour output
    pub ansi: bool,
    /// Log span close events with their timings
    pub span_timings: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: false,
            ansi: true,
            span_timings: false,
        }
    }
}

impl TracingConfig {
    /// Map a `-v` count onto a default directive
    ///
    /// 0 → `info`, 1 → `debug`, 2 or more → `trace`.
    pub fn from_verbosity(verbosity: u8) -> Self {
        let default_directive = match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        Self {
            default_directive: default_directive.to_string(),
            include_targets: verbosity > 0,
            span_timings: verbosity > 1,
            ..Self::default()
        }
    }

    /// Set explicit filter directives
    pub fn with_directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    /// Enable or disable ANSI colours
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Resolve the filter this configuration would install
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match &self.directives {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|err| WitnessError::config(format!("invalid log filter: {err}"))),
            None => match EnvFilter::try_from_default_env() {
                Ok(filter) => Ok(filter),
                Err(_) => EnvFilter::try_new(&self.default_directive)
                    .map_err(|err| WitnessError::config(format!("invalid log filter: {err}"))),
            },
        }
    }
}

/// Install the global subscriber
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let span_events = if config.span_timings {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(config.include_targets)
        .with_ansi(config.ansi)
        .with_span_events(span_events)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| WitnessError::config(format!("failed to install subscriber: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(TracingConfig::from_verbosity(0).default_directive, "info");
        assert_eq!(TracingConfig::from_verbosity(1).default_directive, "debug");
        assert_eq!(TracingConfig::from_verbosity(5).default_directive, "trace");
        assert!(TracingConfig::from_verbosity(2).span_timings);
    }

    #[test]
    fn test_explicit_directives() {
        let config = TracingConfig::default().with_directives("mabk_backend=trace,warn");
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_invalid_directives() {
        let config = TracingConfig::default().with_directives("mabk_backend=loud");
        assert!(matches!(config.env_filter(), Err(WitnessError::Config(_))));
    }
}
