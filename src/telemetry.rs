//! Tracing subscriber setup.
//!
//! Library code only emits `tracing` events. The embedding shell calls
//! [`init_tracing`] once at startup to decide where they go.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::FeatureFlags;

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Failed to install tracing subscriber: {0}")]
    InstallFailed(String),
}

/// Builds the event filter: `RUST_LOG` when set, else the configured level.
pub fn build_filter(flags: &FeatureFlags) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&flags.log_level)?),
    }
}

/// Installs the global `fmt` subscriber.
///
/// Returns `Ok(false)` when tracing is disabled by the feature flags.
///
/// # Errors
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_tracing(flags: &FeatureFlags) -> Result<bool, TelemetryError> {
    if !flags.enable_tracing {
        return Ok(false);
    }

    let filter = build_filter(flags)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if flags.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| TelemetryError::InstallFailed(e.to_string()))?;

    tracing::debug!(json = flags.json_logs, "Tracing initialized");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_tracing_installs_nothing() {
        let flags = FeatureFlags {
            enable_tracing: false,
            ..FeatureFlags::default()
        };
        assert!(!init_tracing(&flags).unwrap());
    }

    #[test]
    fn bad_configured_filter_is_rejected() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let flags = FeatureFlags {
            log_level: "symple=loud".to_string(),
            ..FeatureFlags::default()
        };
        assert!(matches!(
            build_filter(&flags),
            Err(TelemetryError::InvalidFilter(_))
        ));
    }

    #[test]
    fn second_install_fails() {
        let flags = FeatureFlags::default();
        let _ = init_tracing(&flags);
        assert!(matches!(
            init_tracing(&flags),
            Err(TelemetryError::InstallFailed(_))
        ));
    }
}
