use crate::settings::Log;
use anyhow::{Result, anyhow};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

const BOOTSTRAP_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    pub filter: String,
}

impl From<&Log> for DiagnosticsConfig {
    fn from(log: &Log) -> Self {
        Self {
            filter: log.filter.clone(),
        }
    }
}

/// Handle on the global `tracing` subscriber used for the crate's own
/// events. Output goes to stderr so it never mixes with logger lines.
pub struct Diagnostics {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl Diagnostics {
    /// Installs the global subscriber with a `warn` filter until settings
    /// are known. Fails if another subscriber is already installed.
    pub fn new_bootstrap() -> Result<Self> {
        let (filter, reload_handle) = reload::Layer::new(EnvFilter::new(BOOTSTRAP_FILTER));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow!(e))?;

        Ok(Self { reload_handle })
    }

    pub fn reload_from_config(&self, config: &DiagnosticsConfig) -> Result<()> {
        let filter = EnvFilter::try_new(&config.filter).map_err(|e| anyhow!(e))?;
        self.reload_handle.reload(filter).map_err(|e| anyhow!(e))?;
        tracing::debug!(filter = %config.filter, "diagnostics filter reloaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_follows_log_settings() {
        let log = Log {
            filter: "lvlog=trace".to_string(),
            ..Log::default()
        };
        assert_eq!(
            DiagnosticsConfig::from(&log),
            DiagnosticsConfig {
                filter: "lvlog=trace".to_string()
            }
        );
    }

    #[test]
    fn bootstrap_then_reload() {
        let diagnostics = Diagnostics::new_bootstrap().unwrap();
        let config = DiagnosticsConfig {
            filter: "lvlog=debug".to_string(),
        };
        diagnostics.reload_from_config(&config).unwrap();

        let bad = DiagnosticsConfig {
            filter: "lvlog=notalevel".to_string(),
        };
        assert!(diagnostics.reload_from_config(&bad).is_err());
    }
}
