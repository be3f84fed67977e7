//! Telemetry initialization.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Emit JSON log lines instead of human-readable ones.
    pub json_logs: bool,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env(verbosity: u8) -> Self {
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            verbosity,
        }
    }

    fn default_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn,board_cli=info,board_infra=info",
            1 => "info,board_cli=debug,board_infra=debug",
            _ => "debug,board_cli=trace,board_infra=trace",
        }
    }
}

/// Initialize tracing. Logs go to stderr so command output stays parseable.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!(json_logs = config.json_logs, "Telemetry initialized");
}
