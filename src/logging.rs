//! @acp:module "Logging"
//! @acp:summary "Tracing subscriber setup for the command-line tools"
//! @acp:domain cli
//! @acp:layer infra

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level`. Diagnostics go to stderr so
/// command output on stdout stays clean.
pub fn init_logging(level: &str) -> crate::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| crate::Error::Other(format!("Failed to initialize logging: {}", e)))
}
