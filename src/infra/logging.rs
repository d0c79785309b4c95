//! For setting up logging.

use super::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer, Registry,
};

/// Flushes logs upon being dropped.
#[derive(Debug)]
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// Initializes logging.
///
/// `RUST_LOG` takes precedence over the configured filter.
/// Fails if a global subscriber has already been set.
pub fn init_logging(config: &LoggingConfig) -> Result<LogGuard, TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let (non_blocking_stdout, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let stdout: Box<dyn Layer<Registry> + Send + Sync> = if config.json {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking_stdout)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_stdout)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(stdout.with_filter(filter))
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(LogGuard {
        _guards: vec![stdout_guard],
    })
}
