//! For reading application configuration.

use super::error::ConfigError;
use serde::Deserialize;

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives, used when `RUST_LOG` is not set.
    pub filter: String,
    /// Log as json instead of plain text.
    pub json: bool,
}

impl Config {
    /// Loads configuration from defaults overridden by `source`.
    pub fn from_source<S>(source: S) -> Result<Config, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = defaults()?.add_source(source).build()?.try_deserialize()?;
        Ok(config)
    }
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    let builder = config::Config::builder()
        .set_default("logging.filter", "info,hello=debug")?
        .set_default("logging.json", false)?;
    Ok(builder)
}

/// Variables such as `APP__LOGGING__JSON=true`.
fn app_environment() -> config::Environment {
    config::Environment::with_prefix("app").separator("__")
}

fn load<F, E>(file: F, environment: E) -> Result<Config, ConfigError>
where
    F: config::Source + Send + Sync + 'static,
    E: config::Source + Send + Sync + 'static,
{
    let config = defaults()?
        .add_source(file)
        .add_source(environment)
        .build()?
        .try_deserialize()?;
    Ok(config)
}

/// Retrieve [`Config`] from the optional `config` file and `APP__` environment variables.
#[tracing::instrument]
pub fn load_config() -> Result<Config, ConfigError> {
    load(
        config::File::with_name("config").required(false),
        app_environment(),
    )
}
