//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Service configuration.
    pub service: Service,

    /// Upstream catalog configuration.
    pub upstream: Upstream,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,
}

/// Upstream catalog configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Upstream {
    /// Base URL of the upstream REST API.
    #[default("https://dummyjson.com".to_owned())]
    pub base_url: String,
}

impl From<Upstream> for service::infra::upstream::Config {
    fn from(value: Upstream) -> Self {
        let Upstream { base_url } = value;
        Self { base_url }
    }
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Freshness window of fetched product data.
    #[default(time::Duration::from_secs(60 * 60))]
    #[serde(with = "humantime_serde")]
    pub products_freshness: time::Duration,

    /// Freshness window of fetched category data.
    #[default(time::Duration::from_secs(60 * 60 * 24))]
    #[serde(with = "humantime_serde")]
    pub categories_freshness: time::Duration,

    /// Cosmetic delay before a load-more reveal settles.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub reveal_delay: time::Duration,

    /// Duration of the transient filter-transition state.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub transition: time::Duration,

    /// Service tasks configuration.
    pub tasks: Tasks,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            products_freshness: _,
            categories_freshness: _,
            reveal_delay,
            transition,
            tasks: Tasks { sweep_stale_entries },
        } = value;
        Self {
            list: service::list::Config {
                reveal_delay,
                transition,
            },
            sweep_stale_entries:
                service::task::sweep_stale_entries::Config {
                    interval: sweep_stale_entries.interval,
                },
        }
    }
}

impl From<Service> for service::infra::revalidate::Config {
    fn from(value: Service) -> Self {
        let Service {
            products_freshness,
            categories_freshness,
            reveal_delay: _,
            transition: _,
            tasks: _,
        } = value;
        Self {
            products: products_freshness,
            categories: categories_freshness,
        }
    }
}

/// Service tasks configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Tasks {
    /// `SweepStaleEntries` task configuration.
    pub sweep_stale_entries: Task,
}

/// Service task configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Task {
    /// Task execution interval.
    #[default(time::Duration::from_secs(10 * 60))]
    #[serde(with = "humantime_serde")]
    pub interval: time::Duration,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
