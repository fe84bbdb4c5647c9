//! Application configuration management.

use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Cross-origin configuration.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Denomination ledger configuration.
    #[serde(default)]
    pub denominations: DenominationConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Grace period for in-flight requests on shutdown, in seconds.
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_shutdown_timeout() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` address to bind.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the shutdown grace period.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// Cross-origin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API. Empty or `*` allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Returns true if every origin is allowed.
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// What to do with the part of an amount the ledger cannot represent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainderPolicy {
    /// Drop the leftover minor units and report the breakdown as is.
    #[default]
    Truncate,
    /// Fail the calculation.
    Reject,
}

/// Denomination ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DenominationConfig {
    /// Denomination face values, in any order.
    #[serde(
        default = "default_denomination_values",
        deserialize_with = "one_or_many"
    )]
    pub values: Vec<Decimal>,
    /// Handling of amounts the ledger cannot fully represent.
    #[serde(default)]
    pub remainder_policy: RemainderPolicy,
}

/// Euro banknotes and coins, in cents.
const EURO_CENTS: [i64; 15] = [
    50_000, 20_000, 10_000, 5_000, 2_000, 1_000, 500, 200, 100, 50, 20, 10, 5, 2, 1,
];

fn default_denomination_values() -> Vec<Decimal> {
    EURO_CENTS.iter().map(|&c| Decimal::new(c, 2)).collect()
}

/// Accepts a single value as a one-element list.
///
/// `DENOMINATION__DENOMINATIONS__VALUES=1` reaches serde as a number, not a
/// list, because only values containing the separator are split.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(Decimal),
        Many(Vec<Decimal>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

impl Default for DenominationConfig {
    fn default() -> Self {
        Self {
            values: default_denomination_values(),
            remainder_policy: RemainderPolicy::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Output format: `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Returns true if logs should be emitted as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl AppConfig {
    /// Loads configuration from `config/` and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Loads `default` and `{RUN_MODE}` files from `dir`, then applies
    /// `DENOMINATION__*` environment overrides.
    ///
    /// List settings are given comma-separated, e.g.
    /// `DENOMINATION__DENOMINATIONS__VALUES=1,0.5,0.1`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let file = |name: &str| {
            config::File::with_name(&dir.join(name).to_string_lossy()).required(false)
        };

        let config = config::Config::builder()
            .add_source(file("default"))
            .add_source(file(run_mode.as_str()))
            .add_source(
                config::Environment::with_prefix("DENOMINATION")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("denominations.values")
                    .with_list_parse_key("cors.allowed_origins"),
            )
            .build()?;

        config.try_deserialize()
    }
}
