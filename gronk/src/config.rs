use std::{env, path::PathBuf, time::Duration};

use config::{Config, ConfigError, Environment, File, Map};
use gronk_data::{DEFAULT_HOST, DEFAULT_INTERVAL};
use serde::{de::Error as _, Deserialize, Deserializer};
use tracing::Level;

const ENV_PREFIX: &str = "GRONK";
const CONFIG_PATH_VAR: &str = "GRONK_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config/gronk";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// `host` or `host:port` serving `/<machine>/activity.json`
    pub host: String,
    pub interval_secs: u64,
    /// Unset means requests may hang forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    pub fixed_rate: bool,
    #[serde(deserialize_with = "deserialize_level")]
    pub log_level: Level,
}

impl Settings {
    /// Defaults, then `config/gronk.toml`, then the file in `$GRONK_CONFIG`, then `GRONK_*`.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(env::var_os(CONFIG_PATH_VAR).map(PathBuf::from), None)
    }

    /// `env` replaces the process environment, for tests.
    fn load(extra_file: Option<PathBuf>, env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("interval_secs", DEFAULT_INTERVAL.as_secs().to_string())?
            .set_default("fixed_rate", false)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false));
        if let Some(path) = extra_file {
            builder = builder.add_source(File::from(path));
        }
        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(env))
            .build()?
            .try_deserialize()?;

        if settings.interval_secs == 0 {
            return Err(ConfigError::Message("interval_secs must be at least 1".to_owned()));
        }
        if settings.request_timeout_secs == Some(0) {
            return Err(ConfigError::Message(
                "request_timeout_secs must be at least 1 (leave it unset for no timeout)".to_owned(),
            ));
        }
        Ok(settings)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level
        .parse()
        .map_err(|_| D::Error::custom(format!("unknown log level `{level}` (trace, debug, info, warn, error)")))
}
