use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const SERVICE_NAME: &str = "phonebook-service";

#[derive(Debug, Clone)]
pub struct PhonebookConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub static_dir: PathBuf,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: Secret<String>,
    pub database: String,
    /// Upper bound for server selection and connection setup.
    pub timeout: Duration,
}

impl PhonebookConfig {
    pub fn load() -> Result<Self, AppError> {
        // Loads .env as a side effect, so MONGODB_URI from a dotenv file is visible below.
        let common = core_config::Config::load()?;
        Self::from_lookup(common, |key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `load` passes the process environment.
    pub fn from_lookup<F>(mut common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            common.port = parse_value("PORT", &port)?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            common.log_level = level;
        }

        let timeout_secs: u64 = match lookup("MONGODB_TIMEOUT_SECS") {
            Some(raw) => parse_value("MONGODB_TIMEOUT_SECS", &raw)?,
            None => 5,
        };

        Ok(PhonebookConfig {
            common,
            mongodb: MongoConfig {
                uri: Secret::new(required(&lookup, "MONGODB_URI")?),
                database: lookup("MONGODB_DATABASE").unwrap_or_else(|| "phonebook".to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            static_dir: PathBuf::from(lookup("STATIC_DIR").unwrap_or_else(|| "dist".to_string())),
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|v| !v.is_empty()),
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required but not set",
            key
        ))),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| {
        AppError::ConfigError(anyhow::anyhow!("Invalid value for {}: {}", key, e))
    })
}
