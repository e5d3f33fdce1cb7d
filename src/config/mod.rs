use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("unsupported LOG_FORMAT `{0}`, expected `pretty` or `json`")]
    LogFormat(String),
}

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со статикой фронтенда (index.html и ассеты)
    pub static_dir: PathBuf,
    pub rust_log: String,
    pub log_format: LogFormat,
}

// Настройки базы данных
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::LogFormat(other.to_string())),
        }
    }
}

// Плоское представление переменных окружения (PORT -> port, DATABASE_URL -> database_url)
#[derive(Debug, Deserialize)]
struct EnvSettings {
    host: String,
    port: u16,
    static_dir: PathBuf,
    rust_log: String,
    log_format: String,
    database_url: String,
    db_pool_size: u32,
    db_acquire_timeout_secs: u64,
}

impl Config {
    /// Читает конфигурацию из переменных окружения процесса.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(config::Environment::default())
    }

    /// Читает конфигурацию из явно переданного набора переменных.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(config::Environment::default().source(Some(vars)))
    }

    fn load(source: config::Environment) -> Result<Self, ConfigError> {
        let settings: EnvSettings = config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default("static_dir", "public")?
            .set_default("rust_log", "event_catalog=debug,tower_http=debug")?
            .set_default("log_format", "pretty")?
            .set_default("db_pool_size", 10)?
            .set_default("db_acquire_timeout_secs", 5)?
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(Config {
            app: AppConfig {
                host: settings.host,
                port: settings.port,
                static_dir: settings.static_dir,
                rust_log: settings.rust_log,
                log_format: settings.log_format.parse()?,
            },
            database: DatabaseConfig {
                url: settings.database_url,
                pool_size: settings.db_pool_size,
                acquire_timeout_secs: settings.db_acquire_timeout_secs,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            Config::from_vars(vars(&[("DATABASE_URL", "postgres://localhost/catalog")])).unwrap();

        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 3000);
        assert_eq!(config.app.static_dir, PathBuf::from("public"));
        assert_eq!(config.app.log_format, LogFormat::Pretty);
        assert_eq!(config.database.url, "postgres://localhost/catalog");
        assert_eq!(config.database.pool_size, 10);
        assert_eq!(config.database.acquire_timeout_secs, 5);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/www"),
            ("LOG_FORMAT", "json"),
            ("DB_POOL_SIZE", "32"),
        ]))
        .unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.app.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.app.log_format, LogFormat::Json);
        assert_eq!(config.database.pool_size, 32);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        assert!(matches!(
            Config::from_vars(HashMap::new()),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn invalid_port_is_an_error() {
        let result = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let result = Config::from_vars(vars(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("LOG_FORMAT", "xml"),
        ]));
        assert!(matches!(result, Err(ConfigError::LogFormat(f)) if f == "xml"));
    }
}
