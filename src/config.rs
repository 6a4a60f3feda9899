use std::env;
use thiserror::Error;

const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// Process-wide settings, read once in `main`. Nothing mutates them
/// afterwards.
#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub bind_address: String,
    pub port: u16,
    pub db_url: String,
    pub secret_key: Vec<u8>,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_opt(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        if env::var("APP_ENV").as_deref() != Ok("production") {
            dotenv::dotenv().ok();
        }

        let port = resolve_port(
            Self::get_env_opt("PORT").as_deref(),
            Self::get_env_opt("API_PORT").as_deref(),
        )?;

        let db_url = match Self::get_env_opt("POSTGRES_URI") {
            Some(uri) => uri,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                Self::get_env("DB_USER")?,
                Self::get_env("DB_PASSWORD")?,
                Self::get_env("DB_HOST")?,
                Self::get_env("DB_PORT")?,
                Self::get_env("DB_NAME")?,
            ),
        };

        let secret_key = Self::get_env("SECRET_KEY")?;
        if secret_key.trim().is_empty() {
            return Err(ConfigError::Invalid("SECRET_KEY", "must not be empty".into()));
        }

        Ok(EnvConfig {
            bind_address: Self::get_env_opt("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            db_url,
            secret_key: secret_key.into_bytes(),
        })
    }
}

/// `PORT` (set by most PaaS hosts) wins over `API_PORT`.
fn resolve_port(port: Option<&str>, api_port: Option<&str>) -> Result<u16, ConfigError> {
    match (port, api_port) {
        (Some(p), _) => p.parse().map_err(|_| ConfigError::Invalid("PORT", p.to_string())),
        (None, Some(p)) => p.parse().map_err(|_| ConfigError::Invalid("API_PORT", p.to_string())),
        (None, None) => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_prefers_paas_variable() {
        assert_eq!(resolve_port(Some("8080"), Some("7000")).unwrap(), 8080);
        assert_eq!(resolve_port(None, Some("7000")).unwrap(), 7000);
        assert_eq!(resolve_port(None, None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn port_rejects_garbage() {
        assert!(matches!(
            resolve_port(Some("eighty"), None),
            Err(ConfigError::Invalid("PORT", _))
        ));
    }
}
