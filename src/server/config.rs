use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port = port.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: "PORT".to_string(),
            reason: format!("expected a port number, got {:?}", port),
        })?;

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}
