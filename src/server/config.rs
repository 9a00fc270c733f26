use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "postgres";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

const REQUIRED_VARS: [&str; 3] = ["DB_USER", "DB_PASSWORD", "DB_HOST"];

pub struct Config {
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset. All missing required variables are reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .into_iter()
            .filter(|name| get(*name).is_none())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnvVars(missing));
        }

        let db_port = match get("DB_PORT") {
            Some(value) => parse_port("DB_PORT", value)?,
            None => DEFAULT_DB_PORT,
        };
        let port = match get("PORT") {
            Some(value) => parse_port("PORT", value)?,
            None => DEFAULT_PORT,
        };
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let listen_addr = format!("{}:{}", host, port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "HOST".to_string(),
                value: host.clone(),
            })?;

        Ok(Self {
            db_user: get("DB_USER").unwrap_or_default(),
            db_password: get("DB_PASSWORD").unwrap_or_default(),
            db_host: get("DB_HOST").unwrap_or_default(),
            db_port,
            db_name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            listen_addr,
        })
    }

    /// Builds the PostgreSQL connection URL, percent-encoding the credentials.
    pub fn database_url(&self) -> Result<String, ConfigError> {
        let invalid = |name: &str, value: &str| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        };

        let mut url = Url::parse(&format!("postgres://{}", self.db_host))
            .map_err(|_| invalid("DB_HOST", &self.db_host))?;
        if url.host_str().is_none() || (url.path() != "/" && !url.path().is_empty()) {
            return Err(invalid("DB_HOST", &self.db_host));
        }

        url.set_username(&self.db_user)
            .map_err(|_| invalid("DB_USER", &self.db_user))?;
        url.set_password(Some(&self.db_password))
            .map_err(|_| invalid("DB_PASSWORD", "<redacted>"))?;
        url.set_port(Some(self.db_port))
            .map_err(|_| invalid("DB_PORT", &self.db_port.to_string()))?;
        url.set_path(&self.db_name);

        Ok(url.to_string())
    }
}

fn parse_port(name: &str, value: String) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
