use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ACCESS_TOKEN_EXPIRE_SECONDS: u64 = 3600;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// HMAC secret for signing access tokens.
    pub security_key: String,
    pub access_token_expire_seconds: u64,

    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            security_key: required("SECURITY_KEY")?,
            access_token_expire_seconds: optional(
                "ACCESS_TOKEN_EXPIRE_SECONDS",
                DEFAULT_ACCESS_TOKEN_EXPIRE_SECONDS,
            )?,
            bind_addr: optional("BIND_ADDR", parse_default_bind_addr()?)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_default_bind_addr() -> Result<SocketAddr, ConfigError> {
    DEFAULT_BIND_ADDR
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "BIND_ADDR".to_string(),
            value: DEFAULT_BIND_ADDR.to_string(),
        })
}
