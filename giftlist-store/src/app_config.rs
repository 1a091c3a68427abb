use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub reservation: ReservationConfig,
    pub uploads: UploadsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Mark the session cookie `Secure`. Enable behind TLS.
    #[serde(default)]
    pub secure_cookies: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub jwt_secret: String,
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
}

fn default_session_ttl() -> u64 {
    86_400 // 24 hours
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReservationConfig {
    pub secret_code: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    pub dir: String,
}

impl Config {
    /// Load the layered configuration.
    ///
    /// Admin credentials, the JWT secret, and the reservation code carry
    /// no file defaults; if the environment does not supply them this
    /// fails and the process never starts serving.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of GIFTLIST)
            // Eg.. `GIFTLIST__SERVER__PORT=8080` would set `server.port`
            .add_source(config::Environment::with_prefix("GIFTLIST").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
