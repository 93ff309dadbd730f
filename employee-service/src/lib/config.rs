use std::env;

use auth::Authenticator;
use auth::JwtError;
use auth::JwtHandler;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_access_token_expire_minutes() -> i64 {
    30
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .finish()
    }
}

impl JwtConfig {
    /// Lifetime of issued access tokens.
    ///
    /// # Errors
    /// * `InvalidLifetime` - Not positive, or too large to add to a timestamp
    pub fn access_token_ttl(&self) -> Result<chrono::Duration, JwtError> {
        let minutes = self.access_token_expire_minutes;
        let invalid = || JwtError::InvalidLifetime(minutes);

        if minutes <= 0 {
            return Err(invalid());
        }
        let ttl = chrono::Duration::try_minutes(minutes).ok_or_else(invalid)?;
        chrono::Utc::now().checked_add_signed(ttl).ok_or_else(invalid)?;

        Ok(ttl)
    }

    /// Build the process-wide authenticator from this configuration.
    ///
    /// # Errors
    /// * `EmptySecret` - No signing secret configured
    /// * `UnsupportedAlgorithm` - Algorithm is not an HMAC algorithm
    /// * `InvalidLifetime` - Token lifetime is not usable
    pub fn authenticator(&self) -> Result<Authenticator, JwtError> {
        let ttl = self.access_token_ttl()?;
        let handler = JwtHandler::with_algorithm(self.secret.as_bytes(), &self.algorithm)?;
        Ok(Authenticator::new(handler, ttl))
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
