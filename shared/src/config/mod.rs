//! Configuration module with business-specific sub-modules
//!
//! - `auth` - session token signing and phone verification codes
//! - `booking` - completion OTP lifetime and the rating link
//! - `cache` - Redis connection for verification codes
//! - `database` - MySQL connection pool
//! - `environment` - environment detection and logging
//! - `notification` - SMS provider selection and credentials
//! - `server` - HTTP server and CORS
//!
//! [`AppConfig::load`] layers three sources: built-in defaults, an optional
//! `config/{environment}.toml` file, then `HOMESERVE__SECTION__KEY`
//! environment variables.

pub mod auth;
pub mod booking;
pub mod cache;
pub mod database;
pub mod environment;
pub mod notification;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, VerificationConfig};
pub use booking::BookingConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use notification::{NotificationConfig, SmsProvider, TwilioConfig};
pub use server::{CorsConfig, ServerConfig};

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "HOMESERVE";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Redis configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// SMS configuration
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Booking workflow configuration
    #[serde(default)]
    pub booking: BookingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the environment named by `ENVIRONMENT`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for an explicit environment
    pub fn load_for(environment: Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            ..Default::default()
        };

        let loaded: Self = config::Config::builder()
            .add_source(config::Config::try_from(&defaults)?)
            .add_source(config::File::with_name(environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("environment", environment.to_string())?
            .build()?
            .try_deserialize()?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err(config::ConfigError::Message(
                "auth.jwt.secret must be set in production".to_string(),
            ));
        }
        if self.notification.provider == SmsProvider::Twilio && self.notification.twilio.is_none() {
            return Err(config::ConfigError::Message(
                "notification.twilio credentials are required for the twilio provider".to_string(),
            ));
        }
        if self.booking.otp_ttl_minutes <= 0 {
            return Err(config::ConfigError::Message(
                "booking.otp_ttl_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
