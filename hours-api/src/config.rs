use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use strum::{Display, EnumString};

/// Service settings, read from `config/base.yaml`, then the environment's
/// own file, then `HOURS_<SECTION>__<KEY>` variables.
#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

/// Listener and CORS settings. `app_url` is the only origin the web client
/// may call from.
#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub app_url: String,
    /// Requests running longer than this are answered with 408.
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub request_timeout_secs: u64,
}

/// Connection to the database holding the `logged_hours` table.
#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    pub database_name: String,
    /// Production sets this; local Postgres usually runs without TLS.
    pub require_ssl: bool,
}

/// Bearer token validation settings.
///
/// Exactly one of `jwt_secret` (HS256) or `public_key_pem` (RS256) is expected.
/// When both are set the public key wins.
#[derive(Deserialize, Clone)]
pub struct AuthSettings {
    pub audience: String,
    pub issuer: Option<String>,
    pub required_scope: String,
    pub jwt_secret: Option<String>,
    pub public_key_pem: Option<String>,
}

impl DatabaseSettings {
    /// Server-level options, used when the database itself may not exist yet.
    pub fn without_db(&self) -> PgConnectOptions {
        let ssl_mode = if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        };

        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(ssl_mode)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db().database(&self.database_name)
    }
}

/// Load settings for the environment named by `APP_ENVIRONMENT` (default
/// `local`), relative to the working directory's `config/` folder.
pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| config::ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT: {e}")))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(
            config_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("HOURS")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
