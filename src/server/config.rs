use crate::server::{error::config::ConfigError, service::auth::StrategyKind};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: String,
    pub auth_strategy: StrategyKind,
    /// Only read when `auth_strategy` is [`StrategyKind::Federated`]
    pub federated: Option<FederatedConfig>,
}

/// OAuth2/OpenID Connect client settings for the federated strategy.
#[derive(Clone, Debug)]
pub struct FederatedConfig {
    pub provider: String,
    pub client_id: String,
    pub client_secret: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
    pub callback_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let auth_strategy = match std::env::var("AUTH_STRATEGY") {
            Ok(value) => value
                .parse::<StrategyKind>()
                .map_err(|reason| ConfigError::InvalidEnvValue {
                    var: "AUTH_STRATEGY".to_string(),
                    reason,
                })?,
            Err(_) => StrategyKind::Password,
        };

        let federated = match auth_strategy {
            StrategyKind::Password => None,
            StrategyKind::Federated => Some(FederatedConfig::from_env()?),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            auth_strategy,
            federated,
        })
    }
}

impl FederatedConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            provider: required("OIDC_PROVIDER")?,
            client_id: required("OIDC_CLIENT_ID")?,
            client_secret: required("OIDC_CLIENT_SECRET")?,
            auth_url: required("OIDC_AUTH_URL")?,
            token_url: required("OIDC_TOKEN_URL")?,
            userinfo_url: required("OIDC_USERINFO_URL")?,
            callback_url: required("OIDC_CALLBACK_URL")?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
