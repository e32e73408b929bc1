use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    service::{
        auth::{
            federated::FederatedStrategy, password::PasswordStrategy, provider::OAuth2Provider,
            Authenticator, StrategyKind,
        },
        route::{sync_routes, RouteTable},
    },
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = tower_sessions_redis_store::fred::prelude::Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Set secure based on build mode: in development (debug) use false, otherwise true.
    let development_mode = cfg!(debug_assertions);
    let secure_cookies = !development_mode;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Build the authentication facade for the configured strategy
pub fn build_authenticator(
    config: &Config,
    db: &DatabaseConnection,
) -> Result<Authenticator, Error> {
    let authenticator = match config.auth_strategy {
        StrategyKind::Password => Authenticator::new(PasswordStrategy::new(db.clone())),
        StrategyKind::Federated => {
            let federated = config
                .federated
                .as_ref()
                .ok_or_else(|| ConfigError::MissingEnvVar("OIDC_PROVIDER".to_string()))?;

            let provider = OAuth2Provider::new(federated)?;
            Authenticator::new(FederatedStrategy::new(provider, &federated.callback_url))
        }
    };

    tracing::info!(strategy = %authenticator.strategy(), "Authentication strategy selected");

    Ok(authenticator)
}

/// Build the route table from the built-in routes and every stored page
pub async fn build_route_table(db: &DatabaseConnection) -> Result<Arc<RouteTable>, Error> {
    let mut routes = RouteTable::with_builtin_routes();

    sync_routes(db, &mut routes).await?;

    Ok(Arc::new(routes))
}
