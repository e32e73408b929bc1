use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::Authenticator, route::RouteTable};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: Authenticator,
    /// Built once at startup, read-only while serving
    pub routes: Arc<RouteTable>,
}
