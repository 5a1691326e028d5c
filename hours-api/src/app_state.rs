use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::postgres::PostgresLoggedHoursAdapter,
    auth::TokenValidator,
    domain::{ports::inbound::LoggedHoursService, services::LoggedHoursServiceImpl},
    repositories::LoggedHoursRepositoryImpl,
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: Arc<PgPool>,
    pub logged_hours_service: Arc<dyn LoggedHoursService>,
    pub token_validator: Arc<TokenValidator>,
}

impl AppState {
    pub fn new(db_pool: PgPool, token_validator: TokenValidator) -> Self {
        let repo = Arc::new(LoggedHoursRepositoryImpl::new(db_pool.clone()));
        let store = Arc::new(PostgresLoggedHoursAdapter::new(repo));
        let logged_hours_service = Arc::new(LoggedHoursServiceImpl::new(store));

        Self {
            db_pool: Arc::new(db_pool),
            logged_hours_service,
            token_validator: Arc::new(token_validator),
        }
    }
}
