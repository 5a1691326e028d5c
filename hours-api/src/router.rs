use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{
    app_state::AppState,
    auth::{AuthError, TokenValidator},
    config::Settings,
    routes,
};

pub fn create(connection_pool: PgPool, config: Settings) -> Result<Router<()>, AuthError> {
    let token_validator = TokenValidator::from_settings(&config.auth)?;
    let app_state = AppState::new(connection_pool, token_validator);

    let app_url = config.application.app_url.clone();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin.to_str().unwrap_or_default() == app_url
        }));

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api/logged-hours", routes::logged_hours::router())
        .with_state(app_state)
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.application.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()));

    Ok(app)
}
