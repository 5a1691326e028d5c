#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;

use hours_api::config::{ApplicationSettings, AuthSettings, DatabaseSettings, Settings};

pub const SECRET: &str = "integration-test-secret-long-enough-for-hmac";
pub const AUDIENCE: &str = "api://logged-hours";
pub const SCOPE: &str = "api_access";

/// Settings for tests. Database settings are unused because the pool is
/// handed in by `#[sqlx::test]`.
pub fn test_settings() -> Settings {
    Settings {
        application: ApplicationSettings {
            port: 0,
            host: "127.0.0.1".to_string(),
            app_url: "http://localhost:5173".to_string(),
            request_timeout_secs: 30,
        },
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "password".to_string(),
            port: 5432,
            host: "localhost".to_string(),
            database_name: "hours".to_string(),
            require_ssl: false,
        },
        auth: AuthSettings {
            audience: AUDIENCE.to_string(),
            issuer: None,
            required_scope: SCOPE.to_string(),
            jwt_secret: Some(SECRET.to_string()),
            public_key_pem: None,
        },
    }
}

pub fn build_test_app(pool: PgPool) -> Router {
    hours_api::router::create(pool, test_settings()).expect("test router should build")
}

/// Mint an access token the way the identity provider would.
pub fn token_with_scope(worker_id: &str, name: &str, scope: &str) -> String {
    let claims = serde_json::json!({
        "sub": worker_id,
        "name": name,
        "scp": scope,
        "aud": AUDIENCE,
        "exp": 4_102_444_800i64,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

pub fn token(worker_id: &str, name: &str) -> String {
    token_with_scope(worker_id, name, SCOPE)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}
