use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{app_state::AppState, auth::AuthError, domain::models::WorkerId, routes::ApiError};

/// The authenticated caller, taken from a validated bearer token.
///
/// Rejects with 401 when the token is missing or invalid and with 403 when it
/// lacks the API scope. Handlers never read worker identity from the body.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub worker_id: WorkerId,
    pub worker_name: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AuthError::MissingToken)?;

        let claims = state.token_validator.validate(bearer.token())?;

        Ok(AuthUser {
            worker_name: claims.display_name().to_string(),
            worker_id: WorkerId::new(claims.sub),
        })
    }
}
