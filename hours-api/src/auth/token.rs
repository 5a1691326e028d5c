//! Access-token validation.
//!
//! Tokens are issued by the external identity provider. We only verify them:
//! signature, expiry, audience, optional issuer, and the API scope.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::config::AuthSettings;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("token lacks required scope '{0}'")]
    MissingScope(String),
    #[error("auth is misconfigured: {0}")]
    Misconfigured(String),
}

/// The claims we read from an access token.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    /// Space separated delegated scopes.
    #[serde(default)]
    pub scp: Option<String>,
}

impl AccessTokenClaims {
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scp.as_deref().unwrap_or_default().split_whitespace()
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes().any(|s| s == scope)
    }

    /// Display name for the worker, falling back to the username and then the subject.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.preferred_username.as_deref())
            .unwrap_or(&self.sub)
    }
}

pub struct TokenValidator {
    key: DecodingKey,
    validation: Validation,
    required_scope: String,
}

impl TokenValidator {
    pub fn from_settings(settings: &AuthSettings) -> Result<Self, AuthError> {
        let (key, algorithm) = match (&settings.public_key_pem, &settings.jwt_secret) {
            (Some(pem), _) => (DecodingKey::from_rsa_pem(pem.as_bytes())?, Algorithm::RS256),
            (None, Some(secret)) if !secret.is_empty() => {
                (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
            }
            _ => {
                return Err(AuthError::Misconfigured(
                    "either auth.public_key_pem or auth.jwt_secret must be set".to_string(),
                ))
            }
        };

        let mut validation = Validation::new(algorithm);
        if settings.audience.is_empty() {
            validation.validate_aud = false;
        } else {
            validation.set_audience(&[settings.audience.as_str()]);
        }
        if let Some(issuer) = &settings.issuer {
            validation.set_issuer(&[issuer.as_str()]);
        }

        Ok(Self {
            key,
            validation,
            required_scope: settings.required_scope.clone(),
        })
    }

    pub fn validate(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        let claims = decode::<AccessTokenClaims>(token, &self.key, &self.validation)?.claims;

        if !self.required_scope.is_empty() && !claims.has_scope(&self.required_scope) {
            return Err(AuthError::MissingScope(self.required_scope.clone()));
        }

        Ok(claims)
    }
}
