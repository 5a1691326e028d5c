mod extractor;
mod token;

pub use extractor::AuthUser;
pub use token::{AccessTokenClaims, AuthError, TokenValidator};
