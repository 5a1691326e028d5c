//! Maps the identity provider's account payload onto local claims.
//!
//! The payload carries `groups`, `roles` and any number of extra claims. Every
//! role becomes a `role` claim on the signed-in identity so that role checks
//! can be answered locally.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

pub const ROLE_CLAIM_TYPE: &str = "role";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserAccount {
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub kind: String,
    pub value: String,
}

impl Claim {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// A set of claims. An identity without an authentication type is anonymous.
#[derive(Debug, Clone, Default)]
pub struct ClaimsIdentity {
    authentication_type: Option<String>,
    claims: Vec<Claim>,
}

impl ClaimsIdentity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(authentication_type: impl Into<String>, claims: Vec<Claim>) -> Self {
        Self {
            authentication_type: Some(authentication_type.into()),
            claims,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authentication_type.is_some()
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn add_claim(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    pub fn find_all<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Claim> + 'a {
        self.claims.iter().filter(move |c| c.kind == kind)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClaimsPrincipal {
    identity: ClaimsIdentity,
}

impl ClaimsPrincipal {
    pub fn new(identity: ClaimsIdentity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &ClaimsIdentity {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut ClaimsIdentity {
        &mut self.identity
    }

    pub fn is_in_role(&self, role: &str) -> bool {
        self.identity
            .find_all(ROLE_CLAIM_TYPE)
            .any(|claim| claim.value == role)
    }
}

/// Builds principals from account payloads.
#[derive(Debug, Clone)]
pub struct AccountClaimsFactory {
    authentication_type: String,
}

impl Default for AccountClaimsFactory {
    fn default() -> Self {
        Self::new("oidc")
    }
}

impl AccountClaimsFactory {
    pub fn new(authentication_type: impl Into<String>) -> Self {
        Self {
            authentication_type: authentication_type.into(),
        }
    }

    /// Principal for an account, or an anonymous principal when there is none.
    ///
    /// Extra payload properties become claims of the same name; array values
    /// yield one claim per element.
    pub fn create_base_user(&self, account: Option<&UserAccount>) -> ClaimsPrincipal {
        let Some(account) = account else {
            return ClaimsPrincipal::new(ClaimsIdentity::anonymous());
        };

        let mut claims = Vec::new();
        for (kind, value) in &account.additional_properties {
            match value {
                Value::Array(items) => claims.extend(
                    items
                        .iter()
                        .filter_map(claim_value)
                        .map(|v| Claim::new(kind.clone(), v)),
                ),
                other => {
                    if let Some(v) = claim_value(other) {
                        claims.push(Claim::new(kind.clone(), v));
                    }
                }
            }
        }

        ClaimsPrincipal::new(ClaimsIdentity::authenticated(
            self.authentication_type.clone(),
            claims,
        ))
    }

    pub fn create_user(&self, account: Option<&UserAccount>) -> ClaimsPrincipal {
        let principal = self.create_base_user(account);
        match account {
            Some(account) => add_role_claims(principal, account),
            None => principal,
        }
    }
}

/// Appends one `role` claim per account role. Anonymous principals are
/// returned untouched.
pub fn add_role_claims(mut principal: ClaimsPrincipal, account: &UserAccount) -> ClaimsPrincipal {
    if !principal.identity().is_authenticated() {
        return principal;
    }

    tracing::info!("User is authenticated");
    for role in &account.roles {
        principal
            .identity_mut()
            .add_claim(Claim::new(ROLE_CLAIM_TYPE, role.clone()));
        tracing::info!("Role {} was mapped to the user", role);
    }

    principal
}

fn claim_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
