//! Authentication value objects
//!
//! The storefront never interprets token contents: holding a token is the
//! only authorization signal. Roles come back from the login endpoint and
//! only decide which dashboard to open.

use serde::{Deserialize, Serialize};

/// Login credentials
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token (Value Object)
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a token; blank strings are not tokens
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthToken(<{} chars>)", self.0.len())
    }
}

/// Account role reported at login
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Root,
    Owner,
    Customer,
    Other(String),
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "root" => Role::Root,
            "owner" => Role::Owner,
            "customer" => Role::Customer,
            other => Role::Other(other.to_string()),
        })
    }
}

/// Which dashboard a signed-in user lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardRoute {
    Root,
    Owner,
    Customer,
    General,
}

impl DashboardRoute {
    /// Route for an optional role; unknown or missing roles get the general dashboard
    pub fn for_role(role: Option<&Role>) -> Self {
        match role {
            Some(Role::Root) => DashboardRoute::Root,
            Some(Role::Owner) => DashboardRoute::Owner,
            Some(Role::Customer) => DashboardRoute::Customer,
            Some(Role::Other(_)) | None => DashboardRoute::General,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            DashboardRoute::Root => "/dashboard/root",
            DashboardRoute::Owner => "/dashboard/owner",
            DashboardRoute::Customer => "/dashboard/customer",
            DashboardRoute::General => "/dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_rejected() {
        assert!(AuthToken::new("").is_none());
        assert!(AuthToken::new("   ").is_none());
        assert_eq!(AuthToken::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(AuthToken::new("t0k").unwrap().bearer(), "Bearer t0k");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let token = AuthToken::new("supersecret").unwrap();
        assert!(!format!("{:?}", token).contains("supersecret"));

        let creds = Credentials::new("owner@example.com", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("owner@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_role_routing() {
        let route = |s: &str| DashboardRoute::for_role(Some(&s.parse::<Role>().unwrap()));
        assert_eq!(route("root"), DashboardRoute::Root);
        assert_eq!(route("Owner"), DashboardRoute::Owner);
        assert_eq!(route("customer"), DashboardRoute::Customer);
        assert_eq!(route("chef"), DashboardRoute::General);
        assert_eq!(DashboardRoute::for_role(None), DashboardRoute::General);
        assert_eq!(DashboardRoute::Owner.path(), "/dashboard/owner");
    }
}
