//! Authentication port

use super::remote::RemoteError;
use async_trait::async_trait;
use kababhut_domain::Credentials;
use serde::Deserialize;

/// Body returned by the login endpoint
///
/// Both fields are optional on the wire: a response without a token means
/// the credentials were not accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Gateway that exchanges credentials for a bearer token
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, RemoteError>;
}
