//! `POST /auth/login` adapter

use super::client::{ApiClient, parse};
use async_trait::async_trait;
use kababhut_application::{AuthGateway, LoginResponse, RemoteError};
use kababhut_domain::Credentials;
use std::sync::Arc;

const LOGIN_PATH: &str = "/auth/login";

/// Auth gateway backed by the storefront API
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, RemoteError> {
        let body = self.client.post_json(LOGIN_PATH, credentials, None).await?;
        Ok(parse(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{TestServer, client_for};

    #[tokio::test]
    async fn test_login_round_trip() {
        let server = TestServer::respond(200, r#"{"token": "jwt", "role": "owner"}"#).await;
        let gateway = HttpAuthGateway::new(Arc::new(client_for(&server)));

        let response = gateway
            .login(&Credentials::new("o@kababhut.test", "pw"))
            .await
            .unwrap();
        assert_eq!(response.token.as_deref(), Some("jwt"));
        assert_eq!(response.role.as_deref(), Some("owner"));

        let request = server.request().await;
        assert!(request.starts_with("POST /api/auth/login "));
        assert!(request.contains(r#""email":"o@kababhut.test""#));
    }

    #[tokio::test]
    async fn test_login_without_token() {
        let server = TestServer::respond(200, "{}").await;
        let gateway = HttpAuthGateway::new(Arc::new(client_for(&server)));

        let response = gateway
            .login(&Credentials::new("o@kababhut.test", "pw"))
            .await
            .unwrap();
        assert_eq!(response, LoginResponse::default());
    }
}
