//! Thin JSON client over the storefront REST API
//!
//! Paths are joined onto the configured base URL unless they are already
//! absolute (`http...`). Any non-2xx response becomes [`ApiError::Status`]
//! carrying the response body, or the status reason when the body is empty.

use super::error::ApiError;
use kababhut_domain::AuthToken;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("kababhut/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        let body = self.send(Method::GET, path, token, |req| req).await?;
        parse(&body)
    }

    /// POST a JSON body and return the raw response text
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: Option<&AuthToken>,
    ) -> Result<String, ApiError> {
        self.send(Method::POST, path, token, |req| req.json(body))
            .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&AuthToken>,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(token) = token {
            request = request.header(reqwest::header::AUTHORIZATION, token.bearer());
        }
        let response = build(request)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            } else {
                text
            };
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }
}

/// Decode a JSON body, keeping the raw text for diagnostics
pub(crate) fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse {
        error: e.to_string(),
        raw: body.chars().take(200).collect(),
    })
}
