//! `GET /menu` adapter

use super::client::ApiClient;
use async_trait::async_trait;
use kababhut_application::{MenuSource, RemoteError};
use kababhut_domain::MenuItem;
use std::sync::Arc;

const MENU_PATH: &str = "/menu";

/// Menu source backed by the storefront API
pub struct HttpMenuSource {
    client: Arc<ApiClient>,
}

impl HttpMenuSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, RemoteError> {
        Ok(self.client.get_json(MENU_PATH, None).await?)
    }
}
