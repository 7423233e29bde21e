//! `GET /stats` adapter

use super::client::ApiClient;
use async_trait::async_trait;
use kababhut_application::{RemoteError, StatsSource};
use kababhut_domain::{AuthToken, DashboardStats};
use std::sync::Arc;

const STATS_PATH: &str = "/stats";

/// Dashboard statistics backed by the storefront API
pub struct HttpStatsSource {
    client: Arc<ApiClient>,
}

impl HttpStatsSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    async fn fetch_stats(&self, token: &AuthToken) -> Result<DashboardStats, RemoteError> {
        Ok(self.client.get_json(STATS_PATH, Some(token)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{TestServer, client_for};

    #[tokio::test]
    async fn test_fetch_stats_is_authorized() {
        let server = TestServer::respond(
            200,
            r#"{"totalRevenue": 900.5, "totalOrders": 3, "totalCustomers": 2, "topItems": []}"#,
        )
        .await;
        let source = HttpStatsSource::new(Arc::new(client_for(&server)));

        let stats = source
            .fetch_stats(&AuthToken::new("tok").unwrap())
            .await
            .unwrap();
        assert_eq!(stats.total_revenue, 900.5);

        let request = server.request().await.to_lowercase();
        assert!(request.starts_with("get /api/stats "));
        assert!(request.contains("authorization: bearer tok"));
    }
}
