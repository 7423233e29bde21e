//! Dashboard statistics port

use super::remote::RemoteError;
use async_trait::async_trait;
use kababhut_domain::{AuthToken, DashboardStats};

/// Source of owner dashboard statistics
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self, token: &AuthToken) -> Result<DashboardStats, RemoteError>;
}
