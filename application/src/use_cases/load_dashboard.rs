//! Load Dashboard use case
//!
//! Signed-in users see sales statistics and invoices. Statistics come from
//! the API when it answers, otherwise from the bundled sample figures.

use super::shared::DataOrigin;
use crate::ports::catalog::Catalog;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::stats_source::StatsSource;
use crate::ports::token_store::{TokenStore, TokenStoreError};
use kababhut_domain::{DashboardStats, Invoice};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Sign in to view the dashboard")]
    Unauthorized,

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

/// Everything the dashboard shows
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub origin: DataOrigin,
    pub invoices: Vec<Invoice>,
}

pub struct LoadDashboardUseCase<S, T, C>
where
    S: StatsSource + ?Sized,
    T: TokenStore + ?Sized,
    C: Catalog + ?Sized,
{
    stats: Arc<S>,
    tokens: Arc<T>,
    catalog: Arc<C>,
}

impl<S, T, C> LoadDashboardUseCase<S, T, C>
where
    S: StatsSource + ?Sized,
    T: TokenStore + ?Sized,
    C: Catalog + ?Sized,
{
    pub fn new(stats: Arc<S>, tokens: Arc<T>, catalog: Arc<C>) -> Self {
        Self {
            stats,
            tokens,
            catalog,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<DashboardView, DashboardError> {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn ProgressNotifier,
    ) -> Result<DashboardView, DashboardError> {
        let token = self
            .tokens
            .get_token()?
            .ok_or(DashboardError::Unauthorized)?;

        progress.on_fetch_start("stats");
        let result = self.stats.fetch_stats(&token).await;
        progress.on_fetch_complete("stats", result.is_ok());

        let (stats, origin) = match result {
            Ok(stats) => {
                info!("Loaded dashboard stats from the API");
                (stats, DataOrigin::Remote)
            }
            Err(e) => {
                warn!("Stats fetch failed, showing sample figures: {}", e);
                (self.catalog.sample_stats(), DataOrigin::Fallback)
            }
        };

        Ok(DashboardView {
            stats,
            origin,
            invoices: self.catalog.invoices(),
        })
    }
}
