//! Load Menu use case
//!
//! Fetches the live menu and falls back to the built-in listing when the
//! API fails or returns nothing.

use super::shared::DataOrigin;
use crate::ports::catalog::Catalog;
use crate::ports::menu_source::MenuSource;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::remote::RemoteError;
use kababhut_domain::Menu;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of loading the menu
#[derive(Debug, Clone)]
pub struct MenuLoad {
    pub menu: Menu,
    pub origin: DataOrigin,
    /// Why the remote menu was not used, if it failed
    pub error: Option<RemoteError>,
}

/// Use case for loading the menu
pub struct LoadMenuUseCase<S: MenuSource + ?Sized, C: Catalog + ?Sized> {
    source: Arc<S>,
    catalog: Arc<C>,
}

impl<S: MenuSource + ?Sized, C: Catalog + ?Sized> LoadMenuUseCase<S, C> {
    pub fn new(source: Arc<S>, catalog: Arc<C>) -> Self {
        Self { source, catalog }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> MenuLoad {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(&self, progress: &dyn ProgressNotifier) -> MenuLoad {
        progress.on_fetch_start("menu");
        let result = self.source.fetch_menu().await;
        progress.on_fetch_complete("menu", result.is_ok());

        match result {
            Ok(items) if !items.is_empty() => {
                info!("Loaded {} menu items from the API", items.len());
                MenuLoad {
                    menu: Menu::new(items),
                    origin: DataOrigin::Remote,
                    error: None,
                }
            }
            Ok(_) => {
                debug!("API returned an empty menu, using the built-in menu");
                self.fallback(None)
            }
            Err(e) => {
                warn!("Menu fetch failed, using the built-in menu: {}", e);
                self.fallback(Some(e))
            }
        }
    }

    fn fallback(&self, error: Option<RemoteError>) -> MenuLoad {
        MenuLoad {
            menu: Menu::new(self.catalog.fallback_menu()),
            origin: DataOrigin::Fallback,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::ProgressNotifier;
    use async_trait::async_trait;
    use kababhut_domain::{CateringPackage, DashboardStats, Invoice, MenuItem};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockSource {
        result: Result<Vec<MenuItem>, RemoteError>,
    }

    #[async_trait]
    impl MenuSource for MockSource {
        async fn fetch_menu(&self) -> Result<Vec<MenuItem>, RemoteError> {
            self.result.clone()
        }
    }

    struct MockCatalog;

    impl Catalog for MockCatalog {
        fn fallback_menu(&self) -> Vec<MenuItem> {
            vec![
                MenuItem::new("m1", "Chicken Biryani").with_category("biryani"),
                MenuItem::new("m13", "Samosa").with_category("appetizers"),
            ]
        }

        fn packages(&self) -> Vec<CateringPackage> {
            vec![CateringPackage::custom()]
        }

        fn sample_stats(&self) -> DashboardStats {
            DashboardStats {
                total_revenue: 0.0,
                total_orders: 0,
                total_customers: 0,
                top_items: vec![],
            }
        }

        fn invoices(&self) -> Vec<Invoice> {
            vec![]
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_fetch_start(&self, what: &str) {
            self.events.lock().unwrap().push(format!("start:{}", what));
        }

        fn on_fetch_complete(&self, what: &str, success: bool) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}:{}", what, success));
        }
    }

    fn use_case(
        result: Result<Vec<MenuItem>, RemoteError>,
    ) -> LoadMenuUseCase<MockSource, MockCatalog> {
        LoadMenuUseCase::new(Arc::new(MockSource { result }), Arc::new(MockCatalog))
    }

    #[tokio::test]
    async fn test_remote_menu_is_used() {
        let items = vec![MenuItem::new("x1", "Haleem").with_price(12.0)];
        let load = use_case(Ok(items)).execute().await;

        assert_eq!(load.origin, DataOrigin::Remote);
        assert_eq!(load.menu.len(), 1);
        assert!(load.error.is_none());
    }

    #[tokio::test]
    async fn test_error_falls_back() {
        let load = use_case(Err(RemoteError::Timeout)).execute().await;

        assert_eq!(load.origin, DataOrigin::Fallback);
        assert_eq!(load.menu.len(), 2);
        assert_eq!(load.error, Some(RemoteError::Timeout));
    }

    #[tokio::test]
    async fn test_empty_menu_falls_back() {
        let load = use_case(Ok(vec![])).execute().await;

        assert!(load.origin.is_fallback());
        assert!(load.error.is_none());
        assert!(load.menu.find("m13").is_some());
    }

    #[tokio::test]
    async fn test_progress_reports_outcome() {
        let progress = RecordingProgress::default();
        use_case(Err(RemoteError::Connection("refused".into())))
            .execute_with_progress(&progress)
            .await;

        let events = progress.events.lock().unwrap();
        assert_eq!(*events, vec!["start:menu", "done:menu:false"]);
    }
}
