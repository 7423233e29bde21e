//! Menu source port
//!
//! Supplies the live menu listing. Callers fall back to the built-in menu
//! when this fails.

use super::remote::RemoteError;
use async_trait::async_trait;
use kababhut_domain::MenuItem;

/// Source of the current menu
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Fetch every dish currently on offer
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, RemoteError>;
}
