//! Token storage port
//!
//! Holds the bearer token between runs. Presence of a token is the only
//! "signed in" signal the storefront uses.

use kababhut_domain::AuthToken;
use std::sync::Mutex;
use thiserror::Error;

/// Errors from token persistence
#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("Token storage I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TokenStoreError {
    fn from(e: std::io::Error) -> Self {
        TokenStoreError::Io(e.to_string())
    }
}

/// Persistent slot for the session token
pub trait TokenStore: Send + Sync {
    fn save_token(&self, token: &AuthToken) -> Result<(), TokenStoreError>;

    /// Current token, `None` when signed out
    fn get_token(&self) -> Result<Option<AuthToken>, TokenStoreError>;

    /// Remove the token; clearing an empty store is not an error
    fn clear_token(&self) -> Result<(), TokenStoreError>;
}

/// Process-local token store, used with `--ephemeral` and in tests
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<AuthToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl TokenStore for InMemoryTokenStore {
    fn save_token(&self, token: &AuthToken) -> Result<(), TokenStoreError> {
        let mut slot = self
            .token
            .lock()
            .map_err(|e| TokenStoreError::Io(e.to_string()))?;
        *slot = Some(token.clone());
        Ok(())
    }

    fn get_token(&self) -> Result<Option<AuthToken>, TokenStoreError> {
        let slot = self
            .token
            .lock()
            .map_err(|e| TokenStoreError::Io(e.to_string()))?;
        Ok(slot.clone())
    }

    fn clear_token(&self) -> Result<(), TokenStoreError> {
        let mut slot = self
            .token
            .lock()
            .map_err(|e| TokenStoreError::Io(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}
