//! Login / logout use cases

use crate::ports::auth_gateway::AuthGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::remote::RemoteError;
use crate::ports::token_store::{TokenStore, TokenStoreError};
use kababhut_domain::{AuthToken, Credentials, DashboardRoute, Role};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while signing in or out
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Login failed: {0}")]
    Gateway(#[from] RemoteError),

    #[error(transparent)]
    TokenStore(#[from] TokenStoreError),
}

/// A successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub role: Option<Role>,
    pub route: DashboardRoute,
}

/// Use case for signing in and out
pub struct LoginUseCase<A: AuthGateway + ?Sized, T: TokenStore + ?Sized> {
    gateway: Arc<A>,
    tokens: Arc<T>,
}

impl<A: AuthGateway + ?Sized, T: TokenStore + ?Sized> LoginUseCase<A, T> {
    pub fn new(gateway: Arc<A>, tokens: Arc<T>) -> Self {
        Self { gateway, tokens }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, credentials: &Credentials) -> Result<LoginOutcome, LoginError> {
        self.execute_with_progress(credentials, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        credentials: &Credentials,
        progress: &dyn ProgressNotifier,
    ) -> Result<LoginOutcome, LoginError> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        progress.on_fetch_start("login");
        let result = self.gateway.login(credentials).await;
        progress.on_fetch_complete("login", result.is_ok());

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_unauthorized() => {
                warn!("Login rejected for {}", credentials.email);
                return Err(LoginError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        let Some(token) = response.token.and_then(AuthToken::new) else {
            warn!("Login response for {} carried no token", credentials.email);
            return Err(LoginError::InvalidCredentials);
        };
        self.tokens.save_token(&token)?;

        let role = response.role.as_deref().and_then(|r| r.parse::<Role>().ok());
        let route = DashboardRoute::for_role(role.as_ref());
        info!("Signed in as {} ({})", credentials.email, route.path());

        Ok(LoginOutcome { role, route })
    }

    /// Forget the session token
    pub fn logout(&self) -> Result<(), LoginError> {
        self.tokens.clear_token()?;
        info!("Signed out");
        Ok(())
    }
}
