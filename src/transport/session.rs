//! Session state
//!
//! Holds the authentication token issued by the server. The token is
//! written by authentication-style operations and read only by the
//! executor when it attaches it to outgoing requests.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Authentication state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

/// Shared, cloneable handle to the session's authentication token.
///
/// Clones observe the same token. Concurrent writers race; the last write
/// wins.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a previously issued token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Current token, if authenticated.
    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn set_token(&self, token: impl Into<String>) {
        let mut current = self.token.write().await;
        *current = Some(token.into());
        tracing::info!("Session authenticated");
    }

    pub async fn clear(&self) {
        let mut current = self.token.write().await;
        if current.take().is_some() {
            tracing::info!("Session token cleared");
        }
    }

    pub async fn state(&self) -> AuthState {
        if self.token.read().await.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Anonymous
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session").finish_non_exhaustive()
    }
}
