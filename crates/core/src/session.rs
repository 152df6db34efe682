//! Token store
//!
//! A [`Session`] holds the access token in memory for the lifetime of the
//! process and the username in durable storage. It is passed around
//! explicitly (usually as `Arc<Session>`) instead of living in a global.
//!
//! There is no expiry tracking: an expired token is only discovered when the
//! backend answers 401.

use arc_swap::ArcSwapOption;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::CoreResult;
use crate::storage::{KeyValueStore, MemoryStore};

/// Storage key under which the logged-in username is persisted
pub const USERNAME_KEY: &str = "username";

pub struct Session {
    access_token: ArcSwapOption<String>,
    storage: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            access_token: ArcSwapOption::empty(),
            storage,
        }
    }

    /// Session whose username only lives as long as the process
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token.load_full().map(|token| token.as_ref().clone())
    }

    pub fn set_access_token(&self, token: impl Into<String>) {
        self.access_token.store(Some(Arc::new(token.into())));
    }

    /// Drop the access token and forget the persisted username
    pub fn clear_tokens(&self) {
        self.access_token.store(None);
        if let Err(e) = self.storage.remove(USERNAME_KEY) {
            warn!("Failed to remove persisted username: {e}");
        }
        debug!("Session cleared");
    }

    /// A username without a token does not count as logged in.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.load().is_some()
    }

    /// Persisted username, if any. Storage failures read as absent.
    pub fn username(&self) -> Option<String> {
        match self.storage.get(USERNAME_KEY) {
            Ok(username) => username,
            Err(e) => {
                warn!("Failed to read persisted username: {e}");
                None
            }
        }
    }

    /// Record a successful login or registration.
    ///
    /// The username is persisted first; if that fails no token is stored and
    /// the session stays logged out.
    pub fn establish(&self, token: impl Into<String>, username: &str) -> CoreResult<()> {
        self.storage.set(USERNAME_KEY, username)?;
        self.set_access_token(token);
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
