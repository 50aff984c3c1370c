//! Authentication context shared by every screen.
//!
//! The application root owns one [`AuthContext`] and hands clones of it to the
//! screens; all clones see the same [`Session`]. Login replaces the whole
//! session, logout resets it to empty, and an authorization failure from any
//! resource operation is recovered by logging out.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use api::{ApiClient, ApiError, Credentials, Session};
use store::SessionStore;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Session,
    /// A login exchange is in flight.
    pub loading: bool,
}

/// Handle to the process-wide session. Cheap to clone.
#[derive(Clone, Default)]
pub struct AuthContext {
    state: Arc<RwLock<AuthState>>,
    store: Option<Arc<dyn SessionStore>>,
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("state", &*self.read())
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

impl AuthContext {
    /// A logged-out context that keeps the session in memory only.
    pub fn new() -> Self {
        Self::default()
    }

    /// A logged-out context that mirrors the session into `store`.
    ///
    /// Nothing is read from the store until [`restore`](Self::restore) is called.
    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self {
            state: Arc::default(),
            store: Some(store),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the persisted session, if any. Returns whether one was restored.
    pub fn restore(&self) -> bool {
        let Some(session) = self.store.as_ref().and_then(|store| store.load()) else {
            return false;
        };
        tracing::info!("Restored session for user {}", session.user_id);
        self.write().session = session;
        true
    }

    pub fn snapshot(&self) -> AuthState {
        self.read().clone()
    }

    pub fn session(&self) -> Session {
        self.read().session.clone()
    }

    /// The credential token, or `None` when logged out.
    pub fn token(&self) -> Option<String> {
        let state = self.read();
        state
            .session
            .is_authenticated()
            .then(|| state.session.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().session.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// Exchange `credentials` for a session.
    ///
    /// On success the whole session is replaced; on failure it is left as it
    /// was and the error is returned for the caller to report.
    pub async fn login(&self, client: &ApiClient, credentials: &Credentials) -> Result<(), ApiError> {
        self.write().loading = true;
        let result = api::auth::login(client, credentials).await;

        let mut state = self.write();
        state.loading = false;
        let session = result?;
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&session) {
                tracing::warn!("Failed to persist session: {}", e);
            }
        }
        state.session = session;
        Ok(())
    }

    /// Reset the session to empty. No network call; safe to repeat.
    pub fn logout(&self) {
        let mut state = self.write();
        if state.session.is_authenticated() {
            tracing::info!("Logging out user {}", state.session.user_id);
        }
        *state = AuthState::default();
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                tracing::warn!("Failed to clear persisted session: {}", e);
            }
        }
    }

    /// Log out if `error` is an authorization failure. Returns whether it was.
    pub fn recover(&self, error: &ApiError) -> bool {
        if !error.is_unauthorized() {
            return false;
        }
        tracing::warn!("Token rejected ({}); clearing session", error);
        self.logout();
        true
    }
}
