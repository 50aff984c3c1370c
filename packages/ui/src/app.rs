//! Application root: the context every screen is handed, the navigation guard,
//! and the shared "call the API with the session token" step.

use std::future::Future;
use std::sync::Arc;

use api::{ApiClient, ApiConfig, ApiError};
use store::{BlogConfig, SessionStore};

use crate::{ActivityLog, AuthContext, Navigator, Outcome, Route, ScreenScope};

/// A screen refused to open and sent the user elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect(pub Route);

/// Shared application state, owned by the root and cloned into screens.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub auth: AuthContext,
    pub notices: ActivityLog,
    pub navigator: Navigator,
}

impl AppContext {
    /// A logged-out application talking to `client`.
    pub fn new(client: ApiClient) -> Self {
        Self::with_auth(client, AuthContext::new())
    }

    pub fn with_auth(client: ApiClient, auth: AuthContext) -> Self {
        Self {
            client,
            auth,
            notices: ActivityLog::new(),
            navigator: Navigator::default(),
        }
    }

    /// Build the application from `blog.toml` settings.
    ///
    /// The persisted session is restored only when the config asks for it and a
    /// store is supplied; otherwise the application starts logged out.
    pub fn launch(
        config: &BlogConfig,
        store: Option<Arc<dyn SessionStore>>,
    ) -> Result<Self, ApiError> {
        let client = ApiClient::new(ApiConfig::try_from(config)?)?;
        let auth = match store {
            Some(store) => AuthContext::with_store(store),
            None => AuthContext::new(),
        };
        let ctx = Self::with_auth(client, auth);
        if config.session.remember && ctx.auth.restore() {
            ctx.navigator.replace(Route::Home);
        }
        Ok(ctx)
    }

    /// Navigation guard: the session token, or a redirect to the landing screen.
    ///
    /// Screens call this first on entry and abort their setup on `Err`, so no
    /// data is fetched without a token.
    pub fn require_session(&self) -> Result<String, Redirect> {
        match self.auth.token() {
            Some(token) => Ok(token),
            None => {
                self.notices.warning("You need to be logged in");
                Err(self.to_landing())
            }
        }
    }

    fn to_landing(&self) -> Redirect {
        self.navigator.replace(Route::LANDING);
        Redirect(Route::LANDING)
    }

    /// Run one authenticated API call for a screen.
    ///
    /// - refuses with [`Outcome::Busy`] while the screen has another call in flight;
    /// - sends the user to the landing screen if the session is already empty;
    /// - on an authorization failure clears the session and redirects, even if
    ///   the screen has been unmounted meanwhile;
    /// - drops the result of a screen that is no longer mounted;
    /// - reports any other failure as a notice naming `action`.
    pub(crate) async fn authorized<T, F, Fut>(
        &self,
        scope: &ScreenScope,
        action: &str,
        call: F,
    ) -> Outcome<T>
    where
        F: FnOnce(ApiClient, String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let Some(_busy) = scope.begin() else {
            tracing::debug!("{} ignored: already in flight", action);
            return Outcome::Busy;
        };
        let Some(token) = self.auth.token() else {
            self.to_landing();
            return Outcome::LoggedOut;
        };

        let result = call(self.client.clone(), token).await;

        match result {
            Err(e) if self.auth.recover(&e) => {
                self.to_landing();
                Outcome::LoggedOut
            }
            _ if !scope.is_mounted() => {
                tracing::debug!("{} finished after the screen closed; result dropped", action);
                Outcome::Discarded
            }
            Ok(value) => Outcome::Done(value),
            Err(e) => {
                self.notices.error(format!("Failed to {action}"));
                Outcome::Failed(e)
            }
        }
    }
}
