//! Login screen.

use api::Credentials;

use crate::{AppContext, Outcome, Redirect, Route, ScreenScope};

#[derive(Debug)]
pub struct LoginForm {
    ctx: AppContext,
    scope: ScreenScope,
    credentials: Credentials,
}

impl LoginForm {
    /// Already logged-in users are sent home instead.
    pub fn mount(ctx: &AppContext) -> Result<Self, Redirect> {
        if ctx.auth.is_authenticated() {
            ctx.navigator.replace(Route::Home);
            return Err(Redirect(Route::Home));
        }
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            credentials: Credentials::default(),
        })
    }

    pub fn set_handle(&mut self, handle: impl Into<String>) {
        self.credentials.handle = handle.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn is_loading(&self) -> bool {
        self.ctx.auth.is_loading()
    }

    /// Log in. The session is only touched on success.
    pub async fn submit(&mut self) -> Outcome<()> {
        let Some(_busy) = self.scope.begin() else {
            return Outcome::Busy;
        };

        match self.ctx.auth.login(&self.ctx.client, &self.credentials).await {
            Ok(()) => {
                self.ctx.notices.success("User authenticated");
                if self.scope.is_mounted() {
                    self.ctx.navigator.push(Route::Home);
                }
                Outcome::Done(())
            }
            Err(e) => {
                tracing::error!("Login failed: {}", e);
                if !self.scope.is_mounted() {
                    return Outcome::Discarded;
                }
                self.ctx.notices.error("Invalid user data");
                Outcome::Failed(e)
            }
        }
    }

    pub fn register(&self) {
        self.scope.unmount();
        self.ctx.navigator.push(Route::Register);
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}
