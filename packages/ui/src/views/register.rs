//! Registration screen.

use api::{Registration, UserSummary};

use crate::{AppContext, Outcome, Redirect, Route, ScreenScope, ValidationError};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Password rules checked before anything is sent.
pub fn validate_passwords(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

#[derive(Debug)]
pub struct RegisterForm {
    ctx: AppContext,
    scope: ScreenScope,
    registration: Registration,
    confirmation: String,
}

impl RegisterForm {
    pub fn mount(ctx: &AppContext) -> Result<Self, Redirect> {
        if ctx.auth.is_authenticated() {
            ctx.navigator.replace(Route::Home);
            return Err(Redirect(Route::Home));
        }
        Ok(Self {
            ctx: ctx.clone(),
            scope: ScreenScope::new(),
            registration: Registration::default(),
            confirmation: String::new(),
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.registration.name = name.into();
    }

    pub fn set_handle(&mut self, handle: impl Into<String>) {
        self.registration.handle = handle.into();
    }

    pub fn set_photo_url(&mut self, photo_url: impl Into<String>) {
        self.registration.photo_url = photo_url.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.registration.password = password.into();
    }

    pub fn set_confirmation(&mut self, confirmation: impl Into<String>) {
        self.confirmation = confirmation.into();
    }

    pub fn password(&self) -> &str {
        &self.registration.password
    }

    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    pub fn is_submitting(&self) -> bool {
        self.scope.is_busy()
    }

    /// Validate, then create the account and go to the login screen.
    ///
    /// Invalid passwords clear both password fields and never reach the network.
    pub async fn submit(&mut self) -> Outcome<UserSummary> {
        if let Err(e) = validate_passwords(&self.registration.password, &self.confirmation) {
            self.registration.password.clear();
            self.confirmation.clear();
            self.ctx
                .notices
                .warning(format!("Inconsistent registration data: {e}"));
            return Outcome::Rejected(e);
        }

        let Some(_busy) = self.scope.begin() else {
            return Outcome::Busy;
        };
        let result = api::auth::register(&self.ctx.client, &self.registration).await;
        if !self.scope.is_mounted() {
            return Outcome::Discarded;
        }

        match result {
            Ok(user) => {
                self.ctx.notices.success("User registered");
                self.ctx.navigator.push(Route::Login);
                Outcome::Done(user)
            }
            Err(e) => {
                self.ctx.notices.error("Failed to register user");
                Outcome::Failed(e)
            }
        }
    }

    pub fn cancel(&self) {
        self.scope.unmount();
        self.ctx.navigator.push(Route::Login);
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn unmount(&self) {
        self.scope.unmount();
    }
}
