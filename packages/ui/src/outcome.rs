//! Results of screen actions.

use api::ApiError;

/// Input refused before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("password and confirmation do not match")]
    PasswordMismatch,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("a topic must be selected")]
    TopicRequired,
    #[error("{0} is required")]
    EmptyField(&'static str),
}

/// What happened to a screen action.
#[derive(Debug)]
pub enum Outcome<T> {
    Done(T),
    /// Refused client-side; nothing was sent.
    Rejected(ValidationError),
    /// The token was rejected (or absent); the session has been cleared and
    /// the user sent to the landing screen.
    LoggedOut,
    /// Transport or server failure; a notice has been raised.
    Failed(ApiError),
    /// Another action of the same screen was still in flight; ignored.
    Busy,
    /// The screen was unmounted before the response arrived; the result was dropped.
    Discarded,
}

impl<T> Outcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Outcome::Done(_))
    }

    pub fn is_logged_out(&self) -> bool {
        matches!(self, Outcome::LoggedOut)
    }

    pub fn done(self) -> Option<T> {
        match self {
            Outcome::Done(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Done(value) => Outcome::Done(f(value)),
            Outcome::Rejected(e) => Outcome::Rejected(e),
            Outcome::LoggedOut => Outcome::LoggedOut,
            Outcome::Failed(e) => Outcome::Failed(e),
            Outcome::Busy => Outcome::Busy,
            Outcome::Discarded => Outcome::Discarded,
        }
    }
}
