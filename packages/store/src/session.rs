//! # Session persistence
//!
//! The client keeps its [`Session`] in memory. A [`SessionStore`] lets it survive a
//! restart when the user opted in (`[session] remember = true`); the owner of the
//! session decides when to read it back, so a fresh process always starts logged
//! out unless it explicitly restores.
//!
//! Implementations live in sibling modules ([`crate::memory`], [`crate::file_store`]).

use crate::models::Session;

/// Storage for the last authenticated session.
pub trait SessionStore: Send + Sync {
    /// The stored session, if one exists and is authenticated and consistent.
    fn load(&self) -> Option<Session>;

    /// Replace the stored session.
    fn save(&self, session: &Session) -> std::io::Result<()>;

    /// Forget the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> std::io::Result<()>;
}

/// Only authenticated, internally consistent sessions are worth restoring.
pub(crate) fn restorable(session: Session) -> Option<Session> {
    (session.is_authenticated() && session.is_consistent()).then_some(session)
}
