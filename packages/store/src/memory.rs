use std::sync::{Arc, Mutex, PoisonError};

use crate::models::Session;
use crate::session::{restorable, SessionStore};

/// In-memory SessionStore for tests and clients that never persist.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        let stored = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        stored.and_then(restorable)
    }

    fn save(&self, session: &Session) -> std::io::Result<()> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: 7,
            display_name: "Ana".to_string(),
            token: "T".to_string(),
            ..Session::default()
        }
    }

    #[test]
    fn test_starts_empty() {
        assert!(MemoryStore::new().load().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        store.save(&session()).unwrap();
        assert_eq!(store.load(), Some(session()));

        store.clear().unwrap();
        assert!(store.load().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save(&session()).unwrap();
        assert!(other.load().is_some());
    }

    #[test]
    fn test_unauthenticated_session_is_not_restored() {
        let store = MemoryStore::new();
        store.save(&Session::empty()).unwrap();
        assert!(store.load().is_none());
    }
}
