//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`SessionStore`] that keeps the last session as a TOML
//! file so a native client can restore it after a restart.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.toml     # the serialized Session, owner read/write only on unix
//! ```
//!
//! A file that cannot be parsed, or holds a logged-out session, loads as `None`.

use std::path::PathBuf;

use crate::models::Session;
use crate::session::{restorable, SessionStore};

/// Filesystem-backed SessionStore.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join("session.toml")
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<Session> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        match toml::from_str::<Session>(&content) {
            Ok(session) => restorable(session),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file: {}", e);
                None
            }
        }
    }

    fn save(&self, session: &Session) -> std::io::Result<()> {
        let content = toml::to_string(session)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::create_dir_all(&self.base)?;
        let path = self.session_path();
        std::fs::write(&path, content)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(self.session_path()) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            user_id: 7,
            display_name: "Ana".to_string(),
            login_handle: "ana@blog.dev".to_string(),
            photo_url: String::new(),
            token: "Bearer T".to_string(),
        }
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("blog");

        FileStore::new(base.clone()).save(&session()).unwrap();

        let reopened = FileStore::new(base);
        assert_eq!(reopened.load(), Some(session()));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.save(&session()).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
        assert!(!dir.path().join("session.toml").exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_garbage_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.toml"), "not = [valid").unwrap();
        assert!(FileStore::new(dir.path().to_path_buf()).load().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.save(&session()).unwrap();
        let mode = std::fs::metadata(dir.path().join("session.toml"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
