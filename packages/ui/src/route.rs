//! Screens of the application and the navigator that moves between them.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
    Topics,
    NewTopic,
    EditTopic { id: i64 },
    DeleteTopic { id: i64 },
    Posts,
    NewPost,
    EditPost { id: i64 },
    DeletePost { id: i64 },
}

impl Route {
    /// Where unauthenticated users are sent.
    pub const LANDING: Route = Route::Login;

    /// Whether the screen manipulates topics or posts and so needs a session.
    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/cadastro".to_string(),
            Route::Home => "/home".to_string(),
            Route::Topics => "/temas".to_string(),
            Route::NewTopic => "/cadastrartema".to_string(),
            Route::EditTopic { id } => format!("/editartema/{id}"),
            Route::DeleteTopic { id } => format!("/deletartema/{id}"),
            Route::Posts => "/postagens".to_string(),
            Route::NewPost => "/cadastrarpostagem".to_string(),
            Route::EditPost { id } => format!("/editarpostagem/{id}"),
            Route::DeletePost { id } => format!("/deletarpostagem/{id}"),
        }
    }

    /// Resolve a path. `/` is the landing screen.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.trim_start_matches('/').splitn(2, '/');
        let head = segments.next().unwrap_or_default();
        let id = segments.next().map(str::parse::<i64>);

        match (head, id) {
            ("", None) | ("login", None) => Some(Route::Login),
            ("cadastro", None) => Some(Route::Register),
            ("home", None) => Some(Route::Home),
            ("temas", None) => Some(Route::Topics),
            ("cadastrartema", None) => Some(Route::NewTopic),
            ("editartema", Some(Ok(id))) => Some(Route::EditTopic { id }),
            ("deletartema", Some(Ok(id))) => Some(Route::DeleteTopic { id }),
            ("postagens", None) => Some(Route::Posts),
            ("cadastrarpostagem", None) => Some(Route::NewPost),
            ("editarpostagem", Some(Ok(id))) => Some(Route::EditPost { id }),
            ("deletarpostagem", Some(Ok(id))) => Some(Route::DeletePost { id }),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation history. Clones share the same history.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Arc<Mutex<Vec<Route>>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::LANDING)
    }
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            history: Arc::new(Mutex::new(vec![start])),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Route>> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current(&self) -> Route {
        self.lock().last().copied().unwrap_or(Route::LANDING)
    }

    pub fn push(&self, route: Route) {
        tracing::debug!("navigate to {}", route);
        self.lock().push(route);
    }

    /// Swap the current entry, so "back" skips it.
    pub fn replace(&self, route: Route) {
        tracing::debug!("redirect to {}", route);
        let mut history = self.lock();
        history.pop();
        history.push(route);
    }

    /// Go back one entry; the first entry is never removed.
    pub fn back(&self) -> Route {
        let mut history = self.lock();
        if history.len() > 1 {
            history.pop();
        }
        history.last().copied().unwrap_or(Route::LANDING)
    }

    pub fn history(&self) -> Vec<Route> {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Login));
        assert_eq!(Route::parse("/temas"), Some(Route::Topics));
        assert_eq!(Route::parse("/editartema/4"), Some(Route::EditTopic { id: 4 }));
        assert_eq!(
            Route::parse("/deletarpostagem/12/"),
            Some(Route::DeletePost { id: 12 })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_or_bad_ids() {
        assert_eq!(Route::parse("/editartema/abc"), None);
        assert_eq!(Route::parse("/temas/4"), None);
        assert_eq!(Route::parse("/nowhere"), None);
    }

    #[test]
    fn test_path_and_parse_agree() {
        for route in [
            Route::Home,
            Route::NewPost,
            Route::EditPost { id: 3 },
            Route::DeleteTopic { id: 8 },
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_only_auth_screens_are_public() {
        assert!(!Route::Login.requires_session());
        assert!(!Route::Register.requires_session());
        assert!(Route::Topics.requires_session());
        assert!(Route::EditPost { id: 1 }.requires_session());
    }

    #[test]
    fn test_navigator_push_replace_back() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), Route::Login);

        nav.push(Route::Topics);
        nav.push(Route::NewTopic);
        nav.replace(Route::Topics);
        assert_eq!(nav.history(), vec![Route::Login, Route::Topics, Route::Topics]);

        assert_eq!(nav.back(), Route::Topics);
        assert_eq!(nav.back(), Route::Login);
        assert_eq!(nav.back(), Route::Login);
    }
}
