//! Headless application layer for the blog client.
//!
//! Holds the session lifecycle, the navigation guard, user notices and one
//! controller per screen. Rendering is left to whatever front end drives it.

mod app;
pub use app::{AppContext, Redirect};

mod auth;
pub use auth::{AuthContext, AuthState};

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, LogLevel};

mod outcome;
pub use outcome::{Outcome, ValidationError};

mod route;
pub use route::{Navigator, Route};

mod scope;
pub use scope::{BusyGuard, ScreenScope};

pub mod views;
