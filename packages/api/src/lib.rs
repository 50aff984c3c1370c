//! # API crate: client for the remote blog API
//!
//! Everything the client needs to talk to the blog backend. There is no server
//! logic here; this crate turns typed calls into HTTP requests against one fixed
//! origin and turns responses back into [`store`] models.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: request/response over `reqwest`, token attached verbatim as `Authorization` |
//! | [`config`] | [`ApiConfig`]: base origin and timeout from the environment or `blog.toml` |
//! | [`error`] | [`ApiError`] and its [`FailureKind`] classification by status code |
//! | [`auth`] | `login` (`/usuarios/logar`) and `register` (`/usuarios/cadastrar`) |
//! | [`resource`] | One CRUD contract ([`Resources`]) shared by topics (`/temas`) and posts (`/postagens`) |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod resource;

pub use client::{ApiClient, ApiResponse};
pub use config::ApiConfig;
pub use error::{ApiError, FailureKind};
pub use resource::{Resource, Resources};

pub use store::{Credentials, Post, Registration, Session, Topic, UserSummary};
