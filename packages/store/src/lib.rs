pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

pub use config::BlogConfig;
pub use models::{Credentials, Post, Registration, Session, Topic, UserSummary};
pub use session::SessionStore;
