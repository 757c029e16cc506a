//! Typed client for the blog API with explicit, persisted session state.

pub mod api;
pub mod error;
pub mod session;

pub use api::{ArticleQuery, BlogClient};
pub use error::{ClientError, ClientResult};
pub use session::{
    FileSessionStorage, MemorySessionStorage, Session, SessionManager, SessionStorage,
    SessionUser,
};
