//! Synchronization layer between the in-memory board shape and the store.

pub mod error;
pub mod hydrate;
pub mod session;
pub mod sqlite_store;
pub mod store;

pub use error::{Result, SyncError};
pub use session::{Identity, Session, StoreProvider};
pub use sqlite_store::SqliteBoardStore;
pub use store::BoardStore;
