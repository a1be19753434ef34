pub mod connection;
pub mod error;
pub mod repositories;
mod row;


pub use connection::pool::{PoolOptions, connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::board_repository::BoardRepository;
pub use repositories::column_repository::ColumnRepository;
pub use repositories::task_repository::TaskRepository;
