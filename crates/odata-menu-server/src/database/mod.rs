pub mod models;
pub mod pool;
pub mod repository;
pub mod sqlite;

pub use models::*;
pub use pool::DbPool;
pub use repository::{MenuItemRepository, RepositoryError, UpdateOutcome};
pub use sqlite::SqliteMenuItemRepository;

#[cfg(test)]
pub use repository::MockMenuItemRepository;
