//! MenuItem repository trait (port)

use async_trait::async_trait;
use thiserror::Error;

use super::models::{MenuItem, MenuItemChanges, NewMenuItem};
use crate::odata::FilterPredicate;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result of an update against an existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(MenuItem),
    /// Every supplied value already matched the stored row.
    Unchanged,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<MenuItem>, RepositoryError>;

    /// All rows in primary-key order, restricted by `filter` when given.
    async fn list(&self, filter: Option<FilterPredicate>) -> Result<Vec<MenuItem>, RepositoryError>;

    /// Writes only when a supplied value differs from the stored one. `None` if the id does not exist.
    async fn update(
        &self,
        id: i64,
        changes: &MenuItemChanges,
    ) -> Result<Option<UpdateOutcome>, RepositoryError>;

    /// Hard delete. `false` if the id does not exist.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn ping(&self) -> Result<(), RepositoryError>;
}
