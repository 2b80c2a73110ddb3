//! SQLite repository implementation

use async_trait::async_trait;
use sqlx::query_builder::Separated;
use sqlx::{QueryBuilder, Sqlite};
use tracing::debug;

use super::models::{MenuItem, MenuItemChanges, NewMenuItem};
use super::repository::{MenuItemRepository, RepositoryError, UpdateOutcome};
use super::DbPool;
use crate::odata::FilterPredicate;

pub struct SqliteMenuItemRepository {
    pool: DbPool,
}

impl SqliteMenuItemRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for SqliteMenuItemRepository {
    async fn create(&self, item: &NewMenuItem) -> Result<MenuItem, RepositoryError> {
        let created = sqlx::query_as::<_, MenuItem>(
            r#"INSERT INTO menu_item (name, rating, is_vegan, calories, description)
               VALUES (?, ?, ?, ?, ?)
               RETURNING id, name, rating, is_vegan, calories, description"#,
        )
        .bind(&item.name)
        .bind(item.rating)
        .bind(item.is_vegan)
        .bind(item.calories)
        .bind(&item.description)
        .fetch_one(self.pool.get_pool())
        .await?;

        debug!("Inserted menu item {}", created.id);

        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<MenuItem>, RepositoryError> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"SELECT id, name, rating, is_vegan, calories, description
               FROM menu_item
               WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(self.pool.get_pool())
        .await?;

        Ok(item)
    }

    async fn list(&self, filter: Option<FilterPredicate>) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, name, rating, is_vegan, calories, description FROM menu_item",
        );

        if let Some(predicate) = filter {
            query
                .push(" WHERE ")
                .push(predicate.field.column())
                .push(" ")
                .push(predicate.operator.sql())
                .push(" ")
                .push_bind(predicate.value);
        }

        query.push(" ORDER BY id");

        let items = query
            .build_query_as::<MenuItem>()
            .fetch_all(self.pool.get_pool())
            .await?;

        debug!("Listed {} menu items (filter: {:?})", items.len(), filter);

        Ok(items)
    }

    async fn update(
        &self,
        id: i64,
        changes: &MenuItemChanges,
    ) -> Result<Option<UpdateOutcome>, RepositoryError> {
        if changes.is_empty() {
            return Ok(self.get_by_id(id).await?.map(|_| UpdateOutcome::Unchanged));
        }

        // Compare and write share one statement, hence one write lock.
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE menu_item SET ");
        push_changed_columns(&mut query.separated(", "), changes, " = ");
        query.push(" WHERE id = ").push_bind(id).push(" AND (");
        push_changed_columns(&mut query.separated(" OR "), changes, " IS NOT ");
        query.push(") RETURNING id, name, rating, is_vegan, calories, description");

        let updated = query
            .build_query_as::<MenuItem>()
            .fetch_optional(self.pool.get_pool())
            .await?;

        match updated {
            Some(item) => {
                debug!("Updated menu item {}", item.id);
                Ok(Some(UpdateOutcome::Updated(item)))
            }
            // No row written: either the id is unknown or every value already matched.
            None => Ok(self.get_by_id(id).await?.map(|_| UpdateOutcome::Unchanged)),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM menu_item WHERE id = ?")
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(self.pool.get_pool()).await?;
        Ok(())
    }
}

/// Pushes `<column><operator>?` for every column present in `changes`.
fn push_changed_columns(
    columns: &mut Separated<'_, '_, Sqlite, &'static str>,
    changes: &MenuItemChanges,
    operator: &str,
) {
    if let Some(name) = &changes.name {
        columns.push(format!("name{}", operator)).push_bind_unseparated(name.clone());
    }
    if let Some(rating) = changes.rating {
        columns.push(format!("rating{}", operator)).push_bind_unseparated(rating);
    }
    if let Some(is_vegan) = changes.is_vegan {
        columns.push(format!("is_vegan{}", operator)).push_bind_unseparated(is_vegan);
    }
    if let Some(calories) = changes.calories {
        columns.push(format!("calories{}", operator)).push_bind_unseparated(calories);
    }
    if let Some(description) = &changes.description {
        columns
            .push(format!("description{}", operator))
            .push_bind_unseparated(description.clone());
    }
}
