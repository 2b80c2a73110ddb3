//! Entity key segment, e.g. `MenuItems(42)`.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::MENU_ITEMS;
use crate::utils::error::ApiError;

/// Id addressed by a `/odata/MenuItems(<id>)` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItemKey(pub i64);

impl MenuItemKey {
    pub fn parse(segment: &str) -> Option<Self> {
        let id = segment
            .strip_prefix(MENU_ITEMS)?
            .strip_prefix('(')?
            .strip_suffix(')')?;

        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        id.parse().ok().map(MenuItemKey)
    }
}

impl<S> FromRequestParts<S> for MenuItemKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound("Resource not found".to_string()))?;

        Self::parse(&segment)
            .ok_or_else(|| ApiError::NotFound(format!("Resource not found: {}", segment)))
    }
}
