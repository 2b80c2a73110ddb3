use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

use crate::database::{MenuItemRepository, UpdateOutcome};
use crate::models::{CreateMenuItemRequest, MenuItemDto, UpdateMenuItemRequest};
use crate::odata::{
    EntityResponse, FilterPredicate, MenuItemKey, ServiceRoot, ValueResponse, MENU_ITEMS,
};
use crate::utils::{error::ApiError, ApiJson};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "$filter")]
    pub filter: Option<String>,
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("MenuItem {} not found", id))
}

/// `POST /odata/MenuItems`
pub async fn create_menu_item(
    State(repository): State<Arc<dyn MenuItemRepository>>,
    root: ServiceRoot,
    ApiJson(request): ApiJson<CreateMenuItemRequest>,
) -> Result<(StatusCode, Json<EntityResponse<MenuItemDto>>), ApiError> {
    request.validate()?;

    let item = repository.create(&request.into()).await?;
    info!("Created menu item {} ({})", item.id, item.name);

    Ok((
        StatusCode::CREATED,
        Json(EntityResponse {
            context: root.entity_context(MENU_ITEMS),
            entity: item.into(),
        }),
    ))
}

/// `GET /odata/MenuItems[?$filter=Calories gt N]`
///
/// A `$filter` outside the supported grammar is ignored and the full
/// collection is returned.
pub async fn list_menu_items(
    State(repository): State<Arc<dyn MenuItemRepository>>,
    root: ServiceRoot,
    uri: Uri,
    Query(query): Query<ListQuery>,
) -> Result<Json<ValueResponse<Vec<MenuItemDto>>>, ApiError> {
    let predicate = query
        .filter
        .as_deref()
        .and_then(|raw| match raw.parse::<FilterPredicate>() {
            Ok(predicate) => Some(predicate),
            Err(e) => {
                debug!("Ignoring $filter: {}", e);
                None
            }
        });

    let items = repository.list(predicate).await?;

    Ok(Json(ValueResponse {
        context: root.collection_context(uri.path(), MENU_ITEMS),
        value: items.into_iter().map(MenuItemDto::from).collect(),
    }))
}

/// `GET /odata/MenuItems(<id>)`
pub async fn get_menu_item(
    State(repository): State<Arc<dyn MenuItemRepository>>,
    root: ServiceRoot,
    MenuItemKey(id): MenuItemKey,
) -> Result<Json<ValueResponse<MenuItemDto>>, ApiError> {
    let item = repository.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(Json(ValueResponse {
        context: root.entity_context(MENU_ITEMS),
        value: item.into(),
    }))
}

/// `POST /odata/MenuItems(<id>)`
///
/// 200 with the flat entity when something changed, 204 when the payload
/// matches what is already stored.
pub async fn update_menu_item(
    State(repository): State<Arc<dyn MenuItemRepository>>,
    root: ServiceRoot,
    MenuItemKey(id): MenuItemKey,
    ApiJson(request): ApiJson<UpdateMenuItemRequest>,
) -> Result<Response, ApiError> {
    let changes = request.into_changes()?;

    let outcome = repository
        .update(id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    match outcome {
        UpdateOutcome::Updated(item) => {
            info!("Updated menu item {}", item.id);
            Ok(Json(EntityResponse {
                context: root.entity_context(MENU_ITEMS),
                entity: MenuItemDto::from(item),
            })
            .into_response())
        }
        UpdateOutcome::Unchanged => {
            debug!("No changes made to menu item {}", id);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// `DELETE /odata/MenuItems(<id>)`
pub async fn delete_menu_item(
    State(repository): State<Arc<dyn MenuItemRepository>>,
    MenuItemKey(id): MenuItemKey,
) -> Result<StatusCode, ApiError> {
    if !repository.delete(id).await? {
        return Err(not_found(id));
    }

    info!("Deleted menu item {}", id);

    Ok(StatusCode::NO_CONTENT)
}
