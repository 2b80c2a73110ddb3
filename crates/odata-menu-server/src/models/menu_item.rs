use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::database::{MenuItem, MenuItemChanges, NewMenuItem};
use crate::utils::error::ApiError;

pub const NAME_MAX_LEN: usize = 80;
pub const DESCRIPTION_MAX_LEN: usize = 200;

// ===== REQUEST MODELS =====

/// `POST /odata/MenuItems` body.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[serde(rename = "Name")]
    #[validate(length(min = 1, max = 80, message = "Name must be between 1 and 80 characters"))]
    pub name: String,

    #[serde(rename = "Rating", default)]
    pub rating: Option<i64>,

    #[serde(rename = "isVegan", default)]
    pub is_vegan: Option<bool>,

    #[serde(rename = "Calories", default)]
    pub calories: Option<i64>,

    #[serde(rename = "Description", default)]
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
}

impl From<CreateMenuItemRequest> for NewMenuItem {
    fn from(request: CreateMenuItemRequest) -> Self {
        NewMenuItem {
            name: request.name,
            rating: request.rating,
            is_vegan: request.is_vegan,
            calories: request.calories,
            description: request.description,
        }
    }
}

/// `POST /odata/MenuItems(<id>)` body. Absent keys stay `None`; explicit
/// `null` becomes `Some(None)`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMenuItemRequest {
    #[serde(rename = "Name", default, deserialize_with = "present")]
    pub name: Option<Option<String>>,

    #[serde(rename = "Rating", default, deserialize_with = "present")]
    pub rating: Option<Option<i64>>,

    #[serde(rename = "isVegan", default, deserialize_with = "present")]
    pub is_vegan: Option<Option<bool>>,

    #[serde(rename = "Calories", default, deserialize_with = "present")]
    pub calories: Option<Option<i64>>,

    #[serde(rename = "Description", default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

impl UpdateMenuItemRequest {
    pub fn into_changes(self) -> Result<MenuItemChanges, ApiError> {
        let name = match self.name {
            Some(None) => return Err(ApiError::BadRequest("Name: must not be null".to_string())),
            Some(Some(name)) => {
                check_length("Name", &name, 1, NAME_MAX_LEN)?;
                Some(name)
            }
            None => None,
        };

        if let Some(Some(description)) = &self.description {
            check_length("Description", description, 0, DESCRIPTION_MAX_LEN)?;
        }

        Ok(MenuItemChanges {
            name,
            rating: self.rating,
            is_vegan: self.is_vegan,
            calories: self.calories,
            description: self.description,
        })
    }
}

fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ApiError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ApiError::BadRequest(format!(
            "{}: must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}

fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ===== RESPONSE MODELS =====

/// Wire representation of a menu item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemDto {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rating")]
    pub rating: Option<i64>,
    #[serde(rename = "isVegan")]
    pub is_vegan: Option<bool>,
    #[serde(rename = "Calories")]
    pub calories: Option<i64>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

impl From<MenuItem> for MenuItemDto {
    fn from(item: MenuItem) -> Self {
        MenuItemDto {
            id: item.id,
            name: item.name,
            rating: item.rating,
            is_vegan: item.is_vegan,
            calories: item.calories,
            description: item.description,
        }
    }
}
