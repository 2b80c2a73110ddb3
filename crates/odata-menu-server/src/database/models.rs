use sqlx::FromRow;

/// Stored `menu_item` row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub rating: Option<i64>,
    pub is_vegan: Option<bool>,
    pub calories: Option<i64>,
    pub description: Option<String>,
}

/// Column values for an insert; the id is assigned by storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMenuItem {
    pub name: String,
    pub rating: Option<i64>,
    pub is_vegan: Option<bool>,
    pub calories: Option<i64>,
    pub description: Option<String>,
}

/// Partial update. `None` leaves a column untouched, `Some(None)` clears a nullable one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub rating: Option<Option<i64>>,
    pub is_vegan: Option<Option<bool>>,
    pub calories: Option<Option<i64>>,
    pub description: Option<Option<String>>,
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.rating.is_none()
            && self.is_vegan.is_none()
            && self.calories.is_none()
            && self.description.is_none()
    }
}
