use chrono::NaiveDateTime;

use crate::domain::types::{CategoryId, CategoryName};

/// Node of the category tree used to group resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
    pub parent_id: Option<CategoryId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert or fully replace a [`Category`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<String>,
    pub parent_id: Option<CategoryId>,
}
