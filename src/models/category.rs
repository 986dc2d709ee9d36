use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Category`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement of a category's editable columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::categories, treat_none_as_null = true)]
pub struct CategoryChangeset {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            description: category.description,
            parent_id: category.parent_id.map(CategoryId::new).transpose()?,
            created_at: category.created_at,
            updated_at: category.updated_at,
        })
    }
}

impl NewCategory {
    pub fn from_domain(category: &DomainNewCategory, now: NaiveDateTime) -> Self {
        Self {
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            parent_id: category.parent_id.map(CategoryId::get),
            created_at: now,
            updated_at: now,
        }
    }
}

impl CategoryChangeset {
    pub fn from_domain(category: &DomainNewCategory, now: NaiveDateTime) -> Self {
        Self {
            name: category.name.as_str().to_string(),
            description: category.description.clone(),
            parent_id: category.parent_id.map(CategoryId::get),
            updated_at: now,
        }
    }
}
