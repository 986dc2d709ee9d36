use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::resource::{NewResource as DomainNewResource, Resource as DomainResource};
use crate::domain::tags::StoredTags;
use crate::domain::types::{
    AccessCount, CategoryId, ResourceLocation, ResourceName, ResourceType, TypeConstraintError,
};
use crate::models::category::Category;

/// Diesel model representing the `resources` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::resources)]
pub struct Resource {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub resource_type: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Option<String>,
    pub category_id: Option<i32>,
    pub is_favorite: bool,
    pub access_count: i32,
    pub last_accessed: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Resource`]. Access statistics start from column defaults.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::resources)]
pub struct NewResource {
    pub name: String,
    pub url: String,
    pub resource_type: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Option<String>,
    pub category_id: Option<i32>,
    pub is_favorite: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement of a resource's editable columns.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::resources, treat_none_as_null = true)]
pub struct ResourceChangeset {
    pub name: String,
    pub url: String,
    pub resource_type: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Option<String>,
    pub category_id: Option<i32>,
    pub is_favorite: bool,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<(Resource, Option<Category>)> for DomainResource {
    type Error = TypeConstraintError;

    fn try_from((resource, category): (Resource, Option<Category>)) -> Result<Self, Self::Error> {
        Ok(Self {
            id: resource.id.try_into()?,
            name: ResourceName::new(resource.name)?,
            url: ResourceLocation::new(resource.url)?,
            resource_type: ResourceType::try_from(resource.resource_type)?,
            description: resource.description,
            icon: resource.icon,
            tags: StoredTags::from_raw(resource.tags),
            category_id: resource.category_id.map(CategoryId::new).transpose()?,
            category: category.map(TryInto::try_into).transpose()?,
            is_favorite: resource.is_favorite,
            access_count: AccessCount::new(resource.access_count)?,
            last_accessed: resource.last_accessed,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        })
    }
}

impl NewResource {
    pub fn from_domain(resource: &DomainNewResource, now: NaiveDateTime) -> Self {
        Self {
            name: resource.name.as_str().to_string(),
            url: resource.url.as_str().to_string(),
            resource_type: resource.resource_type.as_str().to_string(),
            description: resource.description.clone(),
            icon: resource.icon.clone(),
            tags: resource.tags.raw().map(str::to_string),
            category_id: resource.category_id.map(CategoryId::get),
            is_favorite: resource.is_favorite,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ResourceChangeset {
    pub fn from_domain(resource: &DomainNewResource, now: NaiveDateTime) -> Self {
        Self {
            name: resource.name.as_str().to_string(),
            url: resource.url.as_str().to_string(),
            resource_type: resource.resource_type.as_str().to_string(),
            description: resource.description.clone(),
            icon: resource.icon.clone(),
            tags: resource.tags.raw().map(str::to_string),
            category_id: resource.category_id.map(CategoryId::get),
            is_favorite: resource.is_favorite,
            updated_at: now,
        }
    }
}
