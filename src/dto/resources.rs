use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::resource::Resource;
use crate::domain::types::ResourceType;
use crate::dto::categories::CategoryDto;

/// Resource as presented to clients, with tags materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Vec<String>,
    pub category_id: Option<i32>,
    pub category: Option<CategoryDto>,
    pub is_favorite: bool,
    pub access_count: i32,
    pub last_accessed: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceDto {
    fn from(value: Resource) -> Self {
        Self {
            id: value.id.get(),
            tags: value.tags.materialize(),
            name: value.name.into_inner(),
            url: value.url.into_inner(),
            resource_type: value.resource_type,
            description: value.description,
            icon: value.icon,
            category_id: value.category_id.map(|id| id.get()),
            category: value.category.map(CategoryDto::from),
            is_favorite: value.is_favorite,
            access_count: value.access_count.get(),
            last_accessed: value.last_accessed.map(|at| at.and_utc()),
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

/// One window of the resource listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceListDto {
    pub resources: Vec<ResourceDto>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}
