use chrono::NaiveDateTime;

use crate::domain::category::Category;
use crate::domain::tags::StoredTags;
use crate::domain::types::{
    AccessCount, CategoryId, ResourceId, ResourceLocation, ResourceName, ResourceType,
};

/// A bookmarked URL or folder path.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: ResourceId,
    pub name: ResourceName,
    pub url: ResourceLocation,
    pub resource_type: ResourceType,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: StoredTags,
    pub category_id: Option<CategoryId>,
    /// Linked category, loaded alongside the resource.
    pub category: Option<Category>,
    pub is_favorite: bool,
    pub access_count: AccessCount,
    pub last_accessed: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert or fully replace a [`Resource`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewResource {
    pub name: ResourceName,
    pub url: ResourceLocation,
    pub resource_type: ResourceType,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: StoredTags,
    pub category_id: Option<CategoryId>,
    pub is_favorite: bool,
}
