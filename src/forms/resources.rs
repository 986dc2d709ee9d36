use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::resource::NewResource;
use crate::domain::tags::StoredTags;
use crate::domain::types::{
    CategoryId, ResourceLocation, ResourceName, ResourceType, TypeConstraintError,
};

/// Body of `POST /resources` and `PUT /resources/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResourceForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub url: Option<String>,
    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    pub resource_type: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category_id: Option<i32>,
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Error)]
pub enum ResourceFormError {
    #[error("Name, URL, and type are required")]
    MissingRequired,
    #[error("Resource contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ResourceFormError {
    fn from(_: ValidationErrors) -> Self {
        Self::MissingRequired
    }
}

impl From<TypeConstraintError> for ResourceFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ResourceForm> for NewResource {
    type Error = ResourceFormError;

    fn try_from(value: ResourceForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let (Some(name), Some(url), Some(resource_type)) =
            (value.name, value.url, value.resource_type)
        else {
            return Err(ResourceFormError::MissingRequired);
        };

        Ok(Self {
            name: ResourceName::new(name)?,
            url: ResourceLocation::new(url)?,
            resource_type: ResourceType::try_from(resource_type)?,
            description: value.description,
            icon: value.icon,
            tags: StoredTags::encode_optional(value.tags.as_deref()),
            category_id: value.category_id.map(CategoryId::new).transpose()?,
            is_favorite: value.is_favorite.unwrap_or(false),
        })
    }
}
