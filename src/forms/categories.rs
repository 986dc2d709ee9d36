use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryId, CategoryName, TypeConstraintError};

/// Body of `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryForm {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub parent_id: Option<i32>,
}

#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("Category name is required")]
    MissingName,
    #[error("Category form validation failed: {0}")]
    Validation(String),
    #[error("Category contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        if value.field_errors().contains_key("name") {
            Self::MissingName
        } else {
            Self::Validation(value.to_string())
        }
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CategoryForm> for NewCategory {
    type Error = CategoryFormError;

    fn try_from(value: CategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let name = value.name.ok_or(CategoryFormError::MissingName)?;

        Ok(Self {
            name: CategoryName::new(name)?,
            description: value.description,
            parent_id: value.parent_id.map(CategoryId::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let err = NewCategory::try_from(CategoryForm::default()).unwrap_err();
        assert!(matches!(err, CategoryFormError::MissingName));
    }

    #[test]
    fn rejects_non_positive_parent() {
        let form = CategoryForm {
            name: Some("Work".into()),
            parent_id: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            NewCategory::try_from(form),
            Err(CategoryFormError::Validation(_))
        ));
    }

    #[test]
    fn converts_nested_category() {
        let form = CategoryForm {
            name: Some("Runbooks".into()),
            description: Some("On-call material".into()),
            parent_id: Some(3),
        };
        let category = NewCategory::try_from(form).unwrap();
        assert_eq!(category.name, "Runbooks");
        assert_eq!(category.parent_id.map(CategoryId::get), Some(3));
    }
}
