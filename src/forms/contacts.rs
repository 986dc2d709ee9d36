use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::contact::NewContact;
use crate::domain::tags::StoredTags;
use crate::domain::types::{ContactName, TypeConstraintError};

/// Body of `POST /contacts` and `PUT /contacts/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(required, length(min = 1))]
    pub full_name: Option<String>,
    pub mobile_number: Option<String>,
    pub office_extension: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub profile_picture: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ContactFormError {
    #[error("Full name is required")]
    MissingFullName,
    #[error("Contact form validation failed: {0}")]
    Validation(String),
    #[error("Contact contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ContactFormError {
    fn from(value: ValidationErrors) -> Self {
        if value.field_errors().contains_key("full_name") {
            Self::MissingFullName
        } else {
            Self::Validation(value.to_string())
        }
    }
}

impl From<TypeConstraintError> for ContactFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ContactForm> for NewContact {
    type Error = ContactFormError;

    fn try_from(value: ContactForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let full_name = value.full_name.ok_or(ContactFormError::MissingFullName)?;

        Ok(Self {
            full_name: ContactName::new(full_name)?,
            mobile_number: value.mobile_number,
            office_extension: value.office_extension,
            email: value.email,
            department: value.department,
            notes: value.notes,
            profile_picture: value.profile_picture,
            tags: StoredTags::encode_optional(value.tags.as_deref()),
        })
    }
}
