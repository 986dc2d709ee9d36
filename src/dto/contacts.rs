use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::contact::Contact;

/// Contact as presented to clients, with tags materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: i32,
    pub full_name: String,
    pub mobile_number: Option<String>,
    pub office_extension: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub profile_picture: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactDto {
    fn from(value: Contact) -> Self {
        Self {
            id: value.id.get(),
            tags: value.tags.materialize(),
            full_name: value.full_name.into_inner(),
            mobile_number: value.mobile_number,
            office_extension: value.office_extension,
            email: value.email,
            department: value.department,
            notes: value.notes,
            profile_picture: value.profile_picture,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactListDto {
    pub contacts: Vec<ContactDto>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}
