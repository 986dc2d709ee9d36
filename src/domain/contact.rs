use chrono::NaiveDateTime;

use crate::domain::tags::StoredTags;
use crate::domain::types::{ContactId, ContactName};

/// Colleague directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: ContactName,
    pub mobile_number: Option<String>,
    pub office_extension: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub profile_picture: Option<String>,
    pub tags: StoredTags,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert or fully replace a [`Contact`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub full_name: ContactName,
    pub mobile_number: Option<String>,
    pub office_extension: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub profile_picture: Option<String>,
    pub tags: StoredTags,
}
