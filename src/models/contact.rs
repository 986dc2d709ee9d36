use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::contact::{Contact as DomainContact, NewContact as DomainNewContact};
use crate::domain::tags::StoredTags;
use crate::domain::types::{ContactName, TypeConstraintError};

/// Diesel model representing the `contacts` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::contacts)]
pub struct Contact {
    pub id: i32,
    pub full_name: String,
    pub mobile_number: Option<String>,
    pub office_extension: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub profile_picture: Option<String>,
    pub tags: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::contacts)]
pub struct NewContact {
    pub full_name: String,
    pub mobile_number: Option<String>,
    pub office_extension: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub profile_picture: Option<String>,
    pub tags: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::contacts, treat_none_as_null = true)]
pub struct ContactChangeset {
    pub full_name: String,
    pub mobile_number: Option<String>,
    pub office_extension: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub notes: Option<String>,
    pub profile_picture: Option<String>,
    pub tags: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Contact> for DomainContact {
    type Error = TypeConstraintError;

    fn try_from(contact: Contact) -> Result<Self, Self::Error> {
        Ok(Self {
            id: contact.id.try_into()?,
            full_name: ContactName::new(contact.full_name)?,
            mobile_number: contact.mobile_number,
            office_extension: contact.office_extension,
            email: contact.email,
            department: contact.department,
            notes: contact.notes,
            profile_picture: contact.profile_picture,
            tags: StoredTags::from_raw(contact.tags),
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        })
    }
}

impl NewContact {
    pub fn from_domain(contact: &DomainNewContact, now: NaiveDateTime) -> Self {
        Self {
            full_name: contact.full_name.as_str().to_string(),
            mobile_number: contact.mobile_number.clone(),
            office_extension: contact.office_extension.clone(),
            email: contact.email.clone(),
            department: contact.department.clone(),
            notes: contact.notes.clone(),
            profile_picture: contact.profile_picture.clone(),
            tags: contact.tags.raw().map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ContactChangeset {
    pub fn from_domain(contact: &DomainNewContact, now: NaiveDateTime) -> Self {
        Self {
            full_name: contact.full_name.as_str().to_string(),
            mobile_number: contact.mobile_number.clone(),
            office_extension: contact.office_extension.clone(),
            email: contact.email.clone(),
            department: contact.department.clone(),
            notes: contact.notes.clone(),
            profile_picture: contact.profile_picture.clone(),
            tags: contact.tags.raw().map(str::to_string),
            updated_at: now,
        }
    }
}
