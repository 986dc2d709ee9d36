use serde::Deserialize;

use crate::domain::contact::NewContact;
use crate::domain::types::ContactId;
use crate::dto::contacts::{ContactDto, ContactListDto};
use crate::forms::contacts::ContactForm;
use crate::pagination::Window;
use crate::repository::{
    ContactListQuery, ContactReader, ContactSortField, ContactWriter, SortOrder,
};
use crate::search;

use super::{ServiceError, ServiceResult};

/// Query string accepted by `GET /contacts`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListParams {
    pub department: Option<String>,
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ContactListParams {
    fn to_query(&self) -> ContactListQuery {
        let mut query = ContactListQuery::default();

        if let Some(department) = self.department.as_deref().filter(|d| !d.is_empty()) {
            query = query.department(department);
        }

        let sort_by = match self.sort_by.as_deref() {
            Some(raw) => ContactSortField::parse(raw).unwrap_or_else(|| {
                log::warn!("Unknown contact sort field {raw:?}, using fullName");
                query.sort_by
            }),
            None => query.sort_by,
        };
        let sort_order = self
            .sort_order
            .as_deref()
            .and_then(SortOrder::parse)
            .unwrap_or(query.sort_order);

        query.sort(sort_by, sort_order)
    }
}

/// Core business logic for `GET /contacts`.
pub fn list_contacts<R>(params: ContactListParams, repo: &R) -> ServiceResult<ContactListDto>
where
    R: ContactReader,
{
    let query = params.to_query();
    let window = Window::parse(params.limit.as_deref(), params.offset.as_deref());

    let contacts = match repo.list_contacts(&query) {
        Ok(contacts) => contacts,
        Err(e) => {
            log::error!("Failed to list contacts: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let matched = search::filter(contacts, params.q.as_deref().unwrap_or_default());
    let page = window.apply(matched).map(ContactDto::from);

    Ok(ContactListDto {
        contacts: page.items,
        total: page.total,
        limit: page.limit,
        offset: page.offset,
    })
}

pub fn get_contact<R>(contact_id: i32, repo: &R) -> ServiceResult<ContactDto>
where
    R: ContactReader,
{
    let contact_id = ContactId::new(contact_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_contact_by_id(contact_id) {
        Ok(Some(contact)) => Ok(contact.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get contact {contact_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_contact<R>(form: ContactForm, repo: &R) -> ServiceResult<ContactDto>
where
    R: ContactWriter,
{
    let contact = NewContact::try_from(form)?;

    match repo.create_contact(&contact) {
        Ok(created) => {
            log::info!("Created contact {}", created.id);
            Ok(created.into())
        }
        Err(e) => {
            log::error!("Failed to create contact: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_contact<R>(contact_id: i32, form: ContactForm, repo: &R) -> ServiceResult<ContactDto>
where
    R: ContactWriter,
{
    let contact_id = ContactId::new(contact_id).map_err(|_| ServiceError::NotFound)?;
    let contact = NewContact::try_from(form)?;

    match repo.update_contact(contact_id, &contact) {
        Ok(Some(updated)) => Ok(updated.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update contact {contact_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_contact<R>(contact_id: i32, repo: &R) -> ServiceResult<()>
where
    R: ContactWriter,
{
    let contact_id = ContactId::new(contact_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_contact(contact_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Deleted contact {contact_id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete contact {contact_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
