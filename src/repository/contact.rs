use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::contact::{Contact, NewContact};
use crate::domain::tags::StoredTags;
use crate::domain::types::ContactId;
use crate::models::contact::{
    Contact as DbContact, ContactChangeset, NewContact as DbNewContact,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ContactListQuery, ContactReader, ContactSortField, ContactWriter, DieselRepository, SortOrder,
};

/// Escape `LIKE` wildcards so the value matches literally under `ESCAPE '\'`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl ContactReader for DieselRepository {
    fn list_contacts(&self, query: &ContactListQuery) -> RepositoryResult<Vec<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let mut items = contacts::table.into_boxed::<Sqlite>();

        if let Some(department) = &query.department {
            let pattern = format!("%{}%", escape_like(department));
            items = items.filter(contacts::department.like(pattern).escape('\\'));
        }

        items = match (query.sort_by, query.sort_order) {
            (ContactSortField::FullName, SortOrder::Asc) => items.order(contacts::full_name.asc()),
            (ContactSortField::FullName, SortOrder::Desc) => {
                items.order(contacts::full_name.desc())
            }
            (ContactSortField::Email, SortOrder::Asc) => items.order(contacts::email.asc()),
            (ContactSortField::Email, SortOrder::Desc) => items.order(contacts::email.desc()),
            (ContactSortField::Department, SortOrder::Asc) => {
                items.order(contacts::department.asc())
            }
            (ContactSortField::Department, SortOrder::Desc) => {
                items.order(contacts::department.desc())
            }
            (ContactSortField::CreatedAt, SortOrder::Asc) => {
                items.order(contacts::created_at.asc())
            }
            (ContactSortField::CreatedAt, SortOrder::Desc) => {
                items.order(contacts::created_at.desc())
            }
            (ContactSortField::UpdatedAt, SortOrder::Asc) => {
                items.order(contacts::updated_at.asc())
            }
            (ContactSortField::UpdatedAt, SortOrder::Desc) => {
                items.order(contacts::updated_at.desc())
            }
        };

        let items = items
            .then_order_by(contacts::id.asc())
            .load::<DbContact>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Contact>, _>>()?;

        Ok(items)
    }

    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let contact = contacts::table
            .filter(contacts::id.eq(id.get()))
            .first::<DbContact>(&mut conn)
            .optional()?;

        Ok(contact.map(TryInto::try_into).transpose()?)
    }

    fn list_contact_tags(&self) -> RepositoryResult<Vec<StoredTags>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let tags = contacts::table
            .select(contacts::tags)
            .load::<Option<String>>(&mut conn)?
            .into_iter()
            .map(StoredTags::from_raw)
            .collect();

        Ok(tags)
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, contact: &NewContact) -> RepositoryResult<Contact> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let db_contact = DbNewContact::from_domain(contact, Utc::now().naive_utc());

        let created = diesel::insert_into(contacts::table)
            .values(&db_contact)
            .get_result::<DbContact>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_contact(
        &self,
        id: ContactId,
        contact: &NewContact,
    ) -> RepositoryResult<Option<Contact>> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;
        let changeset = ContactChangeset::from_domain(contact, Utc::now().naive_utc());

        let updated = diesel::update(contacts::table.filter(contacts::id.eq(id.get())))
            .set(&changeset)
            .get_result::<DbContact>(&mut conn)
            .optional()?;

        Ok(updated.map(TryInto::try_into).transpose()?)
    }

    fn delete_contact(&self, id: ContactId) -> RepositoryResult<usize> {
        use crate::schema::contacts;

        let mut conn = self.conn()?;

        let affected = diesel::delete(contacts::table.filter(contacts::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("R_D 100%"), r"R\_D 100\%");
        assert_eq!(escape_like(r"a\b"), r"a\\b");
        assert_eq!(escape_like("Sales"), "Sales");
    }
}
