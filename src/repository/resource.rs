use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::domain::resource::{NewResource, Resource};
use crate::domain::tags::StoredTags;
use crate::domain::types::ResourceId;
use crate::models::category::Category as DbCategory;
use crate::models::resource::{
    NewResource as DbNewResource, Resource as DbResource, ResourceChangeset,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DieselRepository, ResourceListQuery, ResourceReader, ResourceSortField, ResourceWriter,
    SortOrder,
};

type ResourceRow = (DbResource, Option<DbCategory>);

/// Apply `$order` to `$column` on a boxed query.
macro_rules! order_by {
    ($items:expr, $column:expr, $order:expr) => {
        match $order {
            SortOrder::Asc => $items.order($column.asc()),
            SortOrder::Desc => $items.order($column.desc()),
        }
    };
}

fn load_resource(conn: &mut SqliteConnection, id: i32) -> RepositoryResult<Option<Resource>> {
    use crate::schema::{categories, resources};

    let row = resources::table
        .left_join(categories::table)
        .filter(resources::id.eq(id))
        .first::<ResourceRow>(conn)
        .optional()?;

    Ok(row.map(TryInto::try_into).transpose()?)
}

impl ResourceReader for DieselRepository {
    fn list_resources(&self, query: &ResourceListQuery) -> RepositoryResult<Vec<Resource>> {
        use crate::schema::{categories, resources};

        let mut conn = self.conn()?;

        let mut items = resources::table
            .left_join(categories::table)
            .into_boxed::<Sqlite>();

        if let Some(resource_type) = query.resource_type {
            items = items.filter(resources::resource_type.eq(resource_type.as_str()));
        }

        if let Some(category_id) = query.category_id {
            items = items.filter(resources::category_id.eq(category_id.get()));
        }

        if query.favorites_only {
            items = items.filter(resources::is_favorite.eq(true));
        }

        items = match query.sort_by {
            ResourceSortField::Name => order_by!(items, resources::name, query.sort_order),
            ResourceSortField::Url => order_by!(items, resources::url, query.sort_order),
            ResourceSortField::Type => {
                order_by!(items, resources::resource_type, query.sort_order)
            }
            ResourceSortField::CreatedAt => {
                order_by!(items, resources::created_at, query.sort_order)
            }
            ResourceSortField::UpdatedAt => {
                order_by!(items, resources::updated_at, query.sort_order)
            }
            ResourceSortField::AccessCount => {
                order_by!(items, resources::access_count, query.sort_order)
            }
            ResourceSortField::LastAccessed => {
                order_by!(items, resources::last_accessed, query.sort_order)
            }
            ResourceSortField::IsFavorite => {
                order_by!(items, resources::is_favorite, query.sort_order)
            }
        };

        let items = items
            .then_order_by(resources::id.asc())
            .load::<ResourceRow>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Resource>, _>>()?;

        Ok(items)
    }

    fn get_resource_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>> {
        let mut conn = self.conn()?;
        load_resource(&mut conn, id.get())
    }

    fn list_resource_tags(&self) -> RepositoryResult<Vec<StoredTags>> {
        use crate::schema::resources;

        let mut conn = self.conn()?;

        let tags = resources::table
            .select(resources::tags)
            .load::<Option<String>>(&mut conn)?
            .into_iter()
            .map(StoredTags::from_raw)
            .collect();

        Ok(tags)
    }
}

impl ResourceWriter for DieselRepository {
    fn create_resource(&self, resource: &NewResource) -> RepositoryResult<Resource> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let db_resource = DbNewResource::from_domain(resource, Utc::now().naive_utc());

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let id: i32 = diesel::insert_into(resources::table)
                .values(&db_resource)
                .returning(resources::id)
                .get_result(conn)?;

            load_resource(conn, id)?.ok_or(RepositoryError::Database(diesel::NotFound))
        })
    }

    fn update_resource(
        &self,
        id: ResourceId,
        resource: &NewResource,
    ) -> RepositoryResult<Option<Resource>> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let changeset = ResourceChangeset::from_domain(resource, Utc::now().naive_utc());

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::update(resources::table.filter(resources::id.eq(id.get())))
                .set(&changeset)
                .execute(conn)?;

            if affected == 0 {
                return Ok(None);
            }
            load_resource(conn, id.get())
        })
    }

    fn record_access(&self, id: ResourceId) -> RepositoryResult<Option<Resource>> {
        use crate::schema::resources;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let affected = diesel::update(resources::table.filter(resources::id.eq(id.get())))
                .set((
                    resources::access_count.eq(resources::access_count + 1),
                    resources::last_accessed.eq(Some(now)),
                ))
                .execute(conn)?;

            if affected == 0 {
                return Ok(None);
            }
            load_resource(conn, id.get())
        })
    }

    fn delete_resource(&self, id: ResourceId) -> RepositoryResult<usize> {
        use crate::schema::resources;

        let mut conn = self.conn()?;

        let affected = diesel::delete(resources::table.filter(resources::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
