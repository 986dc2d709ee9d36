use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::contact::{Contact, NewContact};
use crate::domain::resource::{NewResource, Resource};
use crate::domain::tags::StoredTags;
use crate::domain::types::{CategoryId, ContactId, ResourceId, ResourceType};

pub mod category;
pub mod contact;
pub mod errors;
pub mod resource;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Direction of an ordering clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `asc`/`desc`; anything else yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Columns resources may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceSortField {
    Name,
    Url,
    Type,
    CreatedAt,
    UpdatedAt,
    AccessCount,
    LastAccessed,
    IsFavorite,
}

impl ResourceSortField {
    /// Parse the wire (camelCase) name of a sortable field.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "name" => Some(Self::Name),
            "url" => Some(Self::Url),
            "type" => Some(Self::Type),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "accessCount" => Some(Self::AccessCount),
            "lastAccessed" => Some(Self::LastAccessed),
            "isFavorite" => Some(Self::IsFavorite),
            _ => None,
        }
    }
}

/// Columns contacts may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSortField {
    FullName,
    Email,
    Department,
    CreatedAt,
    UpdatedAt,
}

impl ContactSortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "fullName" => Some(Self::FullName),
            "email" => Some(Self::Email),
            "department" => Some(Self::Department),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

/// Structured predicates applied by the store when listing resources.
///
/// Free-text search is not part of the store query; it runs over the
/// returned rows, which arrive in the requested order with `id` as the final
/// tiebreaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceListQuery {
    pub resource_type: Option<ResourceType>,
    pub category_id: Option<CategoryId>,
    pub favorites_only: bool,
    pub sort_by: ResourceSortField,
    pub sort_order: SortOrder,
}

impl Default for ResourceListQuery {
    fn default() -> Self {
        Self {
            resource_type: None,
            category_id: None,
            favorites_only: false,
            sort_by: ResourceSortField::CreatedAt,
            sort_order: SortOrder::Desc,
        }
    }
}

impl ResourceListQuery {
    pub fn resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn favorites_only(mut self) -> Self {
        self.favorites_only = true;
        self
    }
    pub fn sort(mut self, sort_by: ResourceSortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }
}

/// Structured predicates applied by the store when listing contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListQuery {
    /// Substring the department must contain.
    pub department: Option<String>,
    pub sort_by: ContactSortField,
    pub sort_order: SortOrder,
}

impl Default for ContactListQuery {
    fn default() -> Self {
        Self {
            department: None,
            sort_by: ContactSortField::FullName,
            sort_order: SortOrder::Asc,
        }
    }
}

impl ContactListQuery {
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
    pub fn sort(mut self, sort_by: ContactSortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }
}

/// Read-only operations for resource entities.
pub trait ResourceReader {
    /// List resources matching the structured predicates, in query order.
    fn list_resources(&self, query: &ResourceListQuery) -> RepositoryResult<Vec<Resource>>;
    /// Retrieve a resource by its identifier.
    fn get_resource_by_id(&self, id: ResourceId) -> RepositoryResult<Option<Resource>>;
    /// Raw tag columns of every resource.
    fn list_resource_tags(&self) -> RepositoryResult<Vec<StoredTags>>;
}

/// Write operations for resource entities.
pub trait ResourceWriter {
    /// Persist a new resource and return it as stored.
    fn create_resource(&self, resource: &NewResource) -> RepositoryResult<Resource>;
    /// Replace every editable column; `None` if the resource does not exist.
    fn update_resource(
        &self,
        id: ResourceId,
        resource: &NewResource,
    ) -> RepositoryResult<Option<Resource>>;
    /// Atomically bump the access counter and return the updated resource.
    fn record_access(&self, id: ResourceId) -> RepositoryResult<Option<Resource>>;
    /// Delete a resource, returning the number of removed rows.
    fn delete_resource(&self, id: ResourceId) -> RepositoryResult<usize>;
}

/// Read-only operations for contact entities.
pub trait ContactReader {
    fn list_contacts(&self, query: &ContactListQuery) -> RepositoryResult<Vec<Contact>>;
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>>;
    /// Raw tag columns of every contact.
    fn list_contact_tags(&self) -> RepositoryResult<Vec<StoredTags>>;
}

/// Write operations for contact entities.
pub trait ContactWriter {
    fn create_contact(&self, contact: &NewContact) -> RepositoryResult<Contact>;
    fn update_contact(
        &self,
        id: ContactId,
        contact: &NewContact,
    ) -> RepositoryResult<Option<Contact>>;
    fn delete_contact(&self, id: ContactId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    fn update_category(
        &self,
        id: CategoryId,
        category: &NewCategory,
    ) -> RepositoryResult<Option<Category>>;
    /// Delete a category, detaching its resources and child categories.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}
