use serde::Deserialize;

use crate::domain::resource::NewResource;
use crate::domain::types::{CategoryId, ResourceId, ResourceType};
use crate::dto::resources::{ResourceDto, ResourceListDto};
use crate::forms::resources::ResourceForm;
use crate::pagination::Window;
use crate::repository::{
    CategoryReader, ResourceListQuery, ResourceReader, ResourceSortField, ResourceWriter,
    SortOrder,
};
use crate::search;

use super::{ServiceError, ServiceResult};

/// Query string accepted by `GET /resources`.
///
/// Every value arrives as raw text and is validated in [`list_resources`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListParams {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub category_id: Option<String>,
    pub is_favorite: Option<String>,
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ResourceListParams {
    /// Validate the structured predicates into a store query.
    fn to_query(&self) -> ServiceResult<ResourceListQuery> {
        let mut query = ResourceListQuery::default();

        if let Some(raw) = non_blank(&self.resource_type) {
            query = query.resource_type(ResourceType::try_from(raw)?);
        }

        if let Some(raw) = non_blank(&self.category_id) {
            query = query.category(CategoryId::parse(raw)?);
        }

        if self.is_favorite.as_deref() == Some("true") {
            query = query.favorites_only();
        }

        let sort_by = match non_blank(&self.sort_by) {
            Some(raw) => ResourceSortField::parse(raw).unwrap_or_else(|| {
                log::warn!("Unknown resource sort field {raw:?}, using createdAt");
                query.sort_by
            }),
            None => query.sort_by,
        };
        let sort_order = non_blank(&self.sort_order)
            .and_then(SortOrder::parse)
            .unwrap_or(query.sort_order);

        Ok(query.sort(sort_by, sort_order))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Core business logic for `GET /resources`.
///
/// Structured predicates are applied by the store, free-text search runs over
/// the fetched rows, and the window is cut from the filtered list so that
/// `total` reflects the number of matches.
pub fn list_resources<R>(params: ResourceListParams, repo: &R) -> ServiceResult<ResourceListDto>
where
    R: ResourceReader,
{
    let query = params.to_query()?;
    let window = Window::parse(params.limit.as_deref(), params.offset.as_deref());

    let resources = match repo.list_resources(&query) {
        Ok(resources) => resources,
        Err(e) => {
            log::error!("Failed to list resources: {e}");
            return Err(ServiceError::Internal);
        }
    };

    log::debug!("Fetched {} resources for {query:?}", resources.len());

    let matched = search::filter(resources, params.q.as_deref().unwrap_or_default());
    let page = window.apply(matched).map(ResourceDto::from);

    Ok(ResourceListDto {
        resources: page.items,
        total: page.total,
        limit: page.limit,
        offset: page.offset,
    })
}

/// Fetch a resource by id, recording the access.
pub fn get_resource<R>(resource_id: i32, repo: &R) -> ServiceResult<ResourceDto>
where
    R: ResourceWriter,
{
    let resource_id = ResourceId::new(resource_id).map_err(|_| ServiceError::NotFound)?;

    match repo.record_access(resource_id) {
        Ok(Some(resource)) => Ok(resource.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to fetch resource {resource_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn ensure_category_exists<R>(resource: &NewResource, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader,
{
    let Some(category_id) = resource.category_id else {
        return Ok(());
    };

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!(
            "Category {category_id} does not exist"
        ))),
        Err(e) => {
            log::error!("Failed to get category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `POST /resources`.
pub fn create_resource<R>(form: ResourceForm, repo: &R) -> ServiceResult<ResourceDto>
where
    R: ResourceWriter + CategoryReader,
{
    let resource = NewResource::try_from(form)?;
    ensure_category_exists(&resource, repo)?;

    match repo.create_resource(&resource) {
        Ok(created) => {
            log::info!("Created resource {}", created.id);
            Ok(created.into())
        }
        Err(e) => {
            log::error!("Failed to create resource: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `PUT /resources/{id}`: every editable field is
/// replaced by the submitted values.
pub fn update_resource<R>(
    resource_id: i32,
    form: ResourceForm,
    repo: &R,
) -> ServiceResult<ResourceDto>
where
    R: ResourceWriter + CategoryReader,
{
    let resource_id = ResourceId::new(resource_id).map_err(|_| ServiceError::NotFound)?;
    let resource = NewResource::try_from(form)?;
    ensure_category_exists(&resource, repo)?;

    match repo.update_resource(resource_id, &resource) {
        Ok(Some(updated)) => Ok(updated.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update resource {resource_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for `DELETE /resources/{id}`.
pub fn delete_resource<R>(resource_id: i32, repo: &R) -> ServiceResult<()>
where
    R: ResourceWriter,
{
    let resource_id = ResourceId::new(resource_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_resource(resource_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => {
            log::info!("Deleted resource {resource_id}");
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete resource {resource_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::{TestRepository, sample_category, sample_resource};

    fn params() -> ResourceListParams {
        ResourceListParams::default()
    }

    fn repo_with_ten_resources() -> TestRepository {
        let resources = (1..=10)
            .map(|id| {
                let name = if id % 3 == 0 {
                    format!("x-ray {id}")
                } else {
                    format!("item {id}")
                };
                sample_resource(id, &name, None)
            })
            .collect();
        TestRepository::default().with_resources(resources)
    }

    #[test]
    fn total_reflects_filtered_count() {
        let repo = repo_with_ten_resources();
        let result = list_resources(
            ResourceListParams {
                q: Some("x".into()),
                limit: Some("2".into()),
                offset: Some("0".into()),
                ..params()
            },
            &repo,
        )
        .unwrap();

        assert_eq!(result.resources.len(), 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.limit, 2);
        assert_eq!(result.offset, 0);
    }

    #[test]
    fn non_numeric_window_falls_back_to_defaults() {
        let repo = repo_with_ten_resources();
        let result = list_resources(
            ResourceListParams {
                limit: Some("lots".into()),
                offset: Some("first".into()),
                ..params()
            },
            &repo,
        )
        .unwrap();

        assert_eq!(result.limit, 50);
        assert_eq!(result.offset, 0);
        assert_eq!(result.total, 10);
    }

    #[test]
    fn invalid_type_is_rejected() {
        let repo = repo_with_ten_resources();
        let err = list_resources(
            ResourceListParams {
                resource_type: Some("LINK".into()),
                ..params()
            },
            &repo,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::TypeConstraint(_)));
    }

    #[test]
    fn structured_predicates_apply_before_search() {
        let mut favorite = sample_resource(1, "rust favorite", None);
        favorite.is_favorite = true;
        let other = sample_resource(2, "rust other", None);
        let repo = TestRepository::default().with_resources(vec![favorite, other]);

        let result = list_resources(
            ResourceListParams {
                is_favorite: Some("true".into()),
                q: Some("rust".into()),
                ..params()
            },
            &repo,
        )
        .unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.resources[0].id, 1);
    }

    #[test]
    fn get_increments_access_count() {
        let repo = TestRepository::default().with_resources(vec![sample_resource(4, "a", None)]);

        assert_eq!(get_resource(4, &repo).unwrap().access_count, 1);
        let second = get_resource(4, &repo).unwrap();
        assert_eq!(second.access_count, 2);
        assert!(second.last_accessed.is_some());
    }

    #[test]
    fn get_missing_resource_is_not_found() {
        let repo = TestRepository::default();
        assert_eq!(get_resource(9, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(get_resource(-1, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn create_materializes_duplicate_tags() {
        let repo = TestRepository::default();
        let form = ResourceForm {
            name: Some("Docs".into()),
            url: Some("https://x.io".into()),
            resource_type: Some("URL".into()),
            tags: Some(vec!["ref".into(), "ref".into()]),
            ..Default::default()
        };

        let created = create_resource(form, &repo).unwrap();
        assert_eq!(created.tags, vec!["ref", "ref"]);
        assert_eq!(created.access_count, 0);
    }

    #[test]
    fn create_requires_existing_category() {
        let repo = TestRepository::default().with_categories(vec![sample_category(1, "Work")]);
        let form = |category_id| ResourceForm {
            name: Some("Wiki".into()),
            url: Some("/srv/wiki".into()),
            resource_type: Some("FOLDER".into()),
            category_id: Some(category_id),
            ..Default::default()
        };

        assert!(matches!(
            create_resource(form(2), &repo),
            Err(ServiceError::Form(_))
        ));
        let created = create_resource(form(1), &repo).unwrap();
        assert_eq!(created.category.map(|c| c.name), Some("Work".to_string()));
    }

    #[test]
    fn update_replaces_all_fields() {
        let mut existing = sample_resource(1, "Old", Some(r#"["a"]"#));
        existing.description = Some("old description".into());
        let repo = TestRepository::default().with_resources(vec![existing]);

        let updated = update_resource(
            1,
            ResourceForm {
                name: Some("New".into()),
                url: Some("https://new.example".into()),
                resource_type: Some("URL".into()),
                ..Default::default()
            },
            &repo,
        )
        .unwrap();

        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, None);
        assert!(updated.tags.is_empty());
    }

    #[test]
    fn delete_missing_resource_is_not_found() {
        let repo = TestRepository::default().with_resources(vec![sample_resource(1, "a", None)]);
        assert_eq!(delete_resource(1, &repo), Ok(()));
        assert_eq!(delete_resource(1, &repo), Err(ServiceError::NotFound));
    }
}
