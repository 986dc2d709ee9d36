use serde::Deserialize;

use crate::dto::tags::TagListDto;
use crate::pagination::parse_count;
use crate::repository::{ContactReader, ResourceReader};
use crate::search::tags::DEFAULT_TAG_LIMIT;
use crate::search::{self, TagSort};

use super::{ServiceError, ServiceResult};

/// Query string accepted by `GET /tags`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagListParams {
    pub sort_by: Option<String>,
    pub limit: Option<String>,
}

/// Rank every tag used by resources and contacts.
pub fn list_tags<R>(params: TagListParams, repo: &R) -> ServiceResult<TagListDto>
where
    R: ResourceReader + ContactReader,
{
    let sort = TagSort::parse(params.sort_by.as_deref());
    let limit = parse_count(params.limit.as_deref(), DEFAULT_TAG_LIMIT);

    let resource_tags = repo.list_resource_tags().map_err(|e| {
        log::error!("Failed to load resource tags: {e}");
        ServiceError::Internal
    })?;
    let contact_tags = repo.list_contact_tags().map_err(|e| {
        log::error!("Failed to load contact tags: {e}");
        ServiceError::Internal
    })?;

    let summary = search::aggregate(&resource_tags, &contact_tags, sort, limit);
    log::debug!(
        "Aggregated {} distinct tags from {} resources and {} contacts",
        summary.total,
        resource_tags.len(),
        contact_tags.len()
    );

    Ok(summary.into())
}
