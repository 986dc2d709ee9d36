use serde::Serialize;

use crate::search::TagSummary;
use crate::search::tags::TagFrequency;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagListDto {
    pub tags: Vec<String>,
    pub tags_with_frequency: Vec<TagFrequency>,
    /// Distinct tags before the limit was applied.
    pub total: usize,
}

impl From<TagSummary> for TagListDto {
    fn from(value: TagSummary) -> Self {
        Self {
            tags: value.tags(),
            tags_with_frequency: value.tags_with_frequency,
            total: value.total,
        }
    }
}
