//! Tag frequency table shared by resources and contacts.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::domain::tags::StoredTags;

/// Number of tags returned when the caller does not ask for a limit.
pub const DEFAULT_TAG_LIMIT: usize = 100;

/// Ordering of the aggregated tag list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSort {
    /// Most used first, ties broken alphabetically.
    #[default]
    Frequency,
    Alphabetical,
}

impl TagSort {
    /// Anything other than `alphabetical` sorts by frequency.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("alphabetical") => Self::Alphabetical,
            _ => Self::Frequency,
        }
    }

    fn compare(self, a: &TagFrequency, b: &TagFrequency) -> Ordering {
        match self {
            Self::Alphabetical => a.tag.cmp(&b.tag),
            Self::Frequency => b
                .frequency
                .cmp(&a.frequency)
                .then_with(|| a.tag.cmp(&b.tag)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFrequency {
    pub tag: String,
    pub frequency: usize,
}

/// Ranked tags plus the number of distinct tags before truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub tags_with_frequency: Vec<TagFrequency>,
    pub total: usize,
}

impl TagSummary {
    /// Tag names in ranked order.
    pub fn tags(&self) -> Vec<String> {
        self.tags_with_frequency
            .iter()
            .map(|entry| entry.tag.clone())
            .collect()
    }
}

fn count_into(counts: &mut HashMap<String, usize>, tags: &StoredTags, kind: &str) {
    let decoded = match tags.decode() {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("Skipping {kind} tags: {e}");
            return;
        }
    };

    for tag in decoded {
        // Tags are keyed case-sensitively: "Go" and "go" are distinct.
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            continue;
        }
        *counts.entry(trimmed.to_string()).or_insert(0) += 1;
    }
}

/// Build the ranked tag list from every resource and contact tag column.
pub fn aggregate<'a, R, C>(
    resource_tags: R,
    contact_tags: C,
    sort: TagSort,
    limit: usize,
) -> TagSummary
where
    R: IntoIterator<Item = &'a StoredTags>,
    C: IntoIterator<Item = &'a StoredTags>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for tags in resource_tags {
        count_into(&mut counts, tags, "resource");
    }
    for tags in contact_tags {
        count_into(&mut counts, tags, "contact");
    }

    let total = counts.len();
    let mut entries: Vec<TagFrequency> = counts
        .into_iter()
        .map(|(tag, frequency)| TagFrequency { tag, frequency })
        .collect();
    entries.sort_by(|a, b| sort.compare(a, b));
    entries.truncate(limit);

    TagSummary {
        tags_with_frequency: entries,
        total,
    }
}
