//! Free-text search applied after the structured store query.
//!
//! The filter is stable: it never reorders records, it only drops the ones
//! that match none of their searchable fields.

use crate::domain::contact::Contact;
use crate::domain::resource::Resource;
use crate::domain::tags::{TagDecodeError, decode_tags};

/// How a field value is compared against the normalized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCase {
    /// Field value is lowercased before comparison.
    Insensitive,
    /// Field value is compared as stored (phone numbers, extensions).
    Exact,
}

/// A single named field offered to the search filter.
#[derive(Debug, Clone, Copy)]
pub struct SearchField<'a> {
    pub name: &'static str,
    pub value: Option<&'a str>,
    pub case: FieldCase,
}

impl<'a> SearchField<'a> {
    pub fn insensitive(name: &'static str, value: Option<&'a str>) -> Self {
        Self {
            name,
            value,
            case: FieldCase::Insensitive,
        }
    }

    pub fn exact(name: &'static str, value: Option<&'a str>) -> Self {
        Self {
            name,
            value,
            case: FieldCase::Exact,
        }
    }

    fn matches(&self, query: &SearchQuery) -> bool {
        match (self.value, self.case) {
            (None, _) => false,
            (Some(value), FieldCase::Insensitive) => value.to_lowercase().contains(query.as_str()),
            (Some(value), FieldCase::Exact) => value.contains(query.as_str()),
        }
    }
}

/// Records that take part in unified search.
pub trait Searchable {
    /// Identifier used in log lines.
    fn search_key(&self) -> i32;
    /// Non-tag fields, OR-combined.
    fn search_fields(&self) -> Vec<SearchField<'_>>;
    /// Raw persisted tag text.
    fn raw_tags(&self) -> Option<&str>;
}

/// Trimmed, lowercased, non-empty search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw input; blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Why a record was excluded without a full evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MalformedTags(TagDecodeError),
}

/// Result of evaluating one record against a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The named field contained the query.
    Matched(&'static str),
    Unmatched,
    /// Tags could not be decoded and no other field matched.
    Skipped(SkipReason),
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }
}

/// Evaluate a single record.
pub fn evaluate<T: Searchable>(record: &T, query: &SearchQuery) -> MatchOutcome {
    if let Some(field) = record.search_fields().iter().find(|f| f.matches(query)) {
        return MatchOutcome::Matched(field.name);
    }

    match decode_tags(record.raw_tags()) {
        Ok(tags) => {
            if tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query.as_str()))
            {
                MatchOutcome::Matched("tags")
            } else {
                MatchOutcome::Unmatched
            }
        }
        Err(e) => MatchOutcome::Skipped(SkipReason::MalformedTags(e)),
    }
}

/// Keep the records matching `query`, preserving their relative order.
///
/// A blank query returns `records` untouched.
pub fn filter<T: Searchable>(records: Vec<T>, query: &str) -> Vec<T> {
    let Some(query) = SearchQuery::parse(query) else {
        return records;
    };

    let fetched = records.len();
    let matched: Vec<T> = records
        .into_iter()
        .filter(|record| match evaluate(record, &query) {
            MatchOutcome::Matched(field) => {
                log::debug!(
                    "Record {} matched {:?} in {field}",
                    record.search_key(),
                    query.as_str()
                );
                true
            }
            MatchOutcome::Unmatched => false,
            MatchOutcome::Skipped(SkipReason::MalformedTags(e)) => {
                log::warn!("Record {} excluded from search: {e}", record.search_key());
                false
            }
        })
        .collect();

    log::debug!(
        "Search {:?} kept {} of {fetched} records",
        query.as_str(),
        matched.len()
    );
    matched
}

impl Searchable for Resource {
    fn search_key(&self) -> i32 {
        self.id.get()
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::insensitive("name", Some(self.name.as_str())),
            SearchField::insensitive("description", self.description.as_deref()),
            SearchField::insensitive("url", Some(self.url.as_str())),
            SearchField::insensitive("category", self.category.as_ref().map(|c| c.name.as_str())),
        ]
    }

    fn raw_tags(&self) -> Option<&str> {
        self.tags.raw()
    }
}

impl Searchable for Contact {
    fn search_key(&self) -> i32 {
        self.id.get()
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::insensitive("fullName", Some(self.full_name.as_str())),
            SearchField::insensitive("email", self.email.as_deref()),
            SearchField::exact("mobileNumber", self.mobile_number.as_deref()),
            SearchField::exact("officeExtension", self.office_extension.as_deref()),
            SearchField::insensitive("department", self.department.as_deref()),
            SearchField::insensitive("notes", self.notes.as_deref()),
        ]
    }

    fn raw_tags(&self) -> Option<&str> {
        self.tags.raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ResourceLocation;
    use crate::repository::test::{sample_category, sample_contact, sample_resource};

    fn ids<T: Searchable>(records: &[T]) -> Vec<i32> {
        records.iter().map(Searchable::search_key).collect()
    }

    #[test]
    fn blank_query_is_identity() {
        let records = vec![
            sample_resource(3, "Zeta", None),
            sample_resource(1, "Alpha", None),
            sample_resource(2, "Beta", None),
        ];
        let expected = records.clone();

        assert_eq!(filter(records.clone(), ""), expected);
        assert_eq!(filter(records, "   \t"), expected);
    }

    #[test]
    fn keeps_relative_order_of_matches() {
        let records = vec![
            sample_resource(5, "rust book", None),
            sample_resource(2, "go book", None),
            sample_resource(9, "Rust std docs", None),
            sample_resource(1, "rustlings", None),
        ];

        let matched = filter(records, "rust");
        assert_eq!(ids(&matched), vec![5, 9, 1]);
    }

    #[test]
    fn matching_ignores_case_of_query_and_fields() {
        let mut resource = sample_resource(1, "Handbook", None);
        resource.description = Some("Team ONBOARDING guide".into());
        let records = vec![resource, sample_resource(2, "Other", None)];

        assert_eq!(
            ids(&filter(records.clone(), "ABC")),
            ids(&filter(records.clone(), "abc"))
        );
        assert_eq!(ids(&filter(records.clone(), "onboarding")), vec![1]);
        assert_eq!(ids(&filter(records, "  OnBoarding ")), vec![1]);
    }

    #[test]
    fn resource_matches_on_url_tags_and_category() {
        let mut by_url = sample_resource(1, "A", None);
        by_url.url = ResourceLocation::new("https://Docs.Example.io").unwrap();
        let by_tag = sample_resource(2, "B", Some(r#"["Infra","ops"]"#));
        let mut by_category = sample_resource(3, "C", None);
        by_category.category = Some(sample_category(1, "Infrastructure"));
        let none = sample_resource(4, "D", None);

        let records = vec![by_url, by_tag, by_category, none];
        assert_eq!(ids(&filter(records.clone(), "docs.example")), vec![1]);
        assert_eq!(ids(&filter(records, "infra")), vec![2, 3]);
    }

    #[test]
    fn contact_phone_fields_are_compared_raw() {
        let mut contact = sample_contact(1, "Ada Lovelace", None);
        contact.mobile_number = Some("+44 7700 900123".into());
        contact.office_extension = Some("x42".into());

        assert!(evaluate(&contact, &SearchQuery::parse("900123").unwrap()).is_match());
        assert_eq!(
            evaluate(&contact, &SearchQuery::parse("X42").unwrap()),
            MatchOutcome::Matched("officeExtension")
        );
        assert_eq!(
            evaluate(&contact, &SearchQuery::parse("LOVELACE").unwrap()),
            MatchOutcome::Matched("fullName")
        );
    }

    #[test]
    fn contact_matches_department_notes_and_tags() {
        let mut by_department = sample_contact(1, "A", None);
        by_department.department = Some("Platform Engineering".into());
        let mut by_notes = sample_contact(2, "B", None);
        by_notes.notes = Some("owns the platform roadmap".into());
        let by_tag = sample_contact(3, "C", Some(r#"["PLATFORM"]"#));
        let other = sample_contact(4, "D", Some(r#"["sales"]"#));

        let matched = filter(vec![by_department, by_notes, by_tag, other], "Platform");
        assert_eq!(ids(&matched), vec![1, 2, 3]);
    }

    #[test]
    fn malformed_tags_fall_back_to_other_fields() {
        let named = sample_resource(1, "kubernetes notes", Some("{broken"));
        let unnamed = sample_resource(2, "misc", Some("{broken kubernetes"));

        let query = SearchQuery::parse("kubernetes").unwrap();
        assert_eq!(evaluate(&named, &query), MatchOutcome::Matched("name"));
        assert!(matches!(
            evaluate(&unnamed, &query),
            MatchOutcome::Skipped(SkipReason::MalformedTags(_))
        ));

        assert_eq!(ids(&filter(vec![named, unnamed], "kubernetes")), vec![1]);
    }

    #[test]
    fn unmatched_record_with_valid_tags_is_unmatched() {
        let record = sample_resource(1, "misc", Some(r#"["a"]"#));
        assert_eq!(
            evaluate(&record, &SearchQuery::parse("zzz").unwrap()),
            MatchOutcome::Unmatched
        );
    }
}
