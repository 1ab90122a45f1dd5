//! Sibling join between individuals and their health, fertility and
//! education answers.
//!
//! The collection form records these answers in separate repeating groups
//! that only carry the member's name and age. [`SiblingIndex`] keys each
//! group by `(name, age)` so an individual can look up its answers.
//!
//! # Rules
//!
//! - First element with a given key wins; later duplicates are logged and
//!   ignored.
//! - Elements whose name or age cannot be read are logged and left out.
//! - Elements without a name or age cannot be matched and are left out.

use std::collections::BTreeMap;

use census_model::RawRecord;
use serde_json::Value;
use tracing::{debug, warn};

/// Join key of an individual and its sibling answers.
pub type SiblingKey = (String, i64);

/// Lookup of one sibling group by `(name, age)`.
#[derive(Debug, Clone, Default)]
pub struct SiblingIndex<'a> {
    entries: BTreeMap<SiblingKey, RawRecord<'a>>,
}

impl<'a> SiblingIndex<'a> {
    /// Index `elements`, reading the join key from `name_key` and `age_key`.
    pub fn build(group: &'static str, elements: &'a [Value], name_key: &str, age_key: &str) -> Self {
        let mut entries = BTreeMap::new();
        for (index, element) in elements.iter().enumerate() {
            let key = RawRecord::from_value(element, group).and_then(|raw| {
                let name = raw.text(name_key)?;
                let age = raw.integer(age_key)?;
                Ok((raw, name.zip(age)))
            });
            match key {
                Ok((raw, Some(key))) => {
                    if entries.contains_key(&key) {
                        warn!(group, index, "duplicate sibling key, keeping first match");
                    } else {
                        entries.insert(key, raw);
                    }
                }
                Ok((_, None)) => {
                    debug!(group, index, "sibling element without name or age");
                }
                Err(error) => {
                    warn!(group, index, %error, "sibling element skipped");
                }
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answers of the member with this name and age.
    pub fn lookup(&self, name: Option<&str>, age: Option<i64>) -> Option<RawRecord<'a>> {
        let key = (name?.to_string(), age?);
        self.entries.get(&key).copied()
    }
}

/// The three sibling groups of a household submission.
#[derive(Debug, Clone, Default)]
pub struct Siblings<'a> {
    pub health: SiblingIndex<'a>,
    pub fertility: SiblingIndex<'a>,
    pub education: SiblingIndex<'a>,
}

impl<'a> Siblings<'a> {
    /// Build the indexes from the top-level `health`, `fertility` and
    /// `education` groups. A malformed group is logged and left empty.
    pub fn build(raw: RawRecord<'a>) -> Self {
        Self {
            health: index_group(raw, "health", "health_name", "health_age"),
            fertility: index_group(raw, "fertility", "fertility_name", "fertility_age"),
            education: index_group(raw, "education", "edu_name", "edu_age"),
        }
    }
}

fn index_group<'a>(
    raw: RawRecord<'a>,
    group: &'static str,
    name_key: &str,
    age_key: &str,
) -> SiblingIndex<'a> {
    match raw.array(group) {
        Ok(elements) => SiblingIndex::build(group, elements, name_key, age_key),
        Err(error) => {
            warn!(group, %error, "sibling group unreadable");
            SiblingIndex::default()
        }
    }
}
