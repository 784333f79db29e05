//! Keyed comparison of two record collections.
//!
//! Both sides are indexed by a string key in first-seen order; a later record
//! with an already-seen key replaces the earlier one but keeps its position.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The status of an item in a diff comparison.
///
/// - `Added`     -- present only in the current side.
/// - `Removed`   -- present only in the original side.
/// - `Changed`   -- present in both sides but with different values.
/// - `Unchanged` -- present in both sides with identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    Added,
    Removed,
    Changed,
    Unchanged,
}

impl DiffStatus {
    /// String representation for display and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key of a keyed diff with the record(s) found under it.
#[derive(Debug)]
pub struct KeyedDiff<'a, T> {
    pub key: &'a str,
    pub status: DiffStatus,
    pub original: Option<&'a T>,
    pub current: Option<&'a T>,
}

/// Index records by key, last record wins per key.
pub fn index_by_key<'a, T, F>(items: &'a [T], key: F) -> IndexMap<&'a str, &'a T>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        map.insert(key(item), item);
    }
    map
}

/// Compare two keyed collections.
///
/// Output order: added keys (current order), removed keys (original order),
/// then keys present on both sides (current order).
pub fn diff_keyed<'a, T: PartialEq>(
    original: &IndexMap<&'a str, &'a T>,
    current: &IndexMap<&'a str, &'a T>,
) -> Vec<KeyedDiff<'a, T>> {
    let added = current
        .iter()
        .filter(|(key, _)| !original.contains_key(*key))
        .map(|(key, item)| KeyedDiff {
            key: *key,
            status: DiffStatus::Added,
            original: None,
            current: Some(*item),
        });

    let removed = original
        .iter()
        .filter(|(key, _)| !current.contains_key(*key))
        .map(|(key, item)| KeyedDiff {
            key: *key,
            status: DiffStatus::Removed,
            original: Some(*item),
            current: None,
        });

    let shared = current.iter().filter_map(|(key, item)| {
        original.get(key).map(|before| KeyedDiff {
            key: *key,
            status: if *before == *item {
                DiffStatus::Unchanged
            } else {
                DiffStatus::Changed
            },
            original: Some(*before),
            current: Some(*item),
        })
    });

    added.chain(removed).chain(shared).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_returns_correct_strings() {
        assert_eq!(DiffStatus::Added.as_str(), "added");
        assert_eq!(DiffStatus::Removed.as_str(), "removed");
        assert_eq!(DiffStatus::Changed.as_str(), "changed");
        assert_eq!(DiffStatus::Unchanged.as_str(), "unchanged");
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", DiffStatus::Added), "added");
        assert_eq!(format!("{}", DiffStatus::Changed), "changed");
    }

    fn pairs(items: &[(&'static str, i32)]) -> Vec<(&'static str, i32)> {
        items.to_vec()
    }

    #[test]
    fn later_duplicates_replace_value_in_place() {
        let items = pairs(&[("a", 1), ("b", 2), ("a", 3)]);
        let map = index_by_key(&items, |(k, _)| *k);
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map["a"].1, 3);
    }

    #[test]
    fn diff_orders_added_removed_then_shared() {
        let before = pairs(&[("keep", 1), ("gone", 2), ("edit", 3)]);
        let after = pairs(&[("edit", 4), ("new", 5), ("keep", 1)]);
        let original = index_by_key(&before, |(k, _)| *k);
        let current = index_by_key(&after, |(k, _)| *k);

        let summary: Vec<_> = diff_keyed(&original, &current)
            .into_iter()
            .map(|d| (d.key, d.status))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("new", DiffStatus::Added),
                ("gone", DiffStatus::Removed),
                ("edit", DiffStatus::Changed),
                ("keep", DiffStatus::Unchanged),
            ]
        );
    }
}
