//! Changelog between the loaded snapshot and the working copy.
//!
//! Companies are matched by `name` and models by [`Model::identity_key`], so
//! a rename shows up as a removal plus an addition. The output is meant to be
//! pasted into a pull request description.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{Company, Model};
use crate::diff::{diff_keyed, index_by_key, DiffStatus};

pub const NO_CHANGES_TEXT: &str = "No changes detected";

// ---------------------------------------------------------------------------
// Field changes
// ---------------------------------------------------------------------------

/// Model fields compared field-by-field, in reporting order. `status` is
/// compared last and reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelField {
    License,
    ReleaseDate,
    Params,
    Arch,
    Desc,
    SizeDesc,
    Fyi,
}

impl ModelField {
    pub const ALL: [ModelField; 7] = [
        Self::License,
        Self::ReleaseDate,
        Self::Params,
        Self::Arch,
        Self::Desc,
        Self::SizeDesc,
        Self::Fyi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::License => "license",
            Self::ReleaseDate => "release date",
            Self::Params => "params",
            Self::Arch => "arch",
            Self::Desc => "desc",
            Self::SizeDesc => "size desc",
            Self::Fyi => "fyi",
        }
    }

    fn differs(&self, a: &Model, b: &Model) -> bool {
        match self {
            Self::License => a.license != b.license,
            Self::ReleaseDate => a.release_date != b.release_date,
            Self::Params => a.params != b.params,
            Self::Arch => a.arch != b.arch,
            Self::Desc => a.desc != b.desc,
            Self::SizeDesc => a.size_desc != b.size_desc,
            Self::Fyi => a.fyi != b.fyi,
        }
    }
}

/// One reported difference inside a modified model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldChange {
    Field { field: ModelField },
    StatusSet { to: String },
    StatusCleared { from: String },
    StatusChanged { from: String, to: String },
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { field } => f.write_str(field.label()),
            Self::StatusSet { to } => write!(f, "set status to {to}"),
            Self::StatusCleared { .. } => f.write_str("activated (removed status)"),
            Self::StatusChanged { from, to } => write!(f, "changed status from {from} to {to}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One line of the changelog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEntry {
    AddedCompany { name: String, model_count: usize },
    RemovedCompany { name: String },
    /// Opens the block of model-level changes for a company present in both
    /// versions.
    CompanyHeader { name: String },
    AddedModel { company: String, key: String },
    RemovedModel { company: String, key: String },
    ModifiedModel {
        company: String,
        key: String,
        changes: Vec<FieldChange>,
    },
}

impl ChangeEntry {
    pub fn status(&self) -> DiffStatus {
        match self {
            Self::AddedCompany { .. } | Self::AddedModel { .. } => DiffStatus::Added,
            Self::RemovedCompany { .. } | Self::RemovedModel { .. } => DiffStatus::Removed,
            Self::CompanyHeader { .. } | Self::ModifiedModel { .. } => DiffStatus::Changed,
        }
    }
}

impl fmt::Display for ChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddedCompany { name, model_count } => {
                write!(f, "+ Added company: {name} with {model_count} models")
            }
            Self::RemovedCompany { name } => write!(f, "- Removed company: {name}"),
            Self::CompanyHeader { name } => write!(f, "@ {name}:"),
            Self::AddedModel { key, .. } => write!(f, "  + Added model: {key}"),
            Self::RemovedModel { key, .. } => write!(f, "  - Removed model: {key}"),
            Self::ModifiedModel { key, changes, .. } => {
                let joined = changes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "  ~ Modified {key}: {joined}")
            }
        }
    }
}

/// A non-empty, ordered list of changelog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    entries: Vec<ChangeEntry>,
}

impl Changelog {
    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    /// Number of rendered lines, company headers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Changelog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Outcome of change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeReport {
    NoChanges,
    Changes(Changelog),
}

impl ChangeReport {
    pub fn has_changes(&self) -> bool {
        matches!(self, Self::Changes(_))
    }

    pub fn entries(&self) -> &[ChangeEntry] {
        match self {
            Self::NoChanges => &[],
            Self::Changes(log) => log.entries(),
        }
    }

    pub fn change_count(&self) -> usize {
        self.entries().len()
    }
}

impl fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChanges => f.write_str(NO_CHANGES_TEXT),
            Self::Changes(log) => write!(f, "{log}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Compare the original snapshot with the current working copy.
///
/// Order: added companies, removed companies, then one block per modified
/// company (header, added models, removed models, modified models).
/// Companies whose models show no tracked difference are left out.
pub fn detect_changes(original: &[Company], current: &[Company]) -> ChangeReport {
    let before = index_by_key(original, |c| c.name.as_str());
    let after = index_by_key(current, |c| c.name.as_str());

    let mut entries = Vec::new();
    for diff in diff_keyed(&before, &after) {
        match (diff.status, diff.original, diff.current) {
            (DiffStatus::Added, _, Some(company)) => entries.push(ChangeEntry::AddedCompany {
                name: diff.key.to_string(),
                model_count: company.models.len(),
            }),
            (DiffStatus::Removed, _, _) => entries.push(ChangeEntry::RemovedCompany {
                name: diff.key.to_string(),
            }),
            (DiffStatus::Changed, Some(old), Some(new)) => {
                let block = model_changes(diff.key, &old.models, &new.models);
                if !block.is_empty() {
                    entries.push(ChangeEntry::CompanyHeader {
                        name: diff.key.to_string(),
                    });
                    entries.extend(block);
                }
            }
            _ => {}
        }
    }

    if entries.is_empty() {
        ChangeReport::NoChanges
    } else {
        ChangeReport::Changes(Changelog { entries })
    }
}

fn model_changes(company: &str, original: &[Model], current: &[Model]) -> Vec<ChangeEntry> {
    let before = index_by_key(original, Model::identity_key);
    let after = index_by_key(current, Model::identity_key);

    diff_keyed(&before, &after)
        .into_iter()
        .filter_map(|diff| {
            let company = company.to_string();
            let key = diff.key.to_string();
            match (diff.status, diff.original, diff.current) {
                (DiffStatus::Added, _, _) => Some(ChangeEntry::AddedModel { company, key }),
                (DiffStatus::Removed, _, _) => Some(ChangeEntry::RemovedModel { company, key }),
                (DiffStatus::Changed, Some(old), Some(new)) => {
                    let changes = field_changes(old, new);
                    (!changes.is_empty()).then_some(ChangeEntry::ModifiedModel {
                        company,
                        key,
                        changes,
                    })
                }
                _ => None,
            }
        })
        .collect()
}

fn field_changes(old: &Model, new: &Model) -> Vec<FieldChange> {
    let mut changes: Vec<FieldChange> = ModelField::ALL
        .into_iter()
        .filter(|field| field.differs(old, new))
        .map(|field| FieldChange::Field { field })
        .collect();

    match (status_of(old), status_of(new)) {
        (None, Some(to)) => changes.push(FieldChange::StatusSet { to: to.into() }),
        (Some(from), None) => changes.push(FieldChange::StatusCleared { from: from.into() }),
        (Some(from), Some(to)) if from != to => changes.push(FieldChange::StatusChanged {
            from: from.into(),
            to: to.into(),
        }),
        _ => {}
    }

    changes
}

/// An empty status string counts as no status.
fn status_of(model: &Model) -> Option<&str> {
    model.status.as_deref().filter(|s| !s.is_empty())
}
