// SPDX-License-Identifier: PMPL-1.0-or-later

//! Project registry
//!
//! Holds the ordered list of showcased projects. Declaration order is
//! display order. Construction validates the whole list up front, so a
//! registry value that exists is always internally consistent: ids are
//! unique slugs and paths are unique and rooted.

mod catalog;

pub use catalog::{builtin_records, load_catalog};

use crate::error::RegistryError;
use crate::types::{canonical_path, is_valid_slug, ProjectRecord};
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    records: Vec<ProjectRecord>,
    by_id: HashMap<String, usize>,
}

impl ProjectRegistry {
    /// Validate `records` and build the registry.
    ///
    /// Rejects the first structural defect found, scanning in declaration
    /// order: malformed id, empty name, unrooted path, then duplicate id or
    /// path against earlier entries. Paths are stored in canonical form, so
    /// `/designs/a/` and `/designs/a` are the same path.
    pub fn new(mut records: Vec<ProjectRecord>) -> Result<Self, RegistryError> {
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_path: HashMap<String, String> = HashMap::with_capacity(records.len());

        for (index, record) in records.iter_mut().enumerate() {
            if !is_valid_slug(&record.id) {
                return Err(RegistryError::InvalidId(record.id.clone()));
            }
            if record.name.trim().is_empty() {
                return Err(RegistryError::EmptyName(record.id.clone()));
            }
            if !record.path.starts_with('/') {
                return Err(RegistryError::InvalidPath {
                    id: record.id.clone(),
                    path: record.path.clone(),
                });
            }
            record.path = canonical_path(&record.path);
            if let Some(&first) = by_id.get(&record.id) {
                return Err(RegistryError::DuplicateId {
                    id: record.id.clone(),
                    first,
                    second: index,
                });
            }
            if let Some(owner) = by_path.get(&record.path) {
                return Err(RegistryError::DuplicatePath {
                    path: record.path.clone(),
                    first: owner.clone(),
                    second: record.id.clone(),
                });
            }
            by_id.insert(record.id.clone(), index);
            by_path.insert(record.path.clone(), record.id.clone());
        }

        Ok(Self { records, by_id })
    }

    /// All projects in declaration order.
    pub fn list_projects(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// The project with this id, if any. Stale or external links simply
    /// get `None`.
    pub fn get_project_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        let found = self.by_id.get(id).map(|&index| &self.records[index]);
        tracing::debug!(id, found = found.is_some(), "project lookup");
        found
    }

    /// The project whose detail route is `path`, compared in canonical
    /// form.
    pub fn get_project_by_path(&self, path: &str) -> Option<&ProjectRecord> {
        let path = canonical_path(path);
        self.records.iter().find(|record| record.path == path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProjectRegistry {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

static SHARED: OnceLock<ProjectRegistry> = OnceLock::new();

/// Process-wide registry built from the compiled-in catalog.
///
/// Initialised on first access and kept until the process exits. A defect
/// in the built-in list is reported on every call until it is fixed.
pub fn shared() -> Result<&'static ProjectRegistry, RegistryError> {
    if let Some(registry) = SHARED.get() {
        return Ok(registry);
    }
    let registry = ProjectRegistry::new(builtin_records()?)?;
    tracing::info!(projects = registry.len(), "project registry initialised");
    Ok(SHARED.get_or_init(|| registry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HexColor;

    fn record(id: &str) -> ProjectRecord {
        ProjectRecord::new(
            id,
            id.to_uppercase(),
            format!("/designs/{id}"),
            HexColor::parse("#BBDEFB").unwrap(),
        )
    }

    #[test]
    fn lookup_uses_index_positions() {
        let registry =
            ProjectRegistry::new(vec![record("a"), record("b"), record("c")]).unwrap();
        for id in ["a", "b", "c"] {
            assert_eq!(registry.get_project_by_id(id).unwrap().id, id);
        }
        assert!(registry.get_project_by_id("d").is_none());
    }

    #[test]
    fn lookup_by_path() {
        let registry = ProjectRegistry::new(vec![record("a"), record("b")]).unwrap();
        assert_eq!(registry.get_project_by_path("/designs/b").unwrap().id, "b");
        assert!(registry.get_project_by_path("/designs/z").is_none());
    }

    #[test]
    fn duplicate_path_reports_both_owners() {
        let mut clash = record("b");
        clash.path = "/designs/a".to_string();
        let err = ProjectRegistry::new(vec![record("a"), clash]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicatePath {
                path: "/designs/a".to_string(),
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }

    #[test]
    fn trailing_slash_paths_are_stored_canonically() {
        let mut slashed = record("storyline");
        slashed.path = "/designs/storyline/".to_string();
        let registry = ProjectRegistry::new(vec![slashed]).unwrap();
        assert_eq!(registry.list_projects()[0].path, "/designs/storyline");
        assert_eq!(
            registry.get_project_by_path("/designs/storyline/").unwrap().id,
            "storyline"
        );
    }

    #[test]
    fn paths_differing_by_trailing_slash_collide() {
        let mut clash = record("b");
        clash.path = "/designs/a/".to_string();
        let err = ProjectRegistry::new(vec![record("a"), clash]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicatePath {
                path: "/designs/a".to_string(),
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(matches!(
            ProjectRegistry::new(vec![record("Bad Id")]),
            Err(RegistryError::InvalidId(_))
        ));

        let mut unrooted = record("a");
        unrooted.path = "designs/a".to_string();
        assert!(matches!(
            ProjectRegistry::new(vec![unrooted]),
            Err(RegistryError::InvalidPath { .. })
        ));

        let mut nameless = record("a");
        nameless.name = "  ".to_string();
        assert_eq!(
            ProjectRegistry::new(vec![nameless]).unwrap_err(),
            RegistryError::EmptyName("a".to_string())
        );
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry = ProjectRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.list_projects().is_empty());
    }

    #[test]
    fn shared_registry_is_a_singleton() {
        let first = shared().unwrap();
        let second = shared().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), builtin_records().unwrap().len());
    }
}
