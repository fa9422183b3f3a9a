// SPDX-License-Identifier: PMPL-1.0-or-later

//! Route table and navigation
//!
//! The route table binds URL path patterns to views. Patterns are rooted
//! and made of literal segments or `:param` segments. Literal routes win
//! over parameterised ones; among parameterised routes the first declared
//! match wins.
//!
//! The table derived from a registry has one landing route (`/`) and one
//! detail route per project. [`check_bijection`] keeps the two sides in
//! step: no project path without a route, no record-backed route without a
//! project.

mod location;
mod navigator;
mod scroll;

pub use location::HashLocation;
pub use navigator::{Navigation, Navigator};
pub use scroll::{scroll_for, Scroll};

use crate::error::RouteError;
use crate::registry::ProjectRegistry;
use crate::types::canonical_path;
use crate::views::{CatalogView, DesignView, View};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Name of the landing route.
pub const HOME_ROUTE: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Clone)]
pub struct RouteEntry {
    path: String,
    name: String,
    view: Arc<dyn View>,
    segments: Vec<Segment>,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        view: Arc<dyn View>,
    ) -> Result<Self, RouteError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPattern(path));
        }
        let path = canonical_path(&path);
        let segments = split_segments(&path)
            .map(|segment| match segment.strip_prefix(':') {
                Some(param) => Segment::Param(param.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();
        Ok(Self {
            path,
            name: name.into(),
            view,
            segments,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    pub fn is_parameterised(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Param(_)))
    }

    /// Match a normalised path, returning captured parameters.
    fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts: Vec<&str> = split_segments(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("view", &self.view.name())
            .finish()
    }
}

/// Serialisable view of a route entry, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub name: String,
    pub view: String,
}

impl From<&RouteEntry> for RouteSummary {
    fn from(entry: &RouteEntry) -> Self {
        Self {
            path: entry.path.clone(),
            name: entry.name.clone(),
            view: entry.view.name().to_string(),
        }
    }
}

#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    /// The normalised path that was matched.
    pub path: String,
    pub params: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate paths or names.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for entry in &entries {
            if !paths.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(RouteError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Landing route plus one detail route per project, in registry order.
    pub fn for_registry(registry: &ProjectRegistry) -> Result<Self, RouteError> {
        let catalog: Arc<dyn View> = Arc::new(CatalogView);
        let design: Arc<dyn View> = Arc::new(DesignView);

        let mut entries = Vec::with_capacity(registry.len() + 1);
        entries.push(RouteEntry::new("/", HOME_ROUTE, catalog)?);
        for record in registry {
            entries.push(RouteEntry::new(
                record.path.as_str(),
                record.id.as_str(),
                Arc::clone(&design),
            )?);
        }
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.entries.iter().map(RouteSummary::from).collect()
    }

    /// Find the route for `path`. Trailing slashes are ignored and the
    /// empty path is `/`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = canonical_path(path);

        let literal = self
            .entries
            .iter()
            .filter(|entry| !entry.is_parameterised())
            .find(|entry| entry.path == path);
        if let Some(entry) = literal {
            return Some(RouteMatch {
                entry,
                path,
                params: BTreeMap::new(),
            });
        }

        self.entries
            .iter()
            .filter(|entry| entry.is_parameterised())
            .find_map(|entry| {
                entry.matches(&path).map(|params| RouteMatch {
                    entry,
                    path: path.clone(),
                    params,
                })
            })
    }

    fn entries_matching<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a RouteEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.matches(path).is_some())
    }
}

/// First registry/route mismatch, if any. See [`audit_bijection`].
pub fn check_bijection(table: &RouteTable, registry: &ProjectRegistry) -> Result<(), RouteError> {
    match audit_bijection(table, registry).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Every mismatch between registry paths and the route table.
///
/// Each project path must be matched by exactly one route. Each route whose
/// view requires a backing record must match at least one project path.
pub fn audit_bijection(table: &RouteTable, registry: &ProjectRegistry) -> Vec<RouteError> {
    let mut problems = Vec::new();

    for record in registry {
        let path = canonical_path(&record.path);
        let count = table.entries_matching(&path).count();
        match count {
            0 => problems.push(RouteError::OrphanedPath {
                id: record.id.clone(),
                path: record.path.clone(),
            }),
            1 => {}
            count => problems.push(RouteError::AmbiguousPath {
                id: record.id.clone(),
                path: record.path.clone(),
                count,
            }),
        }
    }

    for entry in table.entries() {
        if !entry.view.requires_record() {
            continue;
        }
        let backed = registry
            .iter()
            .any(|record| entry.matches(&canonical_path(&record.path)).is_some());
        if !backed {
            problems.push(RouteError::DanglingRoute {
                name: entry.name.clone(),
                path: entry.path.clone(),
            });
        }
    }

    problems
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::builtin_records;
    use crate::types::{HexColor, ProjectRecord};

    fn registry() -> ProjectRegistry {
        ProjectRegistry::new(builtin_records().unwrap()).unwrap()
    }

    #[test]
    fn literal_beats_parameterised() {
        let design: Arc<dyn View> = Arc::new(DesignView);
        let table = RouteTable::new(vec![
            RouteEntry::new("/designs/:id", "design", Arc::clone(&design)).unwrap(),
            RouteEntry::new("/designs/camera-move", "camera-move", design).unwrap(),
        ])
        .unwrap();

        let hit = table.resolve("/designs/camera-move").unwrap();
        assert_eq!(hit.entry.name(), "camera-move");
        assert!(hit.params.is_empty());

        let hit = table.resolve("/designs/sketch-edit/").unwrap();
        assert_eq!(hit.entry.name(), "design");
        assert_eq!(hit.params.get("id").map(String::as_str), Some("sketch-edit"));

        assert!(table.resolve("/designs").is_none());
        assert!(table.resolve("/designs/a/b").is_none());
    }

    #[test]
    fn rejects_unrooted_pattern() {
        let err = RouteEntry::new("designs", "d", Arc::new(DesignView)).unwrap_err();
        assert_eq!(err, RouteError::InvalidPattern("designs".to_string()));
    }

    #[test]
    fn duplicate_names_and_paths_rejected() {
        let view: Arc<dyn View> = Arc::new(CatalogView);
        let dup_path = RouteTable::new(vec![
            RouteEntry::new("/", "home", Arc::clone(&view)).unwrap(),
            RouteEntry::new("/", "index", Arc::clone(&view)).unwrap(),
        ]);
        assert_eq!(dup_path.unwrap_err(), RouteError::DuplicatePath("/".to_string()));

        let dup_name = RouteTable::new(vec![
            RouteEntry::new("/", "home", Arc::clone(&view)).unwrap(),
            RouteEntry::new("/about", "home", view).unwrap(),
        ]);
        assert_eq!(dup_name.unwrap_err(), RouteError::DuplicateName("home".to_string()));
    }

    #[test]
    fn derived_table_is_bijective() {
        let registry = registry();
        let table = RouteTable::for_registry(&registry).unwrap();
        assert_eq!(table.entries().len(), registry.len() + 1);
        assert_eq!(table.entries()[0].name(), HOME_ROUTE);
        assert!(check_bijection(&table, &registry).is_ok());
    }

    #[test]
    fn project_named_home_collides_with_landing_route() {
        let registry = ProjectRegistry::new(vec![ProjectRecord::new(
            "home",
            "Home",
            "/designs/home",
            HexColor::parse("#fff").unwrap(),
        )])
        .unwrap();
        assert_eq!(
            RouteTable::for_registry(&registry).unwrap_err(),
            RouteError::DuplicateName("home".to_string())
        );
    }

    #[test]
    fn orphaned_and_dangling_are_reported() {
        let registry = registry();
        let design: Arc<dyn View> = Arc::new(DesignView);
        let table = RouteTable::new(vec![
            RouteEntry::new("/", HOME_ROUTE, Arc::new(CatalogView)).unwrap(),
            RouteEntry::new("/designs/camera-move", "camera-move", Arc::clone(&design))
                .unwrap(),
            RouteEntry::new("/gallery/3d-camera", "3d-camera", design).unwrap(),
        ])
        .unwrap();

        let problems = audit_bijection(&table, &registry);
        assert_eq!(
            problems,
            vec![
                RouteError::OrphanedPath {
                    id: "sketch-edit".to_string(),
                    path: "/designs/sketch-edit".to_string(),
                },
                RouteError::DanglingRoute {
                    name: "3d-camera".to_string(),
                    path: "/gallery/3d-camera".to_string(),
                },
            ]
        );
        assert_eq!(check_bijection(&table, &registry).unwrap_err(), problems[0]);
    }

    #[test]
    fn overlapping_pattern_is_ambiguous() {
        let registry = registry();
        let mut entries = RouteTable::for_registry(&registry).unwrap().entries().to_vec();
        entries.push(RouteEntry::new("/designs/:id", "design", Arc::new(DesignView)).unwrap());
        let table = RouteTable::new(entries).unwrap();

        let problems = audit_bijection(&table, &registry);
        assert_eq!(problems.len(), 2);
        assert!(problems
            .iter()
            .all(|p| matches!(p, RouteError::AmbiguousPath { count: 2, .. })));
    }
}
