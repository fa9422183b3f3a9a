// SPDX-License-Identifier: PMPL-1.0-or-later

//! Structural errors raised while building the registry, the route table
//! and the configuration. Looking up a missing project is not an error and
//! never appears here.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate project id {id:?} (entries {first} and {second})")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error("duplicate project path {path:?} (used by {first:?} and {second:?})")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("project id {0:?} is not a lowercase slug")]
    InvalidId(String),

    #[error("project {id:?} has path {path:?}, which does not start with '/'")]
    InvalidPath { id: String, path: String },

    #[error("project {id:?} has colour {color:?}, expected #RGB or #RRGGBB")]
    InvalidColor { id: String, color: String },

    #[error("project {0:?} has an empty name")]
    EmptyName(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),

    #[error("duplicate route name {0:?}")]
    DuplicateName(String),

    #[error("route pattern {0:?} does not start with '/'")]
    InvalidPattern(String),

    #[error("project {id:?} path {path:?} has no route entry")]
    OrphanedPath { id: String, path: String },

    #[error("project {id:?} path {path:?} is bound by {count} route entries")]
    AmbiguousPath {
        id: String,
        path: String,
        count: usize,
    },

    #[error("route {name:?} at {path:?} has no backing project")]
    DanglingRoute { name: String, path: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("unsupported catalog format {0:?} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("unsupported language code {0:?}")]
    UnknownLang(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
