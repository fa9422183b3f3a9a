// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hash-history locations.
//!
//! The gallery is served as static files, so the route lives in the URL
//! fragment: `https://host/base/#/designs/camera-move?tab=2#cover`. Inside
//! the fragment, `?` starts the query and a second `#` starts the fragment
//! locator used for scroll restoration.
//!
//! A bare route such as `/designs/camera-move#cover` is accepted too and
//! read as if it followed the `#`. An input starting with `/` is only split
//! into base and route when the text before `#/` looks like a served
//! document: a directory (`/gallery/`) or a file (`/gallery/index.html`).
//! So `/gallery/#/designs/a` has base `/gallery/`, while `/designs/x#/y` is
//! the bare route `/designs/x` with fragment `/y`.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashLocation {
    /// Everything before the first `#`. Empty for bare routes.
    pub base: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Fragment locator, without the leading `#`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl HashLocation {
    pub fn parse(url: &str) -> Self {
        let url = url.trim();

        let (base, route) = match url.split_once('#') {
            Some((base, route)) if !url.starts_with('/') || is_document_base(base, route) => {
                (base, route)
            }
            _ if url.starts_with('/') => ("", url),
            _ => (url, ""),
        };

        let (route, fragment) = match route.split_once('#') {
            Some((route, fragment)) => (route, non_empty(fragment)),
            None => (route, None),
        };
        let (path, query) = match route.split_once('?') {
            Some((path, query)) => (path, non_empty(query)),
            None => (route, None),
        };

        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        Self {
            base: base.to_string(),
            path,
            query,
            fragment,
        }
    }

}

impl fmt::Display for HashLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.base, self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

fn is_document_base(base: &str, route: &str) -> bool {
    if !route.starts_with('/') {
        return false;
    }
    let last = base.rsplit('/').next().unwrap_or("");
    last.is_empty() || last.contains('.')
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
