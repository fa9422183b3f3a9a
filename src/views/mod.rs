// SPDX-License-Identifier: PMPL-1.0-or-later

//! Views bound to routes
//!
//! A view turns a navigation context into a [`Page`]: a structured,
//! serialisable description of what is on screen. Views only read from the
//! registry; they never call back into the router.

mod catalog;
mod design;

pub use catalog::CatalogView;
pub use design::DesignView;

use crate::i18n::Lang;
use crate::registry::ProjectRegistry;
use crate::types::{Cover, ProjectRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Something the router can bind to a path.
pub trait View: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, ctx: &NavigationContext<'_>) -> Page;

    /// Whether the route this view is bound to must be backed by a registry
    /// record. The landing view lists the whole catalog and is not.
    fn requires_record(&self) -> bool {
        true
    }
}

/// Everything a view may read while rendering.
#[derive(Debug, Clone, Copy)]
pub struct NavigationContext<'a> {
    pub registry: &'a ProjectRegistry,
    /// Normalised route path that was matched.
    pub path: &'a str,
    pub params: &'a BTreeMap<String, String>,
    pub query: Option<&'a str>,
    pub lang: Lang,
}

impl<'a> NavigationContext<'a> {
    pub fn param(&self, name: &str) -> Option<&'a str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Ok,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub view: String,
    pub status: PageStatus,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Page {
    pub fn new(view: &str, title: impl Into<String>) -> Self {
        Self {
            view: view.to_string(),
            status: PageStatus::Ok,
            title: title.into(),
            subtitle: None,
            notice: None,
            cards: Vec::new(),
            sections: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Generic page shown when no route matches.
    pub fn not_found(lang: Lang) -> Self {
        let mut page = Page::new("not-found", crate::i18n::t(lang, "nav.not_found"));
        page.status = PageStatus::NotFound;
        page.links.push(Link::home(lang));
        page
    }

    /// Element ids present on the page, in document order.
    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .map(|card| card.id.as_str())
            .chain(self.sections.iter().map(|section| section.anchor.as_str()))
    }

    pub fn has_anchor(&self, anchor: &str) -> bool {
        self.anchors().any(|candidate| candidate == anchor)
    }
}

/// A project tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub description: String,
    pub path: String,
    pub cover: Cover,
}

impl From<&ProjectRecord> for Card {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            path: record.path.clone(),
            cover: record.cover(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub anchor: String,
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub path: String,
}

impl Link {
    pub fn home(lang: Lang) -> Self {
        Self {
            label: crate::i18n::t(lang, "design.back").to_string(),
            path: "/".to_string(),
        }
    }
}
