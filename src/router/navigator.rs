// SPDX-License-Identifier: PMPL-1.0-or-later

//! Navigator: URL in, rendered page and scroll outcome out.

use super::{check_bijection, scroll_for, HashLocation, RouteTable, Scroll};
use crate::error::RouteError;
use crate::i18n::Lang;
use crate::registry::ProjectRegistry;
use crate::views::{NavigationContext, Page};
use serde::Serialize;

/// Result of one navigation.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub location: HashLocation,
    /// Name of the matched route, `None` when nothing matched.
    pub route: Option<String>,
    pub page: Page,
    pub scroll: Scroll,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    registry: ProjectRegistry,
    routes: RouteTable,
}

impl Navigator {
    /// Derive the route table from `registry` and check the pair.
    pub fn new(registry: ProjectRegistry) -> Result<Self, RouteError> {
        let routes = RouteTable::for_registry(&registry)?;
        Self::with_routes(registry, routes)
    }

    /// Use a hand-written route table. It must be in bijection with the
    /// registry.
    pub fn with_routes(registry: ProjectRegistry, routes: RouteTable) -> Result<Self, RouteError> {
        check_bijection(&routes, &registry)?;
        tracing::info!(
            projects = registry.len(),
            routes = routes.entries().len(),
            "navigator ready"
        );
        Ok(Self { registry, routes })
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn navigate(&self, url: &str, lang: Lang) -> Navigation {
        let location = HashLocation::parse(url);

        let (route, page) = match self.routes.resolve(&location.path) {
            Some(hit) => {
                tracing::debug!(path = %hit.path, route = hit.entry.name(), "route matched");
                let ctx = NavigationContext {
                    registry: &self.registry,
                    path: &hit.path,
                    params: &hit.params,
                    query: location.query.as_deref(),
                    lang,
                };
                (Some(hit.entry.name().to_string()), hit.entry.view().render(&ctx))
            }
            None => {
                tracing::warn!(path = %location.path, "no route for path");
                (None, Page::not_found(lang))
            }
        };

        let scroll = scroll_for(&location, &page);
        Navigation {
            location,
            route,
            page,
            scroll,
        }
    }
}
