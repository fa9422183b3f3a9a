// SPDX-License-Identifier: PMPL-1.0-or-later

//! Landing view: the whole catalog as cards, in registry order.

use super::{Card, NavigationContext, Page, View};
use crate::i18n::t;

#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogView;

impl View for CatalogView {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn render(&self, ctx: &NavigationContext<'_>) -> Page {
        let mut page = Page::new(self.name(), t(ctx.lang, "home.title"));
        page.subtitle = Some(t(ctx.lang, "home.subtitle").to_string());
        page.cards = ctx.registry.iter().map(Card::from).collect();
        if page.cards.is_empty() {
            page.notice = Some(t(ctx.lang, "home.empty").to_string());
        }
        page
    }

    fn requires_record(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::registry::{builtin_records, ProjectRegistry};
    use std::collections::BTreeMap;

    #[test]
    fn cards_follow_registry_order() {
        let registry = ProjectRegistry::new(builtin_records().unwrap()).unwrap();
        let params = BTreeMap::new();
        let ctx = NavigationContext {
            registry: &registry,
            path: "/",
            params: &params,
            query: None,
            lang: Lang::Zh,
        };
        let page = CatalogView.render(&ctx);
        assert_eq!(page.title, "设计作品集");
        let ids: Vec<&str> = page.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["camera-move", "sketch-edit"]);
        assert!(page.notice.is_none());
    }

    #[test]
    fn empty_catalog_shows_notice() {
        let registry = ProjectRegistry::new(Vec::new()).unwrap();
        let params = BTreeMap::new();
        let ctx = NavigationContext {
            registry: &registry,
            path: "/",
            params: &params,
            query: None,
            lang: Lang::En,
        };
        let page = CatalogView.render(&ctx);
        assert_eq!(page.notice.as_deref(), Some("No projects yet"));
    }
}
