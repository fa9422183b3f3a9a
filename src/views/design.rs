// SPDX-License-Identifier: PMPL-1.0-or-later

//! Detail view for a single project.
//!
//! The project is taken from the `id` route parameter when the route is
//! parameterised, otherwise from the record whose path was matched. A
//! missing project renders a not-found page with a link back to the
//! gallery; it is not an error.

use super::{Card, Link, NavigationContext, Page, PageStatus, Section, View};
use crate::i18n::t;
use crate::types::Cover;

#[derive(Debug, Default, Clone, Copy)]
pub struct DesignView;

impl View for DesignView {
    fn name(&self) -> &'static str {
        "design"
    }

    fn render(&self, ctx: &NavigationContext<'_>) -> Page {
        let record = match ctx.param("id") {
            Some(id) => ctx.registry.get_project_by_id(id),
            None => ctx.registry.get_project_by_path(ctx.path),
        };

        let Some(record) = record else {
            tracing::warn!(path = ctx.path, "design view has no backing project");
            let mut page = Page::new(self.name(), t(ctx.lang, "design.not_found"));
            page.status = PageStatus::NotFound;
            page.notice = Some(t(ctx.lang, "design.not_found_hint").to_string());
            page.links.push(Link::home(ctx.lang));
            return page;
        };

        let mut page = Page::new(self.name(), record.name.clone());
        page.cards.push(Card::from(record));
        page.sections.push(Section {
            anchor: "overview".to_string(),
            heading: record.name.clone(),
            body: record.description.clone(),
        });
        let cover = match record.cover() {
            Cover::Image(url) => url,
            Cover::Color(color) => format!("{} ({})", t(ctx.lang, "design.no_thumbnail"), color),
        };
        page.sections.push(Section {
            anchor: "cover".to_string(),
            heading: t(ctx.lang, "design.cover").to_string(),
            body: cover,
        });
        page.links.push(Link::home(ctx.lang));
        page
    }
}
