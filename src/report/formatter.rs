// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coloured terminal rendering of pages and route tables

use crate::i18n::{t, Lang};
use crate::router::{Navigation, RouteSummary, Scroll};
use crate::types::Cover;
use crate::views::{Card, Page, PageStatus};
use colored::*;
use std::fmt;

pub struct PageFormatter {
    lang: Lang,
    base_url: String,
}

impl PageFormatter {
    pub fn new(lang: Lang, base_url: impl Into<String>) -> Self {
        Self {
            lang,
            base_url: base_url.into(),
        }
    }

    pub fn print_page(&self, page: &Page) {
        print!("{}", self.render(page));
    }

    pub fn print_navigation(&self, nav: &Navigation) {
        println!("{} {}", "→".dimmed(), nav.location.to_string().dimmed());
        self.print_page(&nav.page);
        println!("  {}", self.scroll_text(&nav.scroll).italic());
    }

    pub fn print_routes(&self, routes: &[RouteSummary]) {
        println!("\n{}", t(self.lang, "routes.title").bold().cyan());
        println!(
            "  {:28} {:16} {}",
            t(self.lang, "routes.path").bold(),
            t(self.lang, "routes.name").bold(),
            t(self.lang, "routes.view").bold()
        );
        for route in routes {
            println!("  {:28} {:16} {}", route.path, route.name, route.view);
        }
    }

    /// The page as coloured text, ready for `print!`.
    pub fn render<'a>(&'a self, page: &'a Page) -> impl fmt::Display + 'a {
        Rendered {
            formatter: self,
            page,
        }
    }

    fn write_page(&self, out: &mut impl fmt::Write, page: &Page) -> fmt::Result {
        let title = match page.status {
            PageStatus::Ok => page.title.bold().cyan(),
            PageStatus::NotFound => page.title.bold().red(),
        };
        writeln!(out, "\n{}", title)?;
        if let Some(subtitle) = &page.subtitle {
            writeln!(out, "{}", subtitle.dimmed())?;
        }
        if let Some(notice) = &page.notice {
            writeln!(out, "{}", notice.yellow())?;
        }
        writeln!(out)?;

        for (i, card) in page.cards.iter().enumerate() {
            write!(out, "  {}. ", i + 1)?;
            self.write_card(out, card)?;
        }
        for section in &page.sections {
            writeln!(out, "  {} {}", format!("#{}", section.anchor).dimmed(), section.heading.bold())?;
            if !section.body.is_empty() {
                writeln!(out, "     {}", section.body)?;
            }
        }
        for link in &page.links {
            writeln!(out, "  ← {} {}", link.label, self.href(&link.path).underline())?;
        }
        Ok(())
    }

    fn write_card(&self, out: &mut impl fmt::Write, card: &Card) -> fmt::Result {
        match &card.cover {
            Cover::Color(color) => {
                let (r, g, b) = color.rgb();
                write!(out, "{}", "  ".on_truecolor(r, g, b))?;
            }
            Cover::Image(_) => write!(out, "▣ ")?,
        }
        writeln!(out, "{} {}", card.name.bold(), format!("[{}]", card.id).dimmed())?;
        if !card.description.is_empty() {
            writeln!(out, "     {}", card.description)?;
        }
        writeln!(out, "     {}", self.href(&card.path).underline())?;
        if let Cover::Image(url) = &card.cover {
            writeln!(out, "     {}: {}", t(self.lang, "design.cover"), url.dimmed())?;
        }
        Ok(())
    }

    fn scroll_text(&self, scroll: &Scroll) -> String {
        match scroll {
            Scroll::Top => t(self.lang, "nav.scroll_top").to_string(),
            Scroll::ToAnchor { anchor, .. } => {
                format!("{} #{}", t(self.lang, "nav.scroll_anchor"), anchor)
            }
            Scroll::None => t(self.lang, "nav.scroll_none").to_string(),
        }
    }

    /// Link to `path` under the configured base. Any fragment already on
    /// the base is replaced by the route.
    pub fn href(&self, path: &str) -> String {
        let base = self.base_url.split('#').next().unwrap_or_default();
        if base.is_empty() {
            path.to_string()
        } else {
            format!("{base}#{path}")
        }
    }
}

struct Rendered<'a> {
    formatter: &'a PageFormatter,
    page: &'a Page,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.formatter.write_page(f, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HexColor, ProjectRecord};

    #[test]
    fn href_with_and_without_base() {
        let bare = PageFormatter::new(Lang::En, "");
        assert_eq!(bare.href("/designs/a"), "/designs/a");

        let based = PageFormatter::new(Lang::En, "https://example.org/gallery/");
        assert_eq!(based.href("/designs/a"), "https://example.org/gallery/#/designs/a");
    }

    #[test]
    fn href_keeps_relative_base() {
        let dir = PageFormatter::new(Lang::En, "/gallery/");
        assert_eq!(dir.href("/designs/a"), "/gallery/#/designs/a");

        let file = PageFormatter::new(Lang::En, "/gallery/index.html");
        assert_eq!(file.href("/designs/a"), "/gallery/index.html#/designs/a");

        let hashed = PageFormatter::new(Lang::En, "/gallery/#/designs/old");
        assert_eq!(hashed.href("/"), "/gallery/#/");
    }

    #[test]
    fn rendered_page_mentions_notice_and_links() {
        colored::control::set_override(false);
        let mut page = Page::not_found(Lang::En);
        page.notice = Some("gone".to_string());
        let text = PageFormatter::new(Lang::En, "/gallery/").render(&page).to_string();
        assert!(text.contains("Page not found"));
        assert!(text.contains("gone"));
        assert!(text.contains("Back to gallery /gallery/#/"));
    }

    #[test]
    fn rendered_cards_are_numbered_with_links() {
        colored::control::set_override(false);
        let record = ProjectRecord::new("a", "Alpha", "/designs/a", HexColor::parse("#fff").unwrap())
            .with_description("first");
        let mut page = Page::new("catalog", "Gallery");
        page.cards.push(Card::from(&record));
        let text = PageFormatter::new(Lang::En, "").render(&page).to_string();
        assert!(text.contains("1. "));
        assert!(text.contains("Alpha [a]"));
        assert!(text.contains("     first\n"));
        assert!(text.contains("     /designs/a\n"));
    }
}
