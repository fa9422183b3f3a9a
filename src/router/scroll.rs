// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scroll restoration after navigation.

use super::HashLocation;
use crate::views::Page;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Scroll {
    Top,
    ToAnchor { anchor: String, smooth: bool },
    /// A fragment was requested but nothing on the page carries it.
    None,
}

/// Where the view should scroll once `page` is shown for `location`.
///
/// With a fragment locator: smooth scroll to the matching anchor, or stay
/// put if the page has no such anchor. Without one: back to the top.
pub fn scroll_for(location: &HashLocation, page: &Page) -> Scroll {
    match location.fragment.as_deref() {
        Some(anchor) if page.has_anchor(anchor) => Scroll::ToAnchor {
            anchor: anchor.to_string(),
            smooth: true,
        },
        Some(anchor) => {
            tracing::debug!(anchor, view = %page.view, "fragment target not on page");
            Scroll::None
        }
        None => Scroll::Top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Section;

    fn page() -> Page {
        let mut page = Page::new("design", "Camera");
        page.sections.push(Section {
            anchor: "cover".to_string(),
            heading: "Cover".to_string(),
            body: String::new(),
        });
        page
    }

    #[test]
    fn fragment_present_on_page() {
        let loc = HashLocation::parse("#/designs/camera-move#cover");
        assert_eq!(
            scroll_for(&loc, &page()),
            Scroll::ToAnchor {
                anchor: "cover".to_string(),
                smooth: true
            }
        );
    }

    #[test]
    fn fragment_missing_from_page() {
        let loc = HashLocation::parse("#/designs/camera-move#nowhere");
        assert_eq!(scroll_for(&loc, &page()), Scroll::None);
    }

    #[test]
    fn no_fragment_scrolls_to_top() {
        let loc = HashLocation::parse("#/designs/camera-move");
        assert_eq!(scroll_for(&loc, &page()), Scroll::Top);
    }
}
