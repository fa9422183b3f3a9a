// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for design-gallery
//!
//! A [`ProjectRecord`] is the display metadata for one showcased design.
//! Records are plain immutable values; the registry owns the ordering and
//! the uniqueness guarantees.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable slug, the join key between registry and route table.
    pub id: String,
    pub name: String,
    /// Canonical route path of the detail view.
    pub path: String,
    /// Cover image URL. Catalog files written with `""` load as `None`.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: String,
    pub color: HexColor,
}

impl ProjectRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
        color: HexColor,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            thumbnail: None,
            description: String::new(),
            color,
        }
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// What to show as the card cover: the thumbnail when present,
    /// otherwise the fallback colour.
    pub fn cover(&self) -> Cover {
        match &self.thumbnail {
            Some(url) => Cover::Image(url.clone()),
            None => Cover::Color(self.color.clone()),
        }
    }
}

/// Card cover resolved from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Cover {
    Image(String),
    Color(HexColor),
}

/// A `#RGB` or `#RRGGBB` colour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if hex_color_pattern().is_match(value) {
            Some(Self(value.to_ascii_uppercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expands the colour to its `(r, g, b)` components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        if digits.len() == 3 {
            let expand = |i: usize| {
                let c = &digits[i..i + 1];
                channel(&format!("{c}{c}"))
            };
            (expand(0), expand(1), expand(2))
        } else {
            (
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            )
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex colour: {raw:?}")))
    }
}

/// Whether `id` is a lowercase kebab-case slug.
/// Canonical form of a route path: rooted, no surrounding whitespace, no
/// trailing slash, and `/` for the empty path.
///
/// ```
/// use design_gallery::types::canonical_path;
/// assert_eq!(canonical_path("/designs/a/"), "/designs/a");
/// assert_eq!(canonical_path(""), "/");
/// ```
pub fn canonical_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

pub fn is_valid_slug(id: &str) -> bool {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static regex"))
        .is_match(id)
}

fn hex_color_pattern() -> &'static Regex {
    static HEX: OnceLock<Regex> = OnceLock::new();
    HEX.get_or_init(|| {
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("static regex")
    })
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_accepts_short_and_long_forms() {
        assert_eq!(HexColor::parse("#bbdefb").unwrap().as_str(), "#BBDEFB");
        assert_eq!(HexColor::parse("#fff").unwrap().rgb(), (255, 255, 255));
        assert_eq!(HexColor::parse("#FFCDD2").unwrap().rgb(), (0xFF, 0xCD, 0xD2));
        assert!(HexColor::parse("FFCDD2").is_none());
        assert!(HexColor::parse("#12345").is_none());
        assert!(HexColor::parse("#zzzzzz").is_none());
    }

    #[test]
    fn slug_rules() {
        assert!(is_valid_slug("camera-move"));
        assert!(is_valid_slug("3d"));
        assert!(!is_valid_slug("Camera-Move"));
        assert!(!is_valid_slug("camera--move"));
        assert!(!is_valid_slug("-camera"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn path_canonicalisation() {
        assert_eq!(canonical_path(""), "/");
        assert_eq!(canonical_path("/"), "/");
        assert_eq!(canonical_path("/designs/a/"), "/designs/a");
        assert_eq!(canonical_path(" /designs/a// "), "/designs/a");
        assert_eq!(canonical_path("designs/a"), "/designs/a");
    }

    #[test]
    fn cover_falls_back_to_color() {
        let color = HexColor::parse("#BBDEFB").unwrap();
        let bare = ProjectRecord::new("a", "A", "/designs/a", color.clone());
        assert_eq!(bare.cover(), Cover::Color(color));

        let pictured = bare.with_thumbnail("https://example.org/a.png");
        assert_eq!(
            pictured.cover(),
            Cover::Image("https://example.org/a.png".to_string())
        );
    }

    #[test]
    fn empty_thumbnail_deserializes_as_none() {
        let json = r##"{"id":"a","name":"A","path":"/designs/a","thumbnail":"","color":"#fff"}"##;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.thumbnail, None);
        assert_eq!(record.description, "");
    }

    #[test]
    fn bad_color_fails_deserialization() {
        let json = r#"{"id":"a","name":"A","path":"/designs/a","color":"red"}"#;
        assert!(serde_json::from_str::<ProjectRecord>(json).is_err());
    }
}
