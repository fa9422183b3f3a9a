// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for design-gallery.
//!
//! Embeds all user-facing strings for supported languages as a compile-time
//! static table. Lookup is a scan of the key list per language; there are a
//! few dozen keys and a page render touches a handful of them.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()` and `Lang::from_code()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Adding a new key
//!
//! 1. Add the English entry to `EN`
//! 2. Add the translation to `ZH` (missing keys fall back to English)

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Parse a language code. Case and region tags are ignored, so `zh-CN`
    /// and `ZH` both give [`Lang::Zh`].
    pub fn from_code(code: &str) -> Option<Lang> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "zh" => Some(Lang::Zh),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Zh]
    }

    /// English name, used by diagnostics.
    pub fn english_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Zh => "Chinese",
        }
    }

    /// Name written in the language itself, shown by the locale check.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Zh => "中文",
        }
    }

    /// Language used when a key is missing in the requested one.
    pub fn fallback() -> Lang {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Falls back to English if the key is not found in the requested language,
/// and to the empty string if English lacks it too.
///
/// # Examples
///
/// ```
/// use design_gallery::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "home.title"), "Design Gallery");
/// assert_eq!(t(Lang::Zh, "home.title"), "设计作品集");
/// ```
pub fn t(lang: Lang, key: &str) -> &'static str {
    if let Some(value) = lookup(catalog_for(lang), key) {
        return value;
    }
    let fallback = Lang::fallback();
    if lang != fallback {
        if let Some(value) = lookup(catalog_for(fallback), key) {
            return value;
        }
    }
    tracing::debug!(%lang, key, "missing translation key");
    ""
}

/// Keys the requested language lacks and therefore serves from English.
pub fn missing_keys(lang: Lang) -> Vec<&'static str> {
    let own = catalog_for(lang);
    catalog_for(Lang::fallback())
        .iter()
        .filter(|(key, _)| lookup(own, key).is_none())
        .map(|&(key, _)| key)
        .collect()
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Zh => ZH,
    }
}

// ─── English (source language, all keys defined here) ──────────────

const EN: &[(&str, &str)] = &[
    // Landing view
    ("home.title", "Design Gallery"),
    ("home.subtitle", "Interaction design prototypes"),
    ("home.empty", "No projects yet"),
    // Detail view
    ("design.back", "Back to gallery"),
    ("design.cover", "Cover"),
    ("design.no_thumbnail", "No image, showing colour"),
    ("design.not_found", "Project not found"),
    ("design.not_found_hint", "The link may be stale. Pick a project from the gallery."),
    // Navigation
    ("nav.not_found", "Page not found"),
    ("nav.scroll_top", "scroll to top"),
    ("nav.scroll_anchor", "scroll to"),
    ("nav.scroll_none", "anchor not on page, no scroll"),
    // Route table
    ("routes.title", "Routes"),
    ("routes.path", "Path"),
    ("routes.name", "Name"),
    ("routes.view", "View"),
    // Checks
    ("check.title", "design-gallery self-check"),
    ("check.failed", "self-check reported issues"),
];

// ─── Chinese ────────────────────────────────────────────────────────

const ZH: &[(&str, &str)] = &[
    ("home.title", "设计作品集"),
    ("home.subtitle", "交互设计原型"),
    ("home.empty", "暂无项目"),
    ("design.back", "返回作品集"),
    ("design.cover", "封面"),
    ("design.no_thumbnail", "无图片，显示颜色"),
    ("design.not_found", "未找到项目"),
    ("design.not_found_hint", "链接可能已失效，请从作品集中选择项目。"),
    ("nav.not_found", "页面不存在"),
    ("nav.scroll_top", "滚动到顶部"),
    ("nav.scroll_anchor", "滚动到"),
    ("nav.scroll_none", "页面上没有该锚点，不滚动"),
    ("routes.title", "路由表"),
    ("routes.path", "路径"),
    ("routes.name", "名称"),
    ("routes.view", "视图"),
    ("check.title", "design-gallery 自检"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, _) in EN {
            let result = t(Lang::En, key);
            assert!(!result.is_empty(), "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn chinese_translations() {
        assert_eq!(t(Lang::Zh, "design.not_found"), "未找到项目");
        assert_eq!(t(Lang::Zh, "routes.title"), "路由表");
    }

    #[test]
    fn fallback_to_english() {
        assert_eq!(t(Lang::Zh, "check.failed"), "self-check reported issues");
        assert_eq!(missing_keys(Lang::Zh), vec!["check.failed"]);
        assert!(missing_keys(Lang::En).is_empty());
    }

    #[test]
    fn unknown_key_returns_empty() {
        assert_eq!(t(Lang::En, "nonexistent.key"), "");
        assert_eq!(t(Lang::Zh, "nonexistent.key"), "");
    }

    #[test]
    fn lang_codes() {
        for lang in Lang::all() {
            assert_eq!(Lang::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Lang::from_code("zh-CN"), Some(Lang::Zh));
        assert_eq!(Lang::from_code("EN_us"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }
}
