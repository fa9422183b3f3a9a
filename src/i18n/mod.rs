// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for design-gallery.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | zh   | Chinese  | 中文         |
//!
//! ## Design
//!
//! Translation keys use dotted namespaces: `"home.title"`,
//! `"design.not_found"`. Lookups fall back to English when a key is missing
//! in the requested language. If English lacks it too, the empty string is
//! returned.
//!
//! The catalog is embedded at compile time as static data.

mod catalog;

pub use catalog::{missing_keys, t, Lang};
