// SPDX-License-Identifier: PMPL-1.0-or-later

//! design-gallery: project registry and hash-routed navigation for a
//! portfolio of interaction-design prototypes.
//!
//! PIECES:
//! 1. **Registry**: the ordered, validated catalog of projects, with lookup
//!    by id. Missing ids are `None`, never errors.
//! 2. **Router**: a route table derived from the registry, kept in bijection
//!    with it, plus hash-history parsing and scroll restoration.
//! 3. **Views**: the landing catalog and the per-project detail page,
//!    rendered to a structured [`views::Page`].
//! 4. **i18n**: static `en`/`zh` string tables with English fallback.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod registry;
pub mod report;
pub mod router;
pub mod types;
pub mod views;

pub use error::{ConfigError, RegistryError, RouteError};
pub use registry::ProjectRegistry;
pub use router::{Navigation, Navigator, RouteTable};
pub use types::ProjectRecord;
