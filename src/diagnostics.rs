// SPDX-License-Identifier: PMPL-1.0-or-later

//! Start-up self-check: catalog, route bijection, covers and locales.

use crate::config::GalleryConfig;
use crate::i18n::{missing_keys, t, Lang};
use crate::registry::ProjectRegistry;
use crate::router::{audit_bijection, RouteTable};
use anyhow::{anyhow, Result};
use colored::*;

pub fn run_self_check(config: &GalleryConfig) -> Result<()> {
    println!("{}", t(config.lang, "check.title").bold().cyan());

    let checks = collect_checks(config);
    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!(t(config.lang, "check.failed")))
    } else {
        Ok(())
    }
}

/// Run every check without printing.
pub fn collect_checks(config: &GalleryConfig) -> Vec<Diagnostic> {
    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("design-gallery {}", env!("CARGO_PKG_VERSION")),
    )];

    checks.push(match &config.catalog {
        Some(path) if path.is_file() => Diagnostic::ok("catalog source", path.display().to_string()),
        Some(path) => Diagnostic::error("catalog source", format!("{} missing", path.display())),
        None => Diagnostic::ok("catalog source", "built-in".to_string()),
    });

    match config.registry() {
        Ok(registry) => {
            checks.push(Diagnostic::ok(
                "project registry",
                format!("{} projects, ids and paths unique", registry.len()),
            ));
            checks.extend(check_routes(&registry));
            checks.push(check_covers(&registry));
        }
        Err(err) => checks.push(Diagnostic::error("project registry", err.to_string())),
    }

    checks.extend(Lang::all().iter().map(|&lang| check_locale(lang)));

    if config.base_url.trim().is_empty() {
        checks.push(Diagnostic::warning(
            "base url",
            "not set, links are printed as bare routes".to_string(),
        ));
    } else {
        checks.push(Diagnostic::ok("base url", config.base_url.clone()));
    }

    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:18} {}", self.level.tag(), self.label, self.detail);
    }
}

fn check_routes(registry: &ProjectRegistry) -> Vec<Diagnostic> {
    let table = match RouteTable::for_registry(registry) {
        Ok(table) => table,
        Err(err) => return vec![Diagnostic::error("route table", err.to_string())],
    };

    let problems = audit_bijection(&table, registry);
    if problems.is_empty() {
        return vec![Diagnostic::ok(
            "route table",
            format!("{} routes, one per project path", table.entries().len()),
        )];
    }
    problems
        .into_iter()
        .map(|problem| Diagnostic::error("route table", problem.to_string()))
        .collect()
}

fn check_covers(registry: &ProjectRegistry) -> Diagnostic {
    let bare: Vec<&str> = registry
        .iter()
        .filter(|record| record.thumbnail.is_none())
        .map(|record| record.id.as_str())
        .collect();
    if bare.is_empty() {
        Diagnostic::ok("covers", "every project has a thumbnail".to_string())
    } else {
        Diagnostic::warning(
            "covers",
            format!("colour fallback for {}", bare.join(", ")),
        )
    }
}

fn check_locale(lang: Lang) -> Diagnostic {
    let missing = missing_keys(lang);
    let label = match lang {
        Lang::En => "locale en",
        Lang::Zh => "locale zh",
    };
    let name = if lang.english_name() == lang.native_name() {
        lang.english_name().to_string()
    } else {
        format!("{} ({})", lang.english_name(), lang.native_name())
    };
    if missing.is_empty() {
        Diagnostic::ok(label, format!("{name} complete"))
    } else {
        Diagnostic::warning(
            label,
            format!(
                "{name}: {} keys served from {}: {}",
                missing.len(),
                Lang::fallback(),
                missing.join(", ")
            ),
        )
    }
}
