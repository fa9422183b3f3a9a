// SPDX-License-Identifier: PMPL-1.0-or-later

//! design-gallery: browse the project catalog, resolve navigation targets
//! and check that the registry and route table agree.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use design_gallery::config::GalleryConfig;
use design_gallery::diagnostics;
use design_gallery::i18n::Lang;
use design_gallery::report::{OutputFormat, PageFormatter};
use design_gallery::router::Navigator;
use design_gallery::views::Page;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "design-gallery")]
#[command(version)]
#[command(about = "Portfolio design gallery: project registry and hash-routed navigation")]
#[command(long_about = None)]
struct Cli {
    /// Display language (en, zh)
    #[arg(short, long, global = true, value_parser = parse_lang)]
    lang: Option<Lang>,

    /// Configuration file (default: ./gallery.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file replacing the built-in project list
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every project in display order
    List,

    /// Show one project by id
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Resolve a URL or route the way the browser router would
    Navigate {
        /// e.g. `https://host/#/designs/camera-move#cover` or `/designs/camera-move`
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Print the route table
    Routes,

    /// Validate the catalog, route table and locale tables
    Check,

    /// Print the active catalog in catalog-file form (YAML unless --format json)
    Export,
}

fn parse_lang(value: &str) -> Result<Lang, String> {
    Lang::from_code(value).ok_or_else(|| {
        let known: Vec<&str> = Lang::all().iter().map(Lang::code).collect();
        format!("unsupported language {value:?} (expected one of {})", known.join(", "))
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "design_gallery=debug"
    } else {
        "design_gallery=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = GalleryConfig::load(cli.config.as_deref()).context("loading configuration")?;
    config
        .apply_env()
        .context("reading GALLERY_* environment overrides")?;
    if let Some(lang) = cli.lang {
        config.lang = lang;
    }
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }

    let navigator = || -> Result<Navigator> {
        let registry = config.registry().context("loading project catalog")?;
        Navigator::new(registry).context("building route table")
    };
    let formatter = PageFormatter::new(config.lang, config.base_url.clone());
    let lang = config.lang;

    match cli.command {
        Commands::List => {
            let page = navigator()?.navigate("/", lang).page;
            emit(cli.format, &page, |page| formatter.print_page(page))?;
        }

        Commands::Show { id } => {
            let navigator = navigator()?;
            let Some(record) = navigator.registry().get_project_by_id(&id) else {
                formatter.print_page(&Page::not_found(lang));
                bail!("no project with id {id:?}");
            };
            let page = navigator.navigate(&record.path, lang).page;
            emit(cli.format, &page, |page| formatter.print_page(page))?;
        }

        Commands::Navigate { url } => {
            let nav = navigator()?.navigate(&url, lang);
            emit(cli.format, &nav, |nav| formatter.print_navigation(nav))?;
        }

        Commands::Routes => {
            let routes = navigator()?.routes().summaries();
            emit(cli.format, &routes, |routes| formatter.print_routes(routes))?;
        }

        Commands::Export => {
            let navigator = navigator()?;
            let records = navigator.registry().list_projects();
            let format = match cli.format {
                OutputFormat::Text => OutputFormat::Yaml,
                other => other,
            };
            if let Some(text) = format.serialize(&records)? {
                print!("{text}");
            }
        }

        Commands::Check => diagnostics::run_self_check(&config)?,
    }

    Ok(())
}

fn emit<T: serde::Serialize>(format: OutputFormat, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    match format.serialize(value)? {
        Some(serialized) => println!("{serialized}"),
        None => text(value),
    }
    Ok(())
}
