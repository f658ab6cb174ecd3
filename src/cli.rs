//! Command line surface of the `taurel-site` binary

use std::io::Write;
use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};

use crate::config::ConfigManager;
use crate::error::SiteError;
use crate::i18n::Language;
use crate::locations::{
    MapStatus,
    OfflineScriptLoader,
};
use crate::site::Site;

#[derive(Parser, Debug)]
#[command(name = "taurel-site")]
#[command(version)]
#[command(about = "Render the Taurel site's pages and explore its office finder")]
pub struct Cli {
    /// Directory holding `.taurel-site.json`
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Switch to this language (es, en) and remember it before running
    #[arg(long, value_name = "CODE", global = true)]
    pub lang: Option<Language>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the page served at a route path
    Render {
        /// Route path, e.g. `/servicios`
        path: String,
    },
    /// Filter the offices and show the map operations it causes
    Locations {
        /// Search term matched against name and address
        term: Option<String>,
        /// Select the office with this id
        #[arg(long, value_name = "ID")]
        select: Option<String>,
    },
    /// List every translation key with both translations
    Keys,
}

/// Run `cli` against the settings held by `manager`, writing to `out`.
///
/// # Errors
/// - The site cannot be built
/// - The route or office does not exist
/// - Writing to `out` fails
pub async fn run<W: Write>(cli: &Cli, manager: &ConfigManager, out: &mut W) -> Result<(), SiteError> {
    let site = Site::from_manager(manager)?;
    if let Some(language) = cli.lang {
        site.set_language(language);
    }

    match &cli.command {
        Command::Render { path } => write!(out, "{}", site.render(path)?)?,
        Command::Locations { term, select } => {
            locations(&site, term.as_deref(), select.as_deref(), out).await?;
        }
        Command::Keys => keys(&site, out)?,
    }
    Ok(())
}

async fn locations<W: Write>(
    site: &Site,
    term: Option<&str>,
    select: Option<&str>,
    out: &mut W,
) -> Result<(), SiteError> {
    let mut finder = site.location_finder();
    if let Err(e) = finder.mount(&OfflineScriptLoader::new()).await {
        tracing::info!("Continuing without a map: {}", e);
    }
    if let Some(term) = term {
        finder.set_search_term(term);
    }
    if let Some(id) = select
        && !finder.select(id)
    {
        return Err(SiteError::UnknownLocation(id.to_string()));
    }

    for entry in finder.list() {
        let mark = if entry.selected { '>' } else { ' ' };
        writeln!(out, "{mark} {:>2} {}", entry.location.id, entry.location.name)?;
    }
    if finder.visible().is_empty() {
        writeln!(out, "{}", site.context().translate("locations.empty"))?;
    }

    match finder.status() {
        MapStatus::Failed { message } => writeln!(out, "map: {message}")?,
        _ => {
            for command in finder.provider().commands() {
                writeln!(out, "map: {command}")?;
            }
        }
    }
    Ok(())
}

fn keys<W: Write>(site: &Site, out: &mut W) -> Result<(), SiteError> {
    let catalog = site.context().catalog();
    for key in catalog.keys(Language::Es) {
        writeln!(
            out,
            "{key}\t{}\t{}",
            catalog.translate(Language::Es, key),
            catalog.translate(Language::En, key)
        )?;
    }
    Ok(())
}
