// SPDX-License-Identifier: PMPL-1.0-or-later

//! game-strings: inspect localized game tables and met-location catalogs
//!
//! Reads `text_<key>_<lang>.txt` resources from a directory, builds the
//! sanitized catalogs and prints resolved location lists, single tables,
//! per-generation item names and country/region names.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use game_strings::config::CatalogConfig;
use game_strings::report::{LocationExport, LocationQuery, OutputFormat, TableExport, TableFormatter};
use game_strings::{geo, logging};
use game_strings::{CatalogCache, DirectoryProvider, GameVersion, TableKey};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game-strings")]
#[command(version)]
#[command(about = "Localized game reference tables and met-location catalogs")]
#[command(long_about = None)]
struct Cli {
    /// Catalog config (yaml/yml/json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Resource directory, overrides the config
    #[arg(long, global = true, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Language code, overrides the config
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the met-location list for a game version and save format
    Locations {
        /// Origin version (short code, name or numeric id)
        #[arg(long = "version", value_name = "VERSION", value_parser = parse_version)]
        game: GameVersion,

        /// Save-data format (generation of the save)
        #[arg(long)]
        format: u8,

        /// Egg origin lookup
        #[arg(long)]
        egg: bool,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Print one sanitized table with its indices
    Table {
        /// Resource key, e.g. `species` or `hgss_02000`
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print item names as a given generation shows them
    Items {
        #[arg(short, long)]
        generation: u8,

        /// Game version, selects the Colosseum / XD lists in generation 3
        #[arg(long = "version", value_name = "VERSION", value_parser = parse_version)]
        game: Option<GameVersion>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print country and region names
    Region {
        #[arg(value_name = "COUNTRY")]
        country: u32,

        #[arg(value_name = "REGION")]
        region: u32,
    },

    /// List resource files found in the resource directory
    Inventory,
}

fn parse_version(value: &str) -> std::result::Result<GameVersion, String> {
    GameVersion::parse(value).ok_or_else(|| format!("unknown game version: {}", value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CatalogConfig::load_or_default(cli.config.as_deref())?;
    if let Some(resources) = cli.resources {
        config.resources = resources;
    }
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    logging::init(cli.log.as_deref().or(config.log_filter.as_deref()));

    let lang = config.lang();
    if lang.code() != config.language.to_ascii_lowercase() {
        tracing::warn!(requested = %config.language, using = %lang, "unsupported language code");
    }
    let provider = DirectoryProvider::new(&config.resources);

    match cli.command {
        Commands::Locations {
            game,
            format,
            egg,
            output,
            save,
        } => {
            let cache = CatalogCache::new(provider);
            let catalog = cache.get(lang);
            let plan = game_strings::locations::Plan::for_query(game, format, egg);
            let entries = catalog.resolve(game, format, egg).into_owned();
            let query = LocationQuery {
                version: game,
                format,
                egg,
                lang,
            };
            let export = LocationExport::new(query, plan, entries);

            match save {
                Some(path) => {
                    let content = output.locations(&export)?;
                    fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Locations saved to: {}", path.display());
                }
                None if output == OutputFormat::Text => {
                    TableFormatter::new().print_locations(&export);
                }
                None => println!("{}", output.locations(&export)?),
            }
        }

        Commands::Table { key, output } => {
            let table_key = TableKey::from_resource(&key)
                .ok_or_else(|| anyhow!("unknown table key: {}", key))?;
            let cache = CatalogCache::new(provider);
            let catalog = cache.get(lang);
            let strings = catalog.strings();
            let export = TableExport::new(
                table_key.resource(),
                lang,
                strings.used_fallback(table_key),
                strings.table(table_key).entries().to_vec(),
            );
            if output == OutputFormat::Text {
                TableFormatter::new().print_table(&export);
            } else {
                println!("{}", output.table(&export)?);
            }
        }

        Commands::Items {
            generation,
            game,
            output,
        } => {
            let cache = CatalogCache::new(provider);
            let catalog = cache.get(lang);
            let version = game.unwrap_or(GameVersion::Unknown);
            let items = catalog.strings().item_strings(
                generation,
                version,
                config.ereader_berry.as_deref(),
            );
            let export = TableExport::new(
                &format!("items-gen{}", generation),
                lang,
                false,
                items.entries().to_vec(),
            );
            if output == OutputFormat::Text {
                TableFormatter::new().print_table(&export);
            } else {
                println!("{}", output.table(&export)?);
            }
        }

        Commands::Region { country, region } => {
            let (country_name, region_name) =
                geo::country_region_text(&provider, country, region, lang);
            println!("{}: {}", "Country".bold(), country_name);
            println!("{}: {}", "Region".bold(), region_name);
        }

        Commands::Inventory => {
            let inventory = provider.inventory()?;
            println!(
                "{} {}",
                "Resources in".bold().cyan(),
                provider.root().display()
            );
            for (key, langs) in &inventory.tables {
                let codes: Vec<&str> = langs.iter().map(|l| l.code()).collect();
                let known = if TableKey::from_resource(key).is_some() {
                    key.green()
                } else {
                    key.yellow()
                };
                println!("  {:<20} {}", known, codes.join(" "));
            }
            let missing: Vec<&str> = TableKey::all()
                .iter()
                .map(|k| k.resource())
                .filter(|k| !inventory.tables.contains_key(*k))
                .collect();
            if !missing.is_empty() {
                println!("  {} {}", "missing:".red(), missing.join(" "));
            }
            if !inventory.other.is_empty() {
                println!("  {} {}", "other:".dimmed(), inventory.other.join(" "));
            }
        }
    }

    Ok(())
}
