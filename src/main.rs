//! Taxogen - post-build category page generator for static sites.

mod cli;
mod config;
mod filters;
mod generator;
mod logger;
mod scan;
mod utils;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use generator::categories::regenerate;
use scan::{TagSet, scan_tags};
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Regen { tag, .. } => regen_site(config, tag),
        Commands::Tags { .. } => list_tags(config),
        Commands::Filter { name, input } => run_filter(name, input),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // `filter` is config-free; everything else runs against a real site
    if !cli.is_filter() {
        config.validate()?;
    }

    Ok(config)
}

/// Collect the tag set for the current invocation.
fn collect_tags(config: &'static SiteConfig, extra: &[String]) -> Result<TagSet> {
    let mut tags = scan_tags(config)?;
    for tag in extra {
        tags.insert(tag.clone());
    }
    if config.page.sorted {
        tags.sort();
    }
    Ok(tags)
}

/// The post-build step: scan tags, then wipe and regenerate the
/// category collection directory.
fn regen_site(config: &'static SiteConfig, extra: &[String]) -> Result<()> {
    let tags = collect_tags(config, extra)?;
    log!("scan"; "found {} tags in {}", tags.len(), config.build.content.display());

    let summary = regenerate(config, &tags)?;
    log!("categories"; "done, {} pages", summary.pages);
    Ok(())
}

/// Print the collected tag set, one per line.
fn list_tags(config: &'static SiteConfig) -> Result<()> {
    let tags = collect_tags(config, &[])?;
    for tag in tags.iter() {
        println!("{tag}");
    }
    Ok(())
}

/// Resolve a filter by name and print the transformed input.
fn run_filter(name: &str, input: &str) -> Result<()> {
    let Some(filter) = filters::lookup(name) else {
        let registered: Vec<_> = filters::names().collect();
        bail!(
            "Unknown filter `{name}`. Registered filters: {}",
            registered.join(", ")
        );
    };
    println!("{}", filter(input));
    Ok(())
}
