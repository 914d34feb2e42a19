//! Folio - portfolio site data and a combined rss feed for blog posts and projects.

mod cli;
mod config;
mod content;
mod generator;
mod serve;
mod utils;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use content::{ContentStore, DirectoryStore};
use generator::{build_export, build_feed, render_feed};
use serve::serve_site;
use std::io::Write;
use utils::{date::DateTimeUtc, experience::experience_phrase};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let today = DateTimeUtc::now();
    let config = load_config(&cli, today)?;
    let store = DirectoryStore::new(&config.build.content, today);

    match &cli.command {
        Commands::Build => build_all(&config, &store),
        Commands::Feed { stdout: true } => {
            let xml = render_feed(&config, &store)?;
            let mut out = std::io::stdout().lock();
            writeln!(out, "{xml}")?;
            Ok(())
        }
        Commands::Feed { stdout: false } => {
            if build_feed(&config, &store)?.is_none() {
                log!("feed"; "disabled in [feed]");
            }
            Ok(())
        }
        Commands::Export => build_export(&config, &store).map(|_| ()),
        Commands::Profile => show_profile(&config),
        Commands::Nav { path } => show_nav(&config, path),
        Commands::Check { drafts } => check_site(&config, store.with_drafts(*drafts)),
        Commands::Serve { .. } => serve_site(&config),
    }
}

/// Load, derive and validate configuration from CLI arguments
fn load_config(cli: &Cli, today: DateTimeUtc) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(std::path::Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found.");
    }

    let mut config = SiteConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    let config = config.derive(today);
    config.validate()?;

    if config.profile.years_of_experience.is_none() && !config.profile.started.is_empty() {
        log!("warn"; "[profile.started] is not a valid date: `{}`", config.profile.started);
    }

    Ok(config)
}

/// Write the feed and the site export.
fn build_all(config: &SiteConfig, store: &DirectoryStore) -> Result<()> {
    let (feed_result, export_result) = rayon::join(
        || build_feed(config, store),
        || build_export(config, store),
    );

    feed_result?;
    export_result?;
    Ok(())
}

fn show_profile(config: &SiteConfig) -> Result<()> {
    let profile = &config.profile;
    log!("profile"; "{}", profile.name);
    if !profile.job.is_empty() {
        log!("profile"; "{}", profile.job);
    }
    log!("profile"; "experience: {}", experience_phrase(profile.years_of_experience));
    for paragraph in &profile.about {
        log!("profile"; "{paragraph}");
    }
    Ok(())
}

fn show_nav(config: &SiteConfig, current_path: &str) -> Result<()> {
    let active = config.active_page(current_path);

    for page in config.drawer_pages() {
        let marker = if active.is_some_and(|a| std::ptr::eq(a, page)) { "*" } else { " " };
        let placement = if page.drawer_only { " (drawer)" } else { "" };
        let target = if page.external { " ↗" } else { "" };
        log!("nav"; "{marker} {} -> {}{target}{placement}", page.title, page.href());
    }

    log!(
        "nav";
        "{} in the bar, {} in the drawer",
        config.primary_pages().count(),
        config.drawer_pages().count()
    );

    for (platform, url) in config.social_links() {
        log!("social"; "{} {}", platform.icon(), config.absolute_url(url));
    }
    Ok(())
}

/// Load every post and report counts without writing anything.
fn check_site(config: &SiteConfig, store: DirectoryStore) -> Result<()> {
    let posts = store
        .posts()
        .with_context(|| format!("Failed to read {}", store.root().display()))?;

    log!("check"; "{} posts, {} projects", posts.len(), config.projects.len());
    if config.feed.enable {
        let items = generator::feed::aggregate(&posts, config.feed_projects(), config);
        log!("check"; "{} feed items -> {}", items.len(), config.feed.url_path());
    }
    Ok(())
}
