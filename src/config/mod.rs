//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section            | Purpose                                        |
//! |--------------------|------------------------------------------------|
//! | `[base]`           | Site metadata (title, author, url)             |
//! | `[profile]`        | Owner identity, career start date              |
//! | `[build]`          | Content and output paths                       |
//! | `[feed]`           | RSS feed settings                              |
//! | `[serve]`          | Local feed server                              |
//! | `[[pages]]`        | Navigation entries, in display order           |
//! | `[socials]`        | Platform name → URL                            |
//! | `[[projects]]`     | Project catalog (also syndicated)              |
//! | `[[work]]`, `[[education]]`, `[[skills]]`, `[[testimonials]]` | About page data |
//!
//! The config is loaded once, derived fields are filled in with
//! [`SiteConfig::derive`], and the value is then only passed by reference.
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Sanjib Roy"
//! description = "Software developer with {experience} of experience."
//! url = "https://sanjibroy.com"
//!
//! [profile]
//! name = "Sanjib Roy"
//! started = "2021-02-01"
//!
//! [[pages]]
//! title = "Home"
//! url = "/"
//!
//! [socials]
//! GitHub = "https://github.com/sanjibroy360"
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod feed;
mod links;
mod portfolio;
mod profile;
mod serve;

pub use base::BaseConfig;
pub use build::BuildConfig;
pub use error::ConfigError;
pub use feed::FeedConfig;
pub use links::{NavLink, SocialPlatform};
pub use portfolio::{Education, Project, Skill, Testimonial, WorkExperience};
pub use profile::ProfileConfig;
pub use serve::ServeConfig;

use crate::{
    cli::{Cli, Commands},
    utils::{date::DateTimeUtc, experience::experience_phrase},
};
use anyhow::{Result, bail};
use educe::Educe;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

/// Placeholder in descriptions replaced by the experience phrase.
const EXPERIENCE_PLACEHOLDER: &str = "{experience}";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default, skip_serializing)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub pages: Vec<NavLink>,

    #[serde(default)]
    pub socials: BTreeMap<String, String>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub work: Vec<WorkExperience>,

    #[serde(default)]
    pub education: Vec<Education>,

    #[serde(default)]
    pub skills: Vec<Skill>,

    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Fill in fields computed from `today`.
    ///
    /// Call exactly once after loading; placeholders are consumed.
    pub fn derive(mut self, today: DateTimeUtc) -> Self {
        self.profile.derive(today);

        let phrase = experience_phrase(self.profile.years_of_experience);
        for text in [
            &mut self.base.description,
            &mut self.base.long_description,
        ] {
            if text.contains(EXPERIENCE_PLACEHOLDER) {
                *text = text.replace(EXPERIENCE_PLACEHOLDER, &phrase);
            }
        }
        if let Some(text) = self.feed.description.as_mut()
            && text.contains(EXPERIENCE_PLACEHOLDER)
        {
            *text = text.replace(EXPERIENCE_PLACEHOLDER, &phrase);
        }

        self
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.build.content, cli.content.as_ref());

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.root = Some(root);

        if let Commands::Serve { interface, port } = &cli.command {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.feed.enable && self.base.url.is_none() {
            bail!(ConfigError::Validation(
                "[base.url] is required for feed generation".into()
            ));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if DateTimeUtc::parse(&self.feed.undated).is_none() {
            bail!(ConfigError::Validation(format!(
                "[feed.undated] is not a valid date: `{}`",
                self.feed.undated
            )));
        }

        if !self.feed_projects().is_empty() && self.profile.github_handle.trim().is_empty() {
            bail!(ConfigError::Validation(
                "[profile.github_handle] is required when projects are syndicated".into()
            ));
        }

        if !self.feed.post_prefix.starts_with('/') {
            bail!(ConfigError::Validation(
                "[feed.post_prefix] must start with `/`".into()
            ));
        }

        Ok(())
    }

    // ------------------------------------------------------------------------
    // Accessors used by the feed and presentation layers
    // ------------------------------------------------------------------------

    /// Author identity for feed items, in rss form: `email@example.com (Name)`.
    ///
    /// `[base].author` is used as-is when it is already in that form.
    pub fn feed_author(&self) -> String {
        static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$")
                .expect("author pattern is valid")
        });

        let author = &self.base.author;
        if RE_VALID_AUTHOR.is_match(author) {
            return author.clone();
        }
        format!("{} ({})", self.base.email, author)
    }

    /// Projects that go into the feed, in declared order.
    pub fn feed_projects(&self) -> &[Project] {
        if self.feed.enable && self.feed.include_projects {
            &self.projects
        } else {
            &[]
        }
    }

    /// Pages shown in the main navigation bar.
    pub fn primary_pages(&self) -> impl Iterator<Item = &NavLink> {
        self.pages.iter().filter(|page| !page.drawer_only)
    }

    /// Pages shown in the collapsed menu (all of them, in order).
    pub fn drawer_pages(&self) -> impl Iterator<Item = &NavLink> {
        self.pages.iter()
    }

    /// The navigation entry to highlight for `current_path`, if any.
    pub fn active_page(&self, current_path: &str) -> Option<&NavLink> {
        self.pages.iter().find(|page| page.is_active(current_path))
    }

    /// Social links that have a known icon, sorted by platform name.
    pub fn social_links(&self) -> impl Iterator<Item = (SocialPlatform, &str)> {
        self.socials.iter().filter_map(|(name, url)| {
            SocialPlatform::from_name(name).map(|platform| (platform, url.as_str()))
        })
    }

    /// Absolute URL for a site-relative link. Absolute links are returned unchanged.
    pub fn absolute_url(&self, link: &str) -> String {
        if link.contains("://") || link.starts_with("mailto:") {
            return link.to_owned();
        }
        format!("{}/{}", self.base.site_url(), link.trim_start_matches('/'))
    }

    /// Where the feed file is written.
    pub fn feed_output_path(&self) -> PathBuf {
        self.build.output.join(&self.feed.path)
    }

    /// Where `site.json` is written.
    pub fn export_path(&self) -> PathBuf {
        self.build.output.join(&self.build.export)
    }
}

// ============================================================================
// Tests
// ============================================================================
