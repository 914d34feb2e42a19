//! rss feed generation.
//!
//! Posts and projects are two unrelated record types. Each is normalized into
//! a [`FeedItem`], then merged into one list:
//!
//! ```text
//! store.posts() ──► FeedItem (Blog) ──► sort by date, newest first ─┐
//!                                                                   ├──► rss channel
//! config.projects ─► FeedItem (Project) ── declared order ──────────┘
//! ```
//!
//! The whole feed is built in memory and validated before anything is
//! written; a failing content store produces no output.

use crate::{
    config::{Project, SiteConfig},
    content::{BlogPost, ContentStore},
    log,
    utils::date::DateTimeUtc,
};
use anyhow::{Context, Result, anyhow, bail};
use rss::{
    CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder,
    extension::atom::{AtomExtension, Link},
    validation::Validate,
};
use std::{fmt, fs, path::PathBuf};

/// MIME type advertised by the `atom:link rel="self"` element.
const RSS_MIME: &str = "application/rss+xml";

// ============================================================================
// Feed items
// ============================================================================

/// Which source a feed item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Blog,
    Project,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blog => "Blog",
            Self::Project => "Project",
        })
    }
}

/// A source record before normalization.
#[derive(Debug, Clone, Copy)]
pub enum FeedSource<'a> {
    Blog(&'a BlogPost),
    Project(&'a Project),
}

impl FeedSource<'_> {
    pub fn normalize(self, config: &SiteConfig) -> FeedItem {
        let author = config.feed_author();
        match self {
            Self::Blog(post) => FeedItem::from_post(post, &config.feed.post_prefix, &author),
            Self::Project(project) => {
                FeedItem::from_project(project, &config.profile.github_handle, &author)
            }
        }
    }
}

/// Normalized, ready-to-render feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub kind: FeedKind,
    /// Always set for posts, never for projects.
    pub published: Option<DateTimeUtc>,
    /// Absolute URL or site-relative path.
    pub link: String,
    pub categories: Vec<String>,
    pub summary: String,
    /// Site identity in rss form; the same for every item.
    pub author: String,
}

impl FeedItem {
    pub fn from_post(post: &BlogPost, post_prefix: &str, author: &str) -> Self {
        Self {
            title: post.title.clone(),
            kind: FeedKind::Blog,
            published: Some(post.published_on),
            link: format!("{}/{}/", post_prefix.trim_end_matches('/'), post.slug),
            categories: post.tags.clone(),
            summary: post.summary.clone(),
            author: author.to_owned(),
        }
    }

    pub fn from_project(project: &Project, github_handle: &str, author: &str) -> Self {
        let mut summary = format!(
            "{} Tech stack: {}.",
            project.about.trim_end(),
            project.tags.join(", ")
        );
        if !github_handle.is_empty() {
            summary.push_str(&format!(
                " My GitHub username is @{}.",
                github_handle.trim_start_matches('@')
            ));
        }

        Self {
            title: project.name.clone(),
            kind: FeedKind::Project,
            published: None,
            link: project.url.clone(),
            categories: project.tags.clone(),
            summary,
            author: author.to_owned(),
        }
    }

    /// `<title>` text, e.g. `"Hello World | Blog"`.
    pub fn display_title(&self) -> String {
        format!("{} | {}", self.title, self.kind)
    }
}

/// Merge posts and projects into the feed order.
///
/// Posts come first, newest first; posts sharing a date keep their input
/// order. Projects follow in declared order.
pub fn aggregate(posts: &[BlogPost], projects: &[Project], config: &SiteConfig) -> Vec<FeedItem> {
    let mut blogs: Vec<FeedItem> = posts
        .iter()
        .map(|post| FeedSource::Blog(post).normalize(config))
        .collect();
    // stable; `None` would sort last
    blogs.sort_by(|a, b| b.published.cmp(&a.published));

    let projects = projects
        .iter()
        .map(|project| FeedSource::Project(project).normalize(config));

    blogs.into_iter().chain(projects).collect()
}

// ============================================================================
// Public API
// ============================================================================

/// Build the rss feed if enabled in config. Returns the written path.
pub fn build_feed(config: &SiteConfig, store: &dyn ContentStore) -> Result<Option<PathBuf>> {
    if !config.feed.enable {
        return Ok(None);
    }
    RssFeed::build(config, store)?.write().map(Some)
}

/// Generate the feed document without writing it.
pub fn render_feed(config: &SiteConfig, store: &dyn ContentStore) -> Result<String> {
    RssFeed::build(config, store)?.into_xml()
}

// ============================================================================
// RssFeed Implementation
// ============================================================================

/// rss feed builder
struct RssFeed<'a> {
    config: &'a SiteConfig,
    items: Vec<FeedItem>,
}

impl<'a> RssFeed<'a> {
    fn build(config: &'a SiteConfig, store: &dyn ContentStore) -> Result<Self> {
        if config.base.url.is_none() {
            bail!("[base.url] is required for feed generation");
        }

        let posts = store.posts().context("Failed to read the post collection")?;

        Ok(Self {
            config,
            items: aggregate(&posts, config.feed_projects(), config),
        })
    }

    fn into_channel(self) -> rss::Channel {
        let config = self.config;
        let undated = config.feed.undated_date();

        let items: Vec<_> = self
            .items
            .iter()
            .map(|item| feed_item_to_rss(item, config, undated))
            .collect();

        let mut self_link = Link::default();
        self_link.set_href(config.absolute_url(&config.feed.url_path()));
        self_link.set_rel("self");
        self_link.set_mime_type(RSS_MIME.to_string());
        let mut atom = AtomExtension::default();
        atom.set_links(vec![self_link]);

        ChannelBuilder::default()
            .title(config.feed.title.as_deref().unwrap_or(&config.base.title))
            .link(config.base.site_url())
            .description(
                config
                    .feed
                    .description
                    .as_deref()
                    .unwrap_or(&config.base.description),
            )
            .language(config.base.language.clone())
            .generator("folio".to_string())
            .atom_ext(atom)
            .items(items)
            .build()
    }

    /// Generate rss xml string
    fn into_xml(self) -> Result<String> {
        let minify = self.config.build.minify;
        let channel = self.into_channel();

        channel
            .validate()
            .map_err(|e| anyhow!("rss validation failed: {e}"))?;

        if minify {
            return Ok(channel.to_string());
        }
        let buf = channel
            .pretty_write_to(Vec::new(), b' ', 2)
            .map_err(|e| anyhow!("rss serialization failed: {e}"))?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write rss feed to file
    fn write(self) -> Result<PathBuf> {
        let rss_path = self.config.feed_output_path();
        let count = self.items.len();
        let xml = self.into_xml()?;

        if let Some(parent) = rss_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&rss_path, xml)
            .with_context(|| format!("Failed to write feed to {}", rss_path.display()))?;

        log!("feed"; "{} ({count} items)", rss_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(rss_path)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a `FeedItem` to an rss item.
fn feed_item_to_rss(item: &FeedItem, config: &SiteConfig, undated: DateTimeUtc) -> rss::Item {
    let link = config.absolute_url(&item.link);
    let pub_date = match item.kind {
        FeedKind::Blog => item.published.unwrap_or(undated),
        FeedKind::Project => undated,
    };
    let categories: Vec<_> = item
        .categories
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.as_str()).build())
        .collect();

    ItemBuilder::default()
        .title(item.display_title())
        .link(link.clone())
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(item.summary.clone())
        .pub_date(pub_date.to_rfc2822())
        .categories(categories)
        .author(item.author.clone())
        .build()
}
