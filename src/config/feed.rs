//! `[feed]` section configuration.

use super::defaults;
use crate::utils::date::DateTimeUtc;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[feed]` section in folio.toml - rss feed generation.
///
/// # Example
/// ```toml
/// [feed]
/// title = "Sanjib Roy | Software Developer"
/// description = "Posts and projects."
/// post_prefix = "/blogs/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// Generate the feed on `build`.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Feed file path, relative to the output directory. Also the URL path
    /// it is served under.
    #[serde(default = "defaults::feed::path")]
    #[educe(Default = defaults::feed::path())]
    pub path: PathBuf,

    /// Channel title, `[base].title` when unset.
    #[serde(default)]
    pub title: Option<String>,

    /// Channel description, `[base].description` when unset.
    #[serde(default)]
    pub description: Option<String>,

    /// Site-relative prefix for post links: `{post_prefix}{slug}/`.
    #[serde(default = "defaults::feed::post_prefix")]
    #[educe(Default = defaults::feed::post_prefix())]
    pub post_prefix: String,

    /// `<pubDate>` used for undated items (projects).
    #[serde(default = "defaults::feed::undated")]
    #[educe(Default = defaults::feed::undated())]
    pub undated: String,

    /// Append `[[projects]]` after the posts.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub include_projects: bool,
}

impl FeedConfig {
    /// Parsed `undated`, falling back to the built-in constant.
    pub fn undated_date(&self) -> DateTimeUtc {
        DateTimeUtc::parse(&self.undated)
            .or_else(|| DateTimeUtc::parse(defaults::feed::UNDATED))
            .unwrap_or(DateTimeUtc::from_ymd(2024, 3, 21))
    }

    /// URL path of the feed, e.g. `/rss.xml`.
    pub fn url_path(&self) -> String {
        let path = self.path.to_string_lossy().replace('\\', "/");
        format!("/{}", path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    fn parse(feed: &str) -> SiteConfig {
        let content = format!("[base]\ntitle = \"Test\"\ndescription = \"Test\"\n[feed]\n{feed}");
        toml::from_str(&content).unwrap()
    }

    #[test]
    fn test_feed_config_defaults() {
        let config = parse("");
        assert!(config.feed.enable);
        assert!(config.feed.include_projects);
        assert_eq!(config.feed.path, PathBuf::from("rss.xml"));
        assert_eq!(config.feed.post_prefix, "/blogs/");
        assert_eq!(config.feed.undated, "2024-03-21");
        assert_eq!(config.feed.title, None);
    }

    #[test]
    fn test_undated_date() {
        assert_eq!(
            parse("").feed.undated_date(),
            DateTimeUtc::from_ymd(2024, 3, 21)
        );
        assert_eq!(
            parse("undated = \"2020-01-01\"").feed.undated_date(),
            DateTimeUtc::from_ymd(2020, 1, 1)
        );
        assert_eq!(
            parse("undated = \"never\"").feed.undated_date(),
            DateTimeUtc::from_ymd(2024, 3, 21)
        );
    }

    #[test]
    fn test_url_path() {
        assert_eq!(parse("").feed.url_path(), "/rss.xml");
        assert_eq!(parse("path = \"feeds/all.xml\"").feed.url_path(), "/feeds/all.xml");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str(
            "[base]\ntitle = \"Test\"\ndescription = \"Test\"\n[feed]\nformat = \"atom\"",
        );
        assert!(result.is_err());
    }
}
