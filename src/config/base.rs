//! `[base]` section configuration.
//!
//! Site identity used by the feed channel and by page meta tags.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml - basic site metadata.
///
/// `description` and `long_description` may contain an `{experience}`
/// placeholder, replaced at load time with e.g. `"4+ years"`.
///
/// # Example
/// ```toml
/// [base]
/// title = "Sanjib Roy"
/// description = "Full stack developer with {experience} of experience."
/// author = "Sanjib Roy"
/// email = "sanjibroy.dev@gmail.com"
/// url = "https://sanjibroy.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site name, shown in the browser tab and as default feed title.
    pub title: String,

    /// Short description for meta tags.
    pub description: String,

    /// Longer introduction paragraph.
    #[serde(default)]
    pub long_description: String,

    /// Author name for rss feed and meta tags.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Author email for rss feed.
    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    /// Base URL for absolute links in the feed.
    /// Required when `[feed].enable = true`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code for `<language>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Comma separated SEO keywords.
    #[serde(default)]
    pub keywords: String,

    #[serde(default)]
    pub twitter_handle: Option<String>,
}

impl BaseConfig {
    /// Base URL without trailing slash, or empty when unset.
    pub fn site_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Sanjib Roy"
            description = "Portfolio"
            long_description = "Hi, I am Sanjib."
            author = "Sanjib Roy"
            email = "sanjibroy.dev@gmail.com"
            url = "https://sanjibroy.com"
            language = "en-gb"
            keywords = "sanjib, portfolio"
            twitter_handle = "@sanjibroy360"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Sanjib Roy");
        assert_eq!(config.base.long_description, "Hi, I am Sanjib.");
        assert_eq!(config.base.email, "sanjibroy.dev@gmail.com");
        assert_eq!(config.base.url.as_deref(), Some("https://sanjibroy.com"));
        assert_eq!(config.base.language, "en-gb");
        assert_eq!(config.base.twitter_handle.as_deref(), Some("@sanjibroy360"));
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.author, "<YOUR_NAME>");
        assert_eq!(config.base.email, "user@noreply.folio");
        assert_eq!(config.base.language, "en-us");
        assert_eq!(config.base.url, None);
        assert_eq!(config.base.keywords, "");
        assert_eq!(config.base.long_description, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test blog"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }

    #[test]
    fn test_site_url_trims_trailing_slash() {
        let config: SiteConfig = toml::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"
            url = "https://example.com/"
        "#,
        )
        .unwrap();
        assert_eq!(config.base.site_url(), "https://example.com");
        assert_eq!(SiteConfig::default().base.site_url(), "");
    }
}
