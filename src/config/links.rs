//! `[[pages]]` navigation entries and `[socials]` links.
//!
//! Presentation consumers rely on three things here: pages keep their
//! declared order, `external`/`drawer_only` flags are honored, and the
//! active entry for a path is resolved by [`NavLink::is_active`].

use serde::{Deserialize, Serialize};

/// One `[[pages]]` entry.
///
/// ```toml
/// [[pages]]
/// title = "Blog"
/// url = "/blogs"
///
/// [[pages]]
/// title = "GitHub"
/// url = "https://github.com/alice"
/// external = true
/// drawer_only = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub title: String,
    pub url: String,

    /// Opens in a new tab and is never marked active.
    #[serde(default)]
    pub external: bool,

    /// Only shown in the collapsed (mobile) menu.
    #[serde(default)]
    pub drawer_only: bool,
}

impl NavLink {
    /// Whether this entry should be highlighted for `current_path`.
    ///
    /// The root link only matches `/` itself, otherwise every path would
    /// match it. Other links match exactly or as a leading path segment,
    /// so `/blogs` is active on `/blogs/hello/` but not on `/blogsx`.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.external {
            return false;
        }

        let url = remove_trailing_slash(&self.url);
        let current = remove_trailing_slash(current_path);

        if url.is_empty() {
            return current.is_empty();
        }

        current == url
            || current
                .strip_prefix(url)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Link target with trailing slashes removed (the root stays `/`).
    pub fn href(&self) -> &str {
        match remove_trailing_slash(&self.url) {
            "" => "/",
            href => href,
        }
    }
}

/// Social platforms with a known icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Email,
    Twitter,
    LinkedIn,
    GitHub,
    Instagram,
    Rss,
}

impl SocialPlatform {
    /// Case-insensitive lookup by the `[socials]` key.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "email" => Some(Self::Email),
            "twitter" => Some(Self::Twitter),
            "linkedin" => Some(Self::LinkedIn),
            "github" => Some(Self::GitHub),
            "instagram" => Some(Self::Instagram),
            "rss" => Some(Self::Rss),
            _ => None,
        }
    }

    /// Icon identifier used by the UI layer.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Email => "envelope",
            Self::Twitter => "twitter-logo",
            Self::LinkedIn => "linkedin-logo",
            Self::GitHub => "github-logo",
            Self::Instagram => "instagram-logo",
            Self::Rss => "rss",
        }
    }
}

pub fn remove_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}
