//! `site.json` export for presentation consumers.
//!
//! The UI layer reads one json document instead of the raw config:
//!
//! | Key     | Contents                                         |
//! |---------|--------------------------------------------------|
//! | `site`  | The derived `SiteConfig` (years of experience filled in) |
//! | `posts` | Published posts, newest first                    |
//! | `tags`  | Tag name → posts carrying it, sorted by tag      |

use crate::{
    config::SiteConfig,
    content::{BlogPost, ContentStore},
    log,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, fs, path::PathBuf};

/// Post summary, as exposed in `posts`.
#[derive(Debug, Clone, Serialize)]
pub struct PostData {
    /// Site-relative URL (e.g., "/blogs/hello-world/")
    pub url: String,
    pub title: String,
    pub summary: String,
    /// Publication date as ISO 8601 string (e.g., "2024-01-15")
    pub date: String,
    pub author: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A post reference within the tags index.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedPost {
    pub url: String,
    pub title: String,
    pub date: String,
}

/// Tag name → posts, sorted alphabetically by tag.
pub type TagsIndex = BTreeMap<String, Vec<TaggedPost>>;

#[derive(Debug, Serialize)]
pub struct SiteData<'a> {
    pub site: &'a SiteConfig,
    pub posts: Vec<PostData>,
    pub tags: TagsIndex,
}

impl<'a> SiteData<'a> {
    pub fn new(config: &'a SiteConfig, posts: &[BlogPost]) -> Self {
        let mut sorted: Vec<&BlogPost> = posts.iter().collect();
        sorted.sort_by(|a, b| b.published_on.cmp(&a.published_on));

        let posts: Vec<PostData> = sorted
            .into_iter()
            .map(|post| PostData {
                url: format!(
                    "{}/{}/",
                    config.feed.post_prefix.trim_end_matches('/'),
                    post.slug
                ),
                title: post.title.clone(),
                summary: post.summary.clone(),
                date: post.published_on.to_string(),
                author: post.author.clone(),
                tags: post.tags.clone(),
            })
            .collect();

        let mut tags = TagsIndex::new();
        for post in &posts {
            for tag in &post.tags {
                tags.entry(tag.clone()).or_default().push(TaggedPost {
                    url: post.url.clone(),
                    title: post.title.clone(),
                    date: post.date.clone(),
                });
            }
        }

        Self {
            site: config,
            posts,
            tags,
        }
    }

    pub fn to_json(&self, minify: bool) -> Result<String> {
        let json = if minify {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }
}

/// Render `site.json` without writing it.
pub fn render_export(config: &SiteConfig, store: &dyn ContentStore) -> Result<String> {
    let posts = store.posts().context("Failed to read the post collection")?;
    SiteData::new(config, &posts).to_json(config.build.minify)
}

/// Write `site.json` to the output directory.
pub fn build_export(config: &SiteConfig, store: &dyn ContentStore) -> Result<PathBuf> {
    let json = render_export(config, store)?;

    let path = config.export_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("export"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DateTimeUtc;

    fn make_post(title: &str, date: DateTimeUtc, tags: &[&str]) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            author: "Alice".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            keywords: String::new(),
            summary: String::new(),
            published_on: date,
            slug: title.to_lowercase(),
            draft: false,
            source: PathBuf::from(format!("{title}.md")),
        }
    }

    fn make_config() -> SiteConfig {
        SiteConfig::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"

            [profile]
            started = "2021-02-01"
        "#,
        )
        .unwrap()
        .derive(DateTimeUtc::from_ymd(2024, 3, 21))
    }

    #[test]
    fn test_posts_newest_first() {
        let config = make_config();
        let posts = vec![
            make_post("Old", DateTimeUtc::from_ymd(2023, 1, 1), &[]),
            make_post("New", DateTimeUtc::from_ymd(2024, 1, 1), &[]),
        ];
        let data = SiteData::new(&config, &posts);
        assert_eq!(data.posts[0].title, "New");
        assert_eq!(data.posts[0].url, "/blogs/new/");
        assert_eq!(data.posts[0].date, "2024-01-01");
    }

    #[test]
    fn test_tags_index() {
        let config = make_config();
        let posts = vec![
            make_post("A", DateTimeUtc::from_ymd(2024, 1, 1), &["rust", "cli"]),
            make_post("B", DateTimeUtc::from_ymd(2024, 2, 1), &["rust"]),
        ];
        let data = SiteData::new(&config, &posts);

        let tags: Vec<_> = data.tags.keys().map(String::as_str).collect();
        assert_eq!(tags, vec!["cli", "rust"]);
        let rust: Vec<_> = data.tags["rust"].iter().map(|p| p.title.as_str()).collect();
        assert_eq!(rust, vec!["B", "A"]);
    }

    #[test]
    fn test_json_contains_derived_fields() {
        let config = make_config();
        let json = SiteData::new(&config, &[]).to_json(true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["site"]["profile"]["years_of_experience"], 4);
        assert!(value["site"].get("serve").is_none());
        assert_eq!(value["posts"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_build_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = make_config();
        config.build.output = dir.path().to_path_buf();

        let posts = vec![make_post("A", DateTimeUtc::from_ymd(2024, 1, 1), &[])];
        let path = build_export(&config, &posts).unwrap();
        assert_eq!(path, dir.path().join("site.json"));
        assert!(fs::read_to_string(path).unwrap().contains("\"title\":\"A\""));
    }
}
