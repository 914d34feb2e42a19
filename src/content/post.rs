//! Post records and front matter parsing.
//!
//! ```markdown
//! +++
//! title = "Hello World"
//! author = "Sanjib Roy"
//! tags = ["React.js", "Hooks"]
//! keywords = "react, hooks"
//! summary = "What I learned about hooks."
//! published_on = 2024-03-05
//! +++
//!
//! Body...
//! ```

use super::ContentError;
use crate::utils::{date::DateTimeUtc, slug::slugify_path};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Front matter fence.
const FENCE: &str = "+++";

/// A validated blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub title: String,
    pub author: String,
    pub tags: Vec<String>,
    pub keywords: String,
    pub summary: String,
    pub published_on: DateTimeUtc,
    /// URL slug, relative to the post prefix (no leading or trailing slash).
    pub slug: String,
    pub draft: bool,
    /// File the post was read from.
    pub source: PathBuf,
}

/// Raw front matter as written by the author.
#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    author: String,
    tags: Vec<String>,
    keywords: String,
    summary: String,
    #[serde(default, alias = "publishedOn")]
    published_on: Option<toml::Value>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    draft: bool,
}

/// Parse a post file.
///
/// `relative` is the path below the content root and determines the slug
/// unless the front matter sets one. A missing `published_on` defaults to
/// `today`; an unparsable one is an error.
pub fn parse_post(
    source: &Path,
    relative: &Path,
    content: &str,
    today: DateTimeUtc,
) -> Result<BlogPost, ContentError> {
    let raw = split_front_matter(content)
        .ok_or_else(|| ContentError::MissingFrontMatter(source.to_path_buf()))?;
    let meta: FrontMatter =
        toml::from_str(raw).map_err(|err| ContentError::FrontMatter(source.to_path_buf(), err))?;

    let published_on = match meta.published_on {
        None => today.date(),
        Some(value) => parse_date_value(&value).ok_or_else(|| ContentError::InvalidDate {
            path: source.to_path_buf(),
            value: display_value(&value),
        })?,
    };

    let slug = match meta.slug {
        Some(slug) => slug.trim_matches('/').to_owned(),
        None => slugify_path(relative),
    };
    if slug.is_empty() {
        return Err(ContentError::EmptySlug(source.to_path_buf()));
    }

    Ok(BlogPost {
        title: meta.title,
        author: meta.author,
        tags: meta.tags,
        keywords: meta.keywords,
        summary: meta.summary,
        published_on,
        slug,
        draft: meta.draft,
        source: source.to_path_buf(),
    })
}

/// TOML dates (`2024-03-05`) and quoted strings (`"2024-03-05"`) are both accepted.
fn parse_date_value(value: &toml::Value) -> Option<DateTimeUtc> {
    match value {
        toml::Value::Datetime(dt) => DateTimeUtc::from_toml(dt),
        toml::Value::String(s) => DateTimeUtc::parse(s),
        _ => None,
    }
}

/// The value as the author wrote it, for error messages.
fn display_value(value: &toml::Value) -> String {
    match value {
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text between the opening and closing `+++` lines.
fn split_front_matter(content: &str) -> Option<&str> {
    let content = content.trim_start_matches('\u{feff}');
    let rest = content.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODAY: DateTimeUtc = DateTimeUtc::new(2024, 6, 1, 12, 30, 0);

    fn parse(content: &str) -> Result<BlogPost, ContentError> {
        parse_post(
            Path::new("/site/content/posts/hello-world.md"),
            Path::new("hello-world.md"),
            content,
            TODAY,
        )
    }

    const FULL: &str = r#"+++
title = "Hello World"
author = "Sanjib Roy"
tags = ["React.js", "Hooks"]
keywords = "react, hooks"
summary = "What I learned."
published_on = 2024-03-05
+++

Body text.
"#;

    #[test]
    fn test_parse_full_post() {
        let post = parse(FULL).unwrap();
        assert_eq!(post.title, "Hello World");
        assert_eq!(post.author, "Sanjib Roy");
        assert_eq!(post.tags, vec!["React.js", "Hooks"]);
        assert_eq!(post.summary, "What I learned.");
        assert_eq!(post.published_on, DateTimeUtc::from_ymd(2024, 3, 5));
        assert_eq!(post.slug, "hello-world");
        assert!(!post.draft);
    }

    #[test]
    fn test_parse_string_date_and_camel_case_key() {
        let content = FULL.replace("published_on = 2024-03-05", "publishedOn = \"2024-01-10\"");
        let post = parse(&content).unwrap();
        assert_eq!(post.published_on, DateTimeUtc::from_ymd(2024, 1, 10));
    }

    #[test]
    fn test_parse_offset_datetime_utc() {
        let content = FULL.replace("2024-03-05", "2024-03-05T08:15:00Z");
        let post = parse(&content).unwrap();
        assert_eq!(post.published_on, DateTimeUtc::new(2024, 3, 5, 8, 15, 0));
    }

    #[test]
    fn test_parse_every_toml_datetime_form() {
        let cases = [
            ("2024-03-05T08:15:00", DateTimeUtc::new(2024, 3, 5, 8, 15, 0)),
            ("2024-03-05 08:15:00Z", DateTimeUtc::new(2024, 3, 5, 8, 15, 0)),
            ("2024-03-05T08:15:00+05:30", DateTimeUtc::new(2024, 3, 5, 2, 45, 0)),
            ("2024-03-05T08:15:00.500Z", DateTimeUtc::new(2024, 3, 5, 8, 15, 0)),
            ("\"2024-03-05T08:15:00-01:00\"", DateTimeUtc::new(2024, 3, 5, 9, 15, 0)),
        ];
        for (literal, expected) in cases {
            let content = FULL.replace("2024-03-05\n", &format!("{literal}\n"));
            let post = parse(&content).unwrap_or_else(|e| panic!("{literal}: {e}"));
            assert_eq!(post.published_on, expected, "{literal}");
        }
    }

    #[test]
    fn test_invalid_date_message_shows_written_value() {
        let content = FULL.replace("published_on = 2024-03-05", "published_on = 08:15:00");
        match parse(&content) {
            Err(ContentError::InvalidDate { value, .. }) => assert_eq!(value, "08:15:00"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_slug_is_rejected() {
        let err = parse_post(
            Path::new("/site/content/posts/!!!.md"),
            Path::new("!!!.md"),
            FULL,
            TODAY,
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::EmptySlug(_)));

        let content = FULL.replace(
            "summary = \"What I learned.\"",
            "summary = \"What I learned.\"\nslug = \"/\"",
        );
        assert!(matches!(parse(&content), Err(ContentError::EmptySlug(_))));
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let content = FULL.replace("published_on = 2024-03-05\n", "");
        let post = parse(&content).unwrap();
        assert_eq!(post.published_on, DateTimeUtc::from_ymd(2024, 6, 1));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let content = FULL.replace("published_on = 2024-03-05", "published_on = \"someday\"");
        let err = parse(&content).unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate { ref value, .. } if value.contains("someday")));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let content = FULL.replace("summary = \"What I learned.\"\n", "");
        assert!(matches!(parse(&content), Err(ContentError::FrontMatter(..))));
    }

    #[test]
    fn test_missing_front_matter() {
        assert!(matches!(
            parse("# Just markdown\n"),
            Err(ContentError::MissingFrontMatter(_))
        ));
        assert!(matches!(
            parse("+++\ntitle = \"unterminated\"\n"),
            Err(ContentError::MissingFrontMatter(_))
        ));
    }

    #[test]
    fn test_slug_override_and_draft() {
        let content = FULL.replace(
            "summary = \"What I learned.\"",
            "summary = \"What I learned.\"\nslug = \"/custom/\"\ndraft = true",
        );
        let post = parse(&content).unwrap();
        assert_eq!(post.slug, "custom");
        assert!(post.draft);
    }

    #[test]
    fn test_crlf_front_matter() {
        let content = FULL.replace('\n', "\r\n");
        assert_eq!(parse(&content).unwrap().title, "Hello World");
    }

    #[test]
    fn test_split_front_matter() {
        assert_eq!(split_front_matter("+++\na = 1\n+++\nbody"), Some("a = 1\n"));
        assert_eq!(split_front_matter("+++\n+++\n"), Some(""));
        assert_eq!(split_front_matter("---\na: 1\n---\n"), None);
    }
}
