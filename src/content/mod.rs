//! Blog post collection (the content store).
//!
//! Posts are owned by the store; the feed only reads them through
//! [`ContentStore::posts`]. Records are validated here, at the boundary, so
//! downstream code can rely on every field being present and every date
//! being real.
//!
//! ```text
//! content/posts/
//! ├── hello-world.md        → slug "hello-world"
//! └── 2024/Rust Notes.md    → slug "2024/rust-notes"
//! ```

mod post;
mod store;

pub use post::{BlogPost, parse_post};
pub use store::DirectoryStore;

use std::path::PathBuf;
use thiserror::Error;

/// Read access to a post collection.
pub trait ContentStore {
    /// All published posts. Fails as a whole if any record is unreadable.
    fn posts(&self) -> Result<Vec<BlogPost>, ContentError>;
}

/// In-memory collections, mostly for tests and embedding.
impl ContentStore for Vec<BlogPost> {
    fn posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        Ok(self.iter().filter(|post| !post.draft).cloned().collect())
    }
}

/// Content store errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content directory `{0}` not found")]
    MissingDir(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("directory walk failed")]
    Walk(#[from] walkdir::Error),

    #[error("`{0}` has no `+++` front matter")]
    MissingFrontMatter(PathBuf),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] toml::de::Error),

    #[error("invalid `published_on` in `{path}`: `{value}`")]
    InvalidDate { path: PathBuf, value: String },

    #[error("`{0}` has an empty slug")]
    EmptySlug(PathBuf),

    #[error("slug `{slug}` is used by both `{first}` and `{second}`")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::DateTimeUtc;

    fn post(title: &str, draft: bool) -> BlogPost {
        BlogPost {
            title: title.into(),
            author: "Alice".into(),
            tags: vec![],
            keywords: String::new(),
            summary: String::new(),
            published_on: DateTimeUtc::from_ymd(2024, 1, 1),
            slug: title.to_lowercase(),
            draft,
            source: PathBuf::from(format!("{title}.md")),
        }
    }

    #[test]
    fn test_vec_store_skips_drafts() {
        let store = vec![post("A", false), post("B", true), post("C", false)];
        let titles: Vec<_> = store.posts().unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_error_display() {
        let err = ContentError::InvalidDate {
            path: PathBuf::from("hello.md"),
            value: "someday".into(),
        };
        let display = err.to_string();
        assert!(display.contains("hello.md"));
        assert!(display.contains("someday"));
    }
}
