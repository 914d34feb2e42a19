//! Directory-backed post collection.

use super::{BlogPost, ContentError, ContentStore, parse_post};
use crate::utils::date::DateTimeUtc;
use rayon::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// File extensions recognized as posts.
const POST_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Reads `*.md` / `*.mdx` files below `root`.
pub struct DirectoryStore {
    root: PathBuf,
    /// Default publish date for posts without one.
    today: DateTimeUtc,
    include_drafts: bool,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>, today: DateTimeUtc) -> Self {
        Self {
            root: root.into(),
            today,
            include_drafts: false,
        }
    }

    /// Also return posts marked `draft = true`.
    pub fn with_drafts(mut self, include_drafts: bool) -> Self {
        self.include_drafts = include_drafts;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Post files in walk order (sorted by file name per directory).
    fn collect_files(&self) -> Result<Vec<PathBuf>, ContentError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && is_post_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn read_post(&self, path: &Path) -> Result<BlogPost, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        parse_post(path, relative, &content, self.today)
    }
}

impl ContentStore for DirectoryStore {
    fn posts(&self) -> Result<Vec<BlogPost>, ContentError> {
        if !self.root.is_dir() {
            return Err(ContentError::MissingDir(self.root.clone()));
        }

        let files = self.collect_files()?;
        let posts = files
            .par_iter()
            .map(|path| self.read_post(path))
            .collect::<Result<Vec<_>, _>>()?;

        check_unique_slugs(&posts)?;

        Ok(posts
            .into_iter()
            .filter(|post| self.include_drafts || !post.draft)
            .collect())
    }
}

fn is_post_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'));
    let known_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| POST_EXTENSIONS.contains(&ext));
    !hidden && known_ext
}

/// Two posts with the same slug would publish to the same link.
fn check_unique_slugs(posts: &[BlogPost]) -> Result<(), ContentError> {
    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(posts.len());
    for post in posts {
        if let Some(first) = seen.insert(post.slug.as_str(), post.source.as_path()) {
            return Err(ContentError::DuplicateSlug {
                slug: post.slug.clone(),
                first: first.to_path_buf(),
                second: post.source.clone(),
            });
        }
    }
    Ok(())
}
