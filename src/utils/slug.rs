//! URL slugification for post paths.

use deunicode::deunicode;
use std::path::{Component, Path};

/// Convert text to a lowercase, ASCII, hyphen-separated slug.
///
/// Non-ASCII is transliterated first, so `"Café Notes"` becomes `"cafe-notes"`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Slug for a content file relative to the content root.
///
/// The extension is dropped and each directory segment is slugified:
/// `2024/Hello World.md` → `2024/hello-world`.
pub fn slugify_path(relative: &Path) -> String {
    let stem = relative.with_extension("");
    stem.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(slugify(&part.to_string_lossy())),
            _ => None,
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  React -- Hooks__Guide  "), "react-hooks-guide");
        assert_eq!(slugify("What's new in Rails 7?"), "what-s-new-in-rails-7");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Café Notes"), "cafe-notes");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_path_drops_extension() {
        assert_eq!(slugify_path(&PathBuf::from("my-first-post.md")), "my-first-post");
        assert_eq!(slugify_path(&PathBuf::from("2024/Hello World.mdx")), "2024/hello-world");
    }
}
