//! `[build]` section configuration.
//!
//! Where posts are read from and where generated files are written.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in folio.toml.
///
/// Relative paths are resolved against the project root when the config is
/// loaded from the command line.
///
/// # Example
/// ```toml
/// [build]
/// content = "src/content/posts"
/// output = "dist"
/// minify = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (set from the command line).
    #[serde(default = "defaults::build::root", skip_serializing)]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Directory holding the post collection.
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Output directory for generated files.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// File name of the exported site data, relative to `output`.
    #[serde(default = "defaults::build::export")]
    #[educe(Default = defaults::build::export())]
    pub export: PathBuf,

    /// Write compact xml/json instead of indented output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,
}
