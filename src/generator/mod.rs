//! Generated outputs: the rss feed and the `site.json` export.

pub mod export;
pub mod feed;

pub use export::{build_export, render_export};
pub use feed::{build_feed, render_feed};
