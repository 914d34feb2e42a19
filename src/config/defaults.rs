//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.folio".into()
    }

    pub fn language() -> String {
        "en-us".into()
    }
}

// ============================================================================
// [profile] Section Defaults
// ============================================================================

pub mod profile {
    /// Training time before the first job, added on top of elapsed years.
    pub fn prior_experience() -> u32 {
        1
    }

    pub fn project_link() -> String {
        "/projects".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content/posts".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn export() -> PathBuf {
        "site.json".into()
    }
}

// ============================================================================
// [feed] Section Defaults
// ============================================================================

pub mod feed {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "rss.xml".into()
    }

    pub fn post_prefix() -> String {
        "/blogs/".into()
    }

    /// `<pubDate>` for items that carry no date of their own (projects).
    pub const UNDATED: &str = "2024-03-21";

    pub fn undated() -> String {
        UNDATED.into()
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        4321
    }
}
