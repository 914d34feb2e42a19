//! Portfolio records: projects, work history, education, skills, testimonials.
//!
//! All lists keep their declared order; it is the display order.

use serde::{Deserialize, Serialize};

/// `[[projects]]` entry. Projects also appear in the feed after the posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(alias = "description")]
    pub about: String,
}

/// `[[work]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkExperience {
    pub title: String,
    pub company: String,
    /// Free-form range, e.g. `"Sep 2022 - Mar 2024"`.
    pub years: String,
    #[serde(default)]
    pub contributions: Vec<String>,
}

/// `[[education]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub title: String,
    pub institute: String,
    #[serde(default)]
    pub address: String,
    pub years: String,
}

/// `[[skills]]` entry. `icon` is a devicon class list, `svg` names a bundled image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    #[serde(default)]
    pub avatar: String,
    pub role: String,
    pub name: String,
    pub message: String,
    #[serde(default)]
    pub link: String,
}
