//! `[profile]` section configuration.
//!
//! The site owner's identity. `years_of_experience` is derived from
//! `started` at load time and never read from the file.

use super::defaults;
use crate::utils::{date::DateTimeUtc, experience::years_of_experience};
use educe::Educe;
use serde::{Deserialize, Deserializer, Serialize};

/// `[profile]` section in folio.toml.
///
/// # Example
/// ```toml
/// [profile]
/// name = "Sanjib Roy"
/// job = "Full-stack engineer"
/// started = "2021-02-01"
/// about = ["I'm a Software Engineer.", "I lead projects."]
/// github_handle = "sanjibroy360"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    #[serde(default)]
    pub name: String,

    /// Role shown under the name.
    #[serde(default)]
    pub job: String,

    /// Biography lines in display order. A single string is one line.
    #[serde(default, deserialize_with = "string_or_lines")]
    pub about: Vec<String>,

    #[serde(default)]
    pub avatar: String,

    /// Career start date, as a TOML date or a string. Kept as written;
    /// an unparsable value only disables the derived count.
    #[serde(default, deserialize_with = "date_as_text")]
    pub started: String,

    /// Years added on top of elapsed professional years.
    #[serde(default = "defaults::profile::prior_experience")]
    #[educe(Default = defaults::profile::prior_experience())]
    pub prior_experience: u32,

    /// Derived from `started`; `None` when `started` is not a valid date.
    #[serde(default, skip_deserializing)]
    pub years_of_experience: Option<u32>,

    #[serde(default)]
    pub stack: String,

    #[serde(default)]
    pub hobby: String,

    #[serde(default = "defaults::profile::project_link")]
    #[educe(Default = defaults::profile::project_link())]
    pub project_link: String,

    #[serde(default)]
    pub resume_link: Option<String>,

    /// GitHub username mentioned in project feed summaries.
    #[serde(default)]
    pub github_handle: String,
}

impl ProfileConfig {
    /// Recompute derived fields for `today`.
    pub fn derive(&mut self, today: DateTimeUtc) {
        self.years_of_experience = years_of_experience(&self.started, today, self.prior_experience);
    }
}

fn string_or_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Lines::deserialize(deserializer)? {
        Lines::One(line) => vec![line],
        Lines::Many(lines) => lines,
    })
}

/// Accept a TOML date literal or any scalar; never fail on the value itself.
fn date_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match toml::Value::deserialize(deserializer)? {
        toml::Value::String(text) => text,
        toml::Value::Datetime(dt) => dt.to_string(),
        other => other.to_string(),
    })
}
