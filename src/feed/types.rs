use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// One public repository as returned by `GET /users/{account}/repos`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RepositoryListing {
    #[serde(rename = "id")]
    pub identifier: u64,
    #[serde(deserialize_with = "non_empty")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "html_url", deserialize_with = "non_empty")]
    pub canonical_url: String,
    #[serde(rename = "homepage", default, deserialize_with = "blank_as_none")]
    pub homepage_url: Option<String>,
    #[serde(rename = "language", default)]
    pub primary_language: Option<String>,
    #[serde(rename = "updated_at")]
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "fork")]
    pub is_fork: bool,
}

impl RepositoryListing {
    pub fn short_date(&self) -> String {
        self.last_updated.format("%b %d, %Y").to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FeedState {
    Loading,
    Ready(Vec<RepositoryListing>),
    Failed,
}

impl FeedState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FeedState::Loading)
    }

    pub fn entries(&self) -> &[RepositoryListing] {
        match self {
            FeedState::Ready(entries) => entries,
            FeedState::Loading | FeedState::Failed => &[],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedState::Loading => "loading",
            FeedState::Ready(_) => "ready",
            FeedState::Failed => "failed",
        }
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&s),
            &"a non-empty string",
        ));
    }
    Ok(s)
}

// GitHub reports a cleared homepage as "" rather than null.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}
