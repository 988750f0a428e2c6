use crate::error::{FeedError, PortfolioError, Result};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;

/// Page size asked of the listing endpoint; forks are dropped client-side so
/// a full page leaves room to fill the visible slice.
const PER_PAGE: u8 = 100;

/// Where raw repository listings come from.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listings(&self, account: &str)
        -> std::result::Result<serde_json::Value, FeedError>;
}

#[derive(Serialize)]
struct ListParams {
    sort: &'static str,
    direction: &'static str,
    per_page: u8,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            sort: "updated",
            direction: "desc",
            per_page: PER_PAGE,
        }
    }
}

#[derive(Clone)]
pub struct GitHubSource {
    octo: Octocrab,
}

impl GitHubSource {
    pub fn new(api_base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder()
            .base_uri(api_base_url)
            .map_err(|e| PortfolioError::GitHub(e.to_string()))?;
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        let octo = builder
            .build()
            .map_err(|e| PortfolioError::GitHub(e.to_string()))?;

        Ok(Self { octo })
    }
}

#[async_trait]
impl ListingSource for GitHubSource {
    async fn fetch_listings(
        &self,
        account: &str,
    ) -> std::result::Result<serde_json::Value, FeedError> {
        let route = format!("/users/{account}/repos");
        self.octo
            .get::<serde_json::Value, _, _>(route, Some(&ListParams::default()))
            .await
            .map_err(classify)
    }
}

fn classify(err: octocrab::Error) -> FeedError {
    match err {
        octocrab::Error::Serde { .. } | octocrab::Error::Json { .. } => {
            FeedError::MalformedPayload(err.to_string())
        }
        other => FeedError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_params_request_most_recent_first() {
        let encoded = serde_json::to_value(ListParams::default()).unwrap();
        assert_eq!(encoded["sort"], "updated");
        assert_eq!(encoded["direction"], "desc");
        assert_eq!(encoded["per_page"], 100);
    }

    #[tokio::test]
    async fn rejects_unparseable_base_uri() {
        let result = GitHubSource::new("not a uri", None);
        assert!(matches!(result, Err(PortfolioError::GitHub(_))));
    }
}
