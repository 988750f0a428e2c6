#![cfg(test)]

use crate::error::FeedError;
use crate::feed::source::ListingSource;
use crate::feed::types::RepositoryListing;
use async_trait::async_trait;
use std::sync::Mutex;

pub fn listing_json(id: u64, name: &str, fork: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("about {name}"),
        "html_url": format!("https://github.com/Founder-OSS/{name}"),
        "homepage": format!("https://{name}.dev"),
        "language": "Rust",
        "updated_at": "2025-06-01T12:00:00Z",
        "fork": fork
    })
}

pub fn make_listing(id: u64, name: &str, fork: bool) -> RepositoryListing {
    serde_json::from_value(listing_json(id, name, fork)).unwrap()
}

enum Reply {
    Ok(serde_json::Value),
    Err(FeedError),
    Pending,
}

/// In-memory `ListingSource` that records every account it was asked for.
pub struct StubSource {
    reply: Reply,
    calls: Mutex<Vec<String>>,
}

impl StubSource {
    fn with(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(payload: serde_json::Value) -> Self {
        Self::with(Reply::Ok(payload))
    }

    pub fn err(err: FeedError) -> Self {
        Self::with(Reply::Err(err))
    }

    pub fn pending() -> Self {
        Self::with(Reply::Pending)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingSource for StubSource {
    async fn fetch_listings(&self, account: &str) -> Result<serde_json::Value, FeedError> {
        self.calls.lock().unwrap().push(account.to_string());
        match &self.reply {
            Reply::Ok(payload) => Ok(payload.clone()),
            Reply::Err(err) => Err(err.clone()),
            Reply::Pending => std::future::pending().await,
        }
    }
}
