use crate::error::FeedError;
use crate::feed::source::ListingSource;
use crate::feed::types::{FeedState, RepositoryListing};

/// Upper bound on entries in `FeedState::Ready`.
pub const MAX_VISIBLE: usize = 4;

/// Runs one load cycle for `account` and returns its terminal state.
///
/// Never fails: transport and decode errors are logged and collapse to
/// `FeedState::Failed`. The caller publishes `FeedState::Loading` before
/// awaiting this.
pub async fn load(account: &str, source: &dyn ListingSource) -> FeedState {
    if account.is_empty() {
        tracing::warn!("refusing to load repositories for an empty account");
        return FeedState::Failed;
    }

    let payload = match source.fetch_listings(account).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(account, error = %e, "repository feed request failed");
            return FeedState::Failed;
        }
    };

    match decode_listings(payload) {
        Ok(listings) => {
            let received = listings.len();
            let visible = select_visible(listings);
            tracing::info!(account, received, shown = visible.len(), "repository feed ready");
            FeedState::Ready(visible)
        }
        Err(e) => {
            tracing::warn!(account, error = %e, "repository feed payload rejected");
            FeedState::Failed
        }
    }
}

pub fn decode_listings(
    payload: serde_json::Value,
) -> Result<Vec<RepositoryListing>, FeedError> {
    if !payload.is_array() {
        return Err(FeedError::MalformedPayload(
            "expected a JSON array of repositories".to_string(),
        ));
    }
    serde_json::from_value(payload).map_err(|e| FeedError::MalformedPayload(e.to_string()))
}

/// Drops forks, then keeps the first `MAX_VISIBLE` in received order.
///
/// Filtering must come first; truncating first would under-fill the slice
/// whenever a fork sits inside the first `MAX_VISIBLE` entries.
pub fn select_visible(listings: Vec<RepositoryListing>) -> Vec<RepositoryListing> {
    listings
        .into_iter()
        .filter(|l| !l.is_fork)
        .take(MAX_VISIBLE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use serde_json::json;

    fn names(entries: &[RepositoryListing]) -> Vec<&str> {
        entries.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn filters_forks_before_truncating() {
        let input = vec![
            make_listing(1, "A", false),
            make_listing(2, "B", true),
            make_listing(3, "C", false),
            make_listing(4, "D", false),
            make_listing(5, "E", false),
            make_listing(6, "F", false),
        ];
        assert_eq!(names(&select_visible(input)), vec!["A", "C", "D", "E"]);
    }

    #[test]
    fn output_is_bounded_for_any_input_size() {
        for n in [0, 1, MAX_VISIBLE, MAX_VISIBLE + 10] {
            let input = (0..n)
                .map(|i| make_listing(i as u64, &format!("r{i}"), false))
                .collect();
            let out = select_visible(input);
            assert_eq!(out.len(), n.min(MAX_VISIBLE), "input size {n}");
        }
    }

    #[test]
    fn forks_never_survive() {
        let input = (0..20)
            .map(|i| make_listing(i, &format!("r{i}"), i % 3 != 0))
            .collect();
        let out = select_visible(input);
        assert!(out.iter().all(|l| !l.is_fork));
        assert_eq!(names(&out), vec!["r0", "r3", "r6", "r9"]);
    }

    #[test]
    fn all_forks_yield_empty_selection() {
        let input = (0..6).map(|i| make_listing(i, "f", true)).collect();
        assert!(select_visible(input).is_empty());
    }

    #[test]
    fn non_array_payload_is_malformed() {
        let err = decode_listings(json!({"message": "Not Found"})).unwrap_err();
        assert!(matches!(err, FeedError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn empty_array_is_ready_not_failed() {
        let source = StubSource::ok(json!([]));
        assert_eq!(load("Founder-OSS", &source).await, FeedState::Ready(vec![]));
    }

    #[tokio::test]
    async fn transport_failure_is_failed() {
        let source = StubSource::err(FeedError::Transport("404 Not Found".into()));
        let state = load("Founder-OSS", &source).await;
        assert_eq!(state, FeedState::Failed);
        assert!(state.entries().is_empty());
    }

    #[tokio::test]
    async fn malformed_entry_fails_the_whole_load() {
        let source = StubSource::ok(json!([
            listing_json(1, "ok", false),
            {"id": "not-a-number", "name": "bad"}
        ]));
        assert_eq!(load("Founder-OSS", &source).await, FeedState::Failed);
    }

    #[tokio::test]
    async fn missing_homepage_keeps_entry() {
        let mut entry = listing_json(1, "site-less", false);
        entry.as_object_mut().unwrap().remove("homepage");
        let source = StubSource::ok(json!([entry]));

        match load("Founder-OSS", &source).await {
            FeedState::Ready(entries) => {
                assert_eq!(names(&entries), vec!["site-less"]);
                assert!(entries[0].homepage_url.is_none());
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn issues_exactly_one_request_for_the_account() {
        let source = StubSource::ok(json!([listing_json(1, "a", false)]));
        load("Founder-OSS", &source).await;
        assert_eq!(source.calls(), vec!["Founder-OSS".to_string()]);
    }

    #[tokio::test]
    async fn empty_account_fails_without_a_request() {
        let source = StubSource::ok(json!([]));
        assert_eq!(load("", &source).await, FeedState::Failed);
        assert!(source.calls().is_empty());
    }
}
