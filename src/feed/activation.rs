use crate::event::AppEvent;
use crate::feed::loader;
use crate::feed::source::ListingSource;
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one page activation. Results tagged with a stale id are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivationId(u64);

impl ActivationId {
    pub const INITIAL: ActivationId = ActivationId(0);

    pub fn next(self) -> Self {
        ActivationId(self.0 + 1)
    }
}

impl fmt::Display for ActivationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spawns the single load task for `activation`.
///
/// The task reports back through `tx`; a closed channel means the app is
/// gone and the result is dropped.
pub fn spawn_load(
    activation: ActivationId,
    account: String,
    source: Arc<dyn ListingSource>,
    tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let state = loader::load(&account, source.as_ref()).await;
        if tx.send(AppEvent::FeedLoaded { activation, state }).is_err() {
            tracing::debug!(%activation, "feed result dropped, receiver closed");
        }
    })
}
