use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Drives the scene animation and spinner until the receiver goes away.
pub async fn start_ticker(tx: mpsc::UnboundedSender<AppEvent>, interval_ms: u64) {
    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        if tx.send(AppEvent::Tick).is_err() {
            break;
        }
    }
}
