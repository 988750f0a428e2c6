use crate::feed::activation::ActivationId;
use crate::feed::types::FeedState;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    FeedLoaded {
        activation: ActivationId,
        state: FeedState,
    },
}
