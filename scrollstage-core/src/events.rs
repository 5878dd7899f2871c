/// Which way progress moved between two consecutive scroll updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Still,
}

impl Direction {
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            Direction::Forward
        } else if current < previous {
            Direction::Backward
        } else {
            Direction::Still
        }
    }
}

/// One scroll update as seen by every downstream consumer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    /// Global progress through the horizontal phase, `[0, 1]`.
    pub progress: f64,
    /// Active panel after this update's trigger crossings.
    pub index: usize,
    pub direction: Direction,
}

/// A consumer of the scroll event stream.
///
/// Subscribers only see the event, never each other, so delivery order
/// between them carries no meaning.
pub trait ScrollSubscriber {
    fn on_scroll(&mut self, event: &ScrollEvent);
}

/// Deliver `event` to each subscriber.
pub fn dispatch(event: &ScrollEvent, subscribers: &mut [&mut dyn ScrollSubscriber]) {
    for subscriber in subscribers.iter_mut() {
        subscriber.on_scroll(event);
    }
}
