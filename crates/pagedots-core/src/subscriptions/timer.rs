use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// A repeating timer that emits the current [`Instant`] every `interval`.
///
/// The `id` keeps two timers with different purposes apart when the runtime
/// diffs subscriptions.
///
/// ```rust,ignore
/// let sub = subscribe(Every::new(Duration::from_millis(16), "settle"))
///     .map(|_| Message::Tick);
/// ```
pub struct Every {
    /// The interval between ticks.
    pub interval: Duration,
    /// Identifier distinguishing this timer from others.
    pub id: &'static str,
}

impl Every {
    /// Create a new repeating timer.
    pub fn new(interval: Duration, id: &'static str) -> Self {
        Self { interval, id }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        // A stalled terminal should not replay a burst of animation frames.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let stream =
            tokio_stream::wrappers::IntervalStream::new(interval).map(|tick| tick.into_std());
        Box::pin(stream)
    }
}
