//! Simulation observer trait for progress reporting and data collection.

use sl_carriage::LogisticsEvent;
use sl_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(u32);
///
/// impl SimObserver for Deliveries {
///     fn on_event(&mut self, _tick: Tick, event: &LogisticsEvent) {
///         if let LogisticsEvent::Delivered { amount, .. } = event {
///             self.0 += amount;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per event, in the order events happened.
    fn on_event(&mut self, _tick: Tick, _event: &LogisticsEvent) {}

    /// Called at the end of each tick with the number of events it produced.
    fn on_tick_end(&mut self, _tick: Tick, _events: usize) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every event with the tick it happened in.
#[derive(Default, Debug)]
pub struct EventRecorder {
    pub events: Vec<(Tick, LogisticsEvent)>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events matching `pred`, in order.
    pub fn matching<'a>(
        &'a self,
        pred: impl Fn(&LogisticsEvent) -> bool + 'a,
    ) -> impl Iterator<Item = &'a (Tick, LogisticsEvent)> + 'a {
        self.events.iter().filter(move |(_, e)| pred(e))
    }
}

impl SimObserver for EventRecorder {
    fn on_event(&mut self, tick: Tick, event: &LogisticsEvent) {
        self.events.push((tick, event.clone()));
    }
}
