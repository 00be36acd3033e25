//! Synchronous publish/subscribe channel.

use tracing::trace;

use super::GameEvent;

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Handler = Box<dyn FnMut(&GameEvent) + Send>;

/// Delivers each event to every current subscriber, in subscription order.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use rust_kingdoms::events::{EventBus, GameEvent};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut bus = EventBus::new();
/// bus.subscribe(move |e: &GameEvent| sink.lock().unwrap().push(e.name()));
/// bus.emit(&GameEvent::DeckReshuffled { cards: 4 });
///
/// assert_eq!(*seen.lock().unwrap(), vec!["deck_reshuffled"]);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Handler)>,
    next_id: u32,
    emitted: u64,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every subsequent event.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Deliver `event` to all subscribers before returning.
    pub fn emit(&mut self, event: &GameEvent) {
        self.emitted += 1;
        for (id, handler) in &mut self.subscribers {
            trace!(subscriber = id.0, event = event.name(), "delivering event");
            handler(event);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Events emitted over the bus lifetime.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("emitted", &self.emitted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl FnMut(&GameEvent) + Send + 'static) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |e: &GameEvent| sink.lock().unwrap().push(e.name().to_string()))
    }

    #[test]
    fn test_delivery_in_emission_order() {
        let (log, handler) = recorder();
        let mut bus = EventBus::new();
        bus.subscribe(handler);

        bus.emit(&GameEvent::DeckReshuffled { cards: 1 });
        bus.emit(&GameEvent::PlayerEliminated { player: crate::core::PlayerId::new(0) });

        assert_eq!(*log.lock().unwrap(), vec!["deck_reshuffled", "player_eliminated"]);
        assert_eq!(bus.emitted(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let (log, handler) = recorder();
        let mut bus = EventBus::new();
        let id = bus.subscribe(handler);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.emit(&GameEvent::DeckReshuffled { cards: 1 });

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_late_subscriber_misses_earlier_events() {
        let mut bus = EventBus::new();
        bus.emit(&GameEvent::DeckReshuffled { cards: 1 });

        let (log, handler) = recorder();
        bus.subscribe(handler);
        bus.emit(&GameEvent::DeckReshuffled { cards: 2 });

        assert_eq!(log.lock().unwrap().len(), 1);
    }
}
