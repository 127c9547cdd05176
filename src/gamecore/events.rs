//! `gamecore::events` submodule defines [`Event`] struct
//! that allows game objects to communicate without referencing each other.
//!
//! Events are the only cross-object communication channel:
//! objects emit them through [`GameContext`](super::entities::GameContext),
//! [`Scene`](super::scenes::Scene) collects them into [`EventQueue`] and
//! broadcasts them to every [`EventReceiver`] (objects and the host, which may react by playing sounds).
//!

use crate::gamecore::entities::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// [`EventType`] enum lists kinds of gameplay notifications.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Bullet was fired.
    ///
    Shoot,
    /// Player was hit.
    ///
    PlayerHit,
    /// Asteroid was destroyed by a bullet.
    ///
    AsteroidShot,
    /// Game object died.
    ///
    Death,
}

/// [`Event`] struct is a small message that is broadcast to every receiver.
///
/// # Example
/// ```rust
/// # use ggasteroids::gamecore::{entities::EntityId, events::{Event, EventType}};
/// let event: Event = Event::from_source(EventType::Death, EntityId::new(3));
/// assert_eq!(event.source, Some(EntityId::new(3)));
/// assert_eq!(Event::new(EventType::Shoot).source, None);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// Kind of event.
    ///
    pub event_type: EventType,
    /// Object that emitted event (if any).
    ///
    pub source: Option<EntityId>,
}
impl Event {
    /// Initializes event without source.
    ///
    pub fn new(event_type: EventType) -> Self {
        Event {
            event_type,
            source: None,
        }
    }
    /// Initializes event that was emitted by given object.
    ///
    pub fn from_source(event_type: EventType, source: EntityId) -> Self {
        Event {
            event_type,
            source: Some(source),
        }
    }
}

/// [`EventReceiver`] trait is implemented by everything that reacts on broadcast events.
///
/// Default implementation ignores every event.
///
pub trait EventReceiver {
    /// Handles received event.
    ///
    fn on_event(&mut self, _event: &Event) {}
}
impl<R: EventReceiver + ?Sized> EventReceiver for Box<R> {
    fn on_event(&mut self, event: &Event) {
        (**self).on_event(event);
    }
}

/// Delivers event to every receiver in order.
///
pub fn broadcast<'a, R: EventReceiver + ?Sized + 'a>(
    event: &Event,
    receivers: impl IntoIterator<Item = &'a mut R>,
) {
    for receiver in receivers {
        receiver.on_event(event);
    }
}

/// [`EventQueue`] struct stores events in order of emission until they are dispatched.
///
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    /// Pending events.
    ///
    events: VecDeque<Event>,
}
impl EventQueue {
    /// Initializes empty queue.
    ///
    pub fn new() -> Self {
        EventQueue::default()
    }

    /// Appends event to the end of queue.
    ///
    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }
    /// Removes and returns the oldest event.
    ///
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Returns amount of pending events.
    ///
    pub fn len(&self) -> usize {
        self.events.len()
    }
    /// Returns whether queue is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{broadcast, Event, EventQueue, EventReceiver, EventType};
    use crate::gamecore::entities::EntityId;

    #[derive(Debug, Default)]
    struct Counter {
        deaths: usize,
    }
    impl EventReceiver for Counter {
        fn on_event(&mut self, event: &Event) {
            if event.event_type == EventType::Death {
                self.deaths += 1;
            }
        }
    }

    #[derive(Debug)]
    struct Deaf;
    impl EventReceiver for Deaf {}

    #[test]
    fn queue_keeps_order() {
        let mut queue: EventQueue = EventQueue::new();
        queue.push(Event::new(EventType::Shoot));
        queue.push(Event::from_source(EventType::Death, EntityId::new(1)));
        queue.push(Event::new(EventType::AsteroidShot));
        assert_eq!(queue.len(), 3);

        assert_eq!(queue.pop(), Some(Event::new(EventType::Shoot)));
        let rest: Vec<EventType> = std::iter::from_fn(|| queue.pop())
            .map(|event| event.event_type)
            .collect();
        assert_eq!(rest, vec![EventType::Death, EventType::AsteroidShot]);
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn broadcast_reaches_everyone() {
        let mut receivers: Vec<Box<dyn EventReceiver>> = vec![
            Box::new(Counter::default()),
            Box::new(Deaf),
            Box::new(Counter::default()),
        ];
        broadcast(&Event::new(EventType::Death), receivers.iter_mut());
        broadcast(&Event::new(EventType::PlayerHit), receivers.iter_mut());

        let mut counter: Counter = Counter::default();
        broadcast(
            &Event::new(EventType::Death),
            std::iter::once(&mut counter),
        );
        assert_eq!(counter.deaths, 1);
    }
}
