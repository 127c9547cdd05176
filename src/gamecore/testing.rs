//! Test host that records everything game objects ask of it.
//!

use crate::gamecore::{
    entities::{Entity, EntityId, GameContext},
    events::Event,
    input::InputSignals,
};

/// [`RecordingContext`] struct is a host that serves fixed input and records shots and events.
///
#[derive(Debug, Default)]
pub(crate) struct RecordingContext {
    /// Input that is served on every tick.
    ///
    pub(crate) input: InputSignals,
    /// Whether every shot is refused.
    ///
    pub(crate) refuse_fire: bool,
    /// Shooters of fired bullets.
    ///
    pub(crate) shots: Vec<EntityId>,
    /// Received events.
    ///
    pub(crate) events: Vec<Event>,
}
impl RecordingContext {
    /// Initializes host with given input.
    ///
    pub(crate) fn with_input(input: InputSignals) -> Self {
        RecordingContext {
            input,
            ..RecordingContext::default()
        }
    }
}
impl GameContext for RecordingContext {
    fn input(&self) -> InputSignals {
        self.input
    }

    fn maybe_fire_bullet(&mut self, shooter: &Entity) -> bool {
        if self.refuse_fire {
            return false;
        }
        self.shots.push(shooter.id());
        true
    }

    fn broadcast_event(&mut self, event: Event) {
        self.events.push(event);
    }
}
