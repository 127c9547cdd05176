//! `ggasteroids::gamecore` module is a core that implements game objects
//! (generic entities, player ship and its flame) and [`scenes::Scene`] that drives them.
//!
//! # Tick
//! Every tick runs in the following order:
//! 1. `update(dt)` on every live object;
//! 2. pairwise collision tests and `on_collision` calls;
//! 3. dispatch of emitted events to every object and to the host;
//! 4. `render` of every live object.
//!
//! Host (input polling, bullet spawning, audio) is external and is reached through
//! [`entities::GameContext`].
//!

// submodules and public re-exports
pub mod entities;
pub mod events;
pub mod flames;
pub mod input;
pub mod players;
pub mod scenes;

#[cfg(test)]
pub(crate) mod testing;
