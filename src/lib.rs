//! # GGAsteroids
//!
//! **GGAsteroids** - entity simulation and collision core of a 2d asteroids-like game written in pure Rust.
//!
//! Crate is split into cores:
//! `mathcore` (vectors, matrices, transform composition and collision tests),
//! `graphicscore` (meshes and draw call interface),
//! `gamecore` (entities, player ship, events and scene that drives them) and
//! `datacore` (data files and game settings).
//!
//! Rendering, input polling, audio and bullet spawning stay outside of the crate:
//! the host implements `gamecore::entities::GameContext` and `graphicscore::drawing::Canvas`.
//! Logging goes through `log` facade, so the host decides where records end up.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate bitflags;

extern crate log;

extern crate serde;
extern crate serde_big_array;
extern crate serde_cbor;

// cores
pub mod datacore;
pub mod gamecore;
pub mod graphicscore;
pub mod mathcore;
