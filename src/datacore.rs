//! `ggasteroids::datacore` module is a core that supplies structs and functions
//! that are needed to work with external data.
//!
//! # Usage
//! `datacore` module serializes `Rust`-side data with Concise Binary Object Representation format
//! and stores tuning constants of the game in [`settings::GameSettings`].
//!

// submodules and public re-exports
pub mod assets;
pub mod settings;
