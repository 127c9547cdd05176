//! `ggasteroids::graphicscore` module is a core that provides interfaces for rendering
//! of game objects.
//!
//! Rendering backend is external to `ggasteroids`: objects only produce draw calls
//! (mesh, column-major 4x4 transform and RGBA color) and hand them to a [`drawing::Canvas`].
//!

// submodules and public re-exports
pub mod drawing;
pub mod meshes;
