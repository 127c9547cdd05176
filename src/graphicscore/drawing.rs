//! `graphicscore::drawing` submodule defines [`Canvas`] trait - the interface of external rendering
//! backend that game objects hand their draw calls to.
//!
//! This submodule also provides [`DrawList`] - canvas that only records draw calls,
//! which allows running the simulation headless (for example, on a server or in tests).
//!

use crate::graphicscore::meshes::{DrawMode, Mesh};

/// [`Canvas`] trait defines drawing methods that should be implemented on any canvas.
///
/// Canvas receives mesh, final transform in column-major order and RGBA color with
/// components in [0.0; 1.0] range. Canvas must not expect that those values outlive the call.
///
pub trait Canvas {
    /// Issues one draw call.
    ///
    fn draw(&mut self, mesh: &Mesh, transform: &[f32; 16], color: &[f32; 4]);
}

/// [`DrawCall`] struct is a snapshot of one call to [`Canvas::draw`].
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawCall {
    /// Primitive assembly mode of drawn mesh.
    ///
    pub mode: DrawMode,
    /// Amount of vertices of drawn mesh.
    ///
    pub vertex_count: usize,
    /// Column-major transform.
    ///
    pub transform: [f32; 16],
    /// RGBA color.
    ///
    pub color: [f32; 4],
}

/// [`DrawList`] struct is a canvas that records every draw call in order.
///
/// # Example
/// ```rust
/// # use ggasteroids::graphicscore::{drawing::{Canvas, DrawList}, meshes::Mesh};
/// # use ggasteroids::mathcore::{matrices::Matrix4x4, Color};
/// let mesh: Mesh = Mesh::quad(2.0, 2.0).expect("Size is positive");
/// let mut canvas: DrawList = DrawList::new();
/// canvas.draw(&mesh, &Matrix4x4::identity().to_column_major(), &Color::RED.to_array());
///
/// assert_eq!(canvas.calls().len(), 1);
/// assert_eq!(canvas.calls()[0].color, [1.0, 0.0, 0.0, 1.0]);
/// ```
///
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    /// Recorded calls.
    ///
    calls: Vec<DrawCall>,
}
impl DrawList {
    /// Initializes empty list.
    ///
    pub fn new() -> Self {
        DrawList::default()
    }

    /// Returns recorded calls.
    ///
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }
    /// Clears recorded calls (usually at the start of a frame).
    ///
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}
impl Canvas for DrawList {
    fn draw(&mut self, mesh: &Mesh, transform: &[f32; 16], color: &[f32; 4]) {
        self.calls.push(DrawCall {
            mode: mesh.mode(),
            vertex_count: mesh.vertices().len(),
            transform: *transform,
            color: *color,
        });
    }
}
