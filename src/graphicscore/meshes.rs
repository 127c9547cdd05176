//! `graphicscore::meshes` submodule implements [`Mesh`] - immutable geometry descriptor
//! that game objects are drawn with and that provides their bounding box.
//!
//! Meshes are shared between objects through `Arc<Mesh>`:
//! they are prepared once (resized, flipped) and are never changed afterwards.
//!

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// [`MeshError`] enum lists all errors that could occur during mesh preparation.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// Mesh was constructed from empty vertex list.
    ///
    Empty,
    /// Mesh (or requested size) has zero or negative width or height.
    ///
    Degenerate,
}
impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Empty => write!(f, "mesh has no vertices"),
            MeshError::Degenerate => write!(f, "mesh has zero width or height"),
        }
    }
}
impl Error for MeshError {}

/// [`DrawMode`] enum lists primitives in which vertices of mesh are assembled.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Every three vertices form a filled triangle.
    ///
    #[default]
    Triangles,
    /// Every two vertices form a segment.
    ///
    Lines,
    /// Vertices form closed polyline.
    ///
    LineLoop,
    /// Every vertex is a point.
    ///
    Points,
}

/// [`MeshData`] struct is the stored form of [`Mesh`].
///
/// Bounds are never stored: they are recomputed from vertices whenever mesh is loaded.
///
#[derive(Deserialize, Debug)]
struct MeshData {
    /// Vertices in local coordinates.
    ///
    vertices: Vec<[f32; 3]>,
    /// Primitive assembly mode.
    ///
    mode: DrawMode,
}
impl TryFrom<MeshData> for Mesh {
    type Error = MeshError;

    fn try_from(data: MeshData) -> Result<Self, Self::Error> {
        Mesh::new(data.vertices, data.mode)
    }
}

/// [`Mesh`] struct stores vertices in local coordinates and offsets of bounding box edges
/// from local origin.
///
/// Edges follow screen orientation: `top` is the smallest `y`, `bottom` is the largest one.
/// Only vertices and mode are serialized, bounds of deserialized mesh are computed from its vertices.
///
/// # Example
/// ```rust
/// # use ggasteroids::graphicscore::meshes::{DrawMode, Mesh};
/// let mut mesh: Mesh = Mesh::new(
///     vec![[0.0, 0.5, 0.0], [-0.5, -0.5, 0.0], [0.5, -0.5, 0.0]],
///     DrawMode::Triangles,
/// ).expect("Vertex list is not empty");
/// mesh.set_width_height(8.0, 12.0).expect("Size is positive");
/// mesh.flip_y();
///
/// assert_eq!((mesh.left(), mesh.right()), (-4.0, 4.0));
/// assert_eq!((mesh.top(), mesh.bottom()), (-6.0, 6.0));
/// assert_eq!(mesh.vertices()[0], [0.0, -6.0, 0.0]);
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "MeshData")]
pub struct Mesh {
    /// Vertices in local coordinates.
    ///
    vertices: Vec<[f32; 3]>,
    /// Primitive assembly mode.
    ///
    mode: DrawMode,

    /// Offset of left edge (minimal `x`).
    ///
    #[serde(skip_serializing)]
    left: f32,
    /// Offset of right edge (maximal `x`).
    ///
    #[serde(skip_serializing)]
    right: f32,
    /// Offset of top edge (minimal `y`).
    ///
    #[serde(skip_serializing)]
    top: f32,
    /// Offset of bottom edge (maximal `y`).
    ///
    #[serde(skip_serializing)]
    bottom: f32,
}
impl Mesh {
    /// Constructs mesh from given vertices and computes its bounds.
    ///
    pub fn new(vertices: Vec<[f32; 3]>, mode: DrawMode) -> Result<Self, MeshError> {
        if vertices.is_empty() {
            return Err(MeshError::Empty);
        }

        let mut mesh: Mesh = Mesh {
            vertices,
            mode,
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
        };
        mesh.compute_bounds();
        Ok(mesh)
    }
    /// Constructs rectangle of given size centered at local origin, assembled from two triangles.
    ///
    pub fn quad(width: f32, height: f32) -> Result<Self, MeshError> {
        let mut mesh: Mesh = Mesh::new(
            vec![
                [-0.5, -0.5, 0.0],
                [0.5, -0.5, 0.0],
                [0.5, 0.5, 0.0],
                [-0.5, -0.5, 0.0],
                [0.5, 0.5, 0.0],
                [-0.5, 0.5, 0.0],
            ],
            DrawMode::Triangles,
        )?;
        mesh.set_width_height(width, height)?;
        Ok(mesh)
    }

    /// Recomputes bounds from vertices.
    ///
    fn compute_bounds(&mut self) {
        let (mut left, mut right, mut top, mut bottom): (f32, f32, f32, f32) =
            (f32::MAX, f32::MIN, f32::MAX, f32::MIN);
        for &[x, y, _] in &self.vertices {
            left = left.min(x);
            right = right.max(x);
            top = top.min(y);
            bottom = bottom.max(y);
        }
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
    }

    /// Returns vertices of mesh.
    ///
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }
    /// Returns primitive assembly mode.
    ///
    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Returns offset of left edge from local origin.
    ///
    pub fn left(&self) -> f32 {
        self.left
    }
    /// Returns offset of right edge from local origin.
    ///
    pub fn right(&self) -> f32 {
        self.right
    }
    /// Returns offset of top edge from local origin.
    ///
    pub fn top(&self) -> f32 {
        self.top
    }
    /// Returns offset of bottom edge from local origin.
    ///
    pub fn bottom(&self) -> f32 {
        self.bottom
    }
    /// Returns width of bounding box.
    ///
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
    /// Returns height of bounding box.
    ///
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Resizes mesh so that its bounding box has given size and is centered at local origin.
    ///
    /// Fails if mesh is flat on any axis or if requested size is not positive.
    ///
    pub fn set_width_height(&mut self, width: f32, height: f32) -> Result<(), MeshError> {
        let (old_width, old_height): (f32, f32) = (self.width(), self.height());
        if old_width <= 0.0 || old_height <= 0.0 || width <= 0.0 || height <= 0.0 {
            return Err(MeshError::Degenerate);
        }

        let center_x: f32 = (self.left + self.right) * 0.5;
        let center_y: f32 = (self.top + self.bottom) * 0.5;
        for vertex in self.vertices.iter_mut() {
            vertex[0] = (vertex[0] - center_x) / old_width * width;
            vertex[1] = (vertex[1] - center_y) / old_height * height;
        }
        self.compute_bounds();
        Ok(())
    }

    /// Mirrors mesh vertically (negates `y` of every vertex).
    ///
    pub fn flip_y(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex[1] = -vertex[1];
        }
        self.compute_bounds();
    }
}
