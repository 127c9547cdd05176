//! `mathcore::transforms` submodule implements enums and functions which use transformation matrices to
//! perform translation, rotation and scaling operations on objects.
//!
//! This module also implements [`TransformComposer`], which builds the final matrix
//! that is handed to draw calls for every game object on every frame.
//!

use crate::mathcore::{matrices::Matrix4x4, vectors::Point};
use serde::{Deserialize, Serialize};

/// [`Transform`] struct-like enum represents 3 basic matrix transformations.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Transform {
    /// Translation moves an object along given offsets.
    ///
    Translation {
        /// Offset along X axis.
        ///
        x: f32,
        /// Offset along Y axis.
        ///
        y: f32,
        /// Offset along Z axis (depth).
        ///
        z: f32,
    },

    /// Rotation around Z axis.
    ///
    RotationZ {
        /// Angle of rotation in degrees.
        ///
        /// Any finite value is accepted, angle is never normalized.
        ///
        degrees: f32,
    },

    /// Scaling transform changes the size of an object by expanding or contracting all vertices
    /// along axes by given scalar values.
    ///
    Scaling {
        /// Scaling factor along X axis.
        ///
        x: f32,
        /// Scaling factor along Y axis.
        ///
        y: f32,
        /// Scaling factor along Z axis.
        ///
        z: f32,
    },
}
impl Transform {
    /// Constructs corresponding transformation matrix.
    ///
    /// # Examples
    /// ### Translation
    /// ```rust
    /// # use ggasteroids::mathcore::transforms::Transform;
    /// let matrix = Transform::Translation { x: 2.0, y: 3.0, z: 1.0 }.matrix();
    /// assert_eq!(matrix.transform_point([0.0, 2.0, 0.0]), [2.0, 5.0, 1.0]);
    /// ```
    ///
    /// ### Rotation
    /// ```rust
    /// # use ggasteroids::mathcore::transforms::Transform;
    /// # use ggasteroids::mathcore::floats::FloatOperations;
    /// let matrix = Transform::RotationZ { degrees: 90.0 }.matrix().correct_to(2);
    /// assert_eq!(matrix.transform_point([0.0, 2.0, 0.0]), [-2.0, 0.0, 0.0]);
    /// ```
    ///
    /// ### Scaling
    /// ```rust
    /// # use ggasteroids::mathcore::transforms::Transform;
    /// let matrix = Transform::Scaling { x: 3.0, y: 2.0, z: 1.0 }.matrix();
    /// assert_eq!(matrix.transform_point([2.0, 2.0, 5.0]), [6.0, 4.0, 5.0]);
    /// ```
    ///
    pub fn matrix(self) -> Matrix4x4 {
        let mut matrix: Matrix4x4 = Matrix4x4::identity();
        match self {
            Self::Translation { x, y, z } => {
                matrix[0][3] = x;
                matrix[1][3] = y;
                matrix[2][3] = z;
            }
            Self::RotationZ { degrees } => {
                let (sin, cos): (f32, f32) = degrees.to_radians().sin_cos();
                matrix[0][0] = cos;
                matrix[0][1] = -sin;
                matrix[1][0] = sin;
                matrix[1][1] = cos;
            }
            Self::Scaling { x, y, z } => {
                matrix[0][0] = x;
                matrix[1][1] = y;
                matrix[2][2] = z;
            }
        };
        matrix
    }
}

/// [`Pose`] struct gathers everything that [`TransformComposer`] needs to know about an object.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    /// Position of object's local origin.
    ///
    pub position: Point,
    /// Depth (z-order) of object.
    ///
    pub depth: f32,
    /// Rotation in degrees.
    ///
    pub rotation: f32,
    /// Uniform scale on X and Y axes.
    ///
    pub scale: f32,
}
impl Default for Pose {
    fn default() -> Self {
        Pose {
            position: Point::zero(),
            depth: 0.0,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

/// [`TransformComposer`] builds model-viewport matrices of objects.
///
/// Composer owns fixed-size scratch matrices and overwrites them on every call,
/// so composing does not allocate. Every thread that renders should own its composer.
///
/// Composition order is:
/// 1. `model = identity * T(x, y, depth)`;
/// 2. `viewport_model = viewport * model`;
/// 3. `model` is overwritten with `R(rotation) * S(scale, scale, 1)`;
/// 4. `final = viewport_model * model`.
///
/// # Example
/// ```rust
/// # use ggasteroids::mathcore::{matrices::Matrix4x4, transforms::{Pose, TransformComposer}, vectors::Point};
/// let mut composer: TransformComposer = TransformComposer::new();
/// let pose: Pose = Pose { position: Point { x: 10.0, y: 20.0 }, depth: 0.0, rotation: 0.0, scale: 2.0 };
/// let matrix: &Matrix4x4 = composer.compose(pose, &Matrix4x4::identity());
/// assert_eq!(matrix.transform_point([1.0, 1.0, 0.0]), [12.0, 22.0, 0.0]);
/// ```
///
#[derive(Copy, Clone, Debug, Default)]
pub struct TransformComposer {
    /// Model matrix (translation first, then rotation and scaling).
    ///
    model: Matrix4x4,
    /// Product of viewport and translation-only model matrix.
    ///
    viewport_model: Matrix4x4,
    /// Final matrix that is handed to draw calls.
    ///
    rotation_viewport_model: Matrix4x4,
}
impl TransformComposer {
    /// Initializes composer with identity scratch matrices.
    ///
    pub fn new() -> Self {
        TransformComposer::default()
    }

    /// Composes final transform of given pose and returns reference to it.
    ///
    /// Returned matrix is valid until the next call.
    ///
    pub fn compose(&mut self, pose: Pose, viewport: &Matrix4x4) -> &Matrix4x4 {
        self.model.set_identity();
        self.model
            .translate(pose.position.x, pose.position.y, pose.depth);
        // viewport on the left side, model on the right side
        self.viewport_model = *viewport * self.model;

        self.model.set_rotation_z(pose.rotation);
        self.model.scale(pose.scale, pose.scale, 1.0);

        self.rotation_viewport_model = self.viewport_model * self.model;
        &self.rotation_viewport_model
    }

    /// Returns viewport-model matrix from the last composition (translation only relative to viewport).
    ///
    pub fn viewport_model(&self) -> &Matrix4x4 {
        &self.viewport_model
    }
    /// Returns final matrix from the last composition.
    ///
    pub fn last(&self) -> &Matrix4x4 {
        &self.rotation_viewport_model
    }
}
