//! `mathcore::matrices` submodule implements NxM matrices which are used to compose
//! model, viewport and final transforms of game objects.
//!
//! Matrices are stored and indexed in row-major order (`matrix[row][column]`) and
//! transform column vectors (`M * v`), so `A * B` applies `B` first.
//! Draw calls consume column-major arrays, which are provided by [`Matrix4x4::to_column_major`].
//!

use crate::mathcore::{
    floats::{almost_equal, FloatOperations},
    transforms::Transform,
};
use serde::{Deserialize, Serialize};
use serde_big_array::Array;
use std::ops::{Index, IndexMut, Mul};

/// [`Matrix`] struct implements linear algebra functions with matrices.
///
/// Every matrix lives on the stack, so all operations are allocation-free.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Matrix<const ROWS: usize, const COLUMNS: usize> {
    /// Underlying array.
    ///
    arr: Array<Array<f32, COLUMNS>, ROWS>,
}
impl<const ROWS: usize, const COLUMNS: usize> Matrix<ROWS, COLUMNS> {
    /// Returns matrix as an array.
    ///
    pub fn as_array(&self) -> [[f32; COLUMNS]; ROWS] {
        let mut arr: [[f32; COLUMNS]; ROWS] = [[0.0; COLUMNS]; ROWS];
        for (r, row) in arr.iter_mut().enumerate() {
            *row = self.arr.0[r].0;
        }
        arr
    }

    /// Initializes matrix with zeroes.
    ///
    pub fn zero() -> Self {
        Self {
            arr: Array([Array([0.0; COLUMNS]); ROWS]),
        }
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggasteroids::mathcore::matrices::Matrix;
    /// let matrix: Matrix<1, 4> = Matrix::from([[1.0, 2.0, 3.0, 4.0]]).map(|x| x + 1.0);
    /// assert_eq!(matrix.as_array(), [[2.0, 3.0, 4.0, 5.0]]);
    /// ```
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Matrix<ROWS, COLUMNS> {
        let mut matrix: Matrix<ROWS, COLUMNS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                matrix[r][c] = f(self[r][c]);
            }
        }
        matrix
    }

    /// Performs dot product operation on two matrices.
    ///
    /// # Example
    /// ```rust
    /// # use ggasteroids::mathcore::matrices::Matrix;
    /// let m1: Matrix<1, 3> = Matrix::from([[1.0, 2.0, 3.0]]);
    /// let m2: Matrix<3, 1> = Matrix::from([[1.0], [2.0], [3.0]]);
    /// assert_eq!(m1.dot_product(m2).as_array(), [[14.0]]);
    /// ```
    ///
    pub fn dot_product<const RHS_COLUMNS: usize>(
        self,
        other: Matrix<COLUMNS, RHS_COLUMNS>,
    ) -> Matrix<ROWS, RHS_COLUMNS> {
        let mut matrix: Matrix<ROWS, RHS_COLUMNS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..RHS_COLUMNS {
                let mut res: f32 = 0.0;
                for k in 0..COLUMNS {
                    res += self[r][k] * other[k][c];
                }
                matrix[r][c] = res;
            }
        }
        matrix
    }
}
impl<const N: usize> Matrix<N, N> {
    /// Makes n-sized identity matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggasteroids::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 3> = Matrix::identity();
    /// assert_eq!(
    ///     matrix.as_array(),
    ///     [
    ///         [1.0, 0.0, 0.0],
    ///         [0.0, 1.0, 0.0],
    ///         [0.0, 0.0, 1.0]
    ///     ],
    /// );
    /// ```
    ///
    pub fn identity() -> Matrix<N, N> {
        let mut matrix: Matrix<N, N> = Matrix::zero();
        for i in 0..N {
            matrix[i][i] = 1.0;
        }
        matrix
    }
    /// Resets matrix to identity in place.
    ///
    pub fn set_identity(&mut self) {
        for r in 0..N {
            for c in 0..N {
                self[r][c] = if r == c { 1.0 } else { 0.0 };
            }
        }
    }
}
impl<const ROWS: usize, const COLUMNS: usize> FloatOperations for Matrix<ROWS, COLUMNS> {
    /// Constructs new matrix by correcting every matrix element that may be wronged by float operations.
    ///
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
    /// Constructs new matrix by rounding every matrix element up to specified number of digits after floating
    /// point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Index<usize> for Matrix<ROWS, COLUMNS> {
    type Output = [f32; COLUMNS];

    fn index(&self, index: usize) -> &Self::Output {
        &self.arr.0[index].0
    }
}
impl<const ROWS: usize, const COLUMNS: usize> IndexMut<usize> for Matrix<ROWS, COLUMNS> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.arr.0[index].0
    }
}
impl<const ROWS: usize, const COLUMNS: usize, const RHS_COLUMNS: usize>
    Mul<Matrix<COLUMNS, RHS_COLUMNS>> for Matrix<ROWS, COLUMNS>
{
    type Output = Matrix<ROWS, RHS_COLUMNS>;

    /// Performs dot product operation on two matrices.
    ///
    /// Is equal to `self.dot_product(rhs)`.
    ///
    fn mul(self, rhs: Matrix<COLUMNS, RHS_COLUMNS>) -> Self::Output {
        self.dot_product(rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> PartialEq for Matrix<ROWS, COLUMNS> {
    /// Checks if matrices are equal (with float tolerance).
    ///
    fn eq(&self, other: &Self) -> bool {
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                if !almost_equal(self[r][c], other[r][c]) {
                    return false;
                }
            }
        }
        true
    }
}
impl<const ROWS: usize, const COLUMNS: usize> From<[[f32; COLUMNS]; ROWS]>
    for Matrix<ROWS, COLUMNS>
{
    fn from(arr: [[f32; COLUMNS]; ROWS]) -> Self {
        let mut matrix: Matrix<ROWS, COLUMNS> = Matrix::zero();
        for (r, row) in arr.iter().enumerate() {
            matrix[r] = *row;
        }
        matrix
    }
}

/// Type alias for 4x4 [`Matrix`] (three-dimensional homogeneous transform matrix).
///
/// Game objects live on a plane, but the third axis carries depth (z-order),
/// and viewport matrices are 4x4 as well.
///
pub type Matrix4x4 = Matrix<4, 4>;
impl Matrix4x4 {
    /// Constructs matrix from column-major array (the layout used by draw calls and viewports).
    ///
    /// # Example
    /// ```rust
    /// # use ggasteroids::mathcore::matrices::Matrix4x4;
    /// let mut arr: [f32; 16] = [0.0; 16];
    /// (arr[0], arr[5], arr[10], arr[15]) = (1.0, 1.0, 1.0, 1.0);
    /// (arr[12], arr[13]) = (5.0, 7.0);
    /// let matrix: Matrix4x4 = Matrix4x4::from_column_major(arr);
    /// assert_eq!(matrix[0][3], 5.0);
    /// assert_eq!(matrix[1][3], 7.0);
    /// assert_eq!(matrix.to_column_major(), arr);
    /// ```
    ///
    pub fn from_column_major(arr: [f32; 16]) -> Self {
        let mut matrix: Matrix4x4 = Matrix::zero();
        for c in 0..4 {
            for r in 0..4 {
                matrix[r][c] = arr[c * 4 + r];
            }
        }
        matrix
    }
    /// Returns matrix as column-major array (the layout used by draw calls).
    ///
    pub fn to_column_major(&self) -> [f32; 16] {
        let mut arr: [f32; 16] = [0.0; 16];
        for c in 0..4 {
            for r in 0..4 {
                arr[c * 4 + r] = self[r][c];
            }
        }
        arr
    }

    /// Post-multiplies matrix by translation (`self = self * T`).
    ///
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        *self = *self * Transform::Translation { x, y, z }.matrix();
    }
    /// Overwrites matrix with pure rotation about Z axis (angle is in degrees).
    ///
    pub fn set_rotation_z(&mut self, degrees: f32) {
        *self = Transform::RotationZ { degrees }.matrix();
    }
    /// Post-multiplies matrix by scaling (`self = self * S`).
    ///
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        *self = *self * Transform::Scaling { x, y, z }.matrix();
    }

    /// Transforms point (`w = 1`) and returns its first three coordinates.
    ///
    /// # Example
    /// ```rust
    /// # use ggasteroids::mathcore::matrices::Matrix4x4;
    /// let mut matrix: Matrix4x4 = Matrix4x4::identity();
    /// matrix.translate(1.0, 2.0, 3.0);
    /// assert_eq!(matrix.transform_point([1.0, 1.0, 1.0]), [2.0, 3.0, 4.0]);
    /// ```
    ///
    pub fn transform_point(&self, point: [f32; 3]) -> [f32; 3] {
        let column: Matrix<4, 1> = Matrix::from([[point[0]], [point[1]], [point[2]], [1.0]]);
        let transformed: Matrix<4, 1> = *self * column;
        [transformed[0][0], transformed[1][0], transformed[2][0]]
    }
}
impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::identity()
    }
}
