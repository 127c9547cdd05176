//! `mathcore::vectors` submodule implements two-dimensional vectors on a plane which are used to represent
//! positions, velocities and penetration depths of game objects.
//!

use crate::mathcore::floats::{almost_equal, FloatOperations};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<Self> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $struct_name {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    )+}
}
/// [`impl_vector_rhs_operations`] macro implements vector-scalar operations for vector.
///
macro_rules! impl_vector_rhs_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assign_operations`] macro implements `...Assign` traits for vector.
///
// This could've been integrated in `impl_vector_vector_operations` and
// `impl_vector_rhs_operations` macros but until `concat_idents` macro is in stable it is not possible.
macro_rules! impl_vector_assign_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates on a plane.
///
/// Game world uses screen-like orientation: `x` grows to the right and `y` grows downwards.
///
/// # Example
/// ```rust
/// # use ggasteroids::mathcore::vectors::Vector2;
/// let mut velocity: Vector2 = Vector2 { x: 3.0, y: 4.0 };
/// assert_eq!(velocity.magnitude(), 5.0);
///
/// velocity *= 0.5;
/// assert_eq!(velocity, Vector2::from([1.5, 2.0]));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Initializes vector with zeroes.
    ///
    pub const fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }

    /// Applies function to every vector element and returns changed vector.
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Vector2 {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Returns squared magnitude of a vector.
    ///
    /// Prefer it over [`Vector2::magnitude`] in comparisons, since it avoids square root.
    ///
    pub fn sqr_magnitude(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }
    /// Returns magnitude of vector (vector length).
    ///
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }

    /// Returns unit vector that points along the heading given in degrees.
    ///
    /// Heading of 0 degrees points up (towards negative `y`), rotation is clockwise on screen.
    ///
    /// # Example
    /// ```rust
    /// # use ggasteroids::mathcore::{floats::FloatOperations, vectors::Vector2};
    /// assert_eq!(Vector2::from_heading(0.0).correct_to(0), Vector2::from([0.0, -1.0]));
    /// assert_eq!(Vector2::from_heading(90.0).correct_to(0), Vector2::from([1.0, 0.0]));
    /// ```
    ///
    pub fn from_heading(degrees: f32) -> Self {
        let theta: f32 = degrees.to_radians();
        Vector2 {
            x: theta.sin(),
            y: -theta.cos(),
        }
    }
}
impl_vector_vector_operations!(Vector2, ((Add, add, +), (Sub, sub, -),));
impl_vector_assign_operations!(Vector2, Self, ((AddAssign, add_assign, +), (SubAssign, sub_assign, -),));
impl_vector_rhs_operations!(Vector2, f32, ((Mul, mul, *), (Div, div, /),));
impl_vector_assign_operations!(Vector2, f32, ((MulAssign, mul_assign, *), (DivAssign, div_assign, /),));
impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|a| -a)
    }
}
impl FloatOperations for Vector2 {
    /// Constructs new vector by correcting every vector component that may be wronged by float operations.
    ///
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
    /// Constructs new vector by rounding every vector component to given amount of digits after floating point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from(arr: [f32; 2]) -> Self {
        Vector2 {
            x: arr[0],
            y: arr[1],
        }
    }
}

/// Type alias for [`Vector2`].
///
pub type Point = Vector2;
