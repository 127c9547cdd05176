//! `mathcore::ext` hidden submodule supplies helper enums and structs that are
//! used throughout `ggasteroids` crate.
//!

use crate::mathcore::floats::almost_equal;
use serde::{Deserialize, Serialize};

/// [`Sign`] unit-only enum represents value's sign (value can be negative, positive or be equal to zero).
///
/// `From` implementation takes sign from given value.
///
/// # Example
/// ```rust
/// # use ggasteroids::mathcore::Sign;
/// assert_eq!(Sign::from(-3.0), Sign::Negative);
/// assert_eq!(Sign::from(0.0), Sign::Zero);
/// assert_eq!(f32::from(Sign::from(2.5) as i8), 1.0);
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Negative sign (-1).
    ///
    Negative = -1,
    /// Zero (0).
    ///
    Zero = 0,
    /// Positive sign (+1).
    ///
    Positive = 1,
}
impl From<f32> for Sign {
    fn from(value: f32) -> Self {
        if value == 0.0 {
            Self::Zero
        } else if value.is_sign_positive() {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// [`Color`] struct represents RGBA model of color with normalized components.
///
/// Every component is expected to be in [0.0; 1.0] range,
/// which is the form that draw calls consume.
/// Default color is opaque white.
///
/// # Examples
/// ```rust
/// # use ggasteroids::mathcore::Color;
/// assert_eq!(Color::default(), Color::WHITE);
/// assert_eq!(Color::from_rgba(1.0, 0.0, 0.0, 1.0), Color::RED);
/// assert_eq!(Color::WHITE.to_array(), [1.0; 4]);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Color {
    /// Red component of color.
    ///
    pub r: f32,

    /// Green component of color.
    ///
    pub g: f32,

    /// Blue component of color.
    ///
    pub b: f32,

    /// Alpha channel value of color (transparency).
    ///
    pub a: f32,
}
impl Color {
    /// Color that corresponds to white.
    ///
    pub const WHITE: Self = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Color that corresponds to red.
    ///
    pub const RED: Self = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// Color that corresponds to orange.
    ///
    pub const ORANGE: Self = Color {
        r: 1.0,
        g: 0.55,
        b: 0.0,
        a: 1.0,
    };

    /// Initializes `Color` from RGBA components.
    ///
    /// Alias for manual construction of struct.
    ///
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }

    /// Returns components packed in the order that draw calls consume (`[r, g, b, a]`).
    ///
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
impl From<[f32; 4]> for Color {
    fn from(arr: [f32; 4]) -> Self {
        Color::from_rgba(arr[0], arr[1], arr[2], arr[3])
    }
}
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(&a, &b)| almost_equal(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Sign};

    #[test]
    fn sign() {
        assert_eq!(Sign::from(0.0), Sign::Zero);
        assert_eq!(Sign::from(-0.0), Sign::Zero);
        assert_eq!(Sign::from(0.5), Sign::Positive);
        assert_eq!(Sign::from(-0.5), Sign::Negative);
        assert_eq!(Sign::from(f32::INFINITY), Sign::Positive);
    }

    #[test]
    fn color() {
        let color: Color = Color::from([0.25, 0.5, 0.75, 1.0]);
        assert_eq!(color.to_array(), [0.25, 0.5, 0.75, 1.0]);
        assert_ne!(color, Color::WHITE);
        assert_eq!(Color::default().a, 1.0);
    }
}
