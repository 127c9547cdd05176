//! `gamecore::input` submodule defines input signals that are polled by the host once per tick
//! and are read by player-controlled objects.
//!

use bitflags::bitflags;

bitflags! {
    /// [`InputFlags`] bitflag struct lists boolean input signals.
    ///
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct InputFlags: u8 {
        /// Thrust (accelerate along heading) flag.
        ///
        const THRUST = 1 << 0;
        /// Fire flag.
        ///
        const FIRE = 1 << 1;
    }
}
impl Default for InputFlags {
    fn default() -> Self {
        InputFlags::empty()
    }
}

/// [`InputSignals`] struct is a snapshot of input for one tick.
///
/// # Example
/// ```rust
/// # use ggasteroids::gamecore::input::{InputFlags, InputSignals};
/// let input: InputSignals = InputSignals::new(-1.0, InputFlags::THRUST | InputFlags::FIRE);
/// assert!(input.is_thrusting() && input.is_firing());
/// assert_eq!(InputSignals::new(3.0, InputFlags::empty()).horizontal_factor, 1.0);
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputSignals {
    /// Continuous turn factor in [-1.0; 1.0] (negative turns counterclockwise).
    ///
    pub horizontal_factor: f32,
    /// Boolean signals.
    ///
    pub flags: InputFlags,
}
impl InputSignals {
    /// Initializes input snapshot, clamping turn factor to [-1.0; 1.0].
    ///
    pub fn new(horizontal_factor: f32, flags: InputFlags) -> Self {
        InputSignals {
            horizontal_factor: horizontal_factor.clamp(-1.0, 1.0),
            flags,
        }
    }

    /// Returns whether thrust is requested.
    ///
    pub fn is_thrusting(&self) -> bool {
        self.flags.contains(InputFlags::THRUST)
    }
    /// Returns whether fire is requested.
    ///
    pub fn is_firing(&self) -> bool {
        self.flags.contains(InputFlags::FIRE)
    }
}
