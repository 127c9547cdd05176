//! `datacore::settings` submodule gathers tuning constants of the game in [`GameSettings`].
//!
//! Settings are plain data: they are loaded (or defaulted) once, validated,
//! and then handed to the objects that need them on construction.
//!

use crate::datacore::assets::{AssetError, FromFile, ToFile};
use crate::mathcore::collisions::{BoundingSphereSystem, HIT_RADIUS_SCALER};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt, path::Path};

/// [`SettingsError`] enum lists all errors that could occur during loading and validation of settings.
///
#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read or written.
    ///
    Asset(AssetError),
    /// Setting has a value that the game cannot run with.
    ///
    Invalid {
        /// Name of setting.
        ///
        field: &'static str,
        /// What is wrong with the value.
        ///
        reason: &'static str,
    },
}
impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Asset(error) => write!(f, "settings file is not usable: {}", error),
            SettingsError::Invalid { field, reason } => {
                write!(f, "setting `{}` is invalid: {}", field, reason)
            }
        }
    }
}
impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SettingsError::Asset(error) => Some(error),
            SettingsError::Invalid { .. } => None,
        }
    }
}
impl From<AssetError> for SettingsError {
    fn from(error: AssetError) -> Self {
        SettingsError::Asset(error)
    }
}

/// [`WorldBounds`] struct represents size of toroidal world in world units.
///
/// Bounds are read-only after initialization; every entity gets a copy on construction.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct WorldBounds {
    /// Width of world.
    ///
    pub width: f32,
    /// Height of world.
    ///
    pub height: f32,
}
impl WorldBounds {
    /// Initializes bounds of given size.
    ///
    pub fn new(width: f32, height: f32) -> Self {
        WorldBounds { width, height }
    }
}
impl Default for WorldBounds {
    fn default() -> Self {
        WorldBounds::new(160.0, 90.0)
    }
}

/// [`PlayerSettings`] struct lists gameplay constants of player ship.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct PlayerSettings {
    /// Minimal time between two shots in seconds.
    ///
    pub time_between_shots: f32,
    /// Turning speed in degrees per second at full turn factor.
    ///
    pub rotation_velocity: f32,
    /// Velocity impulse that is gained on every tick of thrusting.
    ///
    pub thrust: f32,
    /// Velocity multiplier that is applied on every tick.
    ///
    pub drag: f32,
    /// Health at spawn.
    ///
    pub initial_health: i32,
    /// Score that is gained for every destroyed asteroid.
    ///
    pub asteroid_reward: u32,
    /// Width of ship.
    ///
    pub width: f32,
    /// Height of ship.
    ///
    pub height: f32,
}
impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            time_between_shots: 0.25,
            rotation_velocity: 360.0,
            thrust: 8.0,
            drag: 0.99,
            initial_health: 3,
            asteroid_reward: 100,
            width: 8.0,
            height: 12.0,
        }
    }
}

/// [`GameSettings`] struct gathers all tuning constants of the game.
///
/// # Example
/// ```rust
/// # use ggasteroids::datacore::settings::{GameSettings, SettingsError};
/// let mut settings: GameSettings = GameSettings::default();
/// assert!(settings.validate().is_ok());
///
/// settings.player.drag = 1.5;
/// assert!(matches!(
///     settings.validate(),
///     Err(SettingsError::Invalid { field: "player.drag", .. })
/// ));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct GameSettings {
    /// Size of the world.
    ///
    pub world: WorldBounds,
    /// Factor that shrinks bounding spheres in sphere collision test.
    ///
    pub hit_radius_scaler: f32,
    /// Player constants.
    ///
    pub player: PlayerSettings,
}
impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            world: WorldBounds::default(),
            hit_radius_scaler: HIT_RADIUS_SCALER,
            player: PlayerSettings::default(),
        }
    }
}
impl GameSettings {
    /// Checks that every setting has usable value.
    ///
    pub fn validate(&self) -> Result<(), SettingsError> {
        let checks: [(bool, &'static str, &'static str); 7] = [
            (
                self.world.width > 0.0 && self.world.height > 0.0,
                "world",
                "world should have positive width and height",
            ),
            (
                self.hit_radius_scaler > 0.0 && self.hit_radius_scaler <= 1.0,
                "hit_radius_scaler",
                "scaler should be in (0; 1]",
            ),
            (
                self.player.drag > 0.0 && self.player.drag < 1.0,
                "player.drag",
                "drag should be in (0; 1)",
            ),
            (
                self.player.time_between_shots >= 0.0,
                "player.time_between_shots",
                "interval should not be negative",
            ),
            (
                self.player.width > 0.0 && self.player.height > 0.0,
                "player.size",
                "ship should have positive width and height",
            ),
            (
                self.player.rotation_velocity.is_finite() && self.player.thrust.is_finite(),
                "player.motion",
                "rotation velocity and thrust should be finite",
            ),
            (
                self.player.initial_health >= 0,
                "player.initial_health",
                "health should not be negative",
            ),
        ];

        for (is_valid, field, reason) in checks {
            if !is_valid {
                warn!("setting `{}` was rejected: {}", field, reason);
                return Err(SettingsError::Invalid { field, reason });
            }
        }
        Ok(())
    }

    /// Returns sphere collision test that is configured by these settings.
    ///
    pub fn sphere_system(&self) -> BoundingSphereSystem {
        BoundingSphereSystem {
            radius_scaler: self.hit_radius_scaler,
        }
    }

    /// Loads settings from file and validates them.
    ///
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let settings: GameSettings = GameSettings::from_file(path.as_ref())?;
        settings.validate()?;
        info!("settings were loaded from {}", path.as_ref().display());
        Ok(settings)
    }
    /// Validates settings and saves them to file.
    ///
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        self.validate()?;
        self.to_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GameSettings, PlayerSettings, SettingsError, WorldBounds};
    use crate::{
        datacore::assets::{AssetError, ToFile},
        mathcore::collisions::HIT_RADIUS_SCALER,
    };
    use rstest::rstest;
    use tempfile::tempdir;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn defaults() {
        let settings: GameSettings = GameSettings::default();
        assert_eq!(settings.world, WorldBounds::new(160.0, 90.0));
        assert_eq!(settings.hit_radius_scaler, 0.7);
        assert_eq!(settings.sphere_system().radius_scaler, HIT_RADIUS_SCALER);
        assert_eq!(settings.player.time_between_shots, 0.25);
        assert_eq!(settings.player.initial_health, 3);
        assert_eq!(settings.player.asteroid_reward, 100);
    }

    #[rstest]
    #[case::flat_world(|s: &mut GameSettings| s.world.height = 0.0, "world")]
    #[case::zero_scaler(|s: &mut GameSettings| s.hit_radius_scaler = 0.0, "hit_radius_scaler")]
    #[case::big_scaler(|s: &mut GameSettings| s.hit_radius_scaler = 1.5, "hit_radius_scaler")]
    #[case::no_drag(|s: &mut GameSettings| s.player.drag = 1.0, "player.drag")]
    #[case::negative_interval(
        |s: &mut GameSettings| s.player.time_between_shots = -0.1,
        "player.time_between_shots"
    )]
    #[case::flat_ship(|s: &mut GameSettings| s.player.width = -8.0, "player.size")]
    #[case::infinite_thrust(|s: &mut GameSettings| s.player.thrust = f32::INFINITY, "player.motion")]
    #[case::negative_health(|s: &mut GameSettings| s.player.initial_health = -1, "player.initial_health")]
    fn validation(#[case] change: fn(&mut GameSettings), #[case] expected_field: &str) {
        init_logger();
        let mut settings: GameSettings = GameSettings::default();
        change(&mut settings);
        match settings.validate() {
            Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn settings_file() {
        init_logger();
        let directory = tempdir().expect("Temporary directory should be available");
        let path = directory.path().join("settings.cbor");

        let settings: GameSettings = GameSettings {
            world: WorldBounds::new(320.0, 180.0),
            player: PlayerSettings {
                thrust: 12.0,
                ..PlayerSettings::default()
            },
            ..GameSettings::default()
        };
        settings.save(&path).expect("File creation should not fail");
        assert_eq!(GameSettings::load(&path).expect("File was just saved"), settings);
    }

    #[test]
    fn invalid_file_is_rejected() {
        init_logger();
        let directory = tempdir().expect("Temporary directory should be available");
        let path = directory.path().join("settings.cbor");

        let mut settings: GameSettings = GameSettings::default();
        settings.world.width = -1.0;
        assert!(settings.save(&path).is_err());
        assert!(!path.exists());

        // bypass validation on save
        settings.to_file(&path).expect("File creation should not fail");
        assert!(matches!(
            GameSettings::load(&path),
            Err(SettingsError::Invalid { field: "world", .. })
        ));

        assert!(matches!(
            GameSettings::load(directory.path().join("missing.cbor")),
            Err(SettingsError::Asset(AssetError::Io(_)))
        ));
    }
}
