//! `gamecore::players` submodule implements [`Player`] - ship that is driven by input signals.
//!
//! # State
//! Player is alive and healthy, alive and damaged or dead; the state is implied by
//! `health` and the liveness flag of its entity.
//! Every hit takes one health point, and player dies when health drops below zero.
//!

use crate::{
    datacore::settings::{PlayerSettings, WorldBounds},
    gamecore::{
        entities::{Entity, EntityId, GameContext, GameObject},
        events::{Event, EventReceiver, EventType},
        flames::Flame,
        input::InputSignals,
    },
    graphicscore::{
        drawing::Canvas,
        meshes::{DrawMode, Mesh, MeshError},
    },
    mathcore::{
        collisions::CollisionTest, matrices::Matrix4x4, transforms::TransformComposer,
        vectors::{Point, Vector2},
    },
};
use log::{debug, info};
use std::sync::Arc;

/// [`Player`] struct represents ship that is controlled by input signals.
///
/// On every tick player turns by `horizontal_factor * rotation_velocity * dt` degrees,
/// accelerates along its heading while thrusting (heading of 0 degrees points up),
/// loses speed to drag and fires when cooldown allows it.
/// Player uses bounding sphere collision test.
///
/// # Example
/// ```rust
/// # use ggasteroids::datacore::settings::{PlayerSettings, WorldBounds};
/// # use ggasteroids::gamecore::{entities::{Entity, EntityId, GameContext, GameObject}, events::Event, input::{InputFlags, InputSignals}, players::Player};
/// # use ggasteroids::mathcore::vectors::{Point, Vector2};
/// struct Host;
/// impl GameContext for Host {
///     fn input(&self) -> InputSignals { InputSignals::new(0.0, InputFlags::THRUST) }
///     fn maybe_fire_bullet(&mut self, _shooter: &Entity) -> bool { true }
///     fn broadcast_event(&mut self, _event: Event) {}
/// }
///
/// let mut player: Player = Player::new(
///     EntityId::new(0),
///     WorldBounds::default(),
///     PlayerSettings::default(),
///     Point { x: 80.0, y: 45.0 },
/// ).expect("Default settings are valid");
/// player.update(0.0, &mut Host);
///
/// // thrust of 8 straight up, damped by drag of 0.99
/// assert_eq!(player.entity().velocity, Vector2 { x: 0.0, y: -7.92 });
/// assert!(player.is_boosting());
/// ```
///
#[derive(Clone, Debug)]
pub struct Player {
    /// Entity of ship.
    ///
    entity: Entity,
    /// Thrust flame.
    ///
    flame: Flame,
    /// Gameplay constants.
    ///
    settings: PlayerSettings,

    /// Time left until the next shot is allowed.
    ///
    bullet_cooldown: f32,
    /// Whether thrust was requested on the last tick.
    ///
    is_boosting: bool,
    /// Accumulated score.
    ///
    score: u32,
    /// Health points.
    ///
    health: i32,
}
impl Player {
    /// Constructs ship mesh: isosceles triangle with nose pointing up (towards negative `y`).
    ///
    pub fn mesh(width: f32, height: f32) -> Result<Mesh, MeshError> {
        let mut mesh: Mesh = Mesh::new(
            vec![[0.0, 0.5, 0.0], [-0.5, -0.5, 0.0], [0.5, -0.5, 0.0]],
            DrawMode::Triangles,
        )?;
        mesh.set_width_height(width, height)?;
        mesh.flip_y();
        Ok(mesh)
    }

    /// Initializes player at given position with full health.
    ///
    /// Fails if player size in settings is not positive.
    ///
    pub fn new(
        id: EntityId,
        bounds: WorldBounds,
        settings: PlayerSettings,
        position: Point,
    ) -> Result<Self, MeshError> {
        let entity: Entity = Entity::new(
            id,
            Arc::new(Player::mesh(settings.width, settings.height)?),
            bounds,
            position,
        );
        let flame: Flame = Flame::new(&entity, settings.width * 0.5, settings.height * 0.5)?;

        Ok(Player {
            entity,
            flame,
            settings,

            bullet_cooldown: 0.0,
            is_boosting: false,
            score: 0,
            health: settings.initial_health,
        })
    }

    /// Returns thrust flame.
    ///
    pub fn flame(&self) -> &Flame {
        &self.flame
    }
    /// Returns gameplay constants of player.
    ///
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// Returns accumulated score.
    ///
    pub fn score(&self) -> u32 {
        self.score
    }
    /// Returns health points.
    ///
    pub fn health(&self) -> i32 {
        self.health
    }
    /// Returns time left until the next shot is allowed.
    ///
    pub fn bullet_cooldown(&self) -> f32 {
        self.bullet_cooldown
    }
    /// Returns whether thrust was requested on the last tick.
    ///
    pub fn is_boosting(&self) -> bool {
        self.is_boosting
    }
}
impl EventReceiver for Player {
    fn on_event(&mut self, event: &Event) {
        if event.event_type == EventType::AsteroidShot {
            self.score = self.score.saturating_add(self.settings.asteroid_reward);
        }
    }
}
impl GameObject for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }
    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn update(&mut self, dt: f32, context: &mut dyn GameContext) {
        let input: InputSignals = context.input();

        self.entity.rotation += dt * self.settings.rotation_velocity * input.horizontal_factor;
        self.is_boosting = input.is_thrusting();
        if self.is_boosting {
            let heading: Vector2 = Vector2::from_heading(self.entity.rotation);
            self.entity.velocity += heading * self.settings.thrust;
        }
        self.entity.velocity *= self.settings.drag;

        self.bullet_cooldown -= dt;
        if input.is_firing() && self.bullet_cooldown <= 0.0 {
            if context.maybe_fire_bullet(&self.entity) {
                self.bullet_cooldown = self.settings.time_between_shots;
                debug!("{} fired", self.entity.id());
            } else {
                debug!("{} was not allowed to fire", self.entity.id());
            }
        }

        self.entity.update(dt);
        self.flame.follow(&self.entity);
        self.flame.entity_mut().update(dt);
    }

    fn render(
        &self,
        viewport: &Matrix4x4,
        composer: &mut TransformComposer,
        canvas: &mut dyn Canvas,
    ) {
        self.entity.render(viewport, composer, canvas);
        if self.is_boosting {
            self.flame.render(viewport, composer, canvas);
        }
    }

    fn collision_test(&self) -> CollisionTest {
        CollisionTest::BoundingSphere
    }
    fn on_collision(&mut self, other: &Entity, context: &mut dyn GameContext) {
        self.health -= 1;
        debug!(
            "{} was hit by {}, health is {}",
            self.entity.id(),
            other.id(),
            self.health
        );
        if self.health < 0 {
            self.entity.kill();
            info!("{} died with score {}", self.entity.id(), self.score);
            context.broadcast_event(Event::from_source(EventType::Death, self.entity.id()));
        }
    }
}
