//! `gamecore::entities` submodule implements [`Entity`] - movable and renderable object
//! that every game object is built upon, and [`GameObject`] trait - set of capabilities
//! that [`Scene`](super::scenes::Scene) drives on every tick.
//!
//! # Model
//! World is toroidal: entities that cross one edge of [`WorldBounds`] reappear at the opposite edge.
//! Entities never remove themselves; dead entities are only flagged and
//! it is the owner's job to drop them.
//!

use crate::{
    datacore::settings::WorldBounds,
    gamecore::{
        events::{Event, EventReceiver},
        input::InputSignals,
    },
    graphicscore::{drawing::Canvas, meshes::Mesh},
    mathcore::{
        collisions::{Collider, CollisionTest},
        matrices::Matrix4x4,
        transforms::{Pose, TransformComposer},
        vectors::{Point, Vector2},
        Color,
    },
};
use log::trace;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// [`EntityId`] id struct is needed to identify entities
/// in [`Scene`](super::scenes::Scene) and in events.
///
/// Uniqueness is not enforced by this struct: ids are handed out by their owner.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntityId(usize);
impl EntityId {
    /// Creates new id with given value.
    ///
    pub fn new(id: usize) -> Self {
        EntityId(id)
    }

    /// Returns underlying id.
    ///
    pub fn value(&self) -> usize {
        self.0
    }
}
impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.0)
    }
}
impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// [`Entity`] struct represents generic movable and renderable object.
///
/// Entity shares its mesh and takes bounding box extents from it.
/// Mesh is expected to be centered on local origin, so position of entity is also its center.
///
/// # Example
/// ```rust
/// # use std::sync::Arc;
/// # use ggasteroids::datacore::settings::WorldBounds;
/// # use ggasteroids::gamecore::entities::{Entity, EntityId};
/// # use ggasteroids::graphicscore::meshes::Mesh;
/// # use ggasteroids::mathcore::vectors::{Point, Vector2};
/// let mesh: Arc<Mesh> = Arc::new(Mesh::quad(10.0, 10.0).expect("Size is positive"));
/// let mut entity: Entity = Entity::new(
///     EntityId::new(0),
///     mesh,
///     WorldBounds::new(100.0, 100.0),
///     Point { x: 94.0, y: 50.0 },
/// );
/// entity.velocity = Vector2 { x: 10.0, y: 0.0 };
/// entity.update(0.5);
///
/// // right edge went past the world, so entity reappears at the left side
/// assert_eq!(entity.left(), 0.0);
/// assert_eq!(entity.position, Point { x: 5.0, y: 50.0 });
/// ```
///
#[derive(Clone, Debug)]
pub struct Entity {
    /// Id of entity.
    ///
    id: EntityId,
    /// Shared geometry.
    ///
    mesh: Arc<Mesh>,
    /// World which entity wraps around.
    ///
    bounds: WorldBounds,

    /// Color that entity is drawn with.
    ///
    pub color: Color,
    /// Position of local origin.
    ///
    pub position: Point,
    /// Z-order of entity.
    ///
    pub depth: f32,
    /// Uniform scale on X and Y axes (affects only rendering).
    ///
    pub scale: f32,
    /// Rotation in degrees.
    ///
    pub rotation: f32,
    /// Linear velocity in world units per second.
    ///
    pub velocity: Vector2,
    /// Angular velocity in degrees per tick.
    ///
    pub angular_velocity: f32,

    /// Cached width of bounding box.
    ///
    width: f32,
    /// Cached height of bounding box.
    ///
    height: f32,
    /// Liveness flag.
    ///
    is_alive: bool,
}
impl Entity {
    /// Initializes alive entity at given position.
    ///
    pub fn new(id: EntityId, mesh: Arc<Mesh>, bounds: WorldBounds, position: Point) -> Self {
        let (width, height): (f32, f32) = (mesh.width(), mesh.height());
        Entity {
            id,
            mesh,
            bounds,

            color: Color::default(),
            position,
            depth: 0.0,
            scale: 1.0,
            rotation: 0.0,
            velocity: Vector2::zero(),
            angular_velocity: 0.0,

            width,
            height,
            is_alive: true,
        }
    }

    /// Returns id of entity.
    ///
    pub fn id(&self) -> EntityId {
        self.id
    }
    /// Returns shared mesh.
    ///
    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }
    /// Returns world which entity wraps around.
    ///
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Returns width of bounding box.
    ///
    pub fn width(&self) -> f32 {
        self.width
    }
    /// Returns height of bounding box.
    ///
    pub fn height(&self) -> f32 {
        self.height
    }
    /// Returns center of bounding box.
    ///
    pub fn center(&self) -> Point {
        self.position
    }
    /// Returns radius of bounding sphere.
    ///
    pub fn radius(&self) -> f32 {
        self.width.max(self.height) * 0.5
    }

    /// Sets color of entity from RGBA components.
    ///
    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    /// Returns absolute position of left edge.
    ///
    pub fn left(&self) -> f32 {
        self.position.x + self.mesh.left()
    }
    /// Returns absolute position of right edge.
    ///
    pub fn right(&self) -> f32 {
        self.position.x + self.mesh.right()
    }
    /// Returns absolute position of top edge.
    ///
    pub fn top(&self) -> f32 {
        self.position.y + self.mesh.top()
    }
    /// Returns absolute position of bottom edge.
    ///
    pub fn bottom(&self) -> f32 {
        self.position.y + self.mesh.bottom()
    }

    /// Moves entity horizontally so that its left edge is at given position.
    ///
    pub fn set_left(&mut self, left: f32) {
        self.position.x = left - self.mesh.left();
    }
    /// Moves entity horizontally so that its right edge is at given position.
    ///
    pub fn set_right(&mut self, right: f32) {
        self.position.x = right - self.mesh.right();
    }
    /// Moves entity vertically so that its top edge is at given position.
    ///
    pub fn set_top(&mut self, top: f32) {
        self.position.y = top - self.mesh.top();
    }
    /// Moves entity vertically so that its bottom edge is at given position.
    ///
    pub fn set_bottom(&mut self, bottom: f32) {
        self.position.y = bottom - self.mesh.bottom();
    }

    /// Integrates motion and wraps entity around the world.
    ///
    /// Position is advanced by `velocity * dt`,
    /// while `angular_velocity` is added to rotation once per call regardless of `dt`.
    ///
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.wrap();
        self.rotation += self.angular_velocity;
    }

    /// Teleports entity to the opposite edge if it crossed world bounds.
    ///
    fn wrap(&mut self) {
        let WorldBounds { width, height } = self.bounds;

        if self.right() > width {
            self.set_left(0.0);
            trace!("{} wrapped to the left edge", self.id);
        } else if self.left() < 0.0 {
            self.set_right(width);
            trace!("{} wrapped to the right edge", self.id);
        }

        if self.bottom() > height {
            self.set_top(0.0);
            trace!("{} wrapped to the top edge", self.id);
        } else if self.top() < 0.0 {
            self.set_bottom(height);
            trace!("{} wrapped to the bottom edge", self.id);
        }
    }

    /// Returns everything that is needed to compose transform of entity.
    ///
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            depth: self.depth,
            rotation: self.rotation,
            scale: self.scale,
        }
    }
    /// Composes transform of entity and hands draw call to the canvas.
    ///
    /// Entity is not mutated; composer scratch space is supplied by the caller.
    ///
    pub fn render(
        &self,
        viewport: &Matrix4x4,
        composer: &mut TransformComposer,
        canvas: &mut dyn Canvas,
    ) {
        let transform: [f32; 16] = composer.compose(self.pose(), viewport).to_column_major();
        canvas.draw(&self.mesh, &transform, &self.color.to_array());
    }

    /// Flags entity as dead.
    ///
    pub fn kill(&mut self) {
        self.is_alive = false;
    }
    /// Returns whether entity is alive.
    ///
    pub fn is_alive(&self) -> bool {
        self.is_alive
    }
    /// Returns whether entity is dead.
    ///
    pub fn is_dead(&self) -> bool {
        !self.is_alive
    }
}
impl Collider for Entity {
    fn center(&self) -> Point {
        Entity::center(self)
    }
    fn extents(&self) -> (f32, f32) {
        (self.width, self.height)
    }
    fn radius(&self) -> f32 {
        Entity::radius(self)
    }
}

/// [`GameContext`] trait is the interface of the host that owns the world.
///
/// It is passed into game objects on every call that may need it,
/// so objects hold no back-references to the host.
///
pub trait GameContext {
    /// Returns input snapshot of current tick.
    ///
    fn input(&self) -> InputSignals;
    /// Asks host to fire bullet from given shooter.
    ///
    /// Returns whether bullet was fired (host may refuse, for example when bullet pool is exhausted).
    ///
    fn maybe_fire_bullet(&mut self, shooter: &Entity) -> bool;
    /// Emits event that will be delivered to every receiver.
    ///
    fn broadcast_event(&mut self, event: Event);
}

/// [`GameObject`] trait defines capabilities of objects that [`Scene`](super::scenes::Scene) drives.
///
/// Every object wraps an [`Entity`]; default implementations forward to it,
/// so plain [`Entity`] is a game object itself (asteroids, bullets).
///
pub trait GameObject: EventReceiver + fmt::Debug {
    /// Returns wrapped entity.
    ///
    fn entity(&self) -> &Entity;
    /// Returns mutable reference to wrapped entity.
    ///
    fn entity_mut(&mut self) -> &mut Entity;

    /// Advances object by `dt` seconds.
    ///
    fn update(&mut self, dt: f32, _context: &mut dyn GameContext) {
        self.entity_mut().update(dt);
    }
    /// Renders object.
    ///
    fn render(
        &self,
        viewport: &Matrix4x4,
        composer: &mut TransformComposer,
        canvas: &mut dyn Canvas,
    ) {
        self.entity().render(viewport, composer, canvas);
    }

    /// Returns collision test that this object selects.
    ///
    fn collision_test(&self) -> CollisionTest {
        CollisionTest::AABB
    }
    /// Reacts on collision with other entity.
    ///
    /// Default reaction kills object.
    ///
    fn on_collision(&mut self, _other: &Entity, _context: &mut dyn GameContext) {
        self.entity_mut().kill();
    }

    /// Returns whether object is dead.
    ///
    fn is_dead(&self) -> bool {
        self.entity().is_dead()
    }
}
impl EventReceiver for Entity {}
impl GameObject for Entity {
    fn entity(&self) -> &Entity {
        self
    }
    fn entity_mut(&mut self) -> &mut Entity {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Entity, EntityId, GameObject};
    use crate::{
        datacore::settings::WorldBounds,
        gamecore::testing::RecordingContext,
        graphicscore::{drawing::DrawList, meshes::Mesh},
        mathcore::{
            collisions::{overlap, Collider, CollisionTest},
            matrices::Matrix4x4,
            transforms::TransformComposer,
            vectors::{Point, Vector2},
            Color,
        },
    };
    use rstest::rstest;
    use std::sync::Arc;

    fn square(id: usize, x: f32, y: f32) -> Entity {
        let mesh: Arc<Mesh> = Arc::new(Mesh::quad(10.0, 10.0).expect("Size is positive"));
        Entity::new(
            EntityId::new(id),
            mesh,
            WorldBounds::new(100.0, 100.0),
            Point { x, y },
        )
    }

    #[rstest]
    #[case::right_edge(99.0, 50.0, 5.0, 50.0)]
    #[case::left_edge(-1.0, 50.0, 95.0, 50.0)]
    #[case::bottom_edge(50.0, 99.0, 50.0, 5.0)]
    #[case::top_edge(50.0, -1.0, 50.0, 95.0)]
    #[case::corner(99.0, -1.0, 5.0, 95.0)]
    #[case::inside(50.0, 50.0, 50.0, 50.0)]
    fn wrap(#[case] x: f32, #[case] y: f32, #[case] expected_x: f32, #[case] expected_y: f32) {
        let mut entity: Entity = square(0, x, y);
        entity.update(0.0);
        assert_eq!(entity.position, Point { x: expected_x, y: expected_y });
    }

    #[test]
    fn wrap_puts_opposite_edge_on_the_border() {
        let mut entity: Entity = square(0, 99.0, 50.0);
        assert_eq!(entity.right(), 104.0);
        entity.update(0.016);
        assert_eq!(entity.left(), 0.0);

        let mut entity: Entity = square(0, 50.0, 2.0);
        entity.velocity = Vector2 { x: 0.0, y: -10.0 };
        entity.update(0.5);
        assert_eq!(entity.bottom(), 100.0);
    }

    #[test]
    fn update_integrates_motion() {
        let mut entity: Entity = square(0, 50.0, 50.0);
        entity.velocity = Vector2 { x: 10.0, y: -4.0 };
        entity.angular_velocity = 3.0;

        entity.update(0.5);
        assert_eq!(entity.position, Point { x: 55.0, y: 48.0 });
        assert_eq!(entity.rotation, 3.0);

        // angular velocity is a per-tick increment
        entity.update(0.25);
        assert_eq!(entity.position, Point { x: 57.5, y: 47.0 });
        assert_eq!(entity.rotation, 6.0);
    }

    #[test]
    fn edges() {
        let mut entity: Entity = square(0, 20.0, 30.0);
        assert_eq!(
            (entity.left(), entity.right(), entity.top(), entity.bottom()),
            (15.0, 25.0, 25.0, 35.0)
        );
        entity.set_right(40.0);
        assert_eq!(entity.left(), 30.0);
        entity.set_top(0.0);
        assert_eq!(entity.position.y, 5.0);
        entity.set_bottom(10.0);
        assert_eq!(entity.top(), 0.0);
        entity.set_left(-5.0);
        assert_eq!(entity.position.x, 0.0);

        assert_eq!(entity.radius(), 5.0);
        assert_eq!(Collider::extents(&entity), (10.0, 10.0));
    }

    #[test]
    fn render_does_not_mutate() {
        let mut entity: Entity = square(0, 10.0, 20.0);
        entity.set_color([0.0, 1.0, 0.0, 1.0]);
        let before: Point = entity.position;

        let mut canvas: DrawList = DrawList::new();
        let mut composer: TransformComposer = TransformComposer::new();
        entity.render(&Matrix4x4::identity(), &mut composer, &mut canvas);

        assert_eq!(entity.position, before);
        let call = &canvas.calls()[0];
        assert_eq!((call.transform[12], call.transform[13]), (10.0, 20.0));
        assert_eq!(Color::from(call.color), Color::from_rgba(0.0, 1.0, 0.0, 1.0));
        assert_eq!(call.vertex_count, 6);
    }

    #[test]
    fn entities_collide_as_boxes() {
        let a: Entity = square(0, 0.0, 0.0);
        assert!(overlap(&a, &square(1, 12.0, 0.0)).is_none());
        assert_eq!(
            overlap(&a, &square(1, 8.0, 0.0)),
            Some(Vector2 { x: -2.0, y: 0.0 })
        );
    }

    #[test]
    fn default_collision_kills() {
        let mut context: RecordingContext = RecordingContext::default();
        let mut asteroid: Entity = square(0, 0.0, 0.0);
        let bullet: Entity = square(1, 1.0, 0.0);

        assert_eq!(asteroid.collision_test(), CollisionTest::AABB);
        assert!(!GameObject::is_dead(&asteroid));
        asteroid.on_collision(&bullet, &mut context);
        assert!(GameObject::is_dead(&asteroid));
        assert!(context.events.is_empty());
    }
}
