//! `gamecore::scenes` submodule implements [`Scene`] - struct that owns game objects
//! and sequences one simulation tick over them.
//!

use crate::{
    gamecore::{
        entities::{Entity, EntityId, GameContext, GameObject},
        events::{broadcast, Event, EventQueue},
        input::InputSignals,
    },
    graphicscore::drawing::Canvas,
    mathcore::{
        collisions::{BoundingSphereSystem, CollisionTest},
        matrices::Matrix4x4,
        transforms::TransformComposer,
    },
};
use log::{debug, trace};

/// [`SceneContext`] struct relays host requests and collects emitted events into scene queue.
///
struct SceneContext<'a> {
    /// External host.
    ///
    host: &'a mut dyn GameContext,
    /// Queue of scene.
    ///
    events: &'a mut EventQueue,
}
impl GameContext for SceneContext<'_> {
    fn input(&self) -> InputSignals {
        self.host.input()
    }

    fn maybe_fire_bullet(&mut self, shooter: &Entity) -> bool {
        self.host.maybe_fire_bullet(shooter)
    }

    fn broadcast_event(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// [`Scene`] struct owns game objects and drives them through ticks.
///
/// Objects are never removed implicitly: dead objects are skipped by every phase
/// and are dropped by [`Scene::remove_dead`].
/// Bullets and other objects that the host creates during a tick should be spawned after it.
///
/// # Example
/// ```rust
/// # use std::sync::Arc;
/// # use ggasteroids::datacore::settings::WorldBounds;
/// # use ggasteroids::gamecore::{entities::{Entity, GameContext}, events::Event, input::InputSignals, scenes::Scene};
/// # use ggasteroids::graphicscore::{drawing::DrawList, meshes::Mesh};
/// # use ggasteroids::mathcore::{collisions::BoundingSphereSystem, matrices::Matrix4x4, vectors::Point};
/// struct Host;
/// impl GameContext for Host {
///     fn input(&self) -> InputSignals { InputSignals::default() }
///     fn maybe_fire_bullet(&mut self, _shooter: &Entity) -> bool { false }
///     fn broadcast_event(&mut self, _event: Event) {}
/// }
///
/// let mesh: Arc<Mesh> = Arc::new(Mesh::quad(10.0, 10.0).expect("Size is positive"));
/// let mut scene: Scene = Scene::new(BoundingSphereSystem::default());
/// for x in [20.0, 25.0, 60.0] {
///     let id = scene.next_id();
///     let _ = scene.spawn(Box::new(Entity::new(id, Arc::clone(&mesh), WorldBounds::default(), Point { x, y: 20.0 })));
/// }
///
/// let mut canvas: DrawList = DrawList::new();
/// scene.tick(0.016, &mut Host, &Matrix4x4::identity(), &mut canvas);
///
/// // first two asteroids overlap and kill each other
/// assert_eq!(canvas.calls().len(), 1);
/// assert_eq!(scene.remove_dead(), 2);
/// assert_eq!(scene.len(), 1);
/// ```
///
#[derive(Debug, Default)]
pub struct Scene {
    /// Owned game objects.
    ///
    objects: Vec<Box<dyn GameObject>>,
    /// Events that were emitted and are not yet dispatched.
    ///
    events: EventQueue,

    /// Sphere test that is used for pairs which select it.
    ///
    spheres: BoundingSphereSystem,
    /// Scratch space for transforms.
    ///
    composer: TransformComposer,
    /// Value of the next id.
    ///
    next_id: usize,
}
impl Scene {
    /// Initializes empty scene.
    ///
    pub fn new(spheres: BoundingSphereSystem) -> Self {
        Scene {
            spheres,
            ..Scene::default()
        }
    }

    /// Hands out id that was not handed out by this scene before.
    ///
    pub fn next_id(&mut self) -> EntityId {
        let id: EntityId = EntityId::new(self.next_id);
        self.next_id += 1;
        id
    }
    /// Adds object to the scene and returns its id.
    ///
    pub fn spawn(&mut self, object: Box<dyn GameObject>) -> EntityId {
        let id: EntityId = object.entity().id();
        self.objects.push(object);
        id
    }

    /// Returns object with given id.
    ///
    pub fn get(&self, id: EntityId) -> Option<&dyn GameObject> {
        self.objects
            .iter()
            .find(|object| object.entity().id() == id)
            .map(|object| object.as_ref())
    }
    /// Returns all objects (dead ones included).
    ///
    pub fn objects(&self) -> &[Box<dyn GameObject>] {
        &self.objects
    }
    /// Returns amount of objects (dead ones included).
    ///
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    /// Returns whether scene has no objects.
    ///
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Queues event to be dispatched on the next dispatch phase.
    ///
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Updates every live object.
    ///
    pub fn update(&mut self, dt: f32, host: &mut dyn GameContext) {
        let mut context: SceneContext<'_> = SceneContext {
            host,
            events: &mut self.events,
        };
        for object in self.objects.iter_mut().filter(|object| !object.is_dead()) {
            object.update(dt, &mut context);
        }
    }

    /// Tests every unordered pair of live objects and notifies both sides of every collision.
    ///
    /// Pairs are tested with the test both objects agree on (see [`CollisionTest::resolve`]).
    /// Returns amount of colliding pairs.
    ///
    pub fn resolve_collisions(&mut self, host: &mut dyn GameContext) -> usize {
        let mut context: SceneContext<'_> = SceneContext {
            host,
            events: &mut self.events,
        };

        let mut collisions: usize = 0;
        for i in 0..self.objects.len() {
            let (head, tail): (&mut [Box<dyn GameObject>], &mut [Box<dyn GameObject>]) =
                self.objects.split_at_mut(i + 1);
            let object1: &mut Box<dyn GameObject> = &mut head[i];
            for object2 in tail.iter_mut() {
                if object1.is_dead() || object2.is_dead() {
                    continue;
                }

                let test: CollisionTest = object1.collision_test().resolve(object2.collision_test());
                if !test.test(object1.entity(), object2.entity(), &self.spheres) {
                    continue;
                }

                trace!(
                    "{} collides with {} ({:?})",
                    object1.entity().id(),
                    object2.entity().id(),
                    test
                );
                collisions += 1;
                object1.on_collision(object2.entity(), &mut context);
                object2.on_collision(object1.entity(), &mut context);
            }
        }
        collisions
    }

    /// Delivers queued events to every object and then to the host.
    ///
    /// Returns amount of dispatched events.
    ///
    pub fn dispatch_events(&mut self, host: &mut dyn GameContext) -> usize {
        let mut dispatched: usize = 0;
        while let Some(event) = self.events.pop() {
            broadcast(&event, self.objects.iter_mut());
            host.broadcast_event(event);
            dispatched += 1;
        }
        dispatched
    }

    /// Renders every live object.
    ///
    pub fn render(&mut self, viewport: &Matrix4x4, canvas: &mut dyn Canvas) {
        for object in self.objects.iter().filter(|object| !object.is_dead()) {
            object.render(viewport, &mut self.composer, canvas);
        }
    }

    /// Drops dead objects and returns their amount.
    ///
    pub fn remove_dead(&mut self) -> usize {
        let before: usize = self.objects.len();
        self.objects.retain(|object| !object.is_dead());
        let removed: usize = before - self.objects.len();
        if removed > 0 {
            debug!("{} dead objects were removed", removed);
        }
        removed
    }

    /// Runs one tick: update, collisions, event dispatch and rendering.
    ///
    pub fn tick(
        &mut self,
        dt: f32,
        host: &mut dyn GameContext,
        viewport: &Matrix4x4,
        canvas: &mut dyn Canvas,
    ) {
        self.update(dt, host);
        let _ = self.resolve_collisions(host);
        let _ = self.dispatch_events(host);
        self.render(viewport, canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::Scene;
    use crate::{
        datacore::settings::{PlayerSettings, WorldBounds},
        gamecore::{
            entities::{Entity, EntityId, GameContext, GameObject},
            events::{Event, EventReceiver, EventType},
            input::{InputFlags, InputSignals},
            players::Player,
            testing::RecordingContext,
        },
        graphicscore::{drawing::DrawList, meshes::Mesh},
        mathcore::{
            collisions::{BoundingSphereSystem, CollisionTest},
            matrices::Matrix4x4,
            vectors::{Point, Vector2},
        },
    };
    use std::sync::Arc;

    /// Object that never collides.
    ///
    #[derive(Debug)]
    struct Decoration(Entity);
    impl EventReceiver for Decoration {}
    impl GameObject for Decoration {
        fn entity(&self) -> &Entity {
            &self.0
        }
        fn entity_mut(&mut self) -> &mut Entity {
            &mut self.0
        }
        fn collision_test(&self) -> CollisionTest {
            CollisionTest::None
        }
    }

    fn asteroid(scene: &mut Scene, x: f32, y: f32) -> EntityId {
        let id: EntityId = scene.next_id();
        let mesh: Arc<Mesh> = Arc::new(Mesh::quad(10.0, 10.0).expect("Size is positive"));
        scene.spawn(Box::new(Entity::new(
            id,
            mesh,
            WorldBounds::default(),
            Point { x, y },
        )))
    }

    fn player(scene: &mut Scene, x: f32, y: f32) -> EntityId {
        let id: EntityId = scene.next_id();
        scene.spawn(Box::new(
            Player::new(id, WorldBounds::default(), PlayerSettings::default(), Point { x, y })
                .expect("Default settings are valid"),
        ))
    }

    #[test]
    fn ids_are_unique() {
        let mut scene: Scene = Scene::default();
        let ids: Vec<EntityId> = (0..3).map(|_| scene.next_id()).collect();
        assert_eq!(ids, vec![EntityId::new(0), EntityId::new(1), EntityId::new(2)]);
        assert!(scene.is_empty());
    }

    #[test]
    fn update_moves_live_objects_only() {
        let mut scene: Scene = Scene::default();
        let mut host: RecordingContext = RecordingContext::default();
        let id: EntityId = asteroid(&mut scene, 50.0, 50.0);
        scene.objects[0].entity_mut().velocity = Vector2 { x: 10.0, y: 0.0 };

        scene.update(1.0, &mut host);
        let position: Point = scene.get(id).expect("Object was spawned").entity().position;
        assert_eq!(position, Point { x: 60.0, y: 50.0 });

        scene.objects[0].entity_mut().kill();
        scene.update(1.0, &mut host);
        let position: Point = scene.get(id).expect("Object was spawned").entity().position;
        assert_eq!(position, Point { x: 60.0, y: 50.0 });
    }

    #[test]
    fn boxes_collide_with_boxes() {
        let mut scene: Scene = Scene::default();
        let mut host: RecordingContext = RecordingContext::default();
        let _ = asteroid(&mut scene, 20.0, 20.0);
        let _ = asteroid(&mut scene, 29.0, 20.0);
        let _ = asteroid(&mut scene, 60.0, 20.0);

        assert_eq!(scene.resolve_collisions(&mut host), 1);
        let dead: Vec<bool> = scene.objects().iter().map(|object| object.is_dead()).collect();
        assert_eq!(dead, vec![true, true, false]);
        assert_eq!(scene.remove_dead(), 2);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn player_pairs_use_spheres() {
        let mut scene: Scene = Scene::new(BoundingSphereSystem::default());
        let mut host: RecordingContext = RecordingContext::default();
        let player_id: EntityId = player(&mut scene, 50.0, 50.0);
        // boxes overlap, scaled spheres (6 + 5) * 0.7 = 7.7 do not
        let _ = asteroid(&mut scene, 58.0, 50.0);

        assert_eq!(scene.resolve_collisions(&mut host), 0);

        let _ = asteroid(&mut scene, 44.0, 50.0);
        assert_eq!(scene.resolve_collisions(&mut host), 1);
        assert!(scene.objects()[2].is_dead());
        let player: &dyn GameObject = scene.get(player_id).expect("Player was spawned");
        assert!(!player.is_dead());
    }

    #[test]
    fn decorations_never_collide() {
        let mut scene: Scene = Scene::default();
        let mut host: RecordingContext = RecordingContext::default();
        let _ = asteroid(&mut scene, 20.0, 20.0);
        let id: EntityId = scene.next_id();
        let mesh: Arc<Mesh> = Arc::new(Mesh::quad(10.0, 10.0).expect("Size is positive"));
        let _ = scene.spawn(Box::new(Decoration(Entity::new(
            id,
            mesh,
            WorldBounds::default(),
            Point { x: 20.0, y: 20.0 },
        ))));

        assert_eq!(scene.resolve_collisions(&mut host), 0);
        assert_eq!(scene.remove_dead(), 0);
    }

    #[test]
    fn death_is_broadcast_to_objects_and_host() {
        let mut scene: Scene = Scene::default();
        let mut host: RecordingContext = RecordingContext::default();
        let player_id: EntityId = player(&mut scene, 50.0, 50.0);
        for _ in 0..4 {
            let _ = asteroid(&mut scene, 50.0, 50.0);
        }

        // player is tested first against every asteroid and takes all four hits
        scene.tick(0.0, &mut host, &Matrix4x4::identity(), &mut DrawList::new());
        assert_eq!(
            host.events,
            vec![Event::from_source(EventType::Death, player_id)]
        );
        assert!(scene.get(player_id).expect("Player was spawned").is_dead());
    }

    #[test]
    fn host_events_reach_objects() {
        let mut scene: Scene = Scene::default();
        let mut host: RecordingContext = RecordingContext::default();
        let _ = player(&mut scene, 50.0, 50.0);

        scene.push_event(Event::new(EventType::AsteroidShot));
        scene.push_event(Event::new(EventType::Shoot));
        assert_eq!(scene.dispatch_events(&mut host), 2);
        assert_eq!(host.events.len(), 2);
        assert_eq!(scene.dispatch_events(&mut host), 0);
    }

    #[test]
    fn input_reaches_player_through_scene() {
        let mut scene: Scene = Scene::default();
        let mut host: RecordingContext = RecordingContext::with_input(InputSignals::new(
            0.0,
            InputFlags::FIRE | InputFlags::THRUST,
        ));
        let player_id: EntityId = player(&mut scene, 50.0, 50.0);

        let mut canvas: DrawList = DrawList::new();
        scene.tick(0.1, &mut host, &Matrix4x4::identity(), &mut canvas);
        assert_eq!(host.shots, vec![player_id]);
        // ship and flame
        assert_eq!(canvas.calls().len(), 2);
    }

    #[test]
    fn rendering_skips_dead_objects() {
        let mut scene: Scene = Scene::default();
        let _ = asteroid(&mut scene, 20.0, 20.0);
        let _ = asteroid(&mut scene, 60.0, 20.0);
        scene.objects[1].entity_mut().kill();

        let mut canvas: DrawList = DrawList::new();
        scene.render(&Matrix4x4::identity(), &mut canvas);
        assert_eq!(canvas.calls().len(), 1);
        assert_eq!(canvas.calls()[0].transform[12], 20.0);
    }

    #[test]
    fn scene_context_forwards_input() {
        let mut host: RecordingContext =
            RecordingContext::with_input(InputSignals::new(0.5, InputFlags::empty()));
        let mut scene: Scene = Scene::default();
        let context: super::SceneContext<'_> = super::SceneContext {
            host: &mut host,
            events: &mut scene.events,
        };
        assert_eq!(context.input().horizontal_factor, 0.5);
    }
}
