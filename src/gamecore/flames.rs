//! `gamecore::flames` submodule implements [`Flame`] - purely visual object
//! that is attached to its owner and never collides.
//!

use crate::{
    datacore::settings::WorldBounds,
    gamecore::{
        entities::{Entity, EntityId, GameContext, GameObject},
        events::EventReceiver,
    },
    graphicscore::meshes::{DrawMode, Mesh, MeshError},
    mathcore::{collisions::CollisionTest, Color},
};
use std::sync::Arc;

/// [`Flame`] struct represents thrust flame that follows its owner.
///
/// Flame copies position, depth and rotation of the owner on every [`Flame::follow`] call.
/// Whether it is drawn is decided by the owner.
///
/// Flame is a part of its owner: it is updated and drawn by the owner and is never spawned
/// into [`Scene`](super::scenes::Scene) on its own.
/// Its entity carries id of the owner, so logs and events of flame point at the owner.
///
#[derive(Clone, Debug)]
pub struct Flame {
    /// Entity of flame.
    ///
    entity: Entity,
}
impl Flame {
    /// Constructs flame mesh (triangle pointing down) with given size.
    ///
    pub fn mesh(width: f32, height: f32) -> Result<Mesh, MeshError> {
        let mut mesh: Mesh = Mesh::new(
            vec![[0.0, 0.5, 0.0], [-0.5, -0.5, 0.0], [0.5, -0.5, 0.0]],
            DrawMode::Triangles,
        )?;
        mesh.set_width_height(width, height)?;
        Ok(mesh)
    }

    /// Initializes flame of given size at its owner.
    ///
    pub fn new(owner: &Entity, width: f32, height: f32) -> Result<Self, MeshError> {
        let bounds: WorldBounds = owner.bounds();
        let mut entity: Entity = Entity::new(
            owner.id(),
            Arc::new(Flame::mesh(width, height)?),
            bounds,
            owner.position,
        );
        entity.color = Color::ORANGE;

        let mut flame: Flame = Flame { entity };
        flame.follow(owner);
        Ok(flame)
    }

    /// Returns id of the owner (which is also id of flame entity).
    ///
    pub fn owner(&self) -> EntityId {
        self.entity.id()
    }

    /// Moves flame to its owner.
    ///
    pub fn follow(&mut self, owner: &Entity) {
        self.entity.position = owner.position;
        self.entity.depth = owner.depth;
        self.entity.rotation = owner.rotation;
    }
}
impl EventReceiver for Flame {}
impl GameObject for Flame {
    fn entity(&self) -> &Entity {
        &self.entity
    }
    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn collision_test(&self) -> CollisionTest {
        CollisionTest::None
    }
    fn on_collision(&mut self, _other: &Entity, _context: &mut dyn GameContext) {}
}
