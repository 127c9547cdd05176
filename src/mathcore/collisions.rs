//! `mathcore::collisions` submodule defines collision systems
//! that are used to detect collisions between two game objects.
//!
//! Two tests are implemented: axis-aligned bounding boxes with minimum penetration vector
//! ([`overlap`], [`AABBSystem`]) and bounding spheres ([`spheres_overlap`], [`BoundingSphereSystem`]).
//! Both tests are pure functions that return their results by value,
//! so any number of pairs can be tested concurrently.
//!
//! Testing collider against itself is a logic error, and every test panics on it.
//!

use crate::mathcore::{
    vectors::{Point, Vector2},
    Sign,
};
use serde::{Deserialize, Serialize};
use std::ptr;

/// Default factor that shrinks bounding spheres in [`BoundingSphereSystem`].
///
/// It makes sphere collisions more forgiving than geometric circle overlap.
///
pub const HIT_RADIUS_SCALER: f32 = 0.7;

/// [`Collider`] trait defines objects that have axis-aligned bounding geometry.
///
pub trait Collider {
    /// Returns center of collider.
    ///
    fn center(&self) -> Point;
    /// Returns width and height of bounding box.
    ///
    fn extents(&self) -> (f32, f32);

    /// Returns radius of bounding sphere (half of the largest extent).
    ///
    fn radius(&self) -> f32 {
        let (width, height): (f32, f32) = self.extents();
        width.max(height) * 0.5
    }
}

/// Panics if both references point to the same collider.
///
fn assert_distinct<C1: Collider + ?Sized, C2: Collider + ?Sized>(collider1: &C1, collider2: &C2) {
    assert!(
        !ptr::addr_eq(collider1, collider2),
        "colliders should not be tested against themselves"
    );
}

/// Tests two colliders' bounding boxes and returns minimum penetration vector if they overlap.
///
/// Boxes are rejected axis by axis: if centers are further apart on X than half of summed widths
/// (or on Y than half of summed heights), `None` is returned. Touching boxes overlap.
///
/// Penetration is resolved to the axis of least penetration,
/// and its sign points from `collider2` to `collider1`.
/// If penetration depths are exactly equal, both components are set.
///
/// # Panics
/// Panics if `collider1` and `collider2` are the same object.
///
/// # Example
/// ```rust
/// # use ggasteroids::mathcore::{collisions::{overlap, Collider}, vectors::{Point, Vector2}};
/// struct Square(Point);
/// impl Collider for Square {
///     fn center(&self) -> Point { self.0 }
///     fn extents(&self) -> (f32, f32) { (10.0, 10.0) }
/// }
///
/// let a: Square = Square(Point { x: 0.0, y: 0.0 });
/// assert_eq!(overlap(&a, &Square(Point { x: 12.0, y: 0.0 })), None);
/// assert_eq!(
///     overlap(&a, &Square(Point { x: 8.0, y: 1.0 })),
///     Some(Vector2 { x: -2.0, y: 0.0 })
/// );
/// ```
///
pub fn overlap<C1: Collider + ?Sized, C2: Collider + ?Sized>(
    collider1: &C1,
    collider2: &C2,
) -> Option<Vector2> {
    assert_distinct(collider1, collider2);

    let (center1, center2): (Point, Point) = (collider1.center(), collider2.center());
    let ((width1, height1), (width2, height2)): ((f32, f32), (f32, f32)) =
        (collider1.extents(), collider2.extents());

    let center_delta_x: f32 = center1.x - center2.x;
    let half_widths: f32 = (width1 + width2) * 0.5;
    let dx: f32 = center_delta_x.abs();
    if dx > half_widths {
        return None;
    }

    let center_delta_y: f32 = center1.y - center2.y;
    let half_heights: f32 = (height1 + height2) * 0.5;
    let dy: f32 = center_delta_y.abs();
    if dy > half_heights {
        return None;
    }

    let (penetration_x, penetration_y): (f32, f32) = (half_widths - dx, half_heights - dy);
    let signed = |delta: f32, depth: f32| match Sign::from(delta) {
        Sign::Negative => -depth,
        Sign::Zero | Sign::Positive => depth,
    };

    let mut penetration: Vector2 = Vector2::zero();
    if penetration_y < penetration_x {
        penetration.y = signed(center_delta_y, penetration_y);
    } else if penetration_y > penetration_x {
        penetration.x = signed(center_delta_x, penetration_x);
    } else {
        penetration.x = signed(center_delta_x, penetration_x);
        penetration.y = signed(center_delta_y, penetration_y);
    }
    Some(penetration)
}

/// Returns whether bounding spheres of two colliders overlap.
///
/// Spheres collide when squared distance between centers is strictly less than
/// `(radius_scaler * (radius1 + radius2))²`.
///
/// # Panics
/// Panics if `collider1` and `collider2` are the same object.
///
pub fn spheres_overlap<C1: Collider + ?Sized, C2: Collider + ?Sized>(
    collider1: &C1,
    collider2: &C2,
    radius_scaler: f32,
) -> bool {
    assert_distinct(collider1, collider2);

    let distance: Vector2 = collider1.center() - collider2.center();
    let min_distance: f32 = (collider1.radius() + collider2.radius()) * radius_scaler;
    distance.sqr_magnitude() < min_distance * min_distance
}

/// `CollisionSystem` trait defines systems that can detect collisions between two colliders.
///
pub trait CollisionSystem<C1, C2>
where
    C1: Collider + ?Sized,
    C2: Collider + ?Sized,
{
    /// Returns whether two colliders collide or not.
    ///
    fn is_colliding(&self, collider1: &C1, collider2: &C2) -> bool;
}

/// `AABBSystem` is a collision system that compares axis-aligned bounding boxes.
///
/// Rotation of objects is ignored.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct AABBSystem;
impl AABBSystem {
    /// Returns minimum penetration vector of two colliders (see [`overlap`]).
    ///
    pub fn penetration<C1: Collider + ?Sized, C2: Collider + ?Sized>(
        &self,
        collider1: &C1,
        collider2: &C2,
    ) -> Option<Vector2> {
        overlap(collider1, collider2)
    }
}
impl<C1, C2> CollisionSystem<C1, C2> for AABBSystem
where
    C1: Collider + ?Sized,
    C2: Collider + ?Sized,
{
    fn is_colliding(&self, collider1: &C1, collider2: &C2) -> bool {
        overlap(collider1, collider2).is_some()
    }
}

/// `BoundingSphereSystem` is a collision system that compares bounding spheres
/// shrunk by `radius_scaler`.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct BoundingSphereSystem {
    /// Factor that is applied to summed radii.
    ///
    pub radius_scaler: f32,
}
impl Default for BoundingSphereSystem {
    fn default() -> Self {
        BoundingSphereSystem {
            radius_scaler: HIT_RADIUS_SCALER,
        }
    }
}
impl<C1, C2> CollisionSystem<C1, C2> for BoundingSphereSystem
where
    C1: Collider + ?Sized,
    C2: Collider + ?Sized,
{
    fn is_colliding(&self, collider1: &C1, collider2: &C2) -> bool {
        spheres_overlap(collider1, collider2, self.radius_scaler)
    }
}

/// [`CollisionTest`] enum lists collision tests that game objects can select.
///
/// When two objects select different tests, [`CollisionTest::resolve`] decides which one applies.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionTest {
    /// Object never collides (purely visual objects).
    ///
    None,
    /// Axis-aligned bounding box test.
    ///
    AABB,
    /// Bounding sphere test.
    ///
    BoundingSphere,
}
impl CollisionTest {
    /// Selects test for a pair of objects.
    ///
    /// [`CollisionTest::None`] on either side disables the pair,
    /// otherwise bounding spheres win over bounding boxes.
    ///
    /// # Example
    /// ```rust
    /// # use ggasteroids::mathcore::collisions::CollisionTest;
    /// assert_eq!(CollisionTest::AABB.resolve(CollisionTest::BoundingSphere), CollisionTest::BoundingSphere);
    /// assert_eq!(CollisionTest::None.resolve(CollisionTest::AABB), CollisionTest::None);
    /// ```
    ///
    pub fn resolve(self, other: CollisionTest) -> CollisionTest {
        match (self, other) {
            (CollisionTest::None, _) | (_, CollisionTest::None) => CollisionTest::None,
            (CollisionTest::BoundingSphere, _) | (_, CollisionTest::BoundingSphere) => {
                CollisionTest::BoundingSphere
            }
            (CollisionTest::AABB, CollisionTest::AABB) => CollisionTest::AABB,
        }
    }

    /// Runs selected test on two colliders.
    ///
    /// # Panics
    /// Panics if `collider1` and `collider2` are the same object.
    ///
    pub fn test<C1: Collider + ?Sized, C2: Collider + ?Sized>(
        self,
        collider1: &C1,
        collider2: &C2,
        spheres: &BoundingSphereSystem,
    ) -> bool {
        match self {
            CollisionTest::None => {
                assert_distinct(collider1, collider2);
                false
            }
            CollisionTest::AABB => AABBSystem.is_colliding(collider1, collider2),
            CollisionTest::BoundingSphere => spheres.is_colliding(collider1, collider2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        overlap, spheres_overlap, AABBSystem, BoundingSphereSystem, Collider, CollisionSystem,
        CollisionTest, HIT_RADIUS_SCALER,
    };
    use crate::mathcore::vectors::{Point, Vector2};

    #[derive(Debug)]
    struct Box2 {
        center: Point,
        width: f32,
        height: f32,
    }
    impl Box2 {
        fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
            Box2 {
                center: Point { x, y },
                width,
                height,
            }
        }
    }
    impl Collider for Box2 {
        fn center(&self) -> Point {
            self.center
        }
        fn extents(&self) -> (f32, f32) {
            (self.width, self.height)
        }
    }

    #[test]
    fn aabb_scenario() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap(&a, &Box2::new(12.0, 0.0, 10.0, 10.0)), None);

        // x penetration is 2, y penetration is 10, so x is chosen; b is to the right of a
        let b: Box2 = Box2::new(8.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap(&a, &b), Some(Vector2 { x: -2.0, y: 0.0 }));

        // y penetration is 1, x penetration is 2
        let c: Box2 = Box2::new(8.0, -9.0, 10.0, 10.0);
        assert_eq!(overlap(&a, &c), Some(Vector2 { x: 0.0, y: 1.0 }));
    }

    #[test]
    fn aabb_equal_depths_report_both_axes() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let b: Box2 = Box2::new(-7.0, 7.0, 10.0, 10.0);
        assert_eq!(overlap(&a, &b), Some(Vector2 { x: 3.0, y: -3.0 }));
    }

    #[test]
    fn aabb_touching_boxes_overlap() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let b: Box2 = Box2::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(overlap(&a, &b), Some(Vector2 { x: -0.0, y: 0.0 }));
        assert!(AABBSystem.is_colliding(&a, &b));
    }

    #[test]
    fn aabb_symmetry() {
        let a: Box2 = Box2::new(3.0, 4.0, 6.0, 8.0);
        let others: [Box2; 5] = [
            Box2::new(7.5, 5.0, 4.0, 4.0),
            Box2::new(1.0, 9.0, 4.0, 6.0),
            Box2::new(-20.0, 4.0, 4.0, 4.0),
            Box2::new(5.0, 1.0, 2.0, 2.0),
            Box2::new(0.0, 0.0, 30.0, 2.0),
        ];
        for b in &others {
            let (ab, ba): (Option<Vector2>, Option<Vector2>) = (overlap(&a, b), overlap(b, &a));
            assert_eq!(ab.is_some(), ba.is_some());
            if let (Some(ab), Some(ba)) = (ab, ba) {
                assert_eq!(ab, -ba);
            }
        }
    }

    #[test]
    fn aabb_axis_rejection_ignores_y() {
        let a: Box2 = Box2::new(0.0, 0.0, 4.0, 100.0);
        for y in [-40.0, 0.0, 40.0] {
            let b: Box2 = Box2::new(4.01, y, 4.0, 100.0);
            assert!(overlap(&a, &b).is_none());
        }
    }

    #[test]
    fn spheres() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(a.radius(), 5.0);

        // scaled radii sum is 7
        assert!(spheres_overlap(&a, &Box2::new(6.9, 0.0, 4.0, 10.0), HIT_RADIUS_SCALER));
        assert!(!spheres_overlap(&a, &Box2::new(7.1, 0.0, 4.0, 10.0), HIT_RADIUS_SCALER));
        assert!(!spheres_overlap(&a, &Box2::new(9.0, 0.0, 4.0, 10.0), HIT_RADIUS_SCALER));
        assert!(spheres_overlap(&a, &Box2::new(9.0, 0.0, 4.0, 10.0), 1.0));
    }

    #[test]
    fn spheres_monotonicity() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let mut flipped: bool = false;
        for step in 0..200 {
            let distance: f32 = step as f32 * 0.1;
            let b: Box2 = Box2::new(distance * 0.6, distance * 0.8, 10.0, 10.0);
            let colliding: bool = BoundingSphereSystem::default().is_colliding(&a, &b);
            if flipped {
                assert!(!colliding, "spheres collide again at distance {distance}");
            } else if !colliding {
                flipped = true;
            }
        }
        assert!(flipped);
    }

    #[test]
    fn test_selection() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let b: Box2 = Box2::new(9.0, 0.0, 10.0, 10.0);
        let spheres: BoundingSphereSystem = BoundingSphereSystem::default();

        assert!(CollisionTest::AABB.test(&a, &b, &spheres));
        assert!(!CollisionTest::BoundingSphere.test(&a, &b, &spheres));
        assert!(!CollisionTest::None.test(&a, &b, &spheres));
        assert_eq!(
            CollisionTest::BoundingSphere.resolve(CollisionTest::AABB),
            CollisionTest::BoundingSphere
        );
        assert_eq!(
            CollisionTest::AABB.resolve(CollisionTest::None),
            CollisionTest::None
        );
    }

    #[test]
    #[should_panic(expected = "themselves")]
    fn aabb_self_test_panics() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let _ = overlap(&a, &a);
    }

    #[test]
    #[should_panic(expected = "themselves")]
    fn spheres_self_test_panics() {
        let a: Box2 = Box2::new(0.0, 0.0, 10.0, 10.0);
        let _ = spheres_overlap(&a, &a, HIT_RADIUS_SCALER);
    }

    #[test]
    #[should_panic(expected = "themselves")]
    fn self_test_panics_even_when_far_from_collision() {
        let a: Box2 = Box2::new(0.0, 0.0, 0.0, 0.0);
        let _ = CollisionTest::None.test(&a, &a, &BoundingSphereSystem::default());
    }
}
