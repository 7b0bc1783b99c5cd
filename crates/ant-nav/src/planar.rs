//! `PlanarNavigator` — straight-line locomotion over a bounded open plane.
//!
//! The walkable region is the square `[-half_extent, +half_extent]²` minus a
//! set of circular obstacles held in an R-tree (`rstar`), so containment and
//! nearest-obstacle queries stay cheap even with many obstacles.  Paths on an
//! open plane are trivially the straight segment to the target, so
//! `path_pending` is always false and bodies simply advance along the segment
//! each tick, halting inside the stopping distance.

use ant_core::{AntId, Vec2};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::{AreaFilter, NavError, NavResult, Navigator};

/// How far outside an obstacle rim a resolved point is placed.
const RIM_MARGIN: f32 = 1e-3;

/// Cap on alternating clamp/push-out rounds when bounds and obstacles
/// overlap.
const MAX_RESOLVE_ROUNDS: usize = 4;

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A circular unwalkable region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl Obstacle {
    /// `true` if `p` lies inside (or on) the obstacle.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (p - self.center).length_sq() <= self.radius * self.radius
    }
}

impl RTreeObject for Obstacle {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.center.x - self.radius, self.center.y - self.radius],
            [self.center.x + self.radius, self.center.y + self.radius],
        )
    }
}

impl PointDistance for Obstacle {
    /// Squared distance from `point` to the obstacle rim; 0 inside.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let to_center = Vec2::new(point[0], point[1]) - self.center;
        let d = (to_center.length() - self.radius).max(0.0);
        d * d
    }

    fn contains_point(&self, point: &[f32; 2]) -> bool {
        self.contains(Vec2::new(point[0], point[1]))
    }
}

// ── PlanarNavigator ───────────────────────────────────────────────────────────

/// Per-body pose and current destination.
#[derive(Copy, Clone, Debug)]
struct BodyState {
    position:    Vec2,
    heading:     Vec2,
    destination: Vec2,
}

impl BodyState {
    fn at(position: Vec2) -> Self {
        Self {
            position,
            heading: Vec2::UNIT_X,
            destination: position,
        }
    }
}

/// The default [`Navigator`]: a bounded plane with circular obstacles.
pub struct PlanarNavigator {
    half_extent:   f32,
    speed:         f32,
    stop_distance: f32,
    obstacles:     RTree<Obstacle>,
    bodies:        Vec<BodyState>,
}

impl PlanarNavigator {
    /// An obstacle-free square plane for `count` bodies, all starting at the
    /// origin.
    pub fn open(count: usize, half_extent: f32, speed: f32, stop_distance: f32) -> NavResult<Self> {
        Self::with_obstacles(count, half_extent, speed, stop_distance, Vec::new())
    }

    /// A plane with circular obstacles.  The obstacle set is fixed after
    /// construction (bulk-loaded into the R-tree).
    pub fn with_obstacles(
        count:         usize,
        half_extent:   f32,
        speed:         f32,
        stop_distance: f32,
        obstacles:     Vec<Obstacle>,
    ) -> NavResult<Self> {
        if !half_extent.is_finite() || half_extent <= 0.0 {
            return Err(NavError::InvalidExtent(half_extent));
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(NavError::InvalidSpeed(speed));
        }
        Ok(Self {
            half_extent,
            speed,
            stop_distance: stop_distance.max(0.0),
            obstacles: RTree::bulk_load(obstacles),
            bodies: vec![BodyState::at(Vec2::ZERO); count],
        })
    }

    /// The destination `ant` is currently headed for.  Equals its position
    /// when idle.
    pub fn destination(&self, ant: AntId) -> Vec2 {
        self.bodies[ant.index()].destination
    }

    fn clamp_to_bounds(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(-self.half_extent, self.half_extent),
            p.y.clamp(-self.half_extent, self.half_extent),
        )
    }

    fn blocked(&self, p: Vec2) -> bool {
        self.obstacles
            .locate_all_at_point(&[p.x, p.y])
            .next()
            .is_some()
    }
}

impl Navigator for PlanarNavigator {
    fn body_count(&self) -> usize {
        self.bodies.len()
    }

    fn place(&mut self, ant: AntId, pos: Vec2) {
        self.bodies[ant.index()] = BodyState::at(pos);
    }

    fn resolve_nearest(&self, point: Vec2, search_radius: f32, _filter: AreaFilter) -> Option<Vec2> {
        let mut p = self.clamp_to_bounds(point);

        // Push the point out of any obstacle containing it.  Overlapping
        // obstacles (or an obstacle against the boundary) can hand the point
        // back and forth, so the rounds are bounded and the final position is
        // re-checked.
        for _ in 0..MAX_RESOLVE_ROUNDS {
            let Some(obs) = self.obstacles.locate_all_at_point(&[p.x, p.y]).next() else {
                break;
            };
            let dir = (p - obs.center).normalized_or(Vec2::UNIT_X);
            p = self.clamp_to_bounds(obs.center + dir * (obs.radius + RIM_MARGIN));
        }
        if self.blocked(p) {
            return None;
        }

        if p.distance(point) > search_radius {
            return None;
        }
        Some(p)
    }

    fn set_destination(&mut self, ant: AntId, point: Vec2) {
        self.bodies[ant.index()].destination = point;
    }

    fn path_pending(&self, _ant: AntId) -> bool {
        // Straight-line paths resolve instantly.
        false
    }

    fn remaining_distance(&self, ant: AntId) -> f32 {
        let body = &self.bodies[ant.index()];
        body.position.distance(body.destination)
    }

    fn stopping_distance(&self, _ant: AntId) -> f32 {
        self.stop_distance
    }

    fn position(&self, ant: AntId) -> Vec2 {
        self.bodies[ant.index()].position
    }

    fn heading(&self, ant: AntId) -> Vec2 {
        self.bodies[ant.index()].heading
    }

    fn advance(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let max_step = self.speed * dt;
        for body in &mut self.bodies {
            let delta = body.destination - body.position;
            let dist = delta.length();
            if dist <= self.stop_distance.max(f32::EPSILON) {
                continue;
            }
            let dir = delta * (1.0 / dist);
            body.heading = dir;
            if dist <= max_step {
                body.position = body.destination;
            } else {
                body.position += dir * max_step;
            }
        }
    }
}
