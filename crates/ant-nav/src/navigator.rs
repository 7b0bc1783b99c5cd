//! The `Navigator` trait — the capability interface agents steer through.

use ant_core::{AntId, Vec2};

// ── AreaFilter ────────────────────────────────────────────────────────────────

/// Bitmask restricting which walkable areas a query may resolve into.
///
/// Mirrors area-mask conventions from navigation-mesh engines.  The default
/// [`PlanarNavigator`][crate::PlanarNavigator] walks a single area and
/// accepts any non-empty mask; richer backends can assign bits per region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AreaFilter(pub u32);

impl AreaFilter {
    /// Every area.
    pub const ALL: AreaFilter = AreaFilter(u32::MAX);

    /// `true` if the filter admits an area tagged with `bit`.
    #[inline]
    pub fn accepts(self, bit: u32) -> bool {
        self.0 & bit != 0
    }
}

// ── Navigator ─────────────────────────────────────────────────────────────────

/// Pluggable navigation and locomotion backend.
///
/// The navigator owns every body's pose: agents request destinations and read
/// their position/heading back, but never move themselves.  Destination
/// requests supersede each other — there is no cancellation protocol; setting
/// a new destination simply replaces the previous one.
///
/// Query methods degrade rather than fail: an unresolvable target is `None`,
/// and callers fall through to their next destination-selection branch.
pub trait Navigator {
    /// Number of bodies this navigator manages.
    fn body_count(&self) -> usize;

    /// Teleport `ant` to `pos` without pathing (initial placement).  Clears
    /// any in-flight destination.
    fn place(&mut self, ant: AntId, pos: Vec2);

    /// Resolve `point` to the nearest walkable position within
    /// `search_radius`, or `None` if nothing walkable is that close.
    fn resolve_nearest(&self, point: Vec2, search_radius: f32, filter: AreaFilter) -> Option<Vec2>;

    /// Direct `ant` toward `point`, replacing any in-flight request.
    fn set_destination(&mut self, ant: AntId, point: Vec2);

    /// `true` while a path for `ant` is still being computed.
    fn path_pending(&self, ant: AntId) -> bool;

    /// Straight-line distance from `ant` to its current destination.
    fn remaining_distance(&self, ant: AntId) -> f32;

    /// Distance at which `ant` is considered to have arrived.
    fn stopping_distance(&self, ant: AntId) -> f32;

    /// Current world position of `ant`'s body.
    fn position(&self, ant: AntId) -> Vec2;

    /// Unit vector `ant`'s body is facing.  Stable while stationary.
    fn heading(&self, ant: AntId) -> Vec2;

    /// Integrate all bodies toward their destinations by `dt` seconds.
    ///
    /// Called once per tick by the simulation driver, before agents sense.
    fn advance(&mut self, dt: f32);
}
