//! Unit tests for the planar navigator.

use ant_core::{AntId, Vec2};

use crate::{AreaFilter, NavError, Navigator, Obstacle, PlanarNavigator};

fn open_nav(count: usize) -> PlanarNavigator {
    PlanarNavigator::open(count, 22.5, 3.5, 0.5).unwrap()
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn rejects_bad_extent() {
        assert!(matches!(
            PlanarNavigator::open(1, 0.0, 3.5, 0.5),
            Err(NavError::InvalidExtent(_))
        ));
        assert!(matches!(
            PlanarNavigator::open(1, f32::NAN, 3.5, 0.5),
            Err(NavError::InvalidExtent(_))
        ));
    }

    #[test]
    fn rejects_bad_speed() {
        assert!(matches!(
            PlanarNavigator::open(1, 22.5, -1.0, 0.5),
            Err(NavError::InvalidSpeed(_))
        ));
    }

    #[test]
    fn bodies_start_at_origin() {
        let nav = open_nav(3);
        assert_eq!(nav.body_count(), 3);
        assert_eq!(nav.position(AntId(2)), Vec2::ZERO);
    }
}

#[cfg(test)]
mod resolution {
    use super::*;

    #[test]
    fn open_point_resolves_to_itself() {
        let nav = open_nav(1);
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(nav.resolve_nearest(p, 1.0, AreaFilter::ALL), Some(p));
    }

    #[test]
    fn out_of_bounds_point_clamps_to_edge() {
        let nav = open_nav(1);
        let resolved = nav.resolve_nearest(Vec2::new(25.0, 0.0), 5.0, AreaFilter::ALL);
        assert_eq!(resolved, Some(Vec2::new(22.5, 0.0)));
    }

    #[test]
    fn resolution_outside_search_radius_is_none() {
        let nav = open_nav(1);
        // Nearest walkable point is 2.5 m away but the search radius is 1 m.
        assert_eq!(
            nav.resolve_nearest(Vec2::new(25.0, 0.0), 1.0, AreaFilter::ALL),
            None
        );
    }

    #[test]
    fn point_inside_obstacle_pushes_to_rim() {
        let obstacle = Obstacle { center: Vec2::new(5.0, 5.0), radius: 2.0 };
        let nav =
            PlanarNavigator::with_obstacles(1, 22.5, 3.5, 0.5, vec![obstacle]).unwrap();

        let resolved = nav
            .resolve_nearest(Vec2::new(6.0, 5.0), 3.0, AreaFilter::ALL)
            .expect("rim point should resolve");
        assert!(!obstacle.contains(resolved));
        assert!(resolved.distance(Vec2::new(6.0, 5.0)) <= 3.0);
        // Pushed along +x from the obstacle center.
        assert!(resolved.x > 6.9 && (resolved.y - 5.0).abs() < 1e-3);
    }

    #[test]
    fn obstacle_center_uses_fallback_direction() {
        let obstacle = Obstacle { center: Vec2::new(0.0, 0.0), radius: 1.0 };
        let nav =
            PlanarNavigator::with_obstacles(1, 22.5, 3.5, 0.5, vec![obstacle]).unwrap();
        let resolved = nav
            .resolve_nearest(Vec2::ZERO, 2.0, AreaFilter::ALL)
            .expect("degenerate center should still resolve");
        assert!(!obstacle.contains(resolved));
    }
}

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn advance_moves_toward_destination() {
        let mut nav = open_nav(1);
        nav.set_destination(AntId(0), Vec2::new(10.0, 0.0));
        nav.advance(1.0); // 3.5 m/s * 1 s
        let p = nav.position(AntId(0));
        assert!((p.x - 3.5).abs() < 1e-5);
        assert_eq!(p.y, 0.0);
        assert_eq!(nav.heading(AntId(0)), Vec2::UNIT_X);
    }

    #[test]
    fn body_halts_inside_stopping_distance() {
        let mut nav = open_nav(1);
        nav.set_destination(AntId(0), Vec2::new(2.0, 0.0));
        for _ in 0..100 {
            nav.advance(0.016);
        }
        let remaining = nav.remaining_distance(AntId(0));
        assert!(remaining <= nav.stopping_distance(AntId(0)));
        // Arrival predicate used by the agents.
        assert!(!nav.path_pending(AntId(0)));
    }

    #[test]
    fn heading_stable_while_stationary() {
        let mut nav = open_nav(1);
        nav.set_destination(AntId(0), Vec2::new(0.0, 5.0));
        for _ in 0..200 {
            nav.advance(0.016);
        }
        let heading = nav.heading(AntId(0));
        nav.advance(0.016);
        assert_eq!(nav.heading(AntId(0)), heading);
        assert!((heading.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn new_destination_supersedes_previous() {
        let mut nav = open_nav(1);
        nav.set_destination(AntId(0), Vec2::new(10.0, 0.0));
        nav.advance(0.5);
        nav.set_destination(AntId(0), Vec2::new(-10.0, 0.0));
        nav.advance(0.5);
        // Heading flipped toward the new destination.
        assert!(nav.heading(AntId(0)).x < 0.0);
    }

    #[test]
    fn place_resets_pose_and_destination() {
        let mut nav = open_nav(2);
        nav.set_destination(AntId(1), Vec2::new(9.0, 9.0));
        nav.advance(1.0);
        nav.place(AntId(1), Vec2::new(-3.0, 2.0));
        assert_eq!(nav.position(AntId(1)), Vec2::new(-3.0, 2.0));
        assert_eq!(nav.remaining_distance(AntId(1)), 0.0);
    }

    #[test]
    fn nonpositive_dt_is_a_noop() {
        let mut nav = open_nav(1);
        nav.set_destination(AntId(0), Vec2::new(5.0, 5.0));
        nav.advance(0.0);
        nav.advance(-0.1);
        assert_eq!(nav.position(AntId(0)), Vec2::ZERO);
    }
}
