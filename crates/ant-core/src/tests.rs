//! Unit tests for ant-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AntId, SourceId};

    #[test]
    fn index_roundtrip() {
        let id = AntId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AntId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AntId(0) < AntId(1));
        assert!(SourceId(100) > SourceId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AntId::INVALID.0, u32::MAX);
        assert_eq!(SourceId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AntId(7).to_string(), "AntId(7)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
        assert_eq!(v.length_sq(), 25.0);
    }

    #[test]
    fn normalized_fallback_for_zero() {
        let n = Vec2::ZERO.normalized_or(Vec2::UNIT_X);
        assert_eq!(n, Vec2::UNIT_X);
        let n = Vec2::new(0.0, 2.0).normalized_or(Vec2::UNIT_X);
        assert!((n.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_quarter_turn() {
        // +x rotated 90° CCW lands on +y.
        let r = Vec2::UNIT_X.rotated(std::f32::consts::FRAC_PI_2);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(2.0, -1.5);
        for deg in [-30.0f32, 15.0, 170.0] {
            let r = v.rotated(deg.to_radians());
            assert!((r.length() - v.length()).abs() < 1e-5);
        }
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.016);
        assert_eq!(clock.ticks_for_secs(0.016), 1);
        assert_eq!(clock.ticks_for_secs(0.020), 2);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            total_ticks: 600,
            ..SimConfig::default()
        };
        assert_eq!(cfg.end_tick(), Tick(600));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentRng, AntId, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AntId(0));
        let mut r2 = AgentRng::new(12345, AntId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_ants_differ() {
        let mut r0 = AgentRng::new(1, AntId(0));
        let mut r1 = AgentRng::new(1, AntId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent ants should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AntId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn disc_points_within_radius() {
        let mut rng = AgentRng::new(7, AntId(3));
        for _ in 0..1000 {
            let p = rng.point_in_disc(15.0);
            assert!(p.length() <= 15.0 + 1e-4);
        }
    }

    #[test]
    fn sim_rng_child_diverges() {
        let mut root = SimRng::new(9);
        let mut a = root.child(1);
        let mut b = root.child(2);
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_ne!(x, y);
    }
}
