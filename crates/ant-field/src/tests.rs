//! Unit tests for the scent-field solver.

use ant_core::Vec2;

use crate::{FieldConfig, FieldError, ScentField};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A small square grid with 1 m cells: 9×9 over a 9 m world centered at the
/// origin.  Cell (4,4) contains the world origin.
fn small_field(diffusion: f32, evaporation: f32) -> ScentField {
    ScentField::new(&FieldConfig {
        width: 9,
        height: 9,
        world_size: 9.0,
        origin: Vec2::ZERO,
        diffusion,
        evaporation,
    })
    .unwrap()
}

/// World position of the center of cell (gx, gy) for a field centered at the
/// origin.
fn cell_center(field: &ScentField, gx: usize, gy: usize) -> Vec2 {
    let half = field.world_size() * 0.5;
    let step_x = field.world_size() / field.width() as f32;
    let step_y = field.world_size() / field.height() as f32;
    Vec2::new(
        -half + (gx as f32 + 0.5) * step_x,
        -half + (gy as f32 + 0.5) * step_y,
    )
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn default_config_builds() {
        let field = ScentField::new(&FieldConfig::default()).unwrap();
        assert_eq!(field.width(), 128);
        assert_eq!(field.height(), 128);
        assert_eq!(field.total_mass(), 0.0);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let cfg = FieldConfig { width: 1, ..FieldConfig::default() };
        assert!(matches!(
            ScentField::new(&cfg),
            Err(FieldError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_bad_world_size() {
        for bad in [0.0, -3.0, f32::NAN] {
            let cfg = FieldConfig { world_size: bad, ..FieldConfig::default() };
            assert!(matches!(
                ScentField::new(&cfg),
                Err(FieldError::InvalidWorldSize(_))
            ));
        }
    }

    #[test]
    fn negative_coefficients_clamp_to_zero() {
        let cfg = FieldConfig { diffusion: -1.0, evaporation: -0.5, ..FieldConfig::default() };
        let field = ScentField::new(&cfg).unwrap();
        assert_eq!(field.diffusion, 0.0);
        assert_eq!(field.evaporation, 0.0);
    }
}

// ── Deposit / sample ──────────────────────────────────────────────────────────

#[cfg(test)]
mod deposit_sample {
    use super::*;

    #[test]
    fn sample_reflects_deposit_before_step() {
        let mut field = small_field(0.1, 0.01);
        let p = Vec2::new(1.2, -2.7);
        let before = field.sample(p);
        field.deposit(p, 3.5);
        assert_eq!(field.sample(p), before + 3.5);
        field.deposit(p, 0.5);
        assert_eq!(field.sample(p), before + 4.0);
    }

    #[test]
    fn origin_maps_to_center_cell() {
        let mut field = small_field(0.0, 0.0);
        field.deposit(Vec2::ZERO, 1.0);
        assert_eq!(field.cell(4, 4), 1.0);
    }

    #[test]
    fn out_of_range_deposit_clamps_to_edge() {
        let mut field = small_field(0.0, 0.0);
        field.deposit(Vec2::new(-1000.0, -1000.0), 2.0);
        assert_eq!(field.cell(0, 0), 2.0);
        field.deposit(Vec2::new(1000.0, 1000.0), 4.0);
        assert_eq!(field.cell(8, 8), 4.0);
    }

    #[test]
    fn out_of_range_sample_reads_edge_cell() {
        let mut field = small_field(0.0, 0.0);
        field.deposit(Vec2::new(4.4, 0.0), 7.0); // rightmost column
        assert_eq!(field.sample(Vec2::new(500.0, 0.0)), 7.0);
    }
}

// ── Step dynamics ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn nonpositive_dt_is_a_noop() {
        let mut field = small_field(0.5, 0.5);
        field.deposit(Vec2::ZERO, 5.0);
        let before = field.cells().to_vec();
        field.step(0.0);
        field.step(-1.0);
        assert_eq!(field.cells(), &before[..]);
    }

    #[test]
    fn zero_coefficients_leave_buffer_bit_identical() {
        let mut field = small_field(0.0, 0.0);
        field.deposit(Vec2::new(0.3, 0.3), 2.5);
        field.deposit(Vec2::new(-3.0, 2.0), 0.125);
        let before = field.cells().to_vec();
        field.step(0.016);
        assert_eq!(field.cells(), &before[..], "step with D=0, rho=0 must not change any bit");
    }

    #[test]
    fn concentrations_never_go_negative() {
        // rho*dt >> 1 would drive the explicit-Euler update below zero
        // without the clamp.
        let mut field = small_field(0.0, 100.0);
        field.deposit(Vec2::ZERO, 10.0);
        field.step(1.0);
        assert!(field.cells().iter().all(|&c| c >= 0.0));
        assert_eq!(field.cell(4, 4), 0.0);
    }

    #[test]
    fn pure_evaporation_matches_linear_decay() {
        let mut field = small_field(0.0, 0.01);
        field.deposit(Vec2::ZERO, 10.0);
        let dt = 0.016;
        field.step(dt);
        let expected = 10.0 * (1.0 - 0.01 * dt);
        assert!((field.cell(4, 4) - expected).abs() < 1e-5);
    }

    #[test]
    fn boundary_ring_never_altered() {
        let mut field = small_field(1.0, 1.0);
        // Load the boundary by clamping far-out deposits onto the edges.
        field.deposit(Vec2::new(-1000.0, 0.0), 3.0);
        field.deposit(Vec2::new(0.0, 1000.0), 5.0);
        let edge_left = field.cell(0, 4);
        let edge_top = field.cell(4, 8);
        for _ in 0..10 {
            field.step(0.1);
        }
        assert_eq!(field.cell(0, 4), edge_left);
        assert_eq!(field.cell(4, 8), edge_top);
    }

    #[test]
    fn diffusion_spreads_to_neighbors() {
        let mut field = small_field(0.2, 0.0);
        field.deposit(Vec2::ZERO, 8.0);
        field.step(0.1);
        assert!(field.cell(4, 4) < 8.0);
        for (x, y) in [(3, 4), (5, 4), (4, 3), (4, 5)] {
            assert!(field.cell(x, y) > 0.0, "cell ({x},{y}) should have received mass");
        }
        // Diagonal neighbors are untouched by a single 5-point step.
        assert_eq!(field.cell(3, 3), 0.0);
    }

    #[test]
    fn reference_scenario_decays_and_spreads() {
        // 128×128, world 45, D=0.1, rho=0.01; 10 units at center; 100 steps
        // of 16 ms.  Peak must have decayed below the deposit and mass must
        // have reached the four adjacent cells.
        let mut field = ScentField::new(&FieldConfig::default()).unwrap();
        field.deposit(Vec2::ZERO, 10.0);
        for _ in 0..100 {
            field.step(0.016);
        }
        let peak = field.cell(64, 64);
        assert!(peak < 10.0, "peak {peak} should have decayed");
        assert!(peak > 0.0);
        for (x, y) in [(63, 64), (65, 64), (64, 63), (64, 65)] {
            assert!(field.cell(x, y) > 0.0);
        }
        assert!(field.cells().iter().all(|&c| c >= 0.0));
    }
}

// ── Clearing ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod clearing {
    use super::*;

    #[test]
    fn clear_zeroes_everything() {
        let mut field = small_field(0.1, 0.01);
        field.deposit(Vec2::ZERO, 4.0);
        field.step(0.016);
        field.clear();
        assert_eq!(field.total_mass(), 0.0);
        field.step(0.016);
        assert_eq!(field.total_mass(), 0.0);
    }

    #[test]
    fn clear_area_zeroes_ellipse_and_spares_outside() {
        let mut field = small_field(0.0, 0.0);
        // 1 unit in every cell.
        for y in 0..9 {
            for x in 0..9 {
                let p = cell_center(&field, x, y);
                field.deposit(p, 1.0);
            }
        }

        field.clear_area(Vec2::ZERO, 2.0); // 2-cell radius around (4,4)

        for y in 0..9usize {
            for x in 0..9usize {
                let dx = x as f32 - 4.0;
                let dy = y as f32 - 4.0;
                let inside = (dx * dx + dy * dy) / 4.0 <= 1.0;
                if inside {
                    assert_eq!(field.cell(x, y), 0.0, "cell ({x},{y}) inside radius");
                } else {
                    assert_eq!(field.cell(x, y), 1.0, "cell ({x},{y}) outside radius");
                }
            }
        }
    }

    #[test]
    fn clear_area_scales_radius_per_axis() {
        // 16×8 grid over a 16 m world: a cell is 1 m wide but 2 m tall, so a
        // 2 m clear radius spans 2 columns but only 1 row.
        let mut field = ScentField::new(&FieldConfig {
            width: 16,
            height: 8,
            world_size: 16.0,
            origin: Vec2::ZERO,
            diffusion: 0.0,
            evaporation: 0.0,
        })
        .unwrap();

        for y in 0..8 {
            for x in 0..16 {
                let half = 8.0;
                let p = Vec2::new(-half + (x as f32 + 0.5), -half + (y as f32 + 0.5) * 2.0);
                field.deposit(p, 1.0);
            }
        }
        let center = cell_center(&field, 8, 4);
        field.clear_area(center, 2.0);

        assert_eq!(field.cell(8, 4), 0.0);
        assert_eq!(field.cell(6, 4), 0.0, "two columns away is on the rim");
        assert_eq!(field.cell(8, 5), 0.0, "one row away is on the rim");
        assert_eq!(field.cell(8, 6), 1.0, "two rows away is outside the ellipse");
    }

    #[test]
    fn clear_area_near_edge_stays_in_bounds() {
        let mut field = small_field(0.0, 0.0);
        field.deposit(Vec2::new(-1000.0, -1000.0), 1.0);
        // Center maps to the corner; the loop must clamp, not underflow.
        field.clear_area(Vec2::new(-1000.0, -1000.0), 3.0);
        assert_eq!(field.cell(0, 0), 0.0);
    }
}
