//! The `ScentField` grid: deposit, sample, step, and clearing operations.
//!
//! # Coordinate mapping
//!
//! The field covers a `world_size × world_size` square centered on `origin`.
//! World positions map to cells by an affine transform: clamp each axis to
//! `[-world_size/2, +world_size/2]` relative to `origin`, rescale to
//! `[0, width)` / `[0, height)`, floor, clamp to the valid index range.
//! Out-of-range positions land on the nearest edge cell — never an error.
//!
//! # Buffers
//!
//! Two equally sized buffers (current, scratch) are owned exclusively by the
//! field and swapped at the end of each `step`.  Readers between steps always
//! observe one fully consistent buffer; the swap is never visible as a
//! partial update.

use ant_core::Vec2;

use crate::{FieldError, FieldResult};

// ── FieldConfig ───────────────────────────────────────────────────────────────

/// Construction parameters for a [`ScentField`].
///
/// Defaults match the reference foraging setup: a 128×128 grid over a 45 m
/// square with mild diffusion and slow evaporation.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Grid columns.  Must be ≥ 2.
    pub width: usize,
    /// Grid rows.  Must be ≥ 2.
    pub height: usize,
    /// Side length of the square world region the grid covers, in metres.
    pub world_size: f32,
    /// World-space center of the grid.
    pub origin: Vec2,
    /// Diffusion coefficient D (≥ 0).
    pub diffusion: f32,
    /// Evaporation rate ρ (≥ 0).
    pub evaporation: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width:       128,
            height:      128,
            world_size:  45.0,
            origin:      Vec2::ZERO,
            diffusion:   0.1,
            evaporation: 0.01,
        }
    }
}

// ── ScentField ────────────────────────────────────────────────────────────────

/// One scalar concentration grid with diffusion/evaporation dynamics.
///
/// Dimensions are fixed at construction; `diffusion` and `evaporation` are
/// mutable and affect only [`step`](Self::step).  Both must stay ≥ 0.
pub struct ScentField {
    width:      usize,
    height:     usize,
    world_size: f32,
    origin:     Vec2,

    /// Diffusion coefficient D.
    pub diffusion: f32,
    /// Evaporation rate ρ.
    pub evaporation: f32,

    current: Vec<f32>,
    scratch: Vec<f32>,
}

impl ScentField {
    /// Create a zeroed field from `config`.
    ///
    /// Negative coefficients are clamped to zero; invalid dimensions or world
    /// size are construction errors.
    pub fn new(config: &FieldConfig) -> FieldResult<Self> {
        if config.width < 2 || config.height < 2 {
            return Err(FieldError::InvalidDimensions {
                width:  config.width,
                height: config.height,
            });
        }
        if !config.world_size.is_finite() || config.world_size <= 0.0 {
            return Err(FieldError::InvalidWorldSize(config.world_size));
        }

        let cells = config.width * config.height;
        Ok(Self {
            width:       config.width,
            height:      config.height,
            world_size:  config.world_size,
            origin:      config.origin,
            diffusion:   config.diffusion.max(0.0),
            evaporation: config.evaporation.max(0.0),
            current:     vec![0.0; cells],
            scratch:     vec![0.0; cells],
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn world_size(&self) -> f32 {
        self.world_size
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Read-only view of the current buffer, row-major (`y * width + x`).
    ///
    /// This is the visualization surface: renderers read it between steps and
    /// never mutate it.
    #[inline]
    pub fn cells(&self) -> &[f32] {
        &self.current
    }

    /// Concentration of one cell.  Panics on out-of-range indices; intended
    /// for tests and diagnostics, not hot paths.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> f32 {
        self.current[y * self.width + x]
    }

    /// Sum of all current concentrations.
    pub fn total_mass(&self) -> f32 {
        self.current.iter().sum()
    }

    /// Concentration at a world position, 0.0 for anything that maps outside
    /// the grid (cannot occur after clamping; kept as a defensive default).
    pub fn sample(&self, pos: Vec2) -> f32 {
        let (x, y) = self.world_to_grid(pos);
        self.current.get(y * self.width + x).copied().unwrap_or(0.0)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `amount` to the cell containing `pos`.
    ///
    /// Positions outside the field silently clamp to the nearest edge cell.
    pub fn deposit(&mut self, pos: Vec2, amount: f32) {
        let (x, y) = self.world_to_grid(pos);
        self.current[y * self.width + x] += amount;
    }

    /// Zero both buffers entirely.
    pub fn clear(&mut self) {
        self.current.fill(0.0);
        self.scratch.fill(0.0);
    }

    /// Zero every cell within the ellipse of world-space `radius` around
    /// `center`.
    ///
    /// The radius is scaled per axis by `width/world_size` and
    /// `height/world_size`, so the cleared region stays circular in world
    /// space even when the grid aspect does not match the world aspect.
    pub fn clear_area(&mut self, center: Vec2, radius: f32) {
        let (cx, cy) = self.world_to_grid(center);
        let rad_x = radius * self.width as f32 / self.world_size;
        let rad_y = radius * self.height as f32 / self.world_size;

        let min_x = (cx as f32 - rad_x).floor().max(0.0) as usize;
        let max_x = (((cx as f32 + rad_x).ceil()) as usize).min(self.width - 1);
        let min_y = (cy as f32 - rad_y).floor().max(0.0) as usize;
        let max_y = (((cy as f32 + rad_y).ceil()) as usize).min(self.height - 1);

        let inv_rx2 = 1.0 / (rad_x * rad_x + 1e-6);
        let inv_ry2 = 1.0 / (rad_y * rad_y + 1e-6);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - cx as f32;
                let dy = y as f32 - cy as f32;
                if dx * dx * inv_rx2 + dy * dy * inv_ry2 <= 1.0 {
                    self.current[y * self.width + x] = 0.0;
                }
            }
        }
    }

    /// Advance the field by `dt` seconds.  No-op when `dt <= 0`.
    ///
    /// Interior cells update by explicit Euler:
    /// `next = c + dt·D·lap(c) − dt·ρ·c`, clamped to ≥ 0.  The boundary ring
    /// is copied through unchanged.  All cells are computed into the scratch
    /// buffer, then the buffers swap — no reader ever sees a mid-step mix.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let w   = self.width;
        let h   = self.height;
        let d   = self.diffusion;
        let rho = self.evaporation;

        let cur     = &self.current;
        let scratch = &mut self.scratch;

        // Top and bottom boundary rows.
        scratch[..w].copy_from_slice(&cur[..w]);
        scratch[w * (h - 1)..].copy_from_slice(&cur[w * (h - 1)..]);

        let interior = &mut scratch[w..w * (h - 1)];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            interior
                .par_chunks_mut(w)
                .enumerate()
                .for_each(|(i, row)| step_row(cur, row, i + 1, w, dt, d, rho));
        }

        #[cfg(not(feature = "parallel"))]
        for (i, row) in interior.chunks_mut(w).enumerate() {
            step_row(cur, row, i + 1, w, dt, d, rho);
        }

        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    // ── Coordinate mapping ────────────────────────────────────────────────

    /// Map a world position to its (clamped) grid cell.
    fn world_to_grid(&self, p: Vec2) -> (usize, usize) {
        let half = self.world_size * 0.5;
        let local = p - self.origin;
        let u = ((local.x + half) / self.world_size).clamp(0.0, 1.0);
        let v = ((local.y + half) / self.world_size).clamp(0.0, 1.0);
        let gx = ((u * self.width as f32) as usize).min(self.width - 1);
        let gy = ((v * self.height as f32) as usize).min(self.height - 1);
        (gx, gy)
    }
}

/// Compute one full interior row `y` into `row` (the scratch slice for that
/// row).  The left/right boundary columns copy through unchanged.
fn step_row(cur: &[f32], row: &mut [f32], y: usize, w: usize, dt: f32, d: f32, rho: f32) {
    let base = y * w;
    row[0] = cur[base];
    row[w - 1] = cur[base + w - 1];
    for x in 1..w - 1 {
        let c = cur[base + x];
        let lap = cur[base + x - 1]
            + cur[base + x + 1]
            + cur[base - w + x]
            + cur[base + w + x]
            - 4.0 * c;
        let next = c + dt * (d * lap) - dt * (rho * c);
        row[x] = next.max(0.0);
    }
}
