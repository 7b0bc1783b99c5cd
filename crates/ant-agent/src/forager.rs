//! The `Forager` state machine: sniffing, wandering, and trail-laying.

use ant_colony::{ResourceSource, TakeOutcome};
use ant_core::{AgentRng, AntId, Vec2};
use ant_field::ScentField;
use ant_nav::{AreaFilter, Navigator};

use crate::AgentConfig;

/// Search radius used when resolving a sniff goal to walkable ground.
const GOAL_SAMPLE_RADIUS: f32 = 2.0;

// ── FieldPair ─────────────────────────────────────────────────────────────────

/// The two scent fields a forager works against for one tick.
///
/// Borrowed, not owned: many foragers share the same fields, and the borrow
/// split (home read-only, food writable) encodes the deposit invariant — an
/// agent can only ever write food scent.
pub struct FieldPair<'a> {
    /// Sensed while Returning.
    pub home: &'a ScentField,
    /// Sensed while Searching; deposited into while Returning.
    pub food: &'a mut ScentField,
}

// ── Forager ───────────────────────────────────────────────────────────────────

/// One ant.
///
/// Two states, selected by `carrying`: Searching (follow food scent, wander
/// otherwise) and Returning (follow home scent, fall back to the nest, lay
/// food scent).  All decisions flow through the injected [`Navigator`]; the
/// forager never moves itself.
pub struct Forager {
    id:           AntId,
    carrying:     bool,
    sniff_timer:  f32,
    wander_timer: f32,
}

impl Forager {
    /// Create a forager in the Searching state.
    ///
    /// The wander timer starts expired so the very first tick picks a
    /// destination instead of standing still for a full period.
    pub fn new(id: AntId, config: &AgentConfig) -> Self {
        Self {
            id,
            carrying:     false,
            sniff_timer:  0.0,
            wander_timer: config.wander_period,
        }
    }

    #[inline]
    pub fn id(&self) -> AntId {
        self.id
    }

    /// `true` while the ant holds a food unit (Returning state).
    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.carrying
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance timers, sniff, reconsider the destination, and lay trail.
    /// No-op for `dt <= 0`.
    pub fn tick(
        &mut self,
        dt:     f32,
        config: &AgentConfig,
        fields: FieldPair<'_>,
        nav:    &mut dyn Navigator,
        rng:    &mut AgentRng,
        nest:   Vec2,
    ) {
        if dt <= 0.0 {
            return;
        }

        // Opportunistic sniff: nudge the destination toward stronger scent
        // without waiting out the wander period.
        self.sniff_timer += dt;
        if self.sniff_timer >= config.sniff_interval {
            self.sniff_timer = 0.0;
            let field = self.sniff_field(&fields);
            if let Some(goal) = self.scent_biased_goal(field, nav, config) {
                nav.set_destination(self.id, goal);
            }
        }

        // Full reconsideration on the wander cadence or on arrival.
        self.wander_timer += dt;
        let reached = !nav.path_pending(self.id)
            && nav.remaining_distance(self.id) <= nav.stopping_distance(self.id);
        if self.wander_timer >= config.wander_period || reached {
            self.wander_timer = 0.0;
            self.pick_new_destination(&fields, nav, config, rng, nest);
        }

        // Trail-laying is proportional to dwell time, so behavior is
        // identical across tick rates.
        if self.carrying {
            let pos = nav.position(self.id);
            fields.food.deposit(pos, config.deposit_rate * dt);
        }
    }

    // ── External transitions ──────────────────────────────────────────────

    /// Contact with a pile while Searching: attempt to take one unit.
    ///
    /// A carrying ant refuses without touching the pile.  On success the ant
    /// transitions to Returning.  The outcome is returned so the caller can
    /// route `Depleted` to the spawner.
    pub fn try_pickup(&mut self, source: &mut dyn ResourceSource) -> TakeOutcome {
        if self.carrying {
            return TakeOutcome::Refused;
        }
        let outcome = source.take(1);
        if outcome.took() {
            self.carrying = true;
        }
        outcome
    }

    /// Contact with the nest while Returning: drop the unit and go back to
    /// Searching.  Returns `true` if a delivery actually happened.
    pub fn deliver(&mut self) -> bool {
        if self.carrying {
            self.carrying = false;
            true
        } else {
            false
        }
    }

    // ── Destination policy ────────────────────────────────────────────────

    /// Layered destination selection: scent goal, else nest (Returning
    /// only), else random wander.  Never fails — the wander branch falls back
    /// to the current position when nothing walkable resolves.
    fn pick_new_destination(
        &mut self,
        fields: &FieldPair<'_>,
        nav:    &mut dyn Navigator,
        config: &AgentConfig,
        rng:    &mut AgentRng,
        nest:   Vec2,
    ) {
        let field = self.sniff_field(fields);
        if let Some(goal) = self.scent_biased_goal(field, nav, config) {
            nav.set_destination(self.id, goal);
            return;
        }

        if self.carrying {
            nav.set_destination(self.id, nest);
            return;
        }

        let origin = nav.position(self.id);
        let candidate = origin + rng.point_in_disc(config.wander_radius);
        let dest = nav
            .resolve_nearest(candidate, config.wander_radius, AreaFilter::ALL)
            .unwrap_or(origin);
        nav.set_destination(self.id, dest);
    }

    /// Tri-sensor sniff: probe forward/left/right at `sensor_distance`, chase
    /// the strongest sample.
    ///
    /// Returns `None` when the strongest sample is below the threshold, when
    /// the gradient is too flat to trust (margin check), or when the
    /// projected goal resolves to no walkable ground.
    fn scent_biased_goal(
        &self,
        field:  &ScentField,
        nav:    &dyn Navigator,
        config: &AgentConfig,
    ) -> Option<Vec2> {
        let pos = nav.position(self.id);
        let fwd = nav.heading(self.id).normalized_or(Vec2::UNIT_X);
        let angle = config.sensor_angle_deg.to_radians();
        let left = fwd.rotated(angle);
        let right = fwd.rotated(-angle);

        let s_f = field.sample(pos + fwd * config.sensor_distance);
        let s_l = field.sample(pos + left * config.sensor_distance);
        let s_r = field.sample(pos + right * config.sensor_distance);

        let max = s_f.max(s_l).max(s_r);
        if max < config.scent_threshold {
            return None;
        }

        // Middle value of the three; the winner must clear it by the margin.
        let mid = (s_f + s_l + s_r - max) - s_f.min(s_l).min(s_r);
        if max - mid < config.gradient_margin {
            return None;
        }

        // Exact ties resolve left, then right, then forward.
        let dir = if max == s_l {
            left
        } else if max == s_r {
            right
        } else {
            fwd
        };
        let goal = pos + dir * config.lookahead;

        nav.resolve_nearest(goal, GOAL_SAMPLE_RADIUS, AreaFilter::ALL)
    }

    /// Which field the current state sniffs: home while Returning, food
    /// while Searching.
    fn sniff_field<'b>(&self, fields: &'b FieldPair<'_>) -> &'b ScentField {
        if self.carrying {
            fields.home
        } else {
            &*fields.food
        }
    }
}
