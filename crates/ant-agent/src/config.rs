//! Agent tuning parameters.

use crate::{AgentError, AgentResult};

/// Per-colony agent parameters, shared by every forager.
///
/// Defaults mirror the reference foraging setup.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Radius of the random-wander disc, in metres.
    pub wander_radius: f32,
    /// Seconds between forced destination reconsiderations.
    pub wander_period: f32,
    /// Food-scent units deposited per second while carrying.
    pub deposit_rate: f32,
    /// Distance from the body to each scent probe, in metres.
    pub sensor_distance: f32,
    /// Angle between the forward probe and each side probe, in degrees.
    pub sensor_angle_deg: f32,
    /// How far along the winning direction the goal is projected, in metres.
    pub lookahead: f32,
    /// Minimum strongest sample worth chasing.
    pub scent_threshold: f32,
    /// The winning sample must beat the runner-up by this much, or the
    /// gradient is treated as flat.  Suppresses jitter from grid
    /// discretization noise.
    pub gradient_margin: f32,
    /// Seconds between opportunistic sniffs.
    pub sniff_interval: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            wander_radius:    15.0,
            wander_period:    3.0,
            deposit_rate:     5.0,
            sensor_distance:  0.8,
            sensor_angle_deg: 30.0,
            lookahead:        3.0,
            scent_threshold:  0.01,
            gradient_margin:  0.005,
            sniff_interval:   0.3,
        }
    }
}

impl AgentConfig {
    /// Check the parameters a builder is about to commit to.
    pub fn validate(&self) -> AgentResult<()> {
        fn positive(name: &str, v: f32) -> AgentResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(AgentError::Config(format!("{name} must be finite and > 0, got {v}")))
            }
        }
        positive("wander_radius", self.wander_radius)?;
        positive("wander_period", self.wander_period)?;
        positive("sensor_distance", self.sensor_distance)?;
        positive("sensor_angle_deg", self.sensor_angle_deg)?;
        positive("lookahead", self.lookahead)?;
        positive("sniff_interval", self.sniff_interval)?;
        if !(self.deposit_rate.is_finite() && self.deposit_rate >= 0.0) {
            return Err(AgentError::Config(format!(
                "deposit_rate must be finite and >= 0, got {}",
                self.deposit_rate
            )));
        }
        if !(self.scent_threshold.is_finite() && self.scent_threshold >= 0.0) {
            return Err(AgentError::Config(format!(
                "scent_threshold must be finite and >= 0, got {}",
                self.scent_threshold
            )));
        }
        if !(self.gradient_margin.is_finite() && self.gradient_margin >= 0.0) {
            return Err(AgentError::Config(format!(
                "gradient_margin must be finite and >= 0, got {}",
                self.gradient_margin
            )));
        }
        Ok(())
    }
}
