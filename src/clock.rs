//! Simulation clock with variable rate and pause.
//!
//! The clock is the only mutable state the solver's callers have to carry. It accumulates
//! simulation seconds from real frame deltas scaled by the current time scale; the solver then
//! reads the accumulated value as `t`.

use hifitime::Duration;

use crate::{
    constants::{DEFAULT_TIME_SCALE, MAX_TIME_SCALE, MIN_TIME_SCALE, TIME_SCALE_STEP},
    orrery_errors::OrreryError,
};

/// Pausable, rate-scaled simulation clock.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    /// Simulation time in seconds
    time: f64,
    /// Simulation seconds per real second
    time_scale: f64,
    paused: bool,
}

impl SimulationClock {
    /// Start at `t = 0` with the given rate, which must lie in `(0, MAX_TIME_SCALE]`.
    pub fn new(time_scale: f64, paused: bool) -> Result<Self, OrreryError> {
        if !time_scale.is_finite() || time_scale <= 0.0 || time_scale > MAX_TIME_SCALE {
            return Err(OrreryError::InvalidTimeScale(time_scale));
        }
        Ok(Self {
            time: 0.0,
            time_scale,
            paused,
        })
    }

    /// Current simulation time in seconds
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Multiply the rate by [`TIME_SCALE_STEP`], never going above [`MAX_TIME_SCALE`].
    pub fn speed_up(&mut self) {
        self.time_scale = (self.time_scale * TIME_SCALE_STEP).min(MAX_TIME_SCALE);
    }

    /// Divide the rate by [`TIME_SCALE_STEP`], never going below [`MIN_TIME_SCALE`].
    pub fn slow_down(&mut self) {
        self.time_scale = (self.time_scale / TIME_SCALE_STEP).max(MIN_TIME_SCALE);
    }

    /// Advance by a real-world frame delta and return the new simulation time.
    ///
    /// Nothing moves while paused. Negative deltas (a clock going backwards) are ignored.
    pub fn tick(&mut self, real_dt: Duration) -> f64 {
        let dt = real_dt.to_seconds();
        if !self.paused && dt > 0.0 {
            self.time += dt * self.time_scale;
        }
        self.time
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time: 0.0,
            time_scale: DEFAULT_TIME_SCALE,
            paused: false,
        }
    }
}
