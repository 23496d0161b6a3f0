//! Frame timing for the status line.
//!
//! Components
//! -----------------
//! * [`FrameTimer`] – Tracks frame durations and keeps a smoothed
//!   **exponential moving average** (EMA), from which the displayed FPS is derived.
//!
//! * [`fmt_dur`] – Human-readable formatter for [`Duration`] values,
//!   producing strings like `"253µs"`, `"16ms"`, or `"1.25s"` depending
//!   on the scale.
//!
//! Design notes
//! -----------------
//! * The EMA update rule is:
//!   `ema ← α·dt + (1–α)·ema`
//!   with `α ∈ (0,1]`.
//!   - `α = 1.0` → no smoothing, the FPS follows the last frame.
//!   - small `α` → steadier readout, slower to react.
//!
//! * The first recorded frame initializes the average.
use std::time::Duration;

/// Shortest frame duration considered when converting to FPS, in seconds.
const MIN_FRAME_SECONDS: f64 = 1.0e-4;

#[derive(Debug, Clone)]
pub struct FrameTimer {
    ema_s: f64,
    alpha: f64,
    count: u64,
}

impl FrameTimer {
    /// `alpha` is clamped to `(0, 1]`.
    pub fn new(alpha: f64) -> Self {
        Self {
            ema_s: 0.0,
            alpha: alpha.clamp(f64::EPSILON, 1.0),
            count: 0,
        }
    }

    /// Record a frame that lasted `dt_seconds`. Negative values count as zero; NaN and
    /// infinite durations are dropped without counting a frame.
    #[inline]
    pub fn record(&mut self, dt_seconds: f64) {
        if !dt_seconds.is_finite() {
            return;
        }
        let dt = dt_seconds.max(0.0);
        self.count += 1;
        self.ema_s = if self.count == 1 {
            dt
        } else {
            self.alpha * dt + (1.0 - self.alpha) * self.ema_s
        };
    }

    pub fn frames(&self) -> u64 {
        self.count
    }

    #[inline]
    pub fn avg(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(self.ema_s).unwrap_or(Duration::MAX)
        }
    }

    /// Frames per second from the smoothed frame time; 0 before the first frame.
    pub fn fps(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            1.0 / self.ema_s.max(MIN_FRAME_SECONDS)
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(0.2)
    }
}

#[inline]
pub fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us < 1_000 {
        format!("{us}µs")
    } else {
        let ms = d.as_millis();
        if ms < 1_000 {
            format!("{ms}ms")
        } else {
            let s = d.as_secs_f32();
            format!("{s:.2}s")
        }
    }
}
