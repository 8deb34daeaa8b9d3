//! Incremental Maurer rose.
//!
//! Connects successive points of the rose `r = amplitude · sin(n·θ)` sampled
//! every `d` degrees. The walk is bounded by segment count, not by angle:
//! after [`MAURER_SEGMENTS`] renders the curve is complete whatever `d` is.

use rosette_core::angle::deg_to_rad;
use rosette_core::params::{
    ensure_finite, ensure_finite_point, ensure_positive, require_f64, require_point,
};
use rosette_core::{CurveError, CurveGenerator, Point, Surface};
use serde_json::{json, Value};

/// Number of segments a Maurer rose draws before it is complete.
pub const MAURER_SEGMENTS: usize = 361;

/// Maurer rose generator.
///
/// The first segment always starts at the centre.
#[derive(Debug, Clone)]
pub struct MaurerRose {
    center: Point,
    amplitude: f64,
    n: f64,
    d: f64,
    step: usize,
    previous: Point,
}

impl MaurerRose {
    /// Creates a Maurer rose with petal coefficient `n` and step `d` in degrees.
    ///
    /// Returns `CurveError::InvalidParameter` if any value is non-finite,
    /// or if `amplitude` or `d` is not strictly positive.
    pub fn new(center: Point, amplitude: f64, n: f64, d: f64) -> Result<Self, CurveError> {
        let center = ensure_finite_point("center", center)?;
        Ok(Self {
            center,
            amplitude: ensure_positive("amplitude", amplitude)?,
            n: ensure_finite("n", n)?,
            d: ensure_positive("d", d)?,
            step: 0,
            previous: center,
        })
    }

    /// Creates a Maurer rose from a JSON object with `center`, `amplitude`,
    /// `n`, and `d`. Every key is required.
    pub fn from_json(params: &Value) -> Result<Self, CurveError> {
        Self::new(
            require_point(params, "center")?,
            require_f64(params, "amplitude")?,
            require_f64(params, "n")?,
            require_f64(params, "d")?,
        )
    }

    /// Current angle parameter in degrees (`step · d`, unwrapped).
    pub fn degrees(&self) -> f64 {
        self.step as f64 * self.d
    }

    /// Petal coefficient.
    pub fn n(&self) -> f64 {
        self.n
    }

    /// Degree increment per render.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// The point the next segment will start from.
    pub fn previous(&self) -> Point {
        self.previous
    }

    /// The point drawn by render call `step` (0-based).
    pub fn point_at(&self, step: usize) -> Point {
        let angle = deg_to_rad(step as f64 * self.d);
        let radius = self.amplitude * (self.n * angle).sin();
        Point::new(
            self.center.x + radius * angle.cos(),
            self.center.y + radius * angle.sin(),
        )
    }
}

impl CurveGenerator for MaurerRose {
    fn render(&mut self, surface: &mut dyn Surface) {
        if self.is_complete() {
            return;
        }
        let point = self.point_at(self.step);
        surface.begin_path();
        surface.move_to(point);
        surface.line_to(self.previous);
        surface.stroke();
        log::trace!("maurer step {}: {:?} -> {:?}", self.step, point, self.previous);
        self.previous = point;
        self.step += 1;
    }

    fn is_complete(&self) -> bool {
        self.step >= MAURER_SEGMENTS
    }

    fn name(&self) -> &'static str {
        "maurer"
    }

    fn steps(&self) -> usize {
        self.step
    }

    fn remaining_steps(&self) -> usize {
        MAURER_SEGMENTS.saturating_sub(self.step)
    }

    fn params(&self) -> Value {
        json!({
            "center": [self.center.x, self.center.y],
            "amplitude": self.amplitude,
            "n": self.n,
            "d": self.d,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "center": {
                "type": "point",
                "description": "Curve centre as [x, y]"
            },
            "amplitude": {
                "type": "f64",
                "min": 0.0,
                "exclusive_min": true,
                "description": "Radius scale of the underlying rose"
            },
            "n": {
                "type": "f64",
                "description": "Petal coefficient of the underlying rose"
            },
            "d": {
                "type": "f64",
                "min": 0.0,
                "exclusive_min": true,
                "description": "Degrees advanced per segment"
            }
        })
    }
}
