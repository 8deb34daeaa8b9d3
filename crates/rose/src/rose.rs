//! Incremental rose (rhodonea) curve.
//!
//! Traces `r = amplitude · sin(k·θ)` one segment per render call, with θ
//! advancing by `delta_theta` radians from 0 until it reaches a full turn.

use rosette_core::angle::FULL_TURN;
use rosette_core::params::{
    ensure_finite, ensure_finite_point, ensure_positive, require_f64, require_point,
};
use rosette_core::{CurveError, CurveGenerator, Point, Surface};
use serde_json::{json, Value};

/// Rose curve generator.
///
/// θ for step `j` is `j · delta_theta`, so the angle grows by exactly one
/// increment per accepted render without accumulating rounding drift.
#[derive(Debug, Clone)]
pub struct RoseCurve {
    center: Point,
    amplitude: f64,
    k: f64,
    delta_theta: f64,
    step: usize,
    previous: Option<Point>,
}

impl RoseCurve {
    /// Creates a rose curve.
    ///
    /// Returns `CurveError::InvalidParameter` if any value is non-finite,
    /// or if `amplitude` or `delta_theta` is not strictly positive.
    pub fn new(
        center: Point,
        amplitude: f64,
        k: f64,
        delta_theta: f64,
    ) -> Result<Self, CurveError> {
        Ok(Self {
            center: ensure_finite_point("center", center)?,
            amplitude: ensure_positive("amplitude", amplitude)?,
            k: ensure_finite("k", k)?,
            delta_theta: ensure_positive("delta_theta", delta_theta)?,
            step: 0,
            previous: None,
        })
    }

    /// Creates a rose curve from a JSON object with `center`, `amplitude`,
    /// `k`, and `delta_theta`. Every key is required.
    pub fn from_json(params: &Value) -> Result<Self, CurveError> {
        Self::new(
            require_point(params, "center")?,
            require_f64(params, "amplitude")?,
            require_f64(params, "k")?,
            require_f64(params, "delta_theta")?,
        )
    }

    /// Current angle in radians.
    pub fn theta(&self) -> f64 {
        self.theta_at(self.step)
    }

    /// Petal coefficient.
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Angle increment per render, in radians.
    pub fn delta_theta(&self) -> f64 {
        self.delta_theta
    }

    /// The most recently drawn point, if any.
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    fn theta_at(&self, step: usize) -> f64 {
        step as f64 * self.delta_theta
    }

    /// The point drawn by render call `step` (0-based).
    pub fn point_at(&self, step: usize) -> Point {
        let theta = self.theta_at(step);
        let r = self.amplitude * (self.k * theta).sin();
        Point::new(
            self.center.x + r * theta.cos(),
            self.center.y + r * theta.sin(),
        )
    }

    /// Total render calls needed for θ to reach a full turn.
    fn total_steps(&self) -> usize {
        let estimate = (FULL_TURN / self.delta_theta).ceil();
        let mut n = if estimate >= usize::MAX as f64 {
            usize::MAX
        } else {
            estimate as usize
        };
        // Settle float disagreement between the division and j * delta_theta.
        while n > 0 && self.theta_at(n - 1) >= FULL_TURN {
            n -= 1;
        }
        while n < usize::MAX && self.theta_at(n) < FULL_TURN {
            n += 1;
        }
        n
    }
}

impl CurveGenerator for RoseCurve {
    fn render(&mut self, surface: &mut dyn Surface) {
        if self.is_complete() {
            return;
        }
        let point = self.point_at(self.step);
        surface.begin_path();
        surface.move_to(point);
        if let Some(previous) = self.previous {
            surface.line_to(previous);
        }
        surface.stroke();
        log::trace!("rose step {}: {:?} -> {:?}", self.step, point, self.previous);
        self.previous = Some(point);
        self.step += 1;
    }

    fn is_complete(&self) -> bool {
        self.theta() >= FULL_TURN
    }

    fn name(&self) -> &'static str {
        "rose"
    }

    fn steps(&self) -> usize {
        self.step
    }

    fn remaining_steps(&self) -> usize {
        self.total_steps().saturating_sub(self.step)
    }

    fn params(&self) -> Value {
        json!({
            "center": [self.center.x, self.center.y],
            "amplitude": self.amplitude,
            "k": self.k,
            "delta_theta": self.delta_theta,
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
                "description": "Radius scale of the petals"
            },
            "k": {
                "type": "f64",
                "description": "Petal coefficient in r = sin(k·θ)"
            },
            "delta_theta": {
                "type": "f64",
                "min": 0.0,
                "exclusive_min": true,
                "description": "Angle advanced per segment, in radians"
            }
        })
    }
}
