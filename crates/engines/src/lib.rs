#![deny(unsafe_code)]
//! Curve registry, animation sequencing, and snapshots.
//!
//! This crate sits between `rosette-core` (which defines the `CurveGenerator`
//! and `Surface` traits) and the curve implementations in `rosette-rose`.
//! Both the CLI and the WASM bindings depend on it so that name dispatch,
//! sequencing, and the frame loop live in one place.

pub mod frame_loop;
pub mod pixel;
pub mod scene;
pub mod sequence;

#[cfg(feature = "png")]
pub mod snapshot;

pub use frame_loop::{FrameBudget, FrameLoop, Interval, LoopReport, StopToken, Ticker};
pub use scene::{Scene, StageSpec};
pub use sequence::Sequence;

use rosette_core::{CurveError, CurveGenerator, Surface};
use rosette_rose::{MaurerRose, RoseCurve};
use serde_json::Value;

/// All available curve names.
const CURVE_NAMES: &[&str] = &["rose", "maurer"];

/// Enumeration of all available curve generators.
///
/// Wraps each generator and delegates `CurveGenerator` trait methods.
/// Use [`CurveKind::from_json`] for string-based construction (CLI, WASM, scenes).
#[derive(Debug, Clone)]
pub enum CurveKind {
    /// Rose (rhodonea) curve.
    Rose(RoseCurve),
    /// Maurer rose.
    Maurer(MaurerRose),
}

impl CurveKind {
    /// Constructs a curve by name from its JSON parameters.
    ///
    /// Returns `CurveError::UnknownCurve` if the name is not recognized.
    pub fn from_json(name: &str, params: &Value) -> Result<Self, CurveError> {
        match name {
            "rose" => Ok(CurveKind::Rose(RoseCurve::from_json(params)?)),
            "maurer" => Ok(CurveKind::Maurer(MaurerRose::from_json(params)?)),
            _ => Err(CurveError::UnknownCurve(name.to_string())),
        }
    }

    /// Returns a slice of all recognized curve names.
    pub fn list_curves() -> &'static [&'static str] {
        CURVE_NAMES
    }
}

impl CurveGenerator for CurveKind {
    fn render(&mut self, surface: &mut dyn Surface) {
        match self {
            CurveKind::Rose(c) => c.render(surface),
            CurveKind::Maurer(c) => c.render(surface),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            CurveKind::Rose(c) => c.is_complete(),
            CurveKind::Maurer(c) => c.is_complete(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CurveKind::Rose(c) => c.name(),
            CurveKind::Maurer(c) => c.name(),
        }
    }

    fn steps(&self) -> usize {
        match self {
            CurveKind::Rose(c) => c.steps(),
            CurveKind::Maurer(c) => c.steps(),
        }
    }

    fn remaining_steps(&self) -> usize {
        match self {
            CurveKind::Rose(c) => c.remaining_steps(),
            CurveKind::Maurer(c) => c.remaining_steps(),
        }
    }

    fn params(&self) -> Value {
        match self {
            CurveKind::Rose(c) => c.params(),
            CurveKind::Maurer(c) => c.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            CurveKind::Rose(c) => c.param_schema(),
            CurveKind::Maurer(c) => c.param_schema(),
        }
    }
}
