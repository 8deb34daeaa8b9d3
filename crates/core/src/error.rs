//! Error types for the rosette core.

use thiserror::Error;

/// Errors produced while constructing curves, surfaces, and sequences.
#[derive(Debug, Error)]
pub enum CurveError {
    /// Width or height was zero (or overflowed) when creating a raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The requested surface exceeds the pixel limit.
    #[error("surface {width}x{height} exceeds the limit of {limit} pixels")]
    SurfaceTooLarge {
        width: usize,
        height: usize,
        limit: usize,
    },

    /// A construction parameter violated its precondition.
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    /// A required parameter was missing from the params object.
    #[error("parameter not found: {0}")]
    ParamNotFound(String),

    /// A parameter existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// A curve name did not match any known generator.
    #[error("unknown curve: {0}")]
    UnknownCurve(String),

    /// A sequence was built without any stages.
    #[error("sequence must contain at least one curve")]
    EmptySequence,

    /// Writing a snapshot or reading a scene failed.
    #[error("i/o error: {0}")]
    Io(String),
}
