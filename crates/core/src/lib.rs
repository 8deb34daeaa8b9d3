#![deny(unsafe_code)]
//! Core types and traits for the rosette curve animator.
//!
//! Provides the [`CurveGenerator`] trait, the [`Surface`] drawing capability
//! with its [`Recorder`] and [`Raster`] implementations, [`CurveError`],
//! angle conversion, and required-parameter helpers.

pub mod angle;
pub mod error;
pub mod generator;
pub mod params;
pub mod raster;
pub mod surface;

pub use error::CurveError;
pub use generator::CurveGenerator;
pub use raster::Raster;
pub use surface::{PathCommand, Recorder, Surface};

/// A point on the drawing surface.
pub type Point = glam::DVec2;
