//! PNG output of a [`Raster`].
//!
//! This module is feature-gated behind `png` (default on) so that WASM builds
//! can depend on the `engines` crate without pulling in the `image` crate.
//! The pixel buffer conversion itself lives in [`crate::pixel`] (always available).

use rosette_core::{CurveError, Raster};
use std::path::Path;

use crate::pixel::raster_to_rgba;

/// Writes a raster as a PNG image.
///
/// Returns `CurveError::InvalidDimensions` if the raster dimensions overflow
/// `u32`, or `CurveError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), CurveError> {
    let rgba = raster_to_rgba(raster);
    let w = u32::try_from(raster.width()).map_err(|_| CurveError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| CurveError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| CurveError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| CurveError::Io(e.to_string()))
}
