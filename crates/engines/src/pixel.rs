//! Pure-computation pixel buffer conversion from a [`Raster`].
//!
//! This module is always available (no feature gate) so that both the `png`
//! snapshot path and any `ImageData` consumer can share the same conversion.

use rosette_core::Raster;

/// Maps raster coverage to an RGBA8 pixel buffer.
///
/// Coverage `c` in [0, 1] becomes a gray level `round(c * 255)` (ink is white
/// on a black background) with alpha 255. The buffer length is
/// `width * height * 4`.
pub fn raster_to_rgba(raster: &Raster) -> Vec<u8> {
    raster
        .data()
        .iter()
        .flat_map(|&c| {
            let v = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
            [v, v, v, 255u8]
        })
        .collect()
}
