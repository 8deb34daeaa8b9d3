//! A software [`Surface`] that rasterizes stroked segments into a coverage grid.
//!
//! The grid stores `width * height` f64 coverage values in [0, 1] using
//! row-major layout, row 0 at the top. Surface coordinates put the origin
//! at the grid centre with Y increasing upward, so curves centred on
//! `(0, 0)` land in the middle of the image.

use crate::error::CurveError;
use crate::surface::Surface;
use crate::Point;

/// Largest pixel count a raster will allocate (8192 × 8192).
pub const MAX_PIXELS: usize = 1 << 26;

/// A coverage grid that implements [`Surface`].
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<f64>,
    cursor: Option<Point>,
    path: Vec<(Point, Point)>,
    strokes: usize,
}

impl Raster {
    /// Creates a blank raster of the given dimensions.
    ///
    /// Returns `CurveError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`, and
    /// `CurveError::SurfaceTooLarge` above [`MAX_PIXELS`].
    pub fn new(width: usize, height: usize) -> Result<Self, CurveError> {
        let len = Self::pixel_count(width, height)?;
        log::debug!("allocating {width}x{height} raster");
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
            cursor: None,
            path: Vec::new(),
            strokes: 0,
        })
    }

    /// Checks dimensions and returns `width * height`.
    pub fn pixel_count(width: usize, height: usize) -> Result<usize, CurveError> {
        if width == 0 || height == 0 {
            return Err(CurveError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(CurveError::InvalidDimensions)?;
        if len > MAX_PIXELS {
            return Err(CurveError::SurfaceTooLarge {
                width,
                height,
                limit: MAX_PIXELS,
            });
        }
        Ok(len)
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major coverage values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Coverage at pixel `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        (col < self.width && row < self.height).then(|| self.data[row * self.width + col])
    }

    /// Number of pixels with non-zero coverage.
    pub fn inked_pixels(&self) -> usize {
        self.data.iter().filter(|&&v| v > 0.0).count()
    }

    /// Number of `stroke` calls received.
    pub fn stroke_count(&self) -> usize {
        self.strokes
    }

    /// Resets every pixel to zero coverage and discards the current path.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
        self.cursor = None;
        self.path.clear();
    }

    /// Maps a surface point to a (possibly out-of-grid) pixel coordinate.
    pub fn pixel_of(&self, p: Point) -> (isize, isize) {
        let col = (self.width as f64 / 2.0 + p.x).floor() as isize;
        let row = (self.height as f64 / 2.0 - p.y).floor() as isize;
        (col, row)
    }

    fn plot(&mut self, col: isize, row: isize) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.width && row < self.height {
            self.data[row * self.width + col] = 1.0;
        }
    }

    /// Bresenham line between two pixel coordinates, clipped to the grid.
    fn draw_segment(&mut self, from: Point, to: Point) {
        let Some((from, to)) = self.clip(from, to) else {
            log::trace!("segment {from} -> {to} falls outside the raster");
            return;
        };
        let (mut x0, mut y0) = self.pixel_of(from);
        let (x1, y1) = self.pixel_of(to);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot(x0, y0);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Liang-Barsky clip of a segment against the surface-space bounds of the
    /// grid (padded by one pixel). Returns `None` if nothing is visible.
    fn clip(&self, from: Point, to: Point) -> Option<(Point, Point)> {
        if !(from.is_finite() && to.is_finite()) {
            return None;
        }
        let half_w = self.width as f64 / 2.0 + 1.0;
        let half_h = self.height as f64 / 2.0 + 1.0;
        let d = to - from;
        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        let edges = [
            (-d.x, from.x + half_w),
            (d.x, half_w - from.x),
            (-d.y, from.y + half_h),
            (d.y, half_h - from.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        let start = if t0 > 0.0 { from + d * t0 } else { from };
        let end = if t1 < 1.0 { from + d * t1 } else { to };
        Some((start, end))
    }
}

impl Surface for Raster {
    fn begin_path(&mut self) {
        self.path.clear();
        self.cursor = None;
    }

    fn move_to(&mut self, p: Point) {
        self.cursor = Some(p);
    }

    fn line_to(&mut self, p: Point) {
        if let Some(from) = self.cursor {
            self.path.push((from, p));
        }
        self.cursor = Some(p);
    }

    fn stroke(&mut self) {
        self.strokes += 1;
        let path = std::mem::take(&mut self.path);
        for &(from, to) in &path {
            self.draw_segment(from, to);
        }
        self.path = path;
    }
}
