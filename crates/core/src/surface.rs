//! The stroke-path drawing capability curves render onto.
//!
//! A [`Surface`] exposes the four operations a curve generator needs:
//! begin a path, move the cursor, add a line, stroke. Color, width, and
//! transforms are configured by whoever owns the surface.
//!
//! [`Recorder`] is an in-memory surface that keeps every call as a
//! [`PathCommand`], so drawing can be inspected without a display.

use serde::{Deserialize, Serialize};

use crate::Point;

/// A 2D stroke-path drawing surface.
///
/// This trait is object-safe; generators receive `&mut dyn Surface`.
/// Calls are assumed to always succeed.
pub trait Surface {
    /// Discards the current path and starts a new, empty one.
    fn begin_path(&mut self);

    /// Starts a new sub-path at `p`.
    fn move_to(&mut self, p: Point);

    /// Adds a straight segment from the current point to `p`.
    ///
    /// Without a current point this behaves like [`Surface::move_to`].
    fn line_to(&mut self, p: Point);

    /// Strokes the current path.
    fn stroke(&mut self);
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
}

/// A [`Surface`] that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<PathCommand>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, oldest first.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the recorded commands and clears the recorder.
    pub fn take(&mut self) -> Vec<PathCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns `true` if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of `stroke` calls recorded.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Stroke))
            .count()
    }

    /// Line segments that were actually stroked, as `(from, to)` pairs.
    ///
    /// Segments added to a path that is discarded by `begin_path` before
    /// `stroke` are not included.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut stroked = Vec::new();
        let mut pending = Vec::new();
        let mut cursor: Option<Point> = None;
        for command in &self.commands {
            match *command {
                PathCommand::BeginPath => {
                    pending.clear();
                    cursor = None;
                }
                PathCommand::MoveTo { x, y } => cursor = Some(Point::new(x, y)),
                PathCommand::LineTo { x, y } => {
                    let to = Point::new(x, y);
                    if let Some(from) = cursor {
                        pending.push((from, to));
                    }
                    cursor = Some(to);
                }
                PathCommand::Stroke => stroked.extend(pending.iter().copied()),
            }
        }
        stroked
    }
}

impl Surface for Recorder {
    fn begin_path(&mut self) {
        self.commands.push(PathCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo { x: p.x, y: p.y });
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo { x: p.x, y: p.y });
    }

    fn stroke(&mut self) {
        self.commands.push(PathCommand::Stroke);
    }
}
