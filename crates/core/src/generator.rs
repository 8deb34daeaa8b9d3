//! The `CurveGenerator` trait every incremental curve implements.
//!
//! The trait is object-safe so generators can be sequenced as
//! `Box<dyn CurveGenerator>` and switched at runtime.

use serde_json::Value;

use crate::surface::Surface;

/// An incremental curve that draws one segment per render call.
///
/// Each accepted [`render`](CurveGenerator::render) advances the curve's
/// parameter exactly once. Once [`is_complete`](CurveGenerator::is_complete)
/// returns `true`, further renders are no-ops: no state changes and no
/// drawing calls.
pub trait CurveGenerator {
    /// Draws the next segment onto `surface` and advances the parameter.
    fn render(&mut self, surface: &mut dyn Surface);

    /// Whether the curve has finished. Pure predicate.
    fn is_complete(&self) -> bool;

    /// Registry name of this curve (e.g. `"rose"`).
    fn name(&self) -> &'static str;

    /// Number of accepted render calls so far.
    fn steps(&self) -> usize;

    /// Render calls left before `is_complete()` becomes true.
    fn remaining_steps(&self) -> usize;

    /// Construction parameters as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing the construction parameters.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Recorder;
    use crate::Point;
    use serde_json::json;

    /// Minimal generator that draws a fixed number of unit segments.
    struct Dashes {
        limit: usize,
        step: usize,
    }

    impl CurveGenerator for Dashes {
        fn render(&mut self, surface: &mut dyn Surface) {
            if self.is_complete() {
                return;
            }
            let x = self.step as f64;
            surface.begin_path();
            surface.move_to(Point::new(x, 0.0));
            surface.line_to(Point::new(x + 1.0, 0.0));
            surface.stroke();
            self.step += 1;
        }

        fn is_complete(&self) -> bool {
            self.step >= self.limit
        }

        fn name(&self) -> &'static str {
            "dashes"
        }

        fn steps(&self) -> usize {
            self.step
        }

        fn remaining_steps(&self) -> usize {
            self.limit - self.step
        }

        fn params(&self) -> Value {
            json!({"limit": self.limit})
        }

        fn param_schema(&self) -> Value {
            json!({"limit": {"type": "integer", "description": "Segments to draw"}})
        }
    }

    #[test]
    fn curve_generator_is_object_safe() {
        let mut generator: Box<dyn CurveGenerator> = Box::new(Dashes { limit: 2, step: 0 });
        let mut recorder = Recorder::new();
        generator.render(&mut recorder);
        assert_eq!(generator.steps(), 1);
        assert_eq!(recorder.segments().len(), 1);
    }

    #[test]
    fn renders_until_complete_then_stops_drawing() {
        let mut generator = Dashes { limit: 3, step: 0 };
        let mut recorder = Recorder::new();
        for _ in 0..10 {
            generator.render(&mut recorder);
        }
        assert!(generator.is_complete());
        assert_eq!(generator.remaining_steps(), 0);
        assert_eq!(recorder.stroke_count(), 3);
    }

    #[test]
    fn params_and_schema_describe_the_same_keys() {
        let generator = Dashes { limit: 5, step: 0 };
        assert_eq!(generator.params()["limit"], 5);
        assert_eq!(generator.param_schema()["limit"]["type"], "integer");
    }

    #[test]
    fn dyn_reference_works() {
        let generator = Dashes { limit: 1, step: 0 };
        let generator_ref: &dyn CurveGenerator = &generator;
        assert_eq!(generator_ref.name(), "dashes");
        assert!(!generator_ref.is_complete());
    }
}
