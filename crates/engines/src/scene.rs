//! Serializable description of an animation.
//!
//! A [`Scene`] captures everything needed to replay an animation: surface
//! dimensions and the ordered curve stages with their parameters. The
//! reference scene draws a Maurer rose and then hands off to a rose curve.

use rosette_core::{CurveError, CurveGenerator, Raster};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::sequence::Sequence;
use crate::CurveKind;

/// Fraction of the smaller surface dimension used as the reference amplitude.
const REFERENCE_AMPLITUDE_RATIO: f64 = 0.45;

/// One curve in a scene: a registry name plus its parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageSpec {
    pub curve: String,
    pub params: Value,
}

/// Surface dimensions and the ordered stages drawn onto it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    pub stages: Vec<StageSpec>,
}

impl Scene {
    /// The reference animation sized for a `width × height` surface.
    ///
    /// Both curves are centred on the origin with an amplitude of 45% of the
    /// smaller dimension: a Maurer rose (n = 6, d = 71°) followed by a rose
    /// curve (k = 6, Δθ = 0.02 rad).
    pub fn reference(width: usize, height: usize) -> Self {
        let amplitude = width.min(height) as f64 * REFERENCE_AMPLITUDE_RATIO;
        Self {
            width,
            height,
            stages: vec![
                StageSpec {
                    curve: "maurer".into(),
                    params: json!({
                        "center": [0.0, 0.0],
                        "amplitude": amplitude,
                        "n": 6.0,
                        "d": 71.0,
                    }),
                },
                StageSpec {
                    curve: "rose".into(),
                    params: json!({
                        "center": [0.0, 0.0],
                        "amplitude": amplitude,
                        "k": 6.0,
                        "delta_theta": 0.02,
                    }),
                },
            ],
        }
    }

    /// Validates dimensions against the raster limits and that at least one
    /// stage exists.
    pub fn validate(&self) -> Result<(), CurveError> {
        Raster::pixel_count(self.width, self.height)?;
        if self.stages.is_empty() {
            return Err(CurveError::EmptySequence);
        }
        Ok(())
    }

    /// Builds the curve sequence described by this scene.
    pub fn build(&self) -> Result<Sequence, CurveError> {
        self.validate()?;
        let stages = self
            .stages
            .iter()
            .map(|stage| {
                CurveKind::from_json(&stage.curve, &stage.params)
                    .map(|curve| Box::new(curve) as Box<dyn CurveGenerator>)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Sequence::new(stages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scene_has_maurer_then_rose() {
        let scene = Scene::reference(400, 300);
        let names: Vec<&str> = scene.stages.iter().map(|s| s.curve.as_str()).collect();
        assert_eq!(names, vec!["maurer", "rose"]);
        assert_eq!(scene.stages[0].params["amplitude"], 135.0);
    }

    #[test]
    fn reference_scene_builds_a_sequence() {
        let sequence = Scene::reference(256, 256).build().unwrap();
        assert_eq!(sequence.stage_count(), 2);
        assert_eq!(sequence.active().name(), "maurer");
        assert_eq!(sequence.remaining_steps(), 361 + 315);
    }

    #[test]
    fn json_round_trip() {
        let scene = Scene::reference(512, 512);
        let json = serde_json::to_string_pretty(&scene).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, restored);
    }

    #[test]
    fn json_contains_expected_keys() {
        let value = serde_json::to_value(Scene::reference(64, 64)).unwrap();
        assert_eq!(value["width"], 64);
        assert_eq!(value["height"], 64);
        assert_eq!(value["stages"][0]["curve"], "maurer");
        assert!(value["stages"][1]["params"].get("delta_theta").is_some());
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let mut scene = Scene::reference(64, 64);
        scene.width = 0;
        assert!(matches!(scene.validate(), Err(CurveError::InvalidDimensions)));
    }

    #[test]
    fn validate_rejects_overflow() {
        let mut scene = Scene::reference(64, 64);
        scene.width = usize::MAX;
        scene.height = 2;
        assert!(scene.validate().is_err());
    }

    #[test]
    fn validate_rejects_surfaces_above_the_pixel_limit() {
        let scene = Scene::reference(100_000, 100_000);
        assert!(matches!(
            scene.validate(),
            Err(CurveError::SurfaceTooLarge { .. })
        ));
        assert!(Scene::reference(4096, 4096).validate().is_ok());
    }

    #[test]
    fn build_rejects_empty_stage_list() {
        let mut scene = Scene::reference(64, 64);
        scene.stages.clear();
        assert!(matches!(scene.build(), Err(CurveError::EmptySequence)));
    }

    #[test]
    fn build_reports_unknown_curve() {
        let mut scene = Scene::reference(64, 64);
        scene.stages[1].curve = "lissajous".into();
        assert!(matches!(scene.build(), Err(CurveError::UnknownCurve(name)) if name == "lissajous"));
    }

    #[test]
    fn build_reports_invalid_parameters() {
        let mut scene = Scene::reference(64, 64);
        scene.stages[0].params["d"] = json!(0);
        assert!(matches!(
            scene.build(),
            Err(CurveError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn deserializes_hand_written_scene() {
        let scene: Scene = serde_json::from_str(
            r#"{
                "width": 100,
                "height": 80,
                "stages": [
                    {"curve": "rose", "params": {"center": [10, 0], "amplitude": 30, "k": 3, "delta_theta": 0.1}}
                ]
            }"#,
        )
        .unwrap();
        let sequence = scene.build().unwrap();
        assert_eq!(sequence.stage_count(), 1);
        assert_eq!(sequence.active().name(), "rose");
    }
}
