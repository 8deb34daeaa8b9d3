#![deny(unsafe_code)]
//! CLI binary for the rosette curve animator.
//!
//! Subcommands:
//! - `render` — run the animation for N frames, write PNG
//! - `trace` — run the animation for N frames, print drawing calls as JSON lines
//! - `list` — print available curves

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use rosette_core::{Raster, Recorder, Surface};
use rosette_engines::{CurveKind, FrameBudget, FrameLoop, Interval, LoopReport, Scene, Sequence};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "rosette", about = "Incremental rose and Maurer rose curve animator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the animation and write the final frame as a PNG.
    Render {
        /// Scene file (JSON). Defaults to the Maurer rose → rose hand-off.
        #[arg(long)]
        scene: Option<PathBuf>,

        /// Surface width in pixels (ignored with --scene).
        #[arg(short = 'W', long, default_value_t = 512)]
        width: usize,

        /// Surface height in pixels (ignored with --scene).
        #[arg(short = 'H', long, default_value_t = 512)]
        height: usize,

        /// Frames to run. Defaults to the frames needed to finish every stage.
        #[arg(short, long)]
        frames: Option<usize>,

        /// Pace frames in real time at this rate.
        #[arg(long)]
        fps: Option<f64>,

        /// Output file path.
        #[arg(short, long, default_value = "rosette.png")]
        output: PathBuf,
    },
    /// Run the animation and print every drawing call as a JSON line.
    Trace {
        /// Scene file (JSON). Defaults to the Maurer rose → rose hand-off.
        #[arg(long)]
        scene: Option<PathBuf>,

        /// Frames to run. Defaults to the frames needed to finish every stage.
        #[arg(short, long)]
        frames: Option<usize>,
    },
    /// List available curves.
    List,
}

/// Reads a scene file, or falls back to the reference scene.
fn load_scene(path: Option<&Path>, width: usize, height: usize) -> Result<Scene, CliError> {
    let Some(path) = path else {
        return Ok(Scene::reference(width, height));
    };
    let text = std::fs::read_to_string(path)?;
    let scene: Scene = serde_json::from_str(&text).map_err(|e| CliError::Scene {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    scene.validate()?;
    Ok(scene)
}

fn run_frames(
    sequence: &mut Sequence,
    surface: &mut dyn Surface,
    frames: Option<usize>,
    fps: Option<f64>,
) -> LoopReport {
    let frames = frames.unwrap_or_else(|| sequence.remaining_steps());
    let frame_loop = FrameLoop::default();
    match fps {
        Some(fps) => frame_loop.run(sequence, surface, &mut Interval::from_fps(fps, Some(frames))),
        None => frame_loop.run(sequence, surface, &mut FrameBudget::new(frames)),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let curves = CurveKind::list_curves();
            if cli.json {
                let info = serde_json::json!({ "curves": curves });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Curves:");
                for name in curves {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            scene,
            width,
            height,
            frames,
            fps,
            output,
        } => {
            let scene = load_scene(scene.as_deref(), width, height)?;
            let mut sequence = scene.build()?;
            let mut raster = Raster::new(scene.width, scene.height)?;
            log::info!(
                "rendering {} stage(s) onto {}x{}",
                sequence.stage_count(),
                scene.width,
                scene.height
            );

            let report = run_frames(&mut sequence, &mut raster, frames, fps);

            rosette_engines::snapshot::write_png(&raster, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": scene.width,
                    "height": scene.height,
                    "frames": report.frames,
                    "finished": report.finished,
                    "active_curve": sequence.active().name(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} frames ({}x{}, {}) -> {}",
                    report.frames,
                    scene.width,
                    scene.height,
                    if report.finished { "finished" } else { "in progress" },
                    output.display()
                );
            }
        }
        Command::Trace { scene, frames } => {
            let scene = load_scene(scene.as_deref(), 512, 512)?;
            let mut sequence = scene.build()?;
            let mut recorder = Recorder::new();
            let report = run_frames(&mut sequence, &mut recorder, frames, None);
            for command in recorder.commands() {
                println!("{}", serde_json::to_string(command)?);
            }
            log::info!("traced {} frames", report.frames);
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn render_defaults_parse() {
        let cli = Cli::try_parse_from(["rosette", "render"]).unwrap();
        match cli.command {
            Command::Render {
                width,
                height,
                frames,
                fps,
                ..
            } => {
                assert_eq!((width, height), (512, 512));
                assert_eq!(frames, None);
                assert_eq!(fps, None);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn load_scene_without_path_uses_reference() {
        let scene = load_scene(None, 100, 200).unwrap();
        assert_eq!(scene, Scene::reference(100, 200));
    }

    #[test]
    fn load_scene_missing_file_is_io_error() {
        let err = load_scene(Some(Path::new("/definitely/not/here.json")), 1, 1).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    fn scene_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_scene_malformed_json_is_scene_error() {
        let file = scene_file(r#"{"width": 64, "height": 64}"#);
        let err = load_scene(Some(file.path()), 1, 1).unwrap_err();
        assert!(matches!(err, CliError::Scene { .. }));
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn load_scene_oversized_surface_is_curve_error() {
        let file = scene_file(r#"{"width": 100000, "height": 100000, "stages": []}"#);
        let err = load_scene(Some(file.path()), 1, 1).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn load_scene_reads_a_valid_file() {
        let json = serde_json::to_string(&Scene::reference(32, 48)).unwrap();
        let file = scene_file(&json);
        let scene = load_scene(Some(file.path()), 1, 1).unwrap();
        assert_eq!(scene, Scene::reference(32, 48));
    }

    #[test]
    fn run_frames_defaults_to_finishing_every_stage() {
        let mut sequence = Scene::reference(64, 64).build().unwrap();
        let report = run_frames(&mut sequence, &mut Recorder::new(), None, None);
        assert_eq!(report.frames, 361 + 315);
        assert!(report.finished);
    }

    #[test]
    fn run_frames_honours_explicit_budget() {
        let mut sequence = Scene::reference(64, 64).build().unwrap();
        let report = run_frames(&mut sequence, &mut Recorder::new(), Some(12), None);
        assert_eq!(report.frames, 12);
        assert!(!report.finished);
    }
}
