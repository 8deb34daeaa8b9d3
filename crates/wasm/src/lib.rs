#![deny(unsafe_code)]
//! WASM bindings for the rosette curve animator.
//!
//! [`RoseAnimation`] owns a curve [`Sequence`] and a [`CanvasSurface`]; the
//! page drives it from `requestAnimationFrame`:
//!
//! ```js
//! const anim = new RoseAnimation(canvas);
//! const frame = () => { if (anim.tick()) requestAnimationFrame(frame); };
//! requestAnimationFrame(frame);
//! ```

use rosette_core::{CurveError, Point, Surface};
use rosette_engines::{FrameLoop, Scene, Sequence};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn to_js(err: CurveError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A [`Surface`] backed by a browser 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wraps `canvas`'s 2D context, moving the origin to the centre and
    /// pointing Y up.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        ctx.translate(f64::from(canvas.width()) / 2.0, f64::from(canvas.height()) / 2.0)?;
        ctx.scale(1.0, -1.0)?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

/// A curve animation drawn onto an HTML canvas, one frame per `tick()`.
#[wasm_bindgen]
pub struct RoseAnimation {
    sequence: Sequence,
    surface: CanvasSurface,
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl RoseAnimation {
    /// Builds the reference Maurer rose → rose animation sized to `canvas`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<RoseAnimation, JsValue> {
        let scene = Scene::reference(canvas.width() as usize, canvas.height() as usize);
        Self::build(&canvas, &scene)
    }

    /// Builds an animation from a scene JSON string.
    #[wasm_bindgen(js_name = withScene)]
    pub fn with_scene(
        canvas: HtmlCanvasElement,
        scene_json: &str,
    ) -> Result<RoseAnimation, JsValue> {
        let scene: Scene = serde_json::from_str(scene_json)
            .map_err(|e| JsValue::from_str(&format!("invalid scene: {e}")))?;
        Self::build(&canvas, &scene)
    }

    fn build(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<RoseAnimation, JsValue> {
        let sequence = scene.build().map_err(to_js)?;
        let surface = CanvasSurface::new(canvas)?;
        Ok(RoseAnimation {
            sequence,
            surface,
            frame_loop: FrameLoop::default(),
        })
    }

    /// Draws one frame. Returns `false` once the animation has been stopped.
    pub fn tick(&mut self) -> bool {
        self.frame_loop.frame(&mut self.sequence, &mut self.surface)
    }

    /// Stops the animation; subsequent ticks draw nothing and return `false`.
    pub fn stop(&self) {
        self.frame_loop.stop_token().cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> usize {
        self.sequence.frames()
    }

    #[wasm_bindgen(getter)]
    pub fn finished(&self) -> bool {
        self.sequence.is_finished()
    }

    #[wasm_bindgen(getter, js_name = activeCurve)]
    pub fn active_curve(&self) -> String {
        self.sequence.active().name().to_string()
    }
}
