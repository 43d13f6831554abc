use loopline_engine::coords::{window_to_ndc, ColorRgba};
use loopline_engine::core::{App, AppControl, FrameCtx};
use loopline_engine::input::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent,
};
use loopline_engine::render::LineRenderer;
use loopline_engine::time::FpsCounter;

use crate::outline::Outline;

/// Base window title; FPS statistics are appended four times per second.
pub const APP_TITLE: &str = "Loopline - Click to Draw Lines";

/// Background color behind the lines.
const CLEAR_COLOR: ColorRgba = ColorRgba::rgb(0.23, 0.38, 0.47);

/// The sketch application: left clicks accumulate outline vertices, Escape
/// closes the window.
pub struct SketchApp {
    outline: Outline,
    renderer: LineRenderer,
    fps: FpsCounter,
}

impl SketchApp {
    pub fn new() -> Self {
        Self {
            outline: Outline::new(),
            renderer: LineRenderer::new(),
            fps: FpsCounter::new(),
        }
    }
}

impl App for SketchApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for ev in &ctx.input_frame.events {
            match ev {
                InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Left,
                    state: MouseButtonState::Pressed,
                    x,
                    y,
                }) => {
                    let (w, h) = ctx.logical_size();
                    let (nx, ny) = window_to_ndc(*x, *y, w, h);
                    self.outline.push(nx, ny);
                    log::debug!(
                        "click at ({x:.1}, {y:.1}) -> ndc ({nx:.3}, {ny:.3}), {} vertices",
                        self.outline.vertex_count()
                    );
                }

                InputEvent::Key {
                    key: Key::Escape,
                    state: KeyState::Pressed,
                    ..
                } => {
                    return AppControl::Exit;
                }

                _ => {}
            }
        }

        if let Some(sample) = self.fps.tick(ctx.time.now) {
            ctx.set_title(&format!(
                "{APP_TITLE}    FPS: {:.3}    Frame Time: {:.3} (ms)",
                sample.fps, sample.ms_per_frame
            ));
        }

        let renderer = &mut self.renderer;
        let outline = &self.outline;
        ctx.render(CLEAR_COLOR, |rctx, target| {
            renderer.render(rctx, target, outline.vertices());
        })
    }
}
