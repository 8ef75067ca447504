//! Host-facing text widget that animates between successive strings

use crate::color::Argb;
use crate::diff::{compute_transition, TransitionPlan};
use crate::easing::Interpolator;
use crate::error::ConfigError;
use crate::font::{FontBackend, Paint, TypefaceId};
use crate::layout::{Gravity, Layout, LayoutDirection, MeasureSpec, Padding, Size};
use crate::step::{AnimationState, AnimationSteps, DrawInstruction, Origin};
use std::path::{Path, PathBuf};

/// Frame and layout services provided by the embedding UI.
///
/// Everything runs on the thread that owns rendering. A scheduled frame
/// must eventually call [`EnchantedText::draw`] again; a cancelled one must
/// not.
pub trait Host {
    /// Ask for another draw on the next display refresh
    fn schedule_next_frame(&mut self);
    /// Drop a frame scheduled earlier, if any
    fn cancel_frame(&mut self);
    /// Measured size may have changed
    fn request_relayout(&mut self);
}

/// Transition in flight, with the origin fixed when it began
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AnimationState,
    pub origin: Origin,
}

#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning(Transition),
}

/// The default text color, opaque black
pub const DEFAULT_TEXT_COLOR: Argb = Argb::BLACK;

/// Single-line text that glides shared characters into place whenever its
/// text changes.
#[derive(Debug, Clone, Default)]
pub struct EnchantedText {
    text: String,
    paint: Paint,
    typeface_path: Option<PathBuf>,
    fade_in: bool,
    steps: AnimationSteps,
    interpolator: Interpolator,
    layout: Layout,
    phase: Phase,
}

impl EnchantedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_color(&self) -> Argb {
        self.paint.color
    }

    pub fn text_size(&self) -> f32 {
        self.paint.size
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn typeface_path(&self) -> Option<&Path> {
        self.typeface_path.as_deref()
    }

    pub fn fade_in(&self) -> bool {
        self.fade_in
    }

    pub fn animation_steps(&self) -> u32 {
        self.steps.get()
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    pub fn gravity(&self) -> Gravity {
        self.layout.gravity
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    /// `(current_step, total_steps)` of the running transition
    pub fn progress(&self) -> Option<(u32, u32)> {
        match &self.phase {
            Phase::Transitioning(t) => Some((t.state.current_step(), t.state.total_steps())),
            Phase::Idle => None,
        }
    }

    /// Change the displayed text.
    ///
    /// Setting the current value does nothing. Any other value replaces an
    /// in-flight transition, starting from the previously set text. Returns
    /// the plan of the transition that was started.
    pub fn set_text<F, H>(
        &mut self,
        text: impl Into<String>,
        font: &F,
        host: &mut H,
    ) -> Option<&TransitionPlan>
    where
        F: FontBackend + ?Sized,
        H: Host + ?Sized,
    {
        let text = text.into();
        if text == self.text {
            return None;
        }

        host.cancel_frame();
        let old = std::mem::replace(&mut self.text, text);
        let paint = self.paint;
        let plan = compute_transition(&old, &self.text, |c| font.measure_char(&paint, c));

        if plan.is_empty() {
            // Nothing to animate towards
            tracing::debug!("text cleared, skipping transition from {:?}", old);
            self.phase = Phase::Idle;
            host.request_relayout();
            host.schedule_next_frame();
            return None;
        }

        let origin = Origin {
            x: self.layout.offset_x(
                font.measure(&paint, &self.text),
                Some(font.measure(&paint, &old)),
            ),
            y: self.layout.baseline_y(&font.metrics(&paint)),
        };

        tracing::debug!(
            appearing = plan.appearing().len(),
            shifting = plan.shifting().len(),
            steps = self.steps.get(),
            "starting transition {:?} -> {:?}",
            old,
            self.text
        );

        let state = AnimationState::start(plan, self.steps, paint.color, self.fade_in)
            .with_interpolator(self.interpolator);
        self.phase = Phase::Transitioning(Transition { state, origin });

        host.request_relayout();
        host.schedule_next_frame();

        match &self.phase {
            Phase::Transitioning(t) => Some(t.state.plan()),
            Phase::Idle => None,
        }
    }

    /// New color applies to the next transition and to resting text
    pub fn set_text_color<H: Host + ?Sized>(&mut self, color: Argb, host: &mut H) {
        self.paint.color = color;
        self.invalidate(host);
    }

    pub fn set_text_size<H: Host + ?Sized>(&mut self, size: f32, host: &mut H) {
        self.paint.size = size;
        host.request_relayout();
        self.invalidate(host);
    }

    /// Load a typeface asset, or reset to the default with `None`.
    ///
    /// A typeface that fails to load is reported and the default is used.
    pub fn set_typeface<F, H>(&mut self, path: Option<&Path>, font: &mut F, host: &mut H)
    where
        F: FontBackend + ?Sized,
        H: Host + ?Sized,
    {
        self.paint.typeface = match path {
            None => TypefaceId::DEFAULT,
            Some(path) => match font.load_typeface(path) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("{}, using default typeface", e);
                    TypefaceId::DEFAULT
                }
            },
        };
        self.typeface_path = path.map(Path::to_path_buf);
        host.request_relayout();
        self.invalidate(host);
    }

    pub fn set_fade_in(&mut self, fade_in: bool) {
        self.fade_in = fade_in;
    }

    /// Rejects fewer than two steps, leaving the current value in place
    pub fn set_animation_steps(&mut self, steps: u32) -> Result<(), ConfigError> {
        self.steps = AnimationSteps::new(steps)?;
        Ok(())
    }

    pub fn set_interpolator(&mut self, interpolator: Interpolator) {
        self.interpolator = interpolator;
    }

    /// Only affects resting placement and the origin of future transitions
    pub fn set_gravity<H: Host + ?Sized>(&mut self, gravity: Gravity, host: &mut H) {
        self.layout.gravity = gravity;
        self.invalidate(host);
    }

    pub fn set_layout_direction<H: Host + ?Sized>(
        &mut self,
        direction: LayoutDirection,
        host: &mut H,
    ) {
        self.layout.direction = direction;
        self.invalidate(host);
    }

    pub fn set_padding<H: Host + ?Sized>(&mut self, padding: Padding, host: &mut H) {
        self.layout.padding = padding;
        host.request_relayout();
        self.invalidate(host);
    }

    /// Desired size under the given specs.
    ///
    /// While a transition runs the width covers both the old and the new
    /// string.
    pub fn measure<F>(
        &mut self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        font: &F,
    ) -> Size
    where
        F: FontBackend + ?Sized,
    {
        self.layout.width_at_most = width_spec.is_at_most();

        let text_width = match &self.phase {
            Phase::Idle => font.measure(&self.paint, &self.text),
            Phase::Transitioning(t) => {
                let plan = t.state.plan();
                font.measure(&self.paint, plan.old_string())
                    .max(font.measure(&self.paint, plan.new_string()))
            }
        };
        let line_height = font.metrics(&self.paint).line_height();

        let size = Size {
            width: width_spec.resolve(text_width + self.layout.padding.horizontal()),
            height: height_spec.resolve(line_height + self.layout.padding.vertical()),
        };
        tracing::trace!(width = size.width, height = size.height, "measured");
        size
    }

    /// Record the final bounds chosen by the parent
    pub fn layout_to(&mut self, bounds: Size) {
        self.layout.bounds = bounds;
    }

    /// Produce this frame's glyphs.
    ///
    /// While transitioning, each call advances one step and schedules the
    /// next frame until the last step has been drawn.
    pub fn draw<F, H>(&mut self, font: &F, host: &mut H) -> Vec<DrawInstruction>
    where
        F: FontBackend + ?Sized,
        H: Host + ?Sized,
    {
        let sample = if let Phase::Transitioning(transition) = &mut self.phase {
            transition.state.advance();
            transition.state.sample(transition.origin)
        } else {
            return self.draw_resting(font);
        };

        if sample.is_final {
            tracing::debug!("transition to {:?} finished", self.text);
            self.phase = Phase::Idle;
            if self.layout.width_at_most {
                // Shrink back to the new string
                host.request_relayout();
            }
        } else {
            host.schedule_next_frame();
        }
        sample.instructions
    }

    fn draw_resting<F: FontBackend + ?Sized>(&self, font: &F) -> Vec<DrawInstruction> {
        let paint = self.paint;
        let mut x = self.layout.offset_x(font.measure(&paint, &self.text), None);
        let y = self.layout.baseline_y(&font.metrics(&paint));

        self.text
            .chars()
            .map(|glyph| {
                let instruction = DrawInstruction {
                    glyph,
                    x,
                    y,
                    color: paint.color,
                };
                x += font.measure_char(&paint, glyph);
                instruction
            })
            .collect()
    }

    /// Repaint resting text; a running transition already has a frame queued
    fn invalidate<H: Host + ?Sized>(&self, host: &mut H) {
        if !self.is_animating() {
            host.schedule_next_frame();
        }
    }
}
