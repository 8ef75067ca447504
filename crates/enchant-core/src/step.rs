//! Fixed-step animation over a transition plan

use crate::color::Argb;
use crate::diff::TransitionPlan;
use crate::easing::Interpolator;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ANIMATION_STEPS: u32 = 50;

/// Number of frames a transition takes. Always at least 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct AnimationSteps(u32);

impl AnimationSteps {
    pub const MIN: u32 = 2;

    pub fn new(steps: u32) -> Result<Self, ConfigError> {
        if steps < Self::MIN {
            return Err(ConfigError::InvalidAnimationSteps(steps));
        }
        Ok(Self(steps))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for AnimationSteps {
    fn default() -> Self {
        Self(DEFAULT_ANIMATION_STEPS)
    }
}

impl TryFrom<u32> for AnimationSteps {
    type Error = ConfigError;

    fn try_from(steps: u32) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<AnimationSteps> for u32 {
    fn from(steps: AnimationSteps) -> Self {
        steps.0
    }
}

/// Where offset 0 of the string sits on screen: left edge and baseline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

/// One glyph to paint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawInstruction {
    pub glyph: char,
    pub x: f32,
    /// Baseline position
    pub y: f32,
    pub color: Argb,
}

/// Output of sampling the animation at its current step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sample {
    /// Appearing glyphs first, then shifting glyphs
    pub instructions: Vec<DrawInstruction>,
    pub is_final: bool,
}

/// Linear interpolation that lands exactly on `b` at `t == 1`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    if t == 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// A running transition: the plan plus its step counter
#[derive(Debug, Clone)]
pub struct AnimationState {
    plan: TransitionPlan,
    /// 0 at construction, never above `total_steps`
    current_step: u32,
    total_steps: AnimationSteps,
    base_color: Argb,
    fade_in: bool,
    interpolator: Interpolator,
}

impl AnimationState {
    pub fn start(
        plan: TransitionPlan,
        total_steps: AnimationSteps,
        base_color: Argb,
        fade_in: bool,
    ) -> Self {
        Self {
            plan,
            current_step: 0,
            total_steps,
            base_color,
            fade_in,
            interpolator: Interpolator::Linear,
        }
    }

    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    pub fn plan(&self) -> &TransitionPlan {
        &self.plan
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps.get()
    }

    pub fn base_color(&self) -> Argb {
        self.base_color
    }

    pub fn fade_in(&self) -> bool {
        self.fade_in
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    /// Move one step forward. Returns false once already on the last step.
    pub fn advance(&mut self) -> bool {
        if self.current_step >= self.total_steps.get() {
            return false;
        }
        self.current_step += 1;
        true
    }

    /// Linear progress, `current_step / total_steps`
    pub fn percentage(&self) -> f32 {
        self.current_step as f32 / self.total_steps.get() as f32
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps.get()
    }

    /// Color of appearing glyphs at the current step
    pub fn appearing_color(&self) -> Argb {
        if self.fade_in {
            self.base_color.faded(self.percentage())
        } else {
            self.base_color
        }
    }

    pub fn sample(&self, origin: Origin) -> Sample {
        let percentage = self.percentage();
        let motion = self.interpolator.evaluate(percentage);
        let appearing_color = self.appearing_color();

        let mut instructions =
            Vec::with_capacity(self.plan.appearing().len() + self.plan.shifting().len());

        instructions.extend(self.plan.appearing_chars().map(|(glyph, offset)| {
            DrawInstruction {
                glyph,
                x: origin.x + offset,
                y: origin.y,
                color: appearing_color,
            }
        }));

        instructions.extend(self.plan.shifting().iter().map(|s| DrawInstruction {
            glyph: s.character,
            x: origin.x + lerp(s.start_offset_x, s.end_offset_x, motion),
            y: origin.y,
            color: self.base_color,
        }));

        Sample {
            instructions,
            is_final: self.is_final_step(),
        }
    }
}
