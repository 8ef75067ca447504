//! enchant-core: animated character transitions for single-line text
//!
//! When the text changes, characters shared by the old and new string glide
//! from their old position to their new one while the rest appear in place.
//!
//! - [`diff`] pairs characters and measures offsets
//! - [`step`] advances a transition frame by frame
//! - [`view`] wires both into a widget driven by a [`view::Host`]

pub mod color;
pub mod diff;
pub mod easing;
pub mod error;
pub mod font;
pub mod layout;
pub mod step;
pub mod view;

pub use color::{parse_color, Argb, ColorError};
pub use diff::{compute_transition, OffsetTable, ShiftingChar, TransitionPlan};
pub use easing::Interpolator;
pub use error::ConfigError;
pub use font::{CellFont, FontBackend, FontError, FontMetrics, Paint, TypefaceId, DEFAULT_TEXT_SIZE};
pub use layout::{
    Gravity, HorizontalGravity, Layout, LayoutDirection, MeasureSpec, Padding, Size,
    VerticalGravity,
};
pub use step::{
    lerp, AnimationState, AnimationSteps, DrawInstruction, Origin, Sample,
    DEFAULT_ANIMATION_STEPS,
};
pub use view::{EnchantedText, Host, Phase, Transition, DEFAULT_TEXT_COLOR};
