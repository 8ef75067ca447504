//! Errors raised while configuring a transition

use crate::color::ColorError;
use crate::step::AnimationSteps;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("animation steps should be at least {min}, got {0}", min = AnimationSteps::MIN)]
    InvalidAnimationSteps(u32),
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error("invalid gravity '{0}'")]
    InvalidGravity(String),
}
