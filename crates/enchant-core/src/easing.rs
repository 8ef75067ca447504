//! Motion curves for shifting characters.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Remaps linear step progress before it drives horizontal motion.
///
/// Every curve maps 0.0 to 0.0 and 1.0 to exactly 1.0, so the last frame
/// always lands on the target offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolator {
    /// No remapping
    #[default]
    Linear,
    /// Slow start, fast end
    Accelerate,
    /// Fast start, slow end
    Decelerate,
    /// Slow start and end, fast middle (cosine)
    AccelerateDecelerate,
    /// Drops onto the target and bounces a few times
    Bounce,
    /// Flings past the target, then settles back
    Overshoot,
}

const OVERSHOOT_TENSION: f32 = 2.0;

impl Interpolator {
    pub const ALL: [Interpolator; 6] = [
        Interpolator::Linear,
        Interpolator::Accelerate,
        Interpolator::Decelerate,
        Interpolator::AccelerateDecelerate,
        Interpolator::Bounce,
        Interpolator::Overshoot,
    ];

    pub fn evaluate(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Interpolator::Linear => t,
            Interpolator::Accelerate => t * t,
            Interpolator::Decelerate => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Interpolator::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Interpolator::Bounce => bounce_curve(t),
            Interpolator::Overshoot => {
                let t = t - 1.0;
                t * t * ((OVERSHOOT_TENSION + 1.0) * t + OVERSHOOT_TENSION) + 1.0
            }
        }
    }

    /// Cycle to the next curve
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&i| i == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Interpolator::Linear => "linear",
            Interpolator::Accelerate => "accelerate",
            Interpolator::Decelerate => "decelerate",
            Interpolator::AccelerateDecelerate => "accelerate_decelerate",
            Interpolator::Bounce => "bounce",
            Interpolator::Overshoot => "overshoot",
        }
    }
}

fn bounce(t: f32) -> f32 {
    t * t * 8.0
}

fn bounce_curve(t: f32) -> f32 {
    let t = t * 1.1226;
    if t < 0.3535 {
        bounce(t)
    } else if t < 0.7408 {
        bounce(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        bounce(t - 0.8526) + 0.9
    } else {
        bounce(t - 1.0435) + 0.95
    }
}

impl fmt::Display for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.name() == key)
            .ok_or_else(|| format!("unknown interpolator '{}'", s))
    }
}
