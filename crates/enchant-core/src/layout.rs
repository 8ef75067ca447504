//! Gravity, measurement specs and the resting offsets they produce

use crate::error::ConfigError;
use crate::font::FontMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Horizontal placement. `Start`/`End` follow the layout direction,
/// `Left`/`Right` do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalGravity {
    #[default]
    Start,
    End,
    Left,
    Right,
    CenterHorizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalGravity {
    #[default]
    Top,
    Bottom,
    CenterVertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AbsoluteHorizontal {
    Left,
    Right,
    Center,
}

impl HorizontalGravity {
    fn absolute(self, direction: LayoutDirection) -> AbsoluteHorizontal {
        match (self, direction) {
            (HorizontalGravity::CenterHorizontal, _) => AbsoluteHorizontal::Center,
            (HorizontalGravity::Left, _) => AbsoluteHorizontal::Left,
            (HorizontalGravity::Right, _) => AbsoluteHorizontal::Right,
            (HorizontalGravity::Start, LayoutDirection::Ltr)
            | (HorizontalGravity::End, LayoutDirection::Rtl) => AbsoluteHorizontal::Left,
            (HorizontalGravity::End, LayoutDirection::Ltr)
            | (HorizontalGravity::Start, LayoutDirection::Rtl) => AbsoluteHorizontal::Right,
        }
    }

    /// Cycle through start → center → end
    pub fn next(self) -> Self {
        match self {
            HorizontalGravity::Start | HorizontalGravity::Left => {
                HorizontalGravity::CenterHorizontal
            }
            HorizontalGravity::CenterHorizontal => HorizontalGravity::End,
            HorizontalGravity::End | HorizontalGravity::Right => HorizontalGravity::Start,
        }
    }
}

/// Where the text rests inside its bounds, written like `center_horizontal|bottom`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gravity {
    pub horizontal: HorizontalGravity,
    pub vertical: VerticalGravity,
}

impl Gravity {
    pub const fn new(horizontal: HorizontalGravity, vertical: VerticalGravity) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const CENTER: Gravity =
        Gravity::new(HorizontalGravity::CenterHorizontal, VerticalGravity::CenterVertical);
}

impl FromStr for Gravity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut horizontal = None;
        let mut vertical = None;
        let mut center = false;
        for flag in s.split('|').map(str::trim).filter(|f| !f.is_empty()) {
            match flag.to_ascii_lowercase().replace('-', "_").as_str() {
                "start" => horizontal = Some(HorizontalGravity::Start),
                "end" => horizontal = Some(HorizontalGravity::End),
                "left" => horizontal = Some(HorizontalGravity::Left),
                "right" => horizontal = Some(HorizontalGravity::Right),
                "center_horizontal" => horizontal = Some(HorizontalGravity::CenterHorizontal),
                "top" => vertical = Some(VerticalGravity::Top),
                "bottom" => vertical = Some(VerticalGravity::Bottom),
                "center_vertical" => vertical = Some(VerticalGravity::CenterVertical),
                "center" => center = true,
                _ => return Err(ConfigError::InvalidGravity(s.to_string())),
            }
        }
        // `center` only fills the axes no other flag names
        let fill = if center { Gravity::CENTER } else { Gravity::default() };
        Ok(Gravity::new(
            horizontal.unwrap_or(fill.horizontal),
            vertical.unwrap_or(fill.vertical),
        ))
    }
}

impl TryFrom<String> for Gravity {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gravity> for String {
    fn from(gravity: Gravity) -> Self {
        gravity.to_string()
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let horizontal = match self.horizontal {
            HorizontalGravity::Start => "start",
            HorizontalGravity::End => "end",
            HorizontalGravity::Left => "left",
            HorizontalGravity::Right => "right",
            HorizontalGravity::CenterHorizontal => "center_horizontal",
        };
        let vertical = match self.vertical {
            VerticalGravity::Top => "top",
            VerticalGravity::Bottom => "bottom",
            VerticalGravity::CenterVertical => "center_vertical",
        };
        write!(f, "{}|{}", horizontal, vertical)
    }
}

/// Constraint handed down by the parent while measuring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    Exactly(f32),
    AtMost(f32),
    Unspecified,
}

impl MeasureSpec {
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(limit) => desired.min(limit),
            MeasureSpec::Unspecified => desired,
        }
    }

    pub fn is_at_most(self) -> bool {
        matches!(self, MeasureSpec::AtMost(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Placement inputs for one widget: its bounds, padding and gravity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub gravity: Gravity,
    pub direction: LayoutDirection,
    pub padding: Padding,
    pub bounds: Size,
    /// Width came from an `AtMost` spec, so the bounds may still be stale
    /// right after the text changes
    pub width_at_most: bool,
}

impl Layout {
    /// Left edge of a string that is `content_width` wide.
    ///
    /// Under an `AtMost` width the container is taken as wide as the wider of
    /// the string and `previous_width`, since layout may not have caught up
    /// with the new size yet.
    pub fn offset_x(&self, content_width: f32, previous_width: Option<f32>) -> f32 {
        let container_width = if self.width_at_most {
            content_width.max(previous_width.unwrap_or(0.0))
        } else {
            self.bounds.width - self.padding.horizontal()
        };

        match self.gravity.horizontal.absolute(self.direction) {
            AbsoluteHorizontal::Right => self.bounds.width - content_width - self.padding.right,
            AbsoluteHorizontal::Center => {
                self.padding.left + (container_width - content_width) / 2.0
            }
            AbsoluteHorizontal::Left => self.padding.left,
        }
    }

    /// Baseline of the line for the given font metrics
    pub fn baseline_y(&self, metrics: &FontMetrics) -> f32 {
        let content_height = metrics.line_height();
        let container_height = self.bounds.height - self.padding.vertical();
        let edge = match self.gravity.vertical {
            VerticalGravity::Bottom => self.bounds.height - self.padding.bottom,
            VerticalGravity::CenterVertical => {
                self.padding.top + (container_height + content_height) / 2.0
            }
            VerticalGravity::Top => self.padding.top + content_height,
        };
        edge - metrics.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: FontMetrics = FontMetrics {
        top: -8.0,
        bottom: 2.0,
    };

    fn layout(gravity: &str) -> Layout {
        Layout {
            gravity: gravity.parse().unwrap(),
            direction: LayoutDirection::Ltr,
            padding: Padding {
                left: 4.0,
                top: 1.0,
                right: 6.0,
                bottom: 3.0,
            },
            bounds: Size {
                width: 100.0,
                height: 30.0,
            },
            width_at_most: false,
        }
    }

    #[test]
    fn test_parse_gravity() {
        assert_eq!("".parse::<Gravity>().unwrap(), Gravity::default());
        assert_eq!(
            "center_horizontal|bottom".parse::<Gravity>().unwrap(),
            Gravity::new(HorizontalGravity::CenterHorizontal, VerticalGravity::Bottom)
        );
        assert_eq!("center".parse::<Gravity>().unwrap(), Gravity::CENTER);
        assert_eq!(
            "End | Center-Vertical".parse::<Gravity>().unwrap(),
            Gravity::new(HorizontalGravity::End, VerticalGravity::CenterVertical)
        );
        assert!(matches!(
            "middle".parse::<Gravity>(),
            Err(ConfigError::InvalidGravity(_))
        ));
    }

    #[test]
    fn test_center_fills_unset_axes_in_any_order() {
        let bottom = Gravity::new(HorizontalGravity::CenterHorizontal, VerticalGravity::Bottom);
        assert_eq!("center|bottom".parse::<Gravity>().unwrap(), bottom);
        assert_eq!("bottom|center".parse::<Gravity>().unwrap(), bottom);
        assert_eq!(
            "center|end".parse::<Gravity>().unwrap(),
            "end|center".parse::<Gravity>().unwrap()
        );
        assert_eq!(
            "end|center".parse::<Gravity>().unwrap(),
            Gravity::new(HorizontalGravity::End, VerticalGravity::CenterVertical)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(matches!(
            "bottom|middle".parse::<Gravity>(),
            Err(ConfigError::InvalidGravity(_))
        ));
    }

    #[test]
    fn test_gravity_display_round_trips() {
        let gravity = Gravity::new(HorizontalGravity::Right, VerticalGravity::CenterVertical);
        assert_eq!(gravity.to_string(), "right|center_vertical");
        assert_eq!(gravity.to_string().parse::<Gravity>().unwrap(), gravity);
    }

    #[test]
    fn test_offset_x_exact_width() {
        assert_eq!(layout("start").offset_x(40.0, None), 4.0);
        assert_eq!(layout("end").offset_x(40.0, None), 54.0);
        // container 90, content 40
        assert_eq!(layout("center_horizontal").offset_x(40.0, None), 29.0);
    }

    #[test]
    fn test_offset_x_follows_direction() {
        let mut rtl = layout("start");
        rtl.direction = LayoutDirection::Rtl;
        assert_eq!(rtl.offset_x(40.0, None), 54.0);

        let mut rtl_end = layout("end");
        rtl_end.direction = LayoutDirection::Rtl;
        assert_eq!(rtl_end.offset_x(40.0, None), 4.0);

        let mut left = layout("left");
        left.direction = LayoutDirection::Rtl;
        assert_eq!(left.offset_x(40.0, None), 4.0);
    }

    #[test]
    fn test_offset_x_at_most_uses_wider_string() {
        let mut centered = layout("center_horizontal");
        centered.width_at_most = true;
        assert_eq!(centered.offset_x(40.0, Some(60.0)), 14.0);
        assert_eq!(centered.offset_x(40.0, None), 4.0);
    }

    #[test]
    fn test_baseline_y() {
        // line height 10, container height 26
        assert_eq!(layout("top").baseline_y(&METRICS), 9.0);
        assert_eq!(layout("bottom").baseline_y(&METRICS), 25.0);
        assert_eq!(layout("center_vertical").baseline_y(&METRICS), 17.0);
    }

    #[test]
    fn test_measure_spec() {
        assert_eq!(MeasureSpec::Exactly(50.0).resolve(80.0), 50.0);
        assert_eq!(MeasureSpec::AtMost(50.0).resolve(80.0), 50.0);
        assert_eq!(MeasureSpec::AtMost(50.0).resolve(20.0), 20.0);
        assert_eq!(MeasureSpec::Unspecified.resolve(20.0), 20.0);
        assert!(MeasureSpec::AtMost(1.0).is_at_most());
    }
}
