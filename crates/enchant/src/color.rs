//! ARGB paint colors to terminal colors.

use enchant_core::Argb;
use ratatui::style::Color;

/// Opaque RGB part of a color, ignoring alpha
pub fn to_rgb(color: Argb) -> Color {
    Color::Rgb(color.red(), color.green(), color.blue())
}

/// Blend two colors using alpha (0.0 = bg, 1.0 = fg).
pub fn blend_colors(bg: Color, fg: Color, alpha: f32) -> Option<Color> {
    let (Color::Rgb(br, bgreen, bb), Color::Rgb(fr, fgreen, fb)) = (bg, fg) else {
        return None;
    };
    let a = alpha.clamp(0.0, 1.0);
    let blend = |b: u8, f: u8| -> u8 { (b as f32 * (1.0 - a) + f as f32 * a).round() as u8 };
    Some(Color::Rgb(
        blend(br, fr),
        blend(bgreen, fgreen),
        blend(bb, fb),
    ))
}

/// Terminal color for a glyph painted with `fg` over an opaque `bg`.
///
/// Terminals have no alpha channel, so a translucent glyph is flattened
/// against the background it sits on.
pub fn composite(fg: Argb, bg: Argb) -> Color {
    let alpha = fg.alpha() as f32 / 255.0;
    blend_colors(to_rgb(bg), to_rgb(fg), alpha).unwrap_or_else(|| to_rgb(fg))
}
