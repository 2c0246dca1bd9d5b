use ratatui::style::Color;

pub const ACCENT_START: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const ACCENT_END: Color = Color::Rgb(0x99, 0x1b, 0x1b);
pub const PANEL_BG: Color = Color::Rgb(0x1f, 0x35, 0x40);
pub const BACKDROP_DARK: Color = Color::Rgb(0x0b, 0x0f, 0x14);
pub const BACKDROP_LIGHT: Color = Color::Rgb(0x1c, 0x24, 0x2e);
pub const TITLE_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const INPUT_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const PLACEHOLDER_TEXT: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const SKELETON_BASE: Color = Color::Rgb(0x2a, 0x2f, 0x36);
pub const SKELETON_WAVE: Color = Color::Rgb(0x3d, 0x44, 0x4e);

/// Linear blend between two RGB colors, `t` in `0.0..=1.0`.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}
