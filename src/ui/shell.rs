//! Full-screen decorative backdrop behind the generator view.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::ui::theme::{blend, BACKDROP_DARK, BACKDROP_LIGHT};

/// Diagonal gradient field. Stateless.
pub struct Backdrop;

impl Widget for Backdrop {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let span = (area.width as f32 + area.height as f32 * 2.0).max(1.0);
        for row in 0..area.height {
            for col in 0..area.width {
                let t = (col as f32 + row as f32 * 2.0) / span;
                // Brightest through the middle, dark at both corners.
                let glow = 1.0 - (t - 0.5).abs() * 2.0;
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(' ')
                        .set_bg(blend(BACKDROP_DARK, BACKDROP_LIGHT, glow));
                }
            }
        }
    }
}
