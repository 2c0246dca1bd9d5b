//! Loading placeholder shown while a request is in flight.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::ui::theme::{blend, SKELETON_BASE, SKELETON_WAVE};

/// Width of the highlight band in columns.
const WAVE_WIDTH: u16 = 12;

/// Rectangular skeleton with a highlight band sweeping left to right.
pub struct Skeleton {
    frame: u64,
}

impl Skeleton {
    /// `frame` advances once per tick.
    pub fn new(frame: u64) -> Self {
        Self { frame }
    }

    fn wave_center(&self, width: u16) -> i32 {
        let period = width as u64 + WAVE_WIDTH as u64 * 2;
        (self.frame * 3 % period.max(1)) as i32 - WAVE_WIDTH as i32
    }
}

impl Widget for Skeleton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let center = self.wave_center(area.width);
        for col in 0..area.width {
            let distance = (col as i32 - center).unsigned_abs() as f32;
            let strength = 1.0 - (distance / WAVE_WIDTH as f32).min(1.0);
            let color = blend(SKELETON_BASE, SKELETON_WAVE, strength);
            for row in 0..area.height {
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }
    }
}
