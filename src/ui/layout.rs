use ratatui::layout::{Constraint, Layout, Position, Rect};

/// Width of the Generate control in the wide layout.
const BUTTON_WIDTH: u16 = 18;
/// Upper bound on the generator panel width in the wide layout.
const MAX_PANEL_WIDTH: u16 = 100;

/// Responsive layout derived from the terminal width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Single-line prompt field with the Generate control beside it.
    #[default]
    Wide,
    /// Multi-line prompt box with the Generate control below it.
    Narrow,
}

impl LayoutMode {
    /// Wide at or above the breakpoint, narrow below it.
    pub fn for_width(columns: u16, breakpoint: u16) -> Self {
        if columns >= breakpoint {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Wide)
    }
}

/// Screen regions of the generator view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRegions {
    pub title: Rect,
    pub image: Rect,
    pub prompt: Rect,
    pub button: Rect,
    pub footer: Rect,
}

pub fn view_regions(area: Rect, mode: LayoutMode) -> ViewRegions {
    let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    match mode {
        LayoutMode::Wide => {
            let width = body.width.saturating_sub(4).min(MAX_PANEL_WIDTH);
            let panel = centered_rect_by_size(body, width, body.height);
            let [title, image, _, bar] = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .areas(panel);
            let [prompt, button] =
                Layout::horizontal([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
                    .areas(bar);
            ViewRegions {
                title,
                image,
                prompt,
                button,
                footer,
            }
        }
        LayoutMode::Narrow => {
            let panel = Rect {
                x: body.x.saturating_add(1),
                y: body.y,
                width: body.width.saturating_sub(2),
                height: body.height,
            };
            let [title, image, prompt, button] = Layout::vertical([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(5),
                Constraint::Length(3),
            ])
            .areas(panel);
            ViewRegions {
                title,
                image,
                prompt,
                button,
                footer,
            }
        }
    }
}

/// Centers a `width` x `height` rectangle inside `area`, clamped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Largest area inside `area` that shows a square image, given that a cell is
/// roughly twice as tall as it is wide.
pub fn square_image_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    centered_rect_by_size(area, height.saturating_mul(2), height)
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(LayoutMode::for_width(96, 96), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_width(95, 96), LayoutMode::Narrow);
        assert_eq!(LayoutMode::for_width(200, 96), LayoutMode::Wide);
    }

    #[test]
    fn wide_places_button_beside_prompt() {
        let regions = view_regions(Rect::new(0, 0, 120, 40), LayoutMode::Wide);
        assert_eq!(regions.button.y, regions.prompt.y);
        assert_eq!(regions.button.width, BUTTON_WIDTH);
        assert!(regions.button.x > regions.prompt.x);
        assert_eq!(regions.footer.y, 39);
    }

    #[test]
    fn narrow_places_button_below_prompt() {
        let regions = view_regions(Rect::new(0, 0, 60, 40), LayoutMode::Narrow);
        assert!(regions.button.y >= regions.prompt.y + regions.prompt.height);
        assert_eq!(regions.button.width, regions.prompt.width);
    }

    #[test]
    fn square_image_rect_keeps_cell_aspect() {
        let rect = square_image_rect(Rect::new(0, 0, 100, 20));
        assert_eq!(rect.height, 20);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.x, 30);
    }

    #[test]
    fn contains_checks_bounds() {
        let rect = Rect::new(10, 5, 4, 2);
        assert!(contains(rect, 10, 5));
        assert!(contains(rect, 13, 6));
        assert!(!contains(rect, 14, 6));
        assert!(!contains(rect, 9, 5));
    }
}
