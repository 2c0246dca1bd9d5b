use crate::ui::layout::LayoutMode;
use crate::ui::theme::TITLE_TEXT;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    layout: LayoutMode,
}

impl Footer {
    pub fn new(layout: LayoutMode) -> Self {
        Self { layout }
    }

    pub fn hints(&self) -> &'static str {
        match self.layout {
            LayoutMode::Wide => " Enter: Generate │ Ctrl+U: Clear │ Esc: Quit",
            LayoutMode::Narrow => " Enter: Generate │ Alt+Enter: New line │ Esc: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let padding = (area.width as usize)
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TITLE_TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]))
    }
}
