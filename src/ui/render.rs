use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::generator::{DisplayedImage, GeneratorState};
use crate::ui::layout::{square_image_rect, view_regions, LayoutMode};
use crate::ui::preview::PreviewWidget;
use crate::ui::shell::Backdrop;
use crate::ui::skeleton::Skeleton;
use crate::ui::theme::{
    blend, ACCENT_END, ACCENT_START, GLOBAL_BORDER, INPUT_TEXT, PANEL_BG, PLACEHOLDER_TEXT,
    TITLE_TEXT,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const WIDE_PLACEHOLDER: &str = "Describe your image";
const NARROW_PLACEHOLDER: &str = "Describe your image...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    frame.render_widget(Backdrop, area);

    let layout = app.layout();
    let regions = view_regions(area, layout);

    frame.render_widget(title(layout), regions.title);
    draw_image(frame, regions.image, app);
    draw_prompt(frame, regions.prompt, app.state());
    frame.render_widget(GenerateButton::new(app.state()).widget(regions.button), regions.button);
    frame.render_widget(Footer::new(layout).widget(regions.footer), regions.footer);
}

fn title(layout: LayoutMode) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        "AI Image ",
        Style::default().fg(TITLE_TEXT).add_modifier(Modifier::BOLD),
    )];
    let word = "Generator";
    let last = (word.chars().count() - 1) as f32;
    for (idx, ch) in word.chars().enumerate() {
        spans.push(Span::styled(
            ch.to_string(),
            Style::default()
                .fg(blend(ACCENT_START, ACCENT_END, idx as f32 / last))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let lines = match layout {
        // Vertically centered within the three title rows.
        LayoutMode::Wide => vec![Line::from(""), Line::from(spans)],
        LayoutMode::Narrow => vec![Line::from(spans)],
    };
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn draw_image(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.state();
    let image_area = square_image_rect(area);

    if state.is_busy() {
        frame.render_widget(Skeleton::new(app.frame()), image_area);
        return;
    }

    match (&state.image, app.preview()) {
        (DisplayedImage::Generated { .. }, Some(preview)) => {
            frame.render_widget(PreviewWidget::new(preview), image_area);
        }
        (DisplayedImage::Generated { url }, None) => {
            let text = Text::from(vec![
                Line::from(""),
                Line::styled("Image ready", Style::default().fg(TITLE_TEXT)),
                Line::from(""),
                Line::styled(url.clone(), Style::default().fg(PLACEHOLDER_TEXT)),
            ]);
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: false })
                    .block(image_frame()),
                image_area,
            );
        }
        (DisplayedImage::Placeholder, _) => {
            let text = Text::from(vec![
                Line::from(""),
                Line::styled("🖼", Style::default().fg(TITLE_TEXT)),
                Line::from(""),
                Line::styled(
                    "Your image will appear here",
                    Style::default().fg(PLACEHOLDER_TEXT),
                ),
            ]);
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(image_frame()),
                image_area,
            );
        }
    }
}

fn image_frame() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .style(Style::default().bg(PANEL_BG))
}

fn draw_prompt(frame: &mut Frame<'_>, area: Rect, state: &GeneratorState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .style(Style::default().bg(PANEL_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if state.prompt.is_empty() {
        let placeholder = match state.layout {
            LayoutMode::Wide => WIDE_PLACEHOLDER,
            LayoutMode::Narrow => NARROW_PLACEHOLDER,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(placeholder, Style::default().fg(PLACEHOLDER_TEXT))),
            inner,
        );
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    // Leave one column for the cursor.
    let width = inner.width.saturating_sub(1).max(1) as usize;
    let lines = match state.layout {
        LayoutMode::Wide => vec![tail(&state.prompt, width)],
        LayoutMode::Narrow => {
            let wrapped = wrap_lines(&state.prompt, width);
            let skip = wrapped.len().saturating_sub(inner.height as usize);
            wrapped.into_iter().skip(skip).collect()
        }
    };

    let cursor_row = lines.len().saturating_sub(1) as u16;
    let cursor_col = lines.last().map(|line| line.width()).unwrap_or(0) as u16;
    let text: Vec<Line> = lines
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(INPUT_TEXT)))
        .collect();
    frame.render_widget(Paragraph::new(text), inner);
    frame.set_cursor_position((inner.x + cursor_col, inner.y + cursor_row));
}

/// Longest suffix of a single-line prompt that fits in `width` cells.
fn tail(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut kept: Vec<char> = text
        .chars()
        .rev()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect();
    kept.reverse();
    kept.into_iter().collect()
}

/// Splits on newlines, then hard-wraps each line at `width` display cells.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;
        for ch in raw.chars() {
            let cells = ch.width().unwrap_or(0);
            if used + cells > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(ch);
            used += cells;
        }
        lines.push(line);
    }
    lines
}

struct GenerateButton {
    enabled: bool,
    busy: bool,
}

impl GenerateButton {
    fn new(state: &GeneratorState) -> Self {
        Self {
            enabled: state.can_submit(),
            busy: state.is_busy(),
        }
    }

    fn label(&self) -> &'static str {
        if self.busy {
            "Generating…"
        } else {
            "Generate"
        }
    }

    fn widget(&self, area: Rect) -> Paragraph<'static> {
        let width = area.width.max(1) as usize;
        let label = self.label();
        let left = width.saturating_sub(label.chars().count()) / 2;
        let labelled: String = std::iter::repeat(' ')
            .take(left)
            .chain(label.chars())
            .chain(std::iter::repeat(' '))
            .take(width)
            .collect();
        let blank = " ".repeat(width);

        let middle = area.height as usize / 2;
        let lines: Vec<Line> = (0..area.height as usize)
            .map(|row| {
                let content = if row == middle { &labelled } else { &blank };
                self.gradient_row(content)
            })
            .collect();
        Paragraph::new(lines)
    }

    /// Left-to-right accent gradient, faded into the panel when inert.
    fn gradient_row(&self, content: &str) -> Line<'static> {
        let last = content.chars().count().saturating_sub(1).max(1) as f32;
        let mut style = Style::default().fg(INPUT_TEXT).add_modifier(Modifier::BOLD);
        if !self.enabled {
            style = style.add_modifier(Modifier::DIM);
        }
        let spans: Vec<Span> = content
            .chars()
            .enumerate()
            .map(|(idx, ch)| {
                let mut bg = blend(ACCENT_START, ACCENT_END, idx as f32 / last);
                if !self.enabled {
                    bg = blend(bg, PANEL_BG, 0.4);
                }
                Span::styled(ch.to_string(), style.bg(bg))
            })
            .collect();
        Line::from(spans)
    }
}
