//! Terminal rendering of a generated image using upper half-block cells.
//!
//! Each cell shows two vertically stacked pixels: the foreground colors the
//! upper half (`▀`), the background colors the lower half.

use std::cell::RefCell;
use std::io::Cursor;

use image::{imageops, ImageError, ImageReader, Limits, RgbaImage};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::error::PreviewError;

/// Largest accepted image side, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 4096;
/// Decoder allocation ceiling.
const MAX_DECODE_ALLOC: u64 = 128 * 1024 * 1024;

/// Decoded pixels of the displayed image.
#[derive(Debug)]
pub struct PreviewImage {
    pixels: RgbaImage,
    /// Last thumbnail, keyed by the bounds it was scaled into.
    scaled: RefCell<Option<((u32, u32), RgbaImage)>>,
}

impl PreviewImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, PreviewError> {
        let mut limits = Limits::default();
        limits.max_image_width = Some(MAX_IMAGE_SIDE);
        limits.max_image_height = Some(MAX_IMAGE_SIDE);
        limits.max_alloc = Some(MAX_DECODE_ALLOC);

        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(ImageError::from)?;
        reader.limits(limits);
        let pixels = reader.decode()?.to_rgba8();
        Ok(Self {
            pixels,
            scaled: RefCell::new(None),
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Runs `draw` with the image scaled to fit `width` x `height`, rescaling
    /// only when the bounds change.
    fn with_scaled<R>(&self, width: u32, height: u32, draw: impl FnOnce(&RgbaImage) -> R) -> R {
        let mut cache = self.scaled.borrow_mut();
        let stale = !matches!(&*cache, Some((bounds, _)) if *bounds == (width, height));
        if stale {
            let thumb = imageops::thumbnail(&self.pixels, width, height);
            *cache = Some(((width, height), thumb));
        }
        match &*cache {
            Some((_, thumb)) => draw(thumb),
            None => draw(&self.pixels),
        }
    }
}

pub struct PreviewWidget<'a> {
    image: &'a PreviewImage,
}

impl<'a> PreviewWidget<'a> {
    pub fn new(image: &'a PreviewImage) -> Self {
        Self { image }
    }
}

impl Widget for PreviewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as u32;
        let height = area.height as u32 * 2;
        if width == 0 || height == 0 {
            return;
        }

        self.image.with_scaled(width, height, |scaled| {
            for row in 0..area.height {
                for col in 0..area.width {
                    let x = col as u32;
                    let y = row as u32 * 2;
                    if x >= scaled.width() || y + 1 >= scaled.height() {
                        continue;
                    }
                    let upper = rgb(scaled.get_pixel(x, y).0);
                    let lower = rgb(scaled.get_pixel(x, y + 1).0);
                    if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                        cell.set_char('▀').set_fg(upper).set_bg(lower);
                    }
                }
            }
        });
    }
}

fn rgb([r, g, b, _]: [u8; 4]) -> Color {
    Color::Rgb(r, g, b)
}
