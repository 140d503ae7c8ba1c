//! Paint surface abstraction.
//!
//! Everything that draws receives a `&mut dyn PaintSurface` explicitly; no
//! component holds on to a drawing context. Two implementations exist: the
//! headless [`RecordingSurface`] used by tests and `--headless` runs, and
//! the raylib-backed surface in `frontend` (feature `window`).

use serde::{Deserialize, Serialize};

use crate::components::geometry::{Rect, Size};
use crate::components::sprite::SpriteSheet;
use crate::error::FightError;

/// RGBA colour, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const RED: Color = Color::new(230, 41, 55, 255);
    pub const GREEN: Color = Color::new(0, 228, 48, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with the alpha channel taken from a 0.0..=1.0 opacity.
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

/// Target for draw calls. Origin top-left, y grows downwards.
pub trait PaintSurface {
    /// Drawable area in pixels.
    fn size(&self) -> Size;

    /// Fill `dest` with a flat colour.
    fn fill_rect(&mut self, dest: Rect, color: Color);

    /// Outline `dest` with a flat colour.
    fn stroke_rect(&mut self, dest: Rect, color: Color);

    /// Draw `sheet` (or the `src` region of it) stretched into `dest`.
    fn draw_image(&mut self, sheet: &SpriteSheet, src: Option<Rect>, dest: Rect);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { dest: Rect, color: Color },
    Stroke { dest: Rect, color: Color },
    Image {
        key: String,
        src: Option<Rect>,
        dest: Rect,
    },
}

/// Headless surface that keeps every draw call in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Fails with [`FightError::ResourceUnavailable`] for a zero-area surface,
    /// the headless equivalent of a canvas whose context cannot be acquired.
    pub fn new(width: f32, height: f32) -> Result<Self, FightError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(FightError::ResourceUnavailable(format!(
                "cannot create a {width}x{height} paint surface"
            )));
        }
        Ok(Self {
            size: Size::new(width, height),
            commands: Vec::new(),
        })
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty for the next frame.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaintSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn fill_rect(&mut self, dest: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill { dest, color });
    }

    fn stroke_rect(&mut self, dest: Rect, color: Color) {
        self.commands.push(DrawCommand::Stroke { dest, color });
    }

    fn draw_image(&mut self, sheet: &SpriteSheet, src: Option<Rect>, dest: Rect) {
        self.commands.push(DrawCommand::Image {
            key: sheet.key.clone(),
            src,
            dest,
        });
    }
}
