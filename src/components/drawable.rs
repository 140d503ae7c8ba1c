//! The "can be drawn" capability and its two primitive shapes.
//!
//! - [`RectShape`] – a flat-colour rectangle fill
//! - [`Picture`] – a sprite-sheet image, optionally clipped to a source region
//!
//! [`Sprite`](super::sprite::Sprite) builds one of these every frame and
//! hands it the surface.

use crate::components::geometry::Rect;
use crate::components::sprite::SpriteSheet;
use crate::surface::{Color, PaintSurface};

/// Anything that can paint itself onto a surface.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn PaintSurface);
}

/// Flat-colour rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub dest: Rect,
    pub color: Color,
}

impl RectShape {
    pub fn new(dest: Rect, color: Color) -> Self {
        Self { dest, color }
    }
}

impl Drawable for RectShape {
    fn draw(&self, surface: &mut dyn PaintSurface) {
        surface.fill_rect(self.dest, self.color);
    }
}

/// Image region drawn into a destination rectangle.
///
/// With `src` set only that region of the sheet is copied (sheet slicing);
/// without it the whole image is stretched into `dest`.
#[derive(Debug, Clone, Copy)]
pub struct Picture<'a> {
    pub sheet: &'a SpriteSheet,
    pub src: Option<Rect>,
    pub dest: Rect,
}

impl Drawable for Picture<'_> {
    fn draw(&self, surface: &mut dyn PaintSurface) {
        surface.draw_image(self.sheet, self.src, self.dest);
    }
}
