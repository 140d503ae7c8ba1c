//! Drawable, optionally animated visual entity.
//!
//! A [`Sprite`] is placed at `position` and drawn at `position - render_offset`
//! so that art with padding around the character lines up with the
//! gameplay body. It draws in one of three modes:
//!
//! 1. sheet + [`Animation`] – the current frame's column of the sheet
//! 2. sheet only – the whole image
//! 3. no sheet – a flat `fill` rectangle of `base_size`
//!
//! The third mode lets plain colour layers (backdrop, overlays) share the
//! entity type with the animated art.

use bevy_ecs::prelude::Component;

use crate::components::animation::{ANIMATION, Animation};
use crate::components::composable::{Composable, Updatable};
use crate::components::drawable::{Drawable, Picture, RectShape};
use crate::components::geometry::{Rect, Size, Vector};
use crate::surface::{Color, PaintSurface};

/// Opaque handle to a loaded image plus its native size in pixels.
///
/// The size is zero while the image is unavailable; draw math then yields
/// zero-size regions instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    /// Key the paint surface resolves to an actual texture (the asset path).
    pub key: String,
    pub width: f32,
    pub height: f32,
}

impl SpriteSheet {
    pub fn new(key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_loaded(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Component, Debug)]
pub struct Sprite {
    pub position: Vector,
    pub render_offset: Vector,
    pub base_size: Size,
    pub scale: f32,
    pub sheet: Option<SpriteSheet>,
    /// Colour used when there is no sheet to draw.
    pub fill: Color,
    components: Composable,
}

impl Sprite {
    /// Image sprite without animation.
    pub fn new(position: Vector, sheet: SpriteSheet) -> Self {
        Self {
            position,
            render_offset: Vector::ZERO,
            base_size: Size::default(),
            scale: 1.0,
            sheet: Some(sheet),
            fill: Color::TRANSPARENT,
            components: Composable::new(),
        }
    }

    /// Flat colour rectangle.
    pub fn solid(position: Vector, size: Size, fill: Color) -> Self {
        Self {
            position,
            render_offset: Vector::ZERO,
            base_size: size,
            scale: 1.0,
            sheet: None,
            fill,
            components: Composable::new(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, render_offset: Vector) -> Self {
        self.render_offset = render_offset;
        self
    }

    pub fn with_base_size(mut self, base_size: Size) -> Self {
        self.base_size = base_size;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.set_animation(animation);
        self
    }

    /// Attach or replace the animation part.
    pub fn set_animation(&mut self, animation: Animation) {
        self.components.insert(ANIMATION, animation);
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.components.get::<Animation>(ANIMATION)
    }

    /// Advance every attached part.
    pub fn update(&mut self) {
        self.components.update();
    }

    /// Advance every attached part, then draw.
    pub fn update_and_draw(&mut self, surface: &mut dyn PaintSurface) {
        self.update();
        self.draw(surface);
    }

    /// Top-left corner on the surface.
    pub fn draw_origin(&self) -> Vector {
        self.position - self.render_offset
    }

    /// Width of a single frame in sheet pixels.
    pub fn frame_width(&self) -> f32 {
        match (&self.sheet, self.animation()) {
            (Some(sheet), Some(anim)) => sheet.width / anim.frame_count() as f32,
            (Some(sheet), None) => sheet.width,
            (None, _) => self.base_size.width,
        }
    }

    /// Region of the sheet shown this frame, `None` when the whole image is used.
    pub fn source_rect(&self) -> Option<Rect> {
        let sheet = self.sheet.as_ref()?;
        let anim = self.animation()?;
        let frame_width = sheet.width / anim.frame_count() as f32;
        Some(Rect::new(
            anim.current_frame() as f32 * frame_width,
            0.0,
            frame_width,
            sheet.height,
        ))
    }

    /// Where the sprite lands on the surface.
    pub fn dest_rect(&self) -> Rect {
        let origin = self.draw_origin();
        match &self.sheet {
            Some(sheet) => {
                let size = Size::new(self.frame_width(), sheet.height).scaled(self.scale);
                Rect::from_parts(origin, size)
            }
            None => Rect::from_parts(origin, self.base_size),
        }
    }
}

impl Drawable for Sprite {
    fn draw(&self, surface: &mut dyn PaintSurface) {
        let dest = self.dest_rect();
        match &self.sheet {
            Some(sheet) => Picture {
                sheet,
                src: self.source_rect(),
                dest,
            }
            .draw(surface),
            None => RectShape::new(dest, self.fill).draw(surface),
        }
    }
}
