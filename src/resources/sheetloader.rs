//! Sprite sheet loading.
//!
//! Loading is tolerant: a sheet that cannot be read comes back with zero
//! size and the match still runs, drawing nothing for it.

use log::debug;
use rustc_hash::FxHashMap;

use crate::components::geometry::Size;
use crate::components::sprite::SpriteSheet;

/// Resolves an image path to a [`SpriteSheet`].
pub trait SheetLoader {
    fn load(&mut self, path: &str) -> SpriteSheet;
}

/// Headless loader that reports configured sizes without touching the disk.
#[derive(Debug, Clone, Default)]
pub struct FixedSizeLoader {
    sizes: FxHashMap<String, Size>,
    fallback: Size,
}

impl FixedSizeLoader {
    /// Every unknown path loads with `fallback` size.
    pub fn new(fallback: Size) -> Self {
        FixedSizeLoader {
            sizes: FxHashMap::default(),
            fallback,
        }
    }

    /// Every unknown path loads as an unavailable (zero-size) sheet.
    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, path: impl Into<String>, size: Size) -> Self {
        self.sizes.insert(path.into(), size);
        self
    }
}

impl SheetLoader for FixedSizeLoader {
    fn load(&mut self, path: &str) -> SpriteSheet {
        let size = self.sizes.get(path).copied().unwrap_or(self.fallback);
        debug!("Sheet '{}' sized {}x{}", path, size.width, size.height);
        SpriteSheet::new(path, size.width, size.height)
    }
}
