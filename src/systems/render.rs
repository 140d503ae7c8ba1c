use bevy_ecs::prelude::*;

use crate::components::drawable::Drawable;
use crate::components::fighter::{Fighter, Slot};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::surface::PaintSurface;

/// Paint the world onto `surface`.
///
/// Scenery layers go first in ascending [`ZIndex`], then both fighters in
/// slot order. With [`DebugMode`] present every body and hit box is
/// outlined on top.
pub fn render_pass(world: &mut World, surface: &mut dyn PaintSurface) {
    let debug = world.get_resource::<DebugMode>().copied();

    {
        // Query: (Sprite, ZIndex)
        // We'll collect, sort by z, then draw.
        let mut q = world.query::<(&Sprite, &ZIndex)>();
        let mut layers: Vec<(&Sprite, ZIndex)> = q.iter(world).map(|(s, z)| (s, *z)).collect();
        layers.sort_by_key(|(_, z)| *z);
        for (sprite, _z) in layers {
            sprite.draw(surface);
        }
    }

    let mut q = world.query::<(&Fighter, &Slot)>();
    let mut fighters: Vec<(&Fighter, Slot)> = q.iter(world).map(|(f, s)| (f, *s)).collect();
    fighters.sort_by_key(|(_, slot)| *slot);
    for (fighter, _slot) in &fighters {
        fighter.draw(surface);
    }

    if let Some(debug) = debug {
        for (fighter, _slot) in &fighters {
            surface.stroke_rect(fighter.body(), debug.body_color);
            surface.stroke_rect(fighter.hit_box.rect(), debug.hit_box_color);
        }
    }
}
