//! Animation systems.
//!
//! Scenery layers and fighters own their [`Animation`](crate::components::animation::Animation)
//! inside their sprite; these systems just tick it once per frame. Drawing
//! happens later in the render pass, so a frame shown on screen is always
//! the one combat was evaluated against.

use bevy_ecs::prelude::*;

use crate::components::fighter::Fighter;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;

/// Advance every scenery layer.
pub fn advance_scenery(mut layers: Query<&mut Sprite, With<ZIndex>>) {
    for mut sprite in layers.iter_mut() {
        sprite.update();
    }
}

/// Advance every fighter that is still alive.
pub fn fighter_animation(mut fighters: Query<&mut Fighter>) {
    for mut fighter in fighters.iter_mut() {
        fighter.update();
    }
}
