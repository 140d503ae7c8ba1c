//! Paint order of scenery layers.
//!
//! Layers are drawn in ascending [`ZIndex`]; fighters are always painted
//! after every layer.

use bevy_ecs::prelude::Component;

/// Higher values are painted later (on top).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
