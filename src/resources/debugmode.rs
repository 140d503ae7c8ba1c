//! Debug toggle resource.
//!
//! The mere presence of this resource makes the render pass outline every
//! fighter body and hit box. Remove it to disable debug rendering.

use bevy_ecs::prelude::Resource;

use crate::surface::Color;

/// Marker resource carrying the outline colours.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {
    pub body_color: Color,
    pub hit_box_color: Color,
}

impl Default for DebugMode {
    fn default() -> Self {
        DebugMode {
            body_color: Color::GREEN,
            hit_box_color: Color::RED,
        }
    }
}
