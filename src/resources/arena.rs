//! Arena dimensions and physics constants.

use bevy_ecs::prelude::Resource;

use crate::error::FightError;

/// Playfield size plus the constants fighter physics reads every tick.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Distance from the bottom edge to the ground line.
    pub ground_margin: f32,
    pub rest_y: f32,
    /// Unbounded; falling speed keeps growing while airborne.
    pub gravity: f32,
    pub run_speed: f32,
    pub jump_velocity: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Arena {
            width: 1024.0,
            height: 576.0,
            ground_margin: 96.0,
            rest_y: 330.0,
            gravity: 0.7,
            run_speed: 5.0,
            jump_velocity: 20.0,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32, ground_margin: f32) -> Result<Self, FightError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(FightError::InvalidConfiguration(format!(
                "arena must have a positive area, got {width}x{height}"
            )));
        }
        if ground_margin < 0.0 || ground_margin >= height {
            return Err(FightError::InvalidConfiguration(format!(
                "ground margin {ground_margin} does not fit an arena {height} high"
            )));
        }
        Ok(Arena {
            width,
            height,
            ground_margin,
            ..Arena::default()
        })
    }

    /// `y` where feet touch the ground.
    pub fn ground_line(&self) -> f32 {
        self.height - self.ground_margin
    }
}
