//! Fighter movement systems.
//!
//! [`fighter_intent`] turns held keys into horizontal velocity and picks the
//! run/idle/jump/fall state; [`fighter_physics`] then moves the hit box,
//! integrates position and applies gravity or the ground snap.
use bevy_ecs::prelude::*;

use crate::components::controller::Controller;
use crate::components::fighter::Fighter;
use crate::resources::arena::Arena;

pub fn fighter_intent(arena: Res<Arena>, mut query: Query<(&mut Fighter, &Controller)>) {
    for (mut fighter, controller) in query.iter_mut() {
        fighter.steer(controller.left_held, controller.right_held, arena.run_speed);
    }
}

pub fn fighter_physics(arena: Res<Arena>, mut query: Query<&mut Fighter>) {
    for mut fighter in query.iter_mut() {
        fighter.step_physics(&arena);
    }
}
