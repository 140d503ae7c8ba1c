//! Input systems.
//!
//! [`apply_input_events`] drains the key events queued on
//! [`InputState`](crate::resources::input::InputState) this tick and routes
//! each bound key to its fighter. Jump and attack fire on key down; left and
//! right update the held flags and the last pressed direction.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::controller::Controller;
use crate::components::fighter::{Direction, Fighter, Slot};
use crate::events::input::FighterAction;
use crate::resources::arena::Arena;
use crate::resources::input::InputState;

pub fn apply_input_events(
    mut input: ResMut<InputState>,
    arena: Res<Arena>,
    mut fighters: Query<(&Slot, &mut Fighter, &mut Controller)>,
) {
    let events = input.take_pending();
    for event in events {
        let Some(binding) = input.binding(&event.key) else {
            trace!("Unbound key {:?}", event.key);
            continue;
        };
        for (slot, mut fighter, mut controller) in fighters.iter_mut() {
            if *slot != binding.slot {
                continue;
            }
            match (binding.action, event.pressed) {
                (FighterAction::Left, true) => {
                    controller.left_held = true;
                    fighter.last_direction = Direction::Left;
                }
                (FighterAction::Left, false) => controller.left_held = false,
                (FighterAction::Right, true) => {
                    controller.right_held = true;
                    fighter.last_direction = Direction::Right;
                }
                (FighterAction::Right, false) => controller.right_held = false,
                (FighterAction::Jump, true) => fighter.jump(arena.jump_velocity),
                (FighterAction::Attack, true) => fighter.attack(),
                (FighterAction::Jump | FighterAction::Attack, false) => {}
            }
        }
    }
}
