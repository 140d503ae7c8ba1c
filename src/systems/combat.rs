//! Melee resolution.
//!
//! An armed attacker whose swing shows its active frame gets exactly one
//! evaluation: overlap of its hit box with the defender's body lands a hit,
//! and the attack flag is cleared either way.

use bevy_ecs::message::MessageWriter;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::fighter::{Fighter, Slot};
use crate::events::hud::HudEvent;

/// Evaluate one direction of the exchange. Returns the defender's health
/// when a hit landed.
pub fn resolve_exchange(attacker: &mut Fighter, defender: &mut Fighter) -> Option<i32> {
    if !attacker.is_attacking || !attacker.attack_frame_reached() {
        return None;
    }
    attacker.is_attacking = false;
    if attacker.hit_box.strikes(&defender.body()) {
        info!("{} hits {}", attacker.name, defender.name);
        Some(defender.take_hit())
    } else {
        debug!("{} swings and misses", attacker.name);
        None
    }
}

/// Fighter one attacks first, then fighter two.
pub fn resolve_combat(
    mut fighters: Query<(&Slot, &mut Fighter)>,
    mut hud: MessageWriter<HudEvent>,
) {
    let mut pair: Vec<_> = fighters.iter_mut().collect();
    pair.sort_by_key(|(slot, _)| **slot);
    let [(slot_one, one), (slot_two, two)] = pair.as_mut_slice() else {
        return;
    };

    if resolve_exchange(one, two).is_some() {
        hud.write(HudEvent::Health {
            slot: **slot_two,
            percent: two.health_percent(),
        });
    }
    if resolve_exchange(two, one).is_some() {
        hud.write(HudEvent::Health {
            slot: **slot_one,
            percent: one.health_percent(),
        });
    }
}
