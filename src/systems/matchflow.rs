//! Match end conditions.
//!
//! - [`check_knockout`] ends the match as soon as either fighter's health
//!   reaches zero and stops the countdown.
//! - [`countdown_tick`] takes a second off the countdown and, when it hits
//!   zero, ends the match on health.
use bevy_ecs::message::{MessageWriter, Messages};
use bevy_ecs::prelude::*;
use log::info;

use crate::components::fighter::{Fighter, Slot};
use crate::events::hud::HudEvent;
use crate::resources::countdown::Countdown;
use crate::resources::matchstatus::{MatchStatus, Outcome};

/// Health of fighter one and fighter two, in that order.
fn healths<'a>(fighters: impl Iterator<Item = (&'a Slot, &'a Fighter)>) -> (i32, i32) {
    let mut health = (0, 0);
    for (slot, fighter) in fighters {
        match slot {
            Slot::One => health.0 = fighter.health,
            Slot::Two => health.1 = fighter.health,
        }
    }
    health
}

fn finish(
    status: &mut MatchStatus,
    countdown: &mut Countdown,
    hud: &mut MessageWriter<HudEvent>,
    outcome: Outcome,
) {
    if status.finish(outcome) {
        countdown.cancel();
        hud.write(HudEvent::Outcome(outcome));
        info!("Match over: {}", outcome);
    }
}

pub fn check_knockout(
    fighters: Query<(&Slot, &Fighter)>,
    mut status: ResMut<MatchStatus>,
    mut countdown: ResMut<Countdown>,
    mut hud: MessageWriter<HudEvent>,
) {
    if !status.is_fighting() {
        return;
    }
    let (one, two) = healths(fighters.iter());
    if one <= 0 || two <= 0 {
        finish(&mut status, &mut countdown, &mut hud, Outcome::decide(one, two));
    }
}

/// One countdown second. No-op once the match is over or the countdown stopped.
///
/// A countdown that is already at zero resolves the match straight away.
pub fn countdown_tick(world: &mut World) {
    if !world.resource::<MatchStatus>().is_fighting() {
        return;
    }
    let (ticked, expired) = {
        let mut countdown = world.resource_mut::<Countdown>();
        if countdown.cancelled {
            return;
        }
        (countdown.decrement(), countdown.is_expired())
    };
    if let Some(remaining) = ticked {
        world
            .resource_mut::<Messages<HudEvent>>()
            .write(HudEvent::Timer(remaining));
    }
    if !expired {
        return;
    }

    let (one, two) = {
        let mut q = world.query::<(&Slot, &Fighter)>();
        healths(q.iter(world))
    };
    let outcome = Outcome::decide(one, two);
    if world.resource_mut::<MatchStatus>().finish(outcome) {
        world.resource_mut::<Countdown>().cancel();
        world
            .resource_mut::<Messages<HudEvent>>()
            .write(HudEvent::Outcome(outcome));
        info!("Time up: {}", outcome);
    }
}
