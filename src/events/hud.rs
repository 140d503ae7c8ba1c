//! HUD notifications.
//!
//! Systems never talk to the HUD directly: they write a [`HudEvent`] into the
//! ECS `Messages<HudEvent>` mailbox and the match drains it into whatever
//! [`Hud`] the driver supplied once the schedule has run.

use bevy_ecs::message::Message;
use log::info;

use crate::components::fighter::Slot;
use crate::resources::matchstatus::Outcome;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum HudEvent {
    /// Health bar width, 0..=100.
    Health { slot: Slot, percent: f32 },
    /// Seconds left on the countdown.
    Timer(u32),
    Outcome(Outcome),
}

/// Display surface for health bars, the timer and the final banner.
pub trait Hud {
    fn set_health(&mut self, slot: Slot, percent: f32);
    fn set_timer(&mut self, seconds: u32);
    fn show_outcome(&mut self, outcome: &Outcome);
}

/// Forward a batch of events in order.
pub fn dispatch(events: impl IntoIterator<Item = HudEvent>, hud: &mut dyn Hud) {
    for event in events {
        match event {
            HudEvent::Health { slot, percent } => hud.set_health(slot, percent),
            HudEvent::Timer(seconds) => hud.set_timer(seconds),
            HudEvent::Outcome(outcome) => hud.show_outcome(&outcome),
        }
    }
}

/// HUD that keeps the latest values and logs every change.
#[derive(Debug, Clone)]
pub struct HudLog {
    pub health: [f32; 2],
    pub timer: Option<u32>,
    pub outcome: Option<Outcome>,
    pub history: Vec<HudEvent>,
}

impl Default for HudLog {
    fn default() -> Self {
        HudLog {
            health: [100.0, 100.0],
            timer: None,
            outcome: None,
            history: Vec::new(),
        }
    }
}

impl HudLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hud for HudLog {
    fn set_health(&mut self, slot: Slot, percent: f32) {
        self.health[slot.index()] = percent;
        self.history.push(HudEvent::Health { slot, percent });
        info!("{} health {}%", slot, percent);
    }

    fn set_timer(&mut self, seconds: u32) {
        self.timer = Some(seconds);
        self.history.push(HudEvent::Timer(seconds));
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        self.outcome = Some(*outcome);
        self.history.push(HudEvent::Outcome(*outcome));
        info!("{}", outcome);
    }
}
