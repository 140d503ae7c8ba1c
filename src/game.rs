//! One match between two fighters.
//!
//! [`Match`] owns the ECS world (both fighters, the scenery layers and the
//! match resources) and the schedule that advances it. The driver loop
//! calls [`Match::tick`] once per frame and [`Match::advance_clock`] with
//! the wall-clock delta; both stop doing anything once the match is over.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use log::info;

use crate::components::controller::Controller;
use crate::components::fighter::{Fighter, Slot};
use crate::error::FightError;
use crate::events::hud::{Hud, HudEvent, dispatch};
use crate::events::input::{FighterAction, InputSource};
use crate::resources::countdown::Countdown;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::matchstatus::{MatchStatus, Outcome};
use crate::resources::roster::Roster;
use crate::resources::sheetloader::SheetLoader;
use crate::resources::worldtime::WorldTime;
use crate::surface::PaintSurface;
use crate::systems::animation::{advance_scenery, fighter_animation};
use crate::systems::combat::resolve_combat;
use crate::systems::input::apply_input_events;
use crate::systems::matchflow::{check_knockout, countdown_tick};
use crate::systems::movement::{fighter_intent, fighter_physics};
use crate::systems::render::render_pass;
use crate::systems::time::{count_frame, update_world_time};

pub struct Match {
    world: World,
    schedule: Schedule,
    fighters: [Entity; 2],
}

impl Match {
    /// Build the world from settings and a roster, loading every sheet.
    pub fn new(
        config: &GameConfig,
        roster: &Roster,
        loader: &mut dyn SheetLoader,
    ) -> Result<Self, FightError> {
        roster.validate()?;
        let arena = config.arena()?;

        let mut world = World::new();
        world.insert_resource(arena);
        world.insert_resource(WorldTime::default());
        world.insert_resource(MatchStatus::new());
        world.insert_resource(Countdown::new(config.duration));
        world.insert_resource(Messages::<HudEvent>::default());

        for layer in &roster.scenery {
            let (sprite, z) = layer.build(&arena, loader)?;
            world.spawn((sprite, z));
        }

        let mut input = InputState::new();
        let mut fighters = Vec::with_capacity(2);
        for (def, slot) in roster.fighters.iter().zip([Slot::One, Slot::Two]) {
            let fighter = def.build(loader)?;
            let controls = &def.controls;
            input.bind(controls.left.as_str(), slot, FighterAction::Left);
            input.bind(controls.right.as_str(), slot, FighterAction::Right);
            input.bind(controls.jump.as_str(), slot, FighterAction::Jump);
            input.bind(controls.attack.as_str(), slot, FighterAction::Attack);
            info!("{}: {}", slot, fighter.name);
            fighters.push(world.spawn((fighter, slot, Controller::new())).id());
        }
        world.insert_resource(input);
        let fighters: [Entity; 2] = fighters.try_into().map_err(|_| {
            FightError::InvalidConfiguration("a match needs exactly two fighters".to_string())
        })?;

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        schedule.add_systems(
            (
                count_frame,
                apply_input_events,
                advance_scenery,
                fighter_intent,
                fighter_physics,
                fighter_animation,
                resolve_combat,
                check_knockout,
            )
                .chain(),
        );

        info!(
            "Match ready: {}x{} arena, {}s on the clock",
            arena.width, arena.height, config.duration
        );
        Ok(Match {
            world,
            schedule,
            fighters,
        })
    }

    /// Run one frame: input, simulation, then the render pass.
    ///
    /// Returns whether the match is still running afterwards; once it has
    /// ended further calls do nothing and return `false`.
    pub fn tick(
        &mut self,
        input: &mut dyn InputSource,
        surface: &mut dyn PaintSurface,
        hud: &mut dyn Hud,
    ) -> bool {
        if !self.is_running() {
            return false;
        }
        let events = input.poll();
        self.world.resource_mut::<InputState>().queue(events);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
        render_pass(&mut self.world, surface);
        self.flush_hud(hud);
        self.is_running()
    }

    /// Draw the current state without advancing anything.
    pub fn render(&mut self, surface: &mut dyn PaintSurface) {
        render_pass(&mut self.world, surface);
    }

    /// Feed `dt` seconds of wall-clock time; fires one countdown tick per
    /// whole second accumulated.
    pub fn advance_clock(&mut self, dt: f32, hud: &mut dyn Hud) {
        let fired = update_world_time(&mut self.world, dt);
        for _ in 0..fired {
            self.timer_tick(hud);
        }
    }

    /// One countdown second. Resolves the match when it reaches zero.
    pub fn timer_tick(&mut self, hud: &mut dyn Hud) {
        countdown_tick(&mut self.world);
        self.flush_hud(hud);
    }

    fn flush_hud(&mut self, hud: &mut dyn Hud) {
        let events: Vec<HudEvent> = self
            .world
            .resource_mut::<Messages<HudEvent>>()
            .drain()
            .collect();
        dispatch(events, hud);
    }

    /// Flip debug outlines on or off. Returns the new setting.
    pub fn toggle_debug(&mut self) -> bool {
        if self.world.contains_resource::<DebugMode>() {
            self.world.remove_resource::<DebugMode>();
            info!("Debug mode off");
            false
        } else {
            self.world.insert_resource(DebugMode::default());
            info!("Debug mode on");
            true
        }
    }

    pub fn is_running(&self) -> bool {
        self.world.resource::<MatchStatus>().is_fighting()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.world.resource::<MatchStatus>().outcome()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.world.resource::<Countdown>().remaining
    }

    pub fn frame_count(&self) -> u64 {
        self.world.resource::<WorldTime>().frame_count
    }

    pub fn fighter(&self, slot: Slot) -> Option<&Fighter> {
        self.world.get::<Fighter>(self.fighters[slot.index()])
    }

    pub fn fighter_mut(&mut self, slot: Slot) -> Option<Mut<'_, Fighter>> {
        self.world.get_mut::<Fighter>(self.fighters[slot.index()])
    }

    /// Key identifiers the roster bound, for backends that poll per key.
    pub fn bound_keys(&self) -> Vec<String> {
        self.world
            .resource::<InputState>()
            .bound_keys()
            .map(str::to_string)
            .collect()
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
