//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource and feeds the match countdown with the same scaled delta.
use bevy_ecs::prelude::*;

use crate::resources::countdown::Countdown;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled wall-clock delta in seconds. Returns how many whole
/// countdown seconds elapsed.
pub fn update_world_time(world: &mut World, dt: f32) -> u32 {
    let scaled_dt = {
        let mut wt = world.resource_mut::<WorldTime>();
        let scaled_dt = dt * wt.time_scale;
        wt.elapsed += scaled_dt;
        wt.delta = scaled_dt;
        scaled_dt
    };
    world.resource_mut::<Countdown>().accumulate(scaled_dt)
}

/// Count one simulation tick.
pub fn count_frame(mut time: ResMut<WorldTime>) {
    time.frame_count += 1;
}
