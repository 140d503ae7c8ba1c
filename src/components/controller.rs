//! Held-key state driving a fighter.
//!
//! Jump and attack are edge triggered and applied straight to the
//! [`Fighter`](super::fighter::Fighter) when their key goes down; left and
//! right are level triggered and read every tick from here.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controller {
    pub left_held: bool,
    pub right_held: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }
}
