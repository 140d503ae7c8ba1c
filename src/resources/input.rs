//! Key binding table and pending key events.
//!
//! Captures the key events polled this tick and the table that routes each
//! key identifier to a fighter. Unbound keys are ignored.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::components::fighter::Slot;
use crate::events::input::{FighterAction, KeyEvent};

/// Where a key is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub slot: Slot,
    pub action: FighterAction,
}

/// Resource holding the binding table and the events waiting to be applied.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    bindings: FxHashMap<String, Binding>,
    pending: SmallVec<[KeyEvent; 8]>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route `key` to `slot`/`action`, returning the binding it replaced.
    pub fn bind(
        &mut self,
        key: impl Into<String>,
        slot: Slot,
        action: FighterAction,
    ) -> Option<Binding> {
        self.bindings.insert(key.into(), Binding { slot, action })
    }

    pub fn binding(&self, key: &str) -> Option<Binding> {
        self.bindings.get(key).copied()
    }

    /// Every bound key identifier, in no particular order.
    pub fn bound_keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn queue(&mut self, events: impl IntoIterator<Item = KeyEvent>) {
        self.pending.extend(events);
    }

    /// Take the events queued since the last call.
    pub fn take_pending(&mut self) -> SmallVec<[KeyEvent; 8]> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
