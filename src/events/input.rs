//! Key events and the input source they are polled from.
//!
//! Keys are named with browser-style identifiers (`"a"`, `" "`,
//! `"ArrowLeft"`), so a roster file reads the same whatever backend
//! produces the events. [`InputState`](crate::resources::input::InputState)
//! maps each identifier to a fighter and a [`FighterAction`].

use std::collections::VecDeque;

/// What a bound key does for its fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FighterAction {
    /// Held: run left.
    Left,
    /// Held: run right.
    Right,
    /// Pressed: vertical impulse.
    Jump,
    /// Pressed: start a swing.
    Attack,
}

/// One key going down or up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn press(key: impl Into<String>) -> Self {
        KeyEvent {
            key: key.into(),
            pressed: true,
        }
    }

    pub fn release(key: impl Into<String>) -> Self {
        KeyEvent {
            key: key.into(),
            pressed: false,
        }
    }
}

/// Anything that can report the key events since it was last polled.
pub trait InputSource {
    fn poll(&mut self) -> Vec<KeyEvent>;
}

/// Scripted input: events are queued up front and handed out on the next poll.
#[derive(Debug, Default, Clone)]
pub struct QueuedInput {
    queue: VecDeque<KeyEvent>,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: impl Into<String>) -> &mut Self {
        self.queue.push_back(KeyEvent::press(key));
        self
    }

    pub fn release(&mut self, key: impl Into<String>) -> &mut Self {
        self.queue.push_back(KeyEvent::release(key));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Vec<KeyEvent> {
        self.queue.drain(..).collect()
    }
}
