//! Frame-cycling animation state.
//!
//! An [`Animation`] does not know about time: it is advanced once per
//! rendered frame and only moves to the next sprite-sheet frame every
//! `frame_hold` calls. Owners attach it to a
//! [`Composable`](super::composable::Composable) under [`ANIMATION`] so that
//! updating the owner advances it.

use std::any::Any;
use std::num::NonZeroUsize;

use crate::components::composable::Updatable;
use crate::error::FightError;

/// Name under which entities store their animation part.
pub const ANIMATION: &str = "animation";

/// Rendered frames each sprite-sheet frame stays on screen.
pub const DEFAULT_FRAME_HOLD: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    frame_count: NonZeroUsize,
    current_frame: usize,
    looped: bool,
    paused: bool,
    elapsed_ticks: u32,
    frame_hold: u32,
}

impl Animation {
    /// Looping animation over `frame_count` frames.
    ///
    /// Fails with [`FightError::InvalidConfiguration`] when `frame_count` is zero.
    pub fn new(frame_count: usize) -> Result<Self, FightError> {
        let frames = NonZeroUsize::new(frame_count).ok_or_else(|| {
            FightError::InvalidConfiguration("animation frame count must be at least 1".into())
        })?;
        Ok(Self::with_frames(frames))
    }

    /// Looping animation over an already validated frame count.
    pub fn with_frames(frame_count: NonZeroUsize) -> Self {
        Self {
            frame_count,
            current_frame: 0,
            looped: true,
            paused: false,
            elapsed_ticks: 0,
            frame_hold: DEFAULT_FRAME_HOLD,
        }
    }

    /// Play once and hold the last frame instead of wrapping.
    pub fn once(mut self) -> Self {
        self.looped = false;
        self
    }

    /// Override how many calls to [`advance`](Self::advance) each frame lasts.
    /// A hold of zero is treated as one.
    pub fn with_frame_hold(mut self, frame_hold: u32) -> Self {
        self.frame_hold = frame_hold.max(1);
        self
    }

    /// Tick once. Every `frame_hold`-th tick moves to the next frame,
    /// wrapping when looped and freezing on the last frame otherwise.
    pub fn advance(&mut self) {
        if self.paused {
            return;
        }
        self.elapsed_ticks = self.elapsed_ticks.wrapping_add(1);
        if self.elapsed_ticks % self.frame_hold != 0 {
            return;
        }

        let next = self.current_frame + 1;
        if !self.looped && next == self.frame_count.get() {
            return;
        }
        self.current_frame = next % self.frame_count.get();
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Back to frame 0 with a fresh tick counter, un-paused.
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.elapsed_ticks = 0;
        self.resume();
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count.get()
    }

    pub fn last_frame(&self) -> usize {
        self.frame_count.get() - 1
    }

    pub fn is_last_frame(&self) -> bool {
        self.current_frame == self.last_frame()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn frame_hold(&self) -> u32 {
        self.frame_hold
    }
}

impl Updatable for Animation {
    fn update(&mut self) {
        self.advance();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
