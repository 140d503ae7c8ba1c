//! Whole-second match countdown.
//!
//! Fed with wall-clock deltas, independent of how many frames are drawn.
//! Every time a full `interval` has accumulated one second is taken off
//! `remaining`. Once cancelled the countdown never fires again.

use bevy_ecs::prelude::Resource;

use crate::error::FightError;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Countdown {
    pub remaining: u32,
    interval: f32,
    pub elapsed: f32,
    pub cancelled: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Countdown {
            remaining: seconds,
            interval: 1.0,
            elapsed: 0.0,
            cancelled: false,
        }
    }

    /// Countdown firing every `interval` seconds of fed time.
    pub fn with_interval(seconds: u32, interval: f32) -> Result<Self, FightError> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(FightError::InvalidConfiguration(format!(
                "countdown interval must be positive, got {}",
                interval
            )));
        }
        Ok(Countdown {
            interval,
            ..Countdown::new(seconds)
        })
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Accumulate `dt` seconds and return how many whole intervals elapsed.
    ///
    /// Never reports more intervals than it takes to run out; one when
    /// already at zero so the expiry still gets resolved. Non-finite
    /// deltas are ignored.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        if self.cancelled || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.elapsed += dt;
        let whole = (self.elapsed / self.interval).floor();
        if whole < 1.0 {
            return 0;
        }
        let cap = self.remaining.max(1);
        if whole >= cap as f32 {
            self.elapsed = 0.0;
            return cap;
        }
        self.elapsed = (self.elapsed - whole * self.interval).max(0.0);
        whole as u32
    }

    /// Take one second off. Returns the new value, or `None` when stopped
    /// or already at zero.
    pub fn decrement(&mut self) -> Option<u32> {
        if self.cancelled || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.remaining)
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}
