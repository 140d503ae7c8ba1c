//! Visual states of a fighter and the sheets that back them.

use std::fmt;
use std::num::NonZeroUsize;

use crate::components::sprite::SpriteSheet;
use crate::error::FightError;

/// The seven visual states every fighter has art for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FighterState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Attack1,
    TakeHit,
    Death,
}

impl FighterState {
    pub const ALL: [FighterState; 7] = [
        FighterState::Idle,
        FighterState::Run,
        FighterState::Jump,
        FighterState::Fall,
        FighterState::Attack1,
        FighterState::TakeHit,
        FighterState::Death,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FighterState::Idle => "idle",
            FighterState::Run => "run",
            FighterState::Jump => "jump",
            FighterState::Fall => "fall",
            FighterState::Attack1 => "attack1",
            FighterState::TakeHit => "takeHit",
            FighterState::Death => "death",
        }
    }

    /// States that must play to their last frame before another is accepted.
    pub fn is_committed(self) -> bool {
        matches!(self, FighterState::Attack1 | FighterState::TakeHit)
    }
}

impl fmt::Display for FighterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sprite sheet laid out as a horizontal strip of `frames` frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSheet {
    pub sheet: SpriteSheet,
    pub frames: NonZeroUsize,
}

impl AnimatedSheet {
    pub fn new(sheet: SpriteSheet, frames: usize) -> Result<Self, FightError> {
        let frames = NonZeroUsize::new(frames).ok_or_else(|| {
            FightError::InvalidConfiguration(format!(
                "sheet '{}' must have at least one frame",
                sheet.key
            ))
        })?;
        Ok(Self { sheet, frames })
    }
}

/// One [`AnimatedSheet`] per [`FighterState`].
#[derive(Debug, Clone, PartialEq)]
pub struct StateBank {
    pub idle: AnimatedSheet,
    pub run: AnimatedSheet,
    pub jump: AnimatedSheet,
    pub fall: AnimatedSheet,
    pub attack1: AnimatedSheet,
    pub take_hit: AnimatedSheet,
    pub death: AnimatedSheet,
}

impl StateBank {
    pub fn get(&self, state: FighterState) -> &AnimatedSheet {
        match state {
            FighterState::Idle => &self.idle,
            FighterState::Run => &self.run,
            FighterState::Jump => &self.jump,
            FighterState::Fall => &self.fall,
            FighterState::Attack1 => &self.attack1,
            FighterState::TakeHit => &self.take_hit,
            FighterState::Death => &self.death,
        }
    }
}
