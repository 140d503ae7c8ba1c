//! High-level match state.
//!
//! A match is either still being fought or over with an [`Outcome`]. The
//! transition happens once, from a knock-out or from the countdown running
//! out; ticks stop being scheduled afterwards.

use std::fmt;

use bevy_ecs::prelude::Resource;

use crate::components::fighter::Slot;

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Tie,
    Winner(Slot),
}

impl Outcome {
    /// Equal health is a tie; otherwise the healthier fighter wins.
    pub fn decide(health_one: i32, health_two: i32) -> Self {
        match health_one.cmp(&health_two) {
            std::cmp::Ordering::Equal => Outcome::Tie,
            std::cmp::Ordering::Greater => Outcome::Winner(Slot::One),
            std::cmp::Ordering::Less => Outcome::Winner(Slot::Two),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Tie => f.write_str("Tie"),
            Outcome::Winner(slot) => write!(f, "{} Wins", slot),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchPhase {
    #[default]
    Fighting,
    Over(Outcome),
}

/// Authoritative match phase.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchStatus {
    phase: MatchPhase,
}

impl MatchStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_fighting(&self) -> bool {
        self.phase == MatchPhase::Fighting
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            MatchPhase::Fighting => None,
            MatchPhase::Over(outcome) => Some(outcome),
        }
    }

    /// End the match. Only the first call has an effect; returns whether it did.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if !self.is_fighting() {
            return false;
        }
        self.phase = MatchPhase::Over(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decide() {
        assert_eq!(Outcome::decide(100, 100), Outcome::Tie);
        assert_eq!(Outcome::decide(80, 60), Outcome::Winner(Slot::One));
        assert_eq!(Outcome::decide(-20, 40), Outcome::Winner(Slot::Two));
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(Outcome::Tie.to_string(), "Tie");
        assert_eq!(Outcome::Winner(Slot::One).to_string(), "Player 1 Wins");
        assert_eq!(Outcome::Winner(Slot::Two).to_string(), "Player 2 Wins");
    }

    #[test]
    fn test_finish_only_once() {
        let mut status = MatchStatus::new();
        assert!(status.is_fighting());
        assert!(status.finish(Outcome::Winner(Slot::Two)));
        assert!(!status.finish(Outcome::Tie));
        assert_eq!(status.outcome(), Some(Outcome::Winner(Slot::Two)));
    }
}
