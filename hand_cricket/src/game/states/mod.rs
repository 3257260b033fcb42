//! Phase definitions for the match FSM.
//!
//! Each phase fixes who is batting, so the batsman/bowler assignment can
//! only change through a phase transition.

use serde::{Deserialize, Serialize};

use crate::game::entities::{Innings, MatchResult, Runs, Seat};

/// Behavior every phase exposes to the shared [`Game`](super::Game) impls.
pub trait Phase {
    fn innings(&self) -> Innings;

    /// Seat of the current batsman. The other seat bowls.
    fn batting(&self) -> Seat;

    fn target(&self) -> Option<Runs> {
        None
    }

    fn result(&self) -> Option<&MatchResult> {
        None
    }

    fn is_over(&self) -> bool {
        self.result().is_some()
    }
}

/// First innings - seat one bats, seat two bowls
#[derive(Clone, Debug, Default)]
pub struct FirstInnings {}

impl Phase for FirstInnings {
    fn innings(&self) -> Innings {
        Innings::First
    }

    fn batting(&self) -> Seat {
        Seat::One
    }
}

/// Second innings - roles swapped, seat two chases the target
#[derive(Clone, Debug)]
pub struct SecondInnings {
    /// Seat one's final score. Seat two wins outright by exceeding it.
    pub target: Runs,
}

impl Phase for SecondInnings {
    fn innings(&self) -> Innings {
        Innings::Second
    }

    fn batting(&self) -> Seat {
        Seat::Two
    }

    fn target(&self) -> Option<Runs> {
        Some(self.target)
    }
}

/// Match finished - no further turns are accepted
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MatchOver {
    pub result: MatchResult,
    /// Innings the match ended in.
    pub innings: Innings,
    /// Whoever was batting when the match ended stays at the crease.
    pub batting: Seat,
    pub target: Option<Runs>,
}

impl Phase for MatchOver {
    fn innings(&self) -> Innings {
        self.innings
    }

    fn batting(&self) -> Seat {
        self.batting
    }

    fn target(&self) -> Option<Runs> {
        self.target
    }

    fn result(&self) -> Option<&MatchResult> {
        Some(&self.result)
    }
}
