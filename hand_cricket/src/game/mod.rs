//! Hand cricket engine - core FSM and match logic.
//!
//! This module provides the foundational match implementation including:
//! - Type-safe finite state machine over the innings phases
//! - Player identities and scores
//! - Pure turn resolution and winner determination
//! - Event generation and views

// Submodules
pub mod constants;
pub mod entities;
pub mod functional;
pub mod state_machine;
pub mod states;

mod implementation;

pub use implementation::*;
pub use state_machine::{
    Game, MatchData, MatchError, MatchEvent, MatchFormat, MatchSettings, MatchStateManagement,
    OpponentKind, Scoreboard, TurnReport,
};
