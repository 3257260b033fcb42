//! # Hand Cricket
//!
//! A hand cricket rules engine using a type-safe finite state machine (FSM) design.
//!
//! Each turn the batsman and the bowler both pick a number from 0 to 6. Matching
//! numbers dismiss the batsman; otherwise the batsman's number is added to their
//! score. The core match is implemented as an FSM using `enum_dispatch` for
//! zero-cost trait dispatch over the match phases.
//!
//! ## Architecture
//!
//! A match moves through three phases:
//!
//! - **FirstInnings**: seat one bats, seat two bowls
//! - **SecondInnings**: roles swapped, seat two chases the target
//! - **MatchOver**: terminal, carries the [`MatchResult`]
//!
//! Single-innings matches (player vs computer) go straight from the first
//! innings to the end of the match when the batsman is dismissed.
//!
//! ## Core Modules
//!
//! - [`game`]: Match state machine, entities, and the pure scoring rules
//! - [`bot`]: Bowling strategies (human-supplied or uniformly random)
//! - [`session`]: The [`HandCricket`] facade that presentation layers drive
//!
//! ## Example
//!
//! ```
//! use hand_cricket::HandCricket;
//!
//! let mut game = HandCricket::two_player("Asha", "Ben").unwrap();
//! let report = game.play_turn(3, 5).unwrap();
//! assert!(!report.is_out());
//! assert_eq!(game.batsman().score(), 3);
//! assert_eq!(game.status_message(), "Asha scored 3 runs. Total: 3");
//! ```

/// Bowling strategies and choice sources.
pub mod bot;
pub use bot::{Bowler, BowlingContext, ChoiceSource, HumanBowler, RandomBowler, RandomChooser};

/// Core match logic, entities, and state machine.
pub mod game;
pub use game::{
    MatchError, MatchEvent, MatchFormat, MatchSettings, MatchState, OpponentKind, TurnReport,
    constants::{self, MAX_CHOICE, MIN_CHOICE},
    entities::{self, Choice, Delivery, Innings, MatchResult, Player, PlayerName, Runs, Verdict},
    functional,
};

/// Match ownership and the turn-taking API.
pub mod session;
pub use session::HandCricket;
