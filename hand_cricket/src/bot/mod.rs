//! Bot module providing the bowling side of a match.
//!
//! This module implements:
//! - [`Bowler`]: the strategy that supplies the bowler's number each turn
//! - [`HumanBowler`]: takes the number a second person submitted
//! - [`RandomBowler`]: the computer, drawing uniformly from 0..=6
//! - [`ChoiceSource`]: where a computer's numbers come from, so tests can
//!   swap the random generator for a [`ScriptedChooser`]
//!
//! ## Example
//!
//! ```
//! use hand_cricket::bot::{Bowler, BowlingContext, RandomBowler};
//! use hand_cricket::entities::Innings;
//!
//! let mut bowler = RandomBowler::from_seed(7);
//! let ctx = BowlingContext {
//!     innings: Innings::First,
//!     batsman_score: 0,
//!     target: None,
//! };
//! let choice = bowler.bowling_choice(&ctx, None).unwrap();
//! assert!(choice.value() <= 6);
//! ```

pub mod decision;
pub mod models;

pub use decision::{ChoiceSource, RandomChooser, ScriptedChooser};
pub use models::{Bowler, BowlingContext, HumanBowler, RandomBowler};
