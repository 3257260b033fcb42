//! Match-wide constants.

use super::entities::Runs;

/// Smallest number a player may show.
pub const MIN_CHOICE: u8 = 0;

/// Largest number a player may show.
pub const MAX_CHOICE: u8 = 6;

/// Number of distinct choices (0 through 6).
pub const NUM_CHOICES: usize = (MAX_CHOICE - MIN_CHOICE) as usize + 1;

/// A match always seats exactly two sides: the batsman and the bowler.
pub const NUM_PLAYERS: usize = 2;

/// Longest display name kept; longer names are truncated.
pub const MAX_NAME_LENGTH: usize = 32;

/// Display name given to the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Fallback names used when a front end gets blank input.
pub const DEFAULT_PLAYER_ONE_NAME: &str = "Player 1";
pub const DEFAULT_PLAYER_TWO_NAME: &str = "Player 2";

/// Narration shown when a turn is rejected for an out-of-range choice.
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice! Please select a number between 0 and 6.";

/// Maximum number of undrained events kept. The oldest are dropped first.
pub const MAX_EVENT_BACKLOG: usize = 256;

/// Score a first-innings batsman starts the chase from.
pub const STARTING_SCORE: Runs = 0;
