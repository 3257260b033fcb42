use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::constants::{
    self, DEFAULT_PLAYER_ONE_NAME, DEFAULT_PLAYER_TWO_NAME, MAX_CHOICE, MIN_CHOICE, NUM_CHOICES,
};
use super::state_machine::MatchError;

/// Type alias for runs. Scores only ever grow during an innings and are
/// never negative.
pub type Runs = u32;

/// A number shown by the batsman or the bowler, always within 0..=6.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Choice(u8);

impl Choice {
    pub const MIN: Self = Self(MIN_CHOICE);
    pub const MAX: Self = Self(MAX_CHOICE);

    /// Every legal choice, in ascending order.
    pub const ALL: [Self; NUM_CHOICES] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
    ];

    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_CHOICE {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Runs this choice is worth when the batsman survives the turn.
    #[must_use]
    pub const fn runs(self) -> Runs {
        self.0 as Runs
    }
}

impl TryFrom<i32> for Choice {
    /// The rejected raw value.
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(value)
    }
}

impl From<Choice> for i32 {
    fn from(value: Choice) -> Self {
        Self::from(value.0)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The two roles of every turn.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Batsman,
    Bowler,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Batsman => "batsman",
            Self::Bowler => "bowler",
        };
        write!(f, "{repr}")
    }
}

/// Seat positions. Seat one always bats first.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// Which innings is (or was last) being played.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Innings {
    First,
    Second,
}

impl fmt::Display for Innings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::First => "first innings",
            Self::Second => "second innings",
        };
        write!(f, "{repr}")
    }
}

/// A player's display name. Always non-blank and trimmed.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trim and validate a display name.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidName`] if the name is empty or only
    /// whitespace.
    pub fn new(s: &str) -> Result<Self, MatchError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MatchError::InvalidName);
        }
        let name: String = trimmed.chars().take(constants::MAX_NAME_LENGTH).collect();
        Ok(Self(name.trim_end().to_string()))
    }

    /// The fallback name for a seat, used when a front end has no input.
    #[must_use]
    pub fn default_for(seat: Seat) -> Self {
        let name = match seat {
            Seat::One => DEFAULT_PLAYER_ONE_NAME,
            Seat::Two => DEFAULT_PLAYER_TWO_NAME,
        };
        Self(name.to_string())
    }

    /// Like [`PlayerName::new`], but falls back to the seat's default name
    /// for blank input.
    #[must_use]
    pub fn or_default_for(s: &str, seat: Seat) -> Self {
        Self::new(s).unwrap_or_else(|_| Self::default_for(seat))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for PlayerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    name: PlayerName,
    score: Runs,
}

impl Player {
    #[must_use]
    pub fn new(name: PlayerName) -> Self {
        Self {
            name,
            score: constants::STARTING_SCORE,
        }
    }

    #[must_use]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> Runs {
        self.score
    }

    /// Add runs to the score. Saturates instead of wrapping.
    pub fn add_runs(&mut self, runs: Runs) {
        self.score = self.score.saturating_add(runs);
    }

    /// Zero the score, keeping the player's identity.
    pub fn reset_score(&mut self) {
        self.score = constants::STARTING_SCORE;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Score: {}", self.name, self.score)
    }
}

/// The pair of numbers shown in one turn.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Delivery {
    pub batsman: Choice,
    pub bowler: Choice,
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.batsman, self.bowler)
    }
}

/// What a single delivery did to the batsman.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TurnOutcome {
    // Both players showed the same number.
    Out,
    // The batsman survived and scores their own number.
    Runs(Runs),
}

impl TurnOutcome {
    #[must_use]
    pub const fn is_out(self) -> bool {
        matches!(self, Self::Out)
    }
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Out => write!(f, "out"),
            Self::Runs(runs) => write!(f, "{runs} runs"),
        }
    }
}

/// Score comparison made when the second batsman is dismissed.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Verdict {
    Winner {
        winner: PlayerName,
        winning_score: Runs,
        losing_score: Runs,
    },
    Tie {
        score: Runs,
    },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner {
                winner,
                winning_score,
                losing_score,
            } => write!(
                f,
                "{winner} WINS! Final Score: {winning_score} vs {losing_score}"
            ),
            Self::Tie { score } => write!(f, "It's a TIE! Both players scored {score} runs."),
        }
    }
}

/// How a match ended.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MatchResult {
    /// The chasing batsman was dismissed and the final scores decided it.
    DecidedOnDismissal(Verdict),
    /// The chasing batsman passed the target.
    WonByReachingTarget {
        winner: PlayerName,
        score: Runs,
        target: Runs,
    },
    /// A single-innings match ended with the batsman's dismissal.
    InningsClosed { player: PlayerName, score: Runs },
}

impl MatchResult {
    /// The winning player, if the match produced one.
    #[must_use]
    pub fn winner(&self) -> Option<&PlayerName> {
        match self {
            Self::DecidedOnDismissal(Verdict::Winner { winner, .. })
            | Self::WonByReachingTarget { winner, .. } => Some(winner),
            Self::DecidedOnDismissal(Verdict::Tie { .. }) | Self::InningsClosed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, Self::DecidedOnDismissal(Verdict::Tie { .. }))
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecidedOnDismissal(verdict) => verdict.fmt(f),
            Self::WonByReachingTarget { winner, .. } => write!(f, "{winner} WINS! Target achieved!"),
            Self::InningsClosed { player, score } => {
                write!(f, "{player} is OUT! Final Score: {score}")
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlayerView {
    pub name: PlayerName,
    pub score: Runs,
    pub role: Role,
}

/// Read-only snapshot of a match for presentation layers.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchView {
    pub players: Vec<PlayerView>,
    pub innings: Innings,
    pub target: Option<Runs>,
    /// Runs the chasing batsman needs to win outright (`target + 1`).
    pub runs_required: Option<Runs>,
    pub is_over: bool,
    pub status: String,
    pub last_delivery: Option<Delivery>,
    pub result: Option<MatchResult>,
}

impl MatchView {
    #[must_use]
    pub fn batsman(&self) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.role == Role::Batsman)
    }

    #[must_use]
    pub fn bowler(&self) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.role == Role::Bowler)
    }
}

impl fmt::Display for MatchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scores = self
            .players
            .iter()
            .map(|p| format!("{}: {}", p.name, p.score))
            .collect::<Vec<_>>()
            .join(" | ");
        write!(f, "{scores}")?;
        if let Some(required) = self.runs_required {
            write!(f, " | Target: {required} runs to win")?;
        }
        Ok(())
    }
}
