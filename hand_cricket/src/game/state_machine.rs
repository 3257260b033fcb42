//! Match state machine building blocks.
//!
//! Errors, events, settings, the data shared by every phase, and the traits
//! that `enum_dispatch` forwards through [`MatchState`](super::MatchState).

use enum_dispatch::enum_dispatch;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, fmt};
use thiserror::Error;

use super::constants::{INVALID_CHOICE_MESSAGE, MAX_EVENT_BACKLOG, NUM_PLAYERS};
use super::entities::{
    Delivery, Innings, MatchResult, MatchView, Player, PlayerName, PlayerView, Role, Runs, Seat,
    TurnOutcome,
};
use super::functional;
use super::states::Phase;

/// Errors that can occur while setting up or playing a match.
///
/// All of them are recoverable: a rejected turn never changes the match.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum MatchError {
    #[error("invalid {role} choice {value}: pick a number between 0 and 6")]
    InvalidChoice { role: Role, value: i32 },
    #[error("the bowler's choice is required")]
    MissingBowlerChoice,
    #[error("player name can't be blank")]
    InvalidName,
    #[error("match is already over")]
    MatchAlreadyOver,
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

impl MatchError {
    /// Whether the error is bad turn input the player can simply retry.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidChoice { .. } | Self::MissingBowlerChoice)
    }
}

/// Events that occur during a match.
///
/// The `Display` impl is the narration a front end shows verbatim.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum MatchEvent {
    Started {
        batsman: PlayerName,
    },
    Reset {
        batsman: PlayerName,
    },
    RunsScored {
        batsman: PlayerName,
        runs: Runs,
        total: Runs,
    },
    InningsOver {
        dismissed: PlayerName,
        target: Runs,
        next_batsman: PlayerName,
    },
    MatchEnded(MatchResult),
    Rejected(MatchError),
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Started { batsman } => {
                format!("Welcome to Hand Cricket! {batsman} is batting first.")
            }
            Self::Reset { batsman } => format!("New game started! {batsman} is batting first."),
            Self::RunsScored {
                batsman,
                runs,
                total,
            } => format!("{batsman} scored {runs} runs. Total: {total}"),
            Self::InningsOver {
                dismissed,
                target,
                next_batsman,
            } => format!(
                "{dismissed} is OUT! {dismissed} scored {target} runs. Target: {} runs. \
                 {next_batsman} is now batting.",
                functional::runs_required(*target)
            ),
            Self::MatchEnded(result) => result.to_string(),
            Self::Rejected(MatchError::InvalidChoice { .. }) => INVALID_CHOICE_MESSAGE.to_string(),
            Self::Rejected(error) => format!("Turn rejected: {error}."),
        };
        write!(f, "{repr}")
    }
}

/// How many innings a match lasts.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchFormat {
    /// Both sides bat once; the second chases the first's score.
    #[default]
    TwoInnings,
    /// One side bats until dismissed. No target, no winner.
    SingleInnings,
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchFormat::TwoInnings => write!(f, "two innings"),
            MatchFormat::SingleInnings => write!(f, "single innings"),
        }
    }
}

/// Who supplies the bowling choice.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    /// Another person submits a number every turn.
    #[default]
    Human,
    /// Drawn uniformly at random each turn.
    Computer,
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentKind::Human => write!(f, "human"),
            OpponentKind::Computer => write!(f, "computer"),
        }
    }
}

/// Match configuration settings
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchSettings {
    pub format: MatchFormat,
    pub opponent: OpponentKind,
    /// Seed for the computer bowler. Only read when the match is built;
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl MatchSettings {
    #[must_use]
    pub const fn new(format: MatchFormat, opponent: OpponentKind, seed: Option<u64>) -> Self {
        Self {
            format,
            opponent,
            seed,
        }
    }

    /// Two people, two innings.
    #[must_use]
    pub const fn two_player() -> Self {
        Self::new(MatchFormat::TwoInnings, OpponentKind::Human, None)
    }

    /// One person batting against the computer until dismissed.
    #[must_use]
    pub const fn vs_computer() -> Self {
        Self::new(MatchFormat::SingleInnings, OpponentKind::Computer, None)
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// The computer only bowls, so it can't take part in a two-innings
    /// match where it would have to bat.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.format == MatchFormat::TwoInnings && self.opponent == OpponentKind::Computer {
            return Err(MatchError::InvalidSettings(
                "the computer can't bat, so it can only play single-innings matches".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of one accepted turn.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TurnReport {
    pub delivery: Delivery,
    pub outcome: TurnOutcome,
    /// The last event the turn produced; its narration is the new status.
    pub event: MatchEvent,
    pub match_over: bool,
}

impl TurnReport {
    /// True iff the batsman was dismissed, whether or not that ended the
    /// match. Use `match_over` to tell the two apart.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.outcome.is_out()
    }
}

/// Mutable match data shared across all phases
#[derive(Debug)]
pub struct MatchData {
    /// Seat one bats first. Identities are fixed for the life of the
    /// match; only scores change.
    pub(super) players: [Player; NUM_PLAYERS],
    pub(super) last_delivery: Option<Delivery>,
    /// Most recent narrated event. Drives the status message.
    pub(super) status: MatchEvent,
    /// Events not yet drained by the front end.
    pub(super) events: VecDeque<MatchEvent>,
    pub(super) settings: MatchSettings,
}

impl Default for MatchData {
    fn default() -> Self {
        Self::new(
            MatchSettings::default(),
            PlayerName::default_for(Seat::One),
            PlayerName::default_for(Seat::Two),
        )
    }
}

impl MatchData {
    /// Seat one bats first. The welcome is queued as the first event.
    #[must_use]
    pub fn new(settings: MatchSettings, first: PlayerName, second: PlayerName) -> Self {
        let started = MatchEvent::Started {
            batsman: first.clone(),
        };
        Self {
            players: [Player::new(first), Player::new(second)],
            last_delivery: None,
            status: started.clone(),
            events: VecDeque::from([started]),
            settings,
        }
    }

    pub(super) fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub(super) fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Record an event as the latest narration and queue it for the
    /// front end.
    pub(super) fn narrate(&mut self, event: MatchEvent) {
        debug!("{event}");
        if self.events.len() == MAX_EVENT_BACKLOG {
            self.events.pop_front();
        }
        self.events.push_back(event.clone());
        self.status = event;
    }

    /// Zero scores and forget the last delivery, keeping identities.
    pub(super) fn reset(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        self.last_delivery = None;
    }
}

/// Trait for match bookkeeping shared by all phases (events, views)
#[enum_dispatch]
pub trait MatchStateManagement {
    fn drain_events(&mut self) -> VecDeque<MatchEvent>;

    /// Narrate a rejected turn without touching scores or phase.
    fn record_rejection(&mut self, error: &MatchError);

    /// Get a snapshot of the match for rendering
    ///
    /// # Important
    /// This function's return value should be used - ignoring it wastes computation
    #[must_use]
    fn get_view(&self) -> MatchView;
}

/// Read-only queries that work in every phase
#[enum_dispatch]
pub trait Scoreboard {
    fn players(&self) -> &[Player; NUM_PLAYERS];
    fn player(&self, seat: Seat) -> &Player;
    fn batsman(&self) -> &Player;
    fn bowler(&self) -> &Player;
    fn innings(&self) -> Innings;
    /// The first innings' final score, once the second innings has begun.
    fn target(&self) -> Option<Runs>;
    fn is_over(&self) -> bool;
    fn last_delivery(&self) -> Option<Delivery>;
    fn status(&self) -> &MatchEvent;
    fn result(&self) -> Option<&MatchResult>;
    fn settings(&self) -> &MatchSettings;
}

/// A hand cricket match with data and logic for running it end-to-end.
///
/// The phase type `T` decides who bats and whether turns are accepted.
#[derive(Debug)]
pub struct Game<T> {
    pub data: MatchData,
    pub state: T,
}

impl<T: Phase> MatchStateManagement for Game<T> {
    fn drain_events(&mut self) -> VecDeque<MatchEvent> {
        self.data.events.drain(..).collect()
    }

    fn record_rejection(&mut self, error: &MatchError) {
        warn!("turn rejected in the {}: {error}", self.state.innings());
        self.data.narrate(MatchEvent::Rejected(error.clone()));
    }

    fn get_view(&self) -> MatchView {
        let batting = self.state.batting();
        let players = [Seat::One, Seat::Two]
            .into_iter()
            .map(|seat| {
                let player = self.data.player(seat);
                PlayerView {
                    name: player.name().clone(),
                    score: player.score(),
                    role: if seat == batting {
                        Role::Batsman
                    } else {
                        Role::Bowler
                    },
                }
            })
            .collect();
        let target = self.state.target();
        MatchView {
            players,
            innings: self.state.innings(),
            target,
            runs_required: target.map(functional::runs_required),
            is_over: self.state.is_over(),
            status: self.data.status.to_string(),
            last_delivery: self.data.last_delivery,
            result: self.state.result().cloned(),
        }
    }
}

impl<T: Phase> Scoreboard for Game<T> {
    fn players(&self) -> &[Player; NUM_PLAYERS] {
        &self.data.players
    }

    fn player(&self, seat: Seat) -> &Player {
        self.data.player(seat)
    }

    fn batsman(&self) -> &Player {
        self.data.player(self.state.batting())
    }

    fn bowler(&self) -> &Player {
        self.data.player(self.state.batting().other())
    }

    fn innings(&self) -> Innings {
        self.state.innings()
    }

    fn target(&self) -> Option<Runs> {
        self.state.target()
    }

    fn is_over(&self) -> bool {
        self.state.is_over()
    }

    fn last_delivery(&self) -> Option<Delivery> {
        self.data.last_delivery
    }

    fn status(&self) -> &MatchEvent {
        &self.data.status
    }

    fn result(&self) -> Option<&MatchResult> {
        self.state.result()
    }

    fn settings(&self) -> &MatchSettings {
        &self.data.settings
    }
}
