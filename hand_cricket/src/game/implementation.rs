//! Phase transitions for the match FSM.

use enum_dispatch::enum_dispatch;
use log::{error, info};
use std::collections::VecDeque;

use super::constants::NUM_PLAYERS;
use super::entities::{
    Delivery, Innings, MatchResult, MatchView, Player, PlayerName, Runs, Seat, TurnOutcome,
};
use super::functional;
use super::state_machine::{
    Game, MatchData, MatchError, MatchEvent, MatchFormat, MatchSettings, MatchStateManagement,
    Scoreboard,
};
use super::states::{FirstInnings, MatchOver, Phase, SecondInnings};

/// The match FSM. Every variant wraps a [`Game`] in one phase.
#[enum_dispatch(MatchStateManagement, Scoreboard)]
#[derive(Debug)]
pub enum MatchState {
    FirstInnings(Game<FirstInnings>),
    SecondInnings(Game<SecondInnings>),
    MatchOver(Game<MatchOver>),
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MatchData> for MatchState {
    fn from(value: MatchData) -> Self {
        Game::<FirstInnings>::new(value).into()
    }
}

impl MatchState {
    /// A two-player match between the default-named seats.
    #[must_use]
    pub fn new() -> Self {
        MatchData::default().into()
    }

    #[must_use]
    pub fn with_players(settings: MatchSettings, first: PlayerName, second: PlayerName) -> Self {
        MatchData::new(settings, first, second).into()
    }

    /// Apply a validated delivery and move to the next phase.
    ///
    /// A finished match is returned unchanged. Only
    /// [`HandCricket`](crate::HandCricket) bowls deliveries, and it refuses
    /// turns once the match is over.
    #[must_use]
    pub(crate) fn deliver(self, delivery: Delivery) -> Self {
        match self {
            Self::FirstInnings(game) => game.deliver(delivery),
            Self::SecondInnings(game) => game.deliver(delivery),
            Self::MatchOver(game) => {
                error!("delivery {delivery} bowled after the match ended");
                game.into()
            }
        }
    }

    /// Back to the first innings with zeroed scores and the same players.
    #[must_use]
    pub fn reset(self) -> Self {
        match self {
            Self::FirstInnings(game) => game.restart().into(),
            Self::SecondInnings(game) => game.restart().into(),
            Self::MatchOver(game) => game.restart().into(),
        }
    }

    /// Also true for a single-innings match that has finished.
    #[must_use]
    pub fn is_first_innings(&self) -> bool {
        self.innings() == Innings::First
    }
}

impl<T: Phase> Game<T> {
    /// Credit runs to the current batsman and narrate the new total.
    fn score(&mut self, runs: Runs) -> Runs {
        let batting = self.state.batting();
        let batsman = self.data.player_mut(batting);
        batsman.add_runs(runs);
        let total = batsman.score();
        let event = MatchEvent::RunsScored {
            batsman: batsman.name().clone(),
            runs,
            total,
        };
        self.data.narrate(event);
        total
    }

    /// End the match with the given result.
    fn conclude(mut self, result: MatchResult) -> Game<MatchOver> {
        info!("match over in the {}: {result}", self.state.innings());
        self.data.narrate(MatchEvent::MatchEnded(result.clone()));
        Game {
            data: self.data,
            state: MatchOver {
                result,
                innings: self.state.innings(),
                batting: self.state.batting(),
                target: self.state.target(),
            },
        }
    }

    fn restart(mut self) -> Game<FirstInnings> {
        self.data.reset();
        let batsman = self.data.player(Seat::One).name().clone();
        info!("match reset, {batsman} to bat first");
        self.data.narrate(MatchEvent::Reset { batsman });
        Game {
            data: self.data,
            state: FirstInnings {},
        }
    }
}

impl Game<FirstInnings> {
    #[must_use]
    pub fn new(data: MatchData) -> Self {
        info!(
            "new {} match, {} batting against {}",
            data.settings.format,
            data.player(Seat::One).name(),
            data.player(Seat::Two).name()
        );
        Self {
            data,
            state: FirstInnings {},
        }
    }

    fn deliver(mut self, delivery: Delivery) -> MatchState {
        self.data.last_delivery = Some(delivery);
        match functional::resolve_turn(delivery.batsman, delivery.bowler) {
            TurnOutcome::Out => match self.data.settings.format {
                MatchFormat::TwoInnings => Game::<SecondInnings>::from(self).into(),
                MatchFormat::SingleInnings => {
                    let batsman = self.batsman();
                    let result = MatchResult::InningsClosed {
                        player: batsman.name().clone(),
                        score: batsman.score(),
                    };
                    self.conclude(result).into()
                }
            },
            TurnOutcome::Runs(runs) => {
                self.score(runs);
                self.into()
            }
        }
    }
}

impl From<Game<FirstInnings>> for Game<SecondInnings> {
    fn from(mut value: Game<FirstInnings>) -> Self {
        // The dismissal itself adds nothing, so the target is the score
        // the batsman had before this delivery.
        let dismissed = value.data.player(Seat::One);
        let target = dismissed.score();
        let event = MatchEvent::InningsOver {
            dismissed: dismissed.name().clone(),
            target,
            next_batsman: value.data.player(Seat::Two).name().clone(),
        };
        info!("first innings over, target {target}");
        value.data.narrate(event);
        Self {
            data: value.data,
            state: SecondInnings { target },
        }
    }
}

impl Game<SecondInnings> {
    fn deliver(mut self, delivery: Delivery) -> MatchState {
        self.data.last_delivery = Some(delivery);
        match functional::resolve_turn(delivery.batsman, delivery.bowler) {
            TurnOutcome::Out => {
                let [first, second] = &self.data.players;
                let verdict = functional::determine_winner(first, second);
                self.conclude(MatchResult::DecidedOnDismissal(verdict))
                    .into()
            }
            TurnOutcome::Runs(runs) => {
                let total = self.score(runs);
                let target = self.state.target;
                if functional::target_reached(total, target) {
                    let result = MatchResult::WonByReachingTarget {
                        winner: self.batsman().name().clone(),
                        score: total,
                        target,
                    };
                    self.conclude(result).into()
                } else {
                    self.into()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{Choice, Verdict};
    use crate::game::state_machine::OpponentKind;

    fn delivery(batsman: u8, bowler: u8) -> Delivery {
        Delivery {
            batsman: Choice::new(batsman).unwrap(),
            bowler: Choice::new(bowler).unwrap(),
        }
    }

    fn two_player() -> MatchState {
        MatchState::with_players(
            MatchSettings::two_player(),
            PlayerName::new("Asha").unwrap(),
            PlayerName::new("Ben").unwrap(),
        )
    }

    fn single_innings() -> MatchState {
        MatchState::with_players(
            MatchSettings::new(MatchFormat::SingleInnings, OpponentKind::Computer, Some(1)),
            PlayerName::new("Asha").unwrap(),
            PlayerName::new("Computer").unwrap(),
        )
    }

    #[test]
    fn test_new_match_starts_in_first_innings() {
        let state = two_player();
        assert!(matches!(state, MatchState::FirstInnings(_)));
        assert!(state.is_first_innings());
        assert_eq!(state.batsman().name().as_str(), "Asha");
        assert_eq!(state.bowler().name().as_str(), "Ben");
        assert_eq!(state.target(), None);
        assert!(!state.is_over());
        assert_eq!(
            state.status().to_string(),
            "Welcome to Hand Cricket! Asha is batting first."
        );
    }

    #[test]
    fn test_default_state_uses_seat_names() {
        let state = MatchState::default();
        assert_eq!(state.batsman().name().as_str(), "Player 1");
        assert_eq!(state.bowler().name().as_str(), "Player 2");
    }

    #[test]
    fn test_runs_keep_first_innings() {
        let state = two_player().deliver(delivery(3, 5));
        assert!(matches!(state, MatchState::FirstInnings(_)));
        assert_eq!(state.batsman().score(), 3);
        assert_eq!(state.last_delivery(), Some(delivery(3, 5)));
    }

    #[test]
    fn test_first_innings_dismissal_swaps_roles() {
        let state = two_player().deliver(delivery(3, 5)).deliver(delivery(4, 4));
        assert!(matches!(state, MatchState::SecondInnings(_)));
        assert!(!state.is_first_innings());
        assert_eq!(state.target(), Some(3));
        assert_eq!(state.batsman().name().as_str(), "Ben");
        assert_eq!(state.bowler().name().as_str(), "Asha");
        assert_eq!(state.player(Seat::One).score(), 3);
        assert_eq!(
            state.status().to_string(),
            "Asha is OUT! Asha scored 3 runs. Target: 4 runs. Ben is now batting."
        );
    }

    #[test]
    fn test_second_innings_dismissal_decides_on_scores() {
        let state = two_player()
            .deliver(delivery(3, 5))
            .deliver(delivery(4, 4))
            .deliver(delivery(2, 2));
        assert!(state.is_over());
        assert_eq!(
            state.result(),
            Some(&MatchResult::DecidedOnDismissal(Verdict::Winner {
                winner: PlayerName::new("Asha").unwrap(),
                winning_score: 3,
                losing_score: 0,
            }))
        );
        assert_eq!(state.status().to_string(), "Asha WINS! Final Score: 3 vs 0");
        // The chasing batsman stays at the crease once the match is over.
        assert_eq!(state.batsman().name().as_str(), "Ben");
        assert_eq!(state.innings(), Innings::Second);
    }

    #[test]
    fn test_second_innings_tie() {
        let state = two_player()
            .deliver(delivery(2, 1))
            .deliver(delivery(0, 0))
            .deliver(delivery(2, 6))
            .deliver(delivery(5, 5));
        assert!(state.is_over());
        assert!(state.result().is_some_and(MatchResult::is_tie));
        assert_eq!(
            state.status().to_string(),
            "It's a TIE! Both players scored 2 runs."
        );
    }

    #[test]
    fn test_passing_target_wins_outright() {
        let state = two_player()
            .deliver(delivery(3, 5))
            .deliver(delivery(1, 1))
            .deliver(delivery(3, 0));
        // 3 only equals the target; the chase goes on.
        assert!(!state.is_over());
        let state = state.deliver(delivery(1, 0));
        assert!(state.is_over());
        assert_eq!(
            state.result(),
            Some(&MatchResult::WonByReachingTarget {
                winner: PlayerName::new("Ben").unwrap(),
                score: 4,
                target: 3,
            })
        );
        assert_eq!(state.status().to_string(), "Ben WINS! Target achieved!");
    }

    #[test]
    fn test_delivery_after_match_over_is_ignored() {
        let state = two_player().deliver(delivery(1, 1)).deliver(delivery(1, 0));
        assert!(state.is_over());
        let status = state.status().clone();
        let state = state.deliver(delivery(6, 1));
        assert!(state.is_over());
        assert_eq!(state.player(Seat::Two).score(), 1);
        assert_eq!(state.status(), &status);
    }

    #[test]
    fn test_single_innings_ends_on_dismissal() {
        let state = single_innings()
            .deliver(delivery(4, 1))
            .deliver(delivery(6, 2))
            .deliver(delivery(5, 5));
        assert!(state.is_over());
        assert!(state.is_first_innings());
        assert_eq!(state.target(), None);
        assert_eq!(
            state.result(),
            Some(&MatchResult::InningsClosed {
                player: PlayerName::new("Asha").unwrap(),
                score: 10,
            })
        );
        assert_eq!(state.status().to_string(), "Asha is OUT! Final Score: 10");
    }

    #[test]
    fn test_reset_from_any_phase() {
        let over = two_player()
            .deliver(delivery(6, 1))
            .deliver(delivery(2, 2))
            .deliver(delivery(0, 0));
        assert!(over.is_over());
        let state = over.reset();
        assert!(matches!(state, MatchState::FirstInnings(_)));
        assert!(state.players().iter().all(|p| p.score() == 0));
        assert_eq!(state.player(Seat::One).name().as_str(), "Asha");
        assert_eq!(state.player(Seat::Two).name().as_str(), "Ben");
        assert_eq!(state.last_delivery(), None);
        assert_eq!(
            state.status().to_string(),
            "New game started! Asha is batting first."
        );
    }

    #[test]
    fn test_drain_events_in_order() {
        let mut state = two_player().deliver(delivery(3, 5)).deliver(delivery(4, 4));
        let events: Vec<_> = state.drain_events().into_iter().collect();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], MatchEvent::Started { .. }));
        assert!(matches!(events[1], MatchEvent::RunsScored { runs: 3, .. }));
        assert!(matches!(events[2], MatchEvent::InningsOver { target: 3, .. }));
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_target_reached_logs_runs_then_result() {
        let mut state = two_player()
            .deliver(delivery(0, 0))
            .deliver(delivery(1, 0));
        let events: Vec<_> = state.drain_events().into_iter().collect();
        assert!(matches!(
            events.as_slice(),
            [
                MatchEvent::Started { .. },
                MatchEvent::InningsOver { target: 0, .. },
                MatchEvent::RunsScored { total: 1, .. },
                MatchEvent::MatchEnded(MatchResult::WonByReachingTarget { .. }),
            ]
        ));
    }
}
