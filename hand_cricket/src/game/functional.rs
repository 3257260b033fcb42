//! Pure scoring rules shared by every match format.
//!
//! Nothing in here touches match state; the state machine validates input,
//! calls these, and applies the results.

use super::entities::{Choice, Player, Runs, TurnOutcome, Verdict};

/// Resolve a single delivery.
///
/// Matching numbers dismiss the batsman and score nothing. Otherwise the
/// batsman scores their own number and the bowler's number is discarded.
#[must_use]
pub fn resolve_turn(batsman: Choice, bowler: Choice) -> TurnOutcome {
    if batsman == bowler {
        TurnOutcome::Out
    } else {
        TurnOutcome::Runs(batsman.runs())
    }
}

/// Compare two final scores. Higher wins; equal scores tie.
///
/// `first` is reported first when it wins, matching the order players were
/// seated.
#[must_use]
pub fn determine_winner(first: &Player, second: &Player) -> Verdict {
    let (a, b) = (first.score(), second.score());
    if a > b {
        Verdict::Winner {
            winner: first.name().clone(),
            winning_score: a,
            losing_score: b,
        }
    } else if b > a {
        Verdict::Winner {
            winner: second.name().clone(),
            winning_score: b,
            losing_score: a,
        }
    } else {
        Verdict::Tie { score: a }
    }
}

/// The chasing side wins outright only by exceeding the target.
#[must_use]
pub const fn target_reached(score: Runs, target: Runs) -> bool {
    score > target
}

/// Runs the chasing side must reach to win, as shown to players.
#[must_use]
pub const fn runs_required(target: Runs) -> Runs {
    target.saturating_add(1)
}
