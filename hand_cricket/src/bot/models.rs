//! Bowling strategies.

use log::debug;
use std::fmt;

use super::decision::{ChoiceSource, RandomChooser};
use crate::game::{
    MatchError, OpponentKind,
    entities::{Choice, Innings, Runs},
};

/// Context for a bowling decision
///
/// Everything a strategy may look at before the ball is bowled. The
/// batsman's choice is deliberately absent.
#[derive(Debug, Clone, Copy)]
pub struct BowlingContext {
    pub innings: Innings,

    /// Batsman's score before this delivery
    pub batsman_score: Runs,

    /// Score to beat, during a chase
    pub target: Option<Runs>,
}

/// Supplies the bowler's number for each turn.
pub trait Bowler: fmt::Debug {
    /// Pick the bowler's choice.
    ///
    /// `supplied` is whatever the caller submitted for the bowler this
    /// turn, already range-checked.
    ///
    /// # Errors
    ///
    /// A strategy that needs a supplied choice returns
    /// [`MatchError::MissingBowlerChoice`] when there is none.
    fn bowling_choice(
        &mut self,
        ctx: &BowlingContext,
        supplied: Option<Choice>,
    ) -> Result<Choice, MatchError>;

    fn kind(&self) -> OpponentKind;
}

/// A person at the keyboard; their number comes in with each turn.
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanBowler;

impl Bowler for HumanBowler {
    fn bowling_choice(
        &mut self,
        _ctx: &BowlingContext,
        supplied: Option<Choice>,
    ) -> Result<Choice, MatchError> {
        supplied.ok_or(MatchError::MissingBowlerChoice)
    }

    fn kind(&self) -> OpponentKind {
        OpponentKind::Human
    }
}

/// The computer; draws a fresh number from its source every turn.
#[derive(Debug)]
pub struct RandomBowler<S = RandomChooser> {
    source: S,
}

impl<S: ChoiceSource> RandomBowler<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl Default for RandomBowler {
    fn default() -> Self {
        Self::new(RandomChooser::new())
    }
}

impl RandomBowler {
    /// Reproducible computer bowler
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RandomChooser::from_seed(seed))
    }
}

impl<S: ChoiceSource> Bowler for RandomBowler<S> {
    fn bowling_choice(
        &mut self,
        ctx: &BowlingContext,
        supplied: Option<Choice>,
    ) -> Result<Choice, MatchError> {
        if let Some(ignored) = supplied {
            debug!("computer bowler ignoring supplied choice {ignored}");
        }
        let choice = self.source.next_choice();
        debug!(
            "computer bowls {choice} in the {} (batsman on {})",
            ctx.innings, ctx.batsman_score
        );
        Ok(choice)
    }

    fn kind(&self) -> OpponentKind {
        OpponentKind::Computer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::decision::ScriptedChooser;

    fn ctx() -> BowlingContext {
        BowlingContext {
            innings: Innings::First,
            batsman_score: 0,
            target: None,
        }
    }

    #[test]
    fn test_human_bowler_uses_supplied_choice() {
        let mut bowler = HumanBowler;
        let choice = Choice::new(4).unwrap();
        assert_eq!(bowler.bowling_choice(&ctx(), Some(choice)), Ok(choice));
        assert_eq!(bowler.kind(), OpponentKind::Human);
    }

    #[test]
    fn test_human_bowler_requires_choice() {
        let mut bowler = HumanBowler;
        assert_eq!(
            bowler.bowling_choice(&ctx(), None),
            Err(MatchError::MissingBowlerChoice)
        );
    }

    #[test]
    fn test_random_bowler_draws_from_source() {
        let script = [3, 1].map(|v| Choice::new(v).unwrap());
        let mut bowler = RandomBowler::new(ScriptedChooser::new(script));
        assert_eq!(bowler.bowling_choice(&ctx(), None), Ok(script[0]));
        assert_eq!(bowler.bowling_choice(&ctx(), None), Ok(script[1]));
        assert_eq!(bowler.kind(), OpponentKind::Computer);
    }

    #[test]
    fn test_random_bowler_ignores_supplied_choice() {
        let script = [6].map(|v| Choice::new(v).unwrap());
        let mut bowler = RandomBowler::new(ScriptedChooser::new(script));
        let supplied = Some(Choice::MIN);
        assert_eq!(bowler.bowling_choice(&ctx(), supplied), Ok(Choice::MAX));
    }

    #[test]
    fn test_seeded_random_bowlers_agree() {
        let mut a = RandomBowler::from_seed(9);
        let mut b = RandomBowler::from_seed(9);
        for _ in 0..20 {
            assert_eq!(
                a.bowling_choice(&ctx(), None),
                b.bowling_choice(&ctx(), None)
            );
        }
    }
}
