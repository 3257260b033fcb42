use log::{debug, warn};
use std::{collections::VecDeque, mem};

use crate::bot::{Bowler, BowlingContext, HumanBowler, RandomBowler};
use crate::game::{
    MatchError, MatchEvent, MatchSettings, MatchState, MatchStateManagement, OpponentKind,
    Scoreboard, TurnReport,
    constants::{COMPUTER_NAME, NUM_PLAYERS},
    entities::{
        Choice, Delivery, Innings, MatchResult, MatchView, Player, PlayerName, Role, Runs, Seat,
    },
    functional,
};

/// A match of hand cricket together with whoever bowls in it.
///
/// Every turn is one `&mut self` call, so a match can only ever be driven
/// from one place at a time.
#[derive(Debug)]
pub struct HandCricket {
    state: MatchState,
    bowler: Box<dyn Bowler>,
}

impl HandCricket {
    /// Two people, two innings. `name1` bats first.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidName`] if either name is blank.
    pub fn two_player(name1: &str, name2: &str) -> Result<Self, MatchError> {
        Self::with_settings(MatchSettings::two_player(), name1, name2)
    }

    /// One person batting a single innings against the computer.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidName`] if the name is blank.
    pub fn vs_computer(name: &str) -> Result<Self, MatchError> {
        Self::with_settings(MatchSettings::vs_computer(), name, COMPUTER_NAME)
    }

    /// Build a match from explicit settings, picking the bowler the
    /// settings ask for.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are inconsistent or a name is blank.
    pub fn with_settings(
        settings: MatchSettings,
        name1: &str,
        name2: &str,
    ) -> Result<Self, MatchError> {
        let bowler: Box<dyn Bowler> = match settings.opponent {
            OpponentKind::Human => Box::new(HumanBowler),
            OpponentKind::Computer => match settings.seed {
                Some(seed) => Box::new(RandomBowler::from_seed(seed)),
                None => Box::new(RandomBowler::default()),
            },
        };
        Self::with_bowler(settings, name1, name2, bowler)
    }

    /// Build a match with a caller-supplied bowling strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, if the bowler doesn't
    /// match `settings.opponent`, or if a name is blank.
    pub fn with_bowler(
        settings: MatchSettings,
        name1: &str,
        name2: &str,
        bowler: Box<dyn Bowler>,
    ) -> Result<Self, MatchError> {
        settings.validate()?;
        if bowler.kind() != settings.opponent {
            return Err(MatchError::InvalidSettings(format!(
                "a {} bowler can't play a match against a {} opponent",
                bowler.kind(),
                settings.opponent
            )));
        }
        let first = PlayerName::new(name1)?;
        let second = PlayerName::new(name2)?;
        Ok(Self {
            state: MatchState::with_players(settings, first, second),
            bowler,
        })
    }

    /// Play one turn with both numbers supplied.
    ///
    /// A computer bowler ignores `bowler`, though it is still
    /// range-checked.
    ///
    /// # Errors
    ///
    /// Rejected turns leave scores, phase and roles untouched. See
    /// [`MatchError`].
    pub fn play_turn(&mut self, batsman: i32, bowler: i32) -> Result<TurnReport, MatchError> {
        self.take_turn(batsman, Some(bowler))
    }

    /// Play one turn against the computer; only the batsman's number is
    /// needed.
    ///
    /// # Errors
    ///
    /// Against a human bowler this is rejected with
    /// [`MatchError::MissingBowlerChoice`].
    pub fn bat(&mut self, batsman: i32) -> Result<TurnReport, MatchError> {
        self.take_turn(batsman, None)
    }

    fn take_turn(
        &mut self,
        batsman: i32,
        bowler: Option<i32>,
    ) -> Result<TurnReport, MatchError> {
        let batsman = self.check_choice(Role::Batsman, batsman)?;
        let supplied = match bowler {
            Some(value) => Some(self.check_choice(Role::Bowler, value)?),
            None => None,
        };
        let ctx = BowlingContext {
            innings: self.state.innings(),
            batsman_score: self.state.batsman().score(),
            target: self.state.target(),
        };
        let bowler = self.bowler.bowling_choice(&ctx, supplied);
        let bowler = self.checked(bowler)?;

        let delivery = Delivery { batsman, bowler };
        debug!("{} faces {delivery}", self.state.batsman().name());
        self.state = mem::take(&mut self.state).deliver(delivery);

        Ok(TurnReport {
            delivery,
            outcome: functional::resolve_turn(batsman, bowler),
            event: self.state.status().clone(),
            match_over: self.state.is_over(),
        })
    }

    /// Check one side's number before the turn is played.
    ///
    /// Lets a front end collect the batsman's and the bowler's numbers
    /// separately. A rejection is narrated exactly as it would be by
    /// [`play_turn`](Self::play_turn); an accepted number changes nothing.
    ///
    /// # Errors
    ///
    /// [`MatchError::MatchAlreadyOver`] once the match has ended, otherwise
    /// [`MatchError::InvalidChoice`] for numbers outside 0..=6.
    pub fn check_choice(&mut self, role: Role, value: i32) -> Result<Choice, MatchError> {
        if self.state.is_over() {
            warn!("{role} choice {value} submitted after the match ended");
            return Err(MatchError::MatchAlreadyOver);
        }
        self.checked(Self::parse(role, value))
    }

    fn parse(role: Role, value: i32) -> Result<Choice, MatchError> {
        Choice::try_from(value).map_err(|value| MatchError::InvalidChoice { role, value })
    }

    /// Narrate a rejection before handing it back to the caller.
    fn checked<T>(&mut self, result: Result<T, MatchError>) -> Result<T, MatchError> {
        if let Err(error) = &result {
            self.state.record_rejection(error);
        }
        result
    }

    /// Start over with the same players. A computer bowler keeps its
    /// random stream.
    pub fn reset(&mut self) {
        self.state = mem::take(&mut self.state).reset();
    }

    /// Narration of the most recent transition or rejection.
    #[must_use]
    pub fn status_message(&self) -> String {
        self.state.status().to_string()
    }

    #[must_use]
    pub fn status(&self) -> &MatchEvent {
        self.state.status()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub fn innings(&self) -> Innings {
        self.state.innings()
    }

    #[must_use]
    pub fn is_first_innings(&self) -> bool {
        self.state.is_first_innings()
    }

    #[must_use]
    pub fn batsman(&self) -> &Player {
        self.state.batsman()
    }

    #[must_use]
    pub fn bowler(&self) -> &Player {
        self.state.bowler()
    }

    /// First-innings score, once the chase has begun.
    #[must_use]
    pub fn target(&self) -> Option<Runs> {
        self.state.target()
    }

    #[must_use]
    pub fn players(&self) -> &[Player; NUM_PLAYERS] {
        self.state.players()
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        self.state.player(seat)
    }

    #[must_use]
    pub fn last_delivery(&self) -> Option<Delivery> {
        self.state.last_delivery()
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.state.result()
    }

    #[must_use]
    pub fn settings(&self) -> &MatchSettings {
        self.state.settings()
    }

    #[must_use]
    pub fn view(&self) -> MatchView {
        self.state.get_view()
    }

    /// Every event since the last drain, oldest first.
    pub fn drain_events(&mut self) -> VecDeque<MatchEvent> {
        self.state.drain_events()
    }
}
