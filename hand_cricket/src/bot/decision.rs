//! Sources of computer choices.

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{collections::VecDeque, fmt};

use crate::game::{constants::NUM_CHOICES, entities::Choice};

/// Something that can produce the next number for a computer-controlled
/// side.
pub trait ChoiceSource: fmt::Debug {
    fn next_choice(&mut self) -> Choice;
}

/// Uniform random choices over 0..=6.
///
/// Seeded once at construction; there is no way to reseed afterwards.
#[derive(Debug)]
pub struct RandomChooser {
    /// Random number generator
    rng: StdRng,
}

impl RandomChooser {
    /// Create a chooser seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible chooser
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceSource for RandomChooser {
    fn next_choice(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..NUM_CHOICES)]
    }
}

/// Plays back a fixed sequence of choices, cycling when it runs out.
///
/// Useful wherever a computer opponent has to be predictable, such as tests
/// and demos.
#[derive(Debug, Clone)]
pub struct ScriptedChooser {
    script: VecDeque<Choice>,
}

impl ScriptedChooser {
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl ChoiceSource for ScriptedChooser {
    fn next_choice(&mut self) -> Choice {
        match self.script.pop_front() {
            Some(choice) => {
                self.script.push_back(choice);
                choice
            }
            // An empty script always shows a closed fist.
            None => Choice::MIN,
        }
    }
}
