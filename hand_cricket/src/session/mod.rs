//! Owning front door to a match.
//!
//! [`HandCricket`] pairs the phase state machine with a bowling strategy and
//! turns raw numeric input into validated deliveries. It is the only type a
//! front end needs.

mod manager;

pub use manager::HandCricket;
