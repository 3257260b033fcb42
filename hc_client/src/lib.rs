//! Internal modules for the hand cricket client.
//!
//! This library provides command parsing and the game loop used by the
//! hc_client binary.

pub mod app;
pub mod commands;
