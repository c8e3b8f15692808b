//! Rules engine trait and state machine states.
//!
//! Drivers (a UI, a replay tool, tests) talk to the game through
//! `RulesEngine` and never poke at the state directly.

pub mod engine;

pub use engine::{GameResult, Phase, RulesEngine};
