//! Core types: players, dice, actions, configuration, state.
//!
//! Everything here is plain data plus small helpers. The state machine that
//! ties them together lives in `engine`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::{DieRoller, GameRng, GameRngState, ScriptedDice, MAX_FACE, MIN_FACE};
pub use config::{EngineConfig, WINNING_SCORE};
pub use action::{Action, ActionRecord};
pub use state::GameState;
