//! Pig: two players take turns rolling one die.
//!
//! - Every face but 1 adds to the turn score
//! - A 1 busts: the turn score is lost and the turn passes
//! - Holding banks the turn score and passes the turn
//! - First banked total to reach 100 wins; the game then waits for a new game

mod game;
mod snapshot;

pub use game::PigEngine;
pub use snapshot::GameSnapshot;
