use thiserror::Error;

/// Reasons the engine refuses an action or a snapshot.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("The game is over; start a new game first")]
    GameOver,
    #[error("Die produced {0}, expected a face between 1 and 6")]
    InvalidFace(u8),
    #[error("Player index {0} is not seated at the table")]
    InvalidPlayer(u8),
    #[error("Snapshot could not be encoded or decoded")]
    Snapshot(#[from] bincode::Error),
}
