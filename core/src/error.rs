use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index out of range")]
    InvalidIndex,
    #[error("Cell is already occupied")]
    AlreadyOccupied,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Input is locked while a placed mark fades")]
    InputLocked,
}

pub type Result<T> = core::result::Result<T, GameError>;
