//! Error types for the game engine.

use thiserror::Error;
use xeno_core::CoreError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a game session.
///
/// In-game anomalies (invalid menu choices, unknown destinations, depleted
/// potions) are not errors; they are rendered messages and forfeit at most
/// a turn. `Err` marks misuse of the session itself.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The world has no areas to start the session in.
    #[error("world has no areas")]
    NoAreas,

    /// The named starting area does not exist.
    #[error("area not found: {0}")]
    AreaNotFound(String),

    /// Input was fed to a session that already ended.
    #[error("the session is over")]
    SessionOver,

    /// A turn was taken before the player was created.
    #[error("no player in session")]
    NoPlayer,

    /// World model error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
