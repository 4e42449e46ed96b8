//! Turn-based game session engine for Xeno.
//!
//! Drives the explore / fight / move cycle over a `xeno-core` world. The
//! session is a pull-based state machine: feed it one line of player input
//! via [`GameSession::process`] and print the returned text; all prompts,
//! combat narration, and the game-over banner come back as rendered strings,
//! so any frontend that can read and write lines can host a game.

/// Combat resolution: attack sweeps and NPC retaliation.
pub mod combat;
/// Session configuration.
pub mod config;
/// Error types for the game engine.
pub mod error;
/// Game session management.
pub mod session;

pub use combat::PlayerAction;
pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use session::{GameSession, Outcome, Phase};
