//! Core engine types: errors, RNG, configuration, turn and game state.
//!
//! These are the pieces every other module builds on. None of them know
//! about piles or effects.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod turn;

pub use config::{GameConfig, SWAP_OFFER_SIZE};
pub use error::{GameError, Result};
pub use rng::GameRng;
pub use state::{Game, GameState};
pub use turn::Turn;
