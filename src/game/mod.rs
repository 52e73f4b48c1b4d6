//! The game service: owns one run and drives its turn state machine.
//!
//! - `GameContext`: every piece of run state, passed explicitly
//! - `GameService`: the public entry point for the presentation layer
//! - `GameSnapshot`: cheap read-only copy of what the player can see

mod context;
mod service;
mod snapshot;

pub use context::GameContext;
pub use service::GameService;
pub use snapshot::GameSnapshot;
