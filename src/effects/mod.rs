//! Effect system for card abilities.
//!
//! - `CardEffect`: closed set of effect kinds, one `execute` contract
//! - `CardEffectInPlay`: an effect queued by a played card, with multiplier
//! - `EffectAssembly`: FIFO queue resolved at the end of the turn
//! - `Fish`, `Board`, `EffectContext`: what effects act on
//!
//! ## Resolution Timing
//!
//! Effects never resolve when their card is played. They wait in the
//! assembly until the turn ends and then resolve together, oldest first.

mod assembly;
mod effect;
mod in_play;
mod targets;

pub use assembly::EffectAssembly;
pub use effect::CardEffect;
pub use in_play::CardEffectInPlay;
pub use targets::{Board, BoardItem, EffectContext, Fish};
