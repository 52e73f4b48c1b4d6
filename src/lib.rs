//! # roguedeck
//!
//! Card economy engine for a turn-based fish-scaling card roguelike.
//!
//! ## Design Principles
//!
//! 1. **Explicit Context**: All run state lives in one `GameContext`.
//!    Services borrow the parts they need; there are no globals.
//!
//! 2. **Deferred Effects**: Playing a card only queues its effects. They
//!    resolve together, in play order, when the turn ends.
//!
//! 3. **Events Out, Calls In**: The presentation layer calls `GameService`
//!    and drains `GameEvent`s. The core never calls back into it.
//!
//! ## Architecture
//!
//! - **Persistent Piles**: Deck, discard pile and pool are `im` vectors, so
//!   snapshots are O(1).
//!
//! - **Deterministic Runs**: One seeded ChaCha RNG drives every shuffle and
//!   offer, so a seed replays a run.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration, turn and game state
//! - `cards`: Card definitions, piles and the vault
//! - `zones`: Deck, discard pile, pool and hand
//! - `effects`: Card effects and the end-of-turn effect assembly
//! - `events`: Outbound event queue
//! - `swap`: Card-swap offers between turns
//! - `game`: Game context, service and turn state machine
//! - `settings`: Persisted player preferences

pub mod cards;
pub mod core;
pub mod effects;
pub mod events;
pub mod game;
pub mod settings;
pub mod swap;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Game, GameConfig, GameError, GameRng, GameState, Result, Turn,
    SWAP_OFFER_SIZE,
};

pub use crate::cards::{Card, CardId, CardPile, CardRef, CardVault};

pub use crate::zones::{CardPool, Deck, DiscardPile, PlayOutcome, PlayerHand, PlayerHandService};

pub use crate::effects::{
    Board, BoardItem, CardEffect, CardEffectInPlay, EffectAssembly, EffectContext, Fish,
};

pub use crate::events::{EventQueue, GameEvent};

pub use crate::swap::{CardSwapService, SwapOffer};

pub use crate::game::{GameContext, GameService, GameSnapshot};

pub use crate::settings::{JsonSettingsStore, MemorySettingsStore, Settings, SettingsStore};
