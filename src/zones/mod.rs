//! Where the player's cards live.
//!
//! - `Deck`: draw pile, top card drawn first
//! - `DiscardPile`: played and discarded cards, shuffled back when the deck runs out
//! - `CardPool`: cards not owned yet, the source of card-swap offers
//! - `PlayerHand` / `PlayerHandService`: drawing, playing and discarding
//!
//! Every card the player owns is in exactly one of deck, discard pile or hand.

mod deck;
mod discard;
mod hand;
mod pool;

pub use deck::Deck;
pub use discard::DiscardPile;
pub use hand::{PlayOutcome, PlayerHand, PlayerHandService};
pub use pool::CardPool;
