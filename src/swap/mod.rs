//! Card swapping between turns.
//!
//! Inside the swap window the player is offered three of their own cards
//! and three pool cards, and may trade one for one. The swap never changes
//! the number of cards the player owns.

mod offer;
mod service;

pub use offer::SwapOffer;
pub use service::CardSwapService;
