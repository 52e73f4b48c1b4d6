//! Card system: definitions, piles and the vault.
//!
//! ## Key Types
//!
//! - `CardId`: Identity of a card definition
//! - `Card` / `CardRef`: Immutable definition and its shared handle
//! - `CardPile`: Ordered stack used for deck, discard pile and pool
//! - `CardVault`: Every definition known to the run, plus the starter deck

pub mod definition;
pub mod pile;
pub mod vault;

pub use definition::{Card, CardId, CardRef};
pub use pile::CardPile;
pub use vault::CardVault;
