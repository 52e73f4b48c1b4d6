//! Error types for the card economy.
//!
//! Precondition violations and integrity failures are reported as
//! [`GameError`]s and abort the operation with state left untouched.
//! Soft rejections (not enough time to play a card) are not errors; they
//! come back as ordinary outcomes.

use thiserror::Error;

use crate::cards::CardId;

use super::state::GameState;

/// Result type alias using [`GameError`].
pub type Result<T> = std::result::Result<T, GameError>;

/// Top-level error type for all card economy operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Tried to draw from an empty deck. Callers must check the size first.
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,

    /// The discard pile may only be shuffled back into an empty deck.
    #[error("Cannot shuffle the discard pile into a deck that still holds {deck_size} card(s)")]
    DeckNotEmpty {
        /// Cards still in the deck.
        deck_size: usize,
    },

    /// Tried to play a card that is not in the player's hand.
    #[error("Card {0} is not in the player's hand")]
    CardNotInHand(CardId),

    /// A card was expected in a pile but is not there.
    #[error("Card {card} is not in the {pile}")]
    CardNotInPile {
        /// The missing card.
        card: CardId,
        /// Name of the pile that was searched.
        pile: &'static str,
    },

    /// An operation was attempted in the wrong game state.
    #[error("Operation requires state {expected:?}, but the game is in {actual:?}")]
    InvalidState {
        /// State the operation requires.
        expected: GameState,
        /// State the game is actually in.
        actual: GameState,
    },

    /// The card data cannot produce a full swap offer.
    #[error("Expected {required} distinct {side} card(s) for the swap offer, found {found}")]
    NotEnoughSwapCandidates {
        /// Which side of the offer ran short ("removable" or "offered").
        side: &'static str,
        /// Candidates required.
        required: usize,
        /// Candidates available.
        found: usize,
    },

    /// A swap selection referenced a card that was not part of the offer.
    #[error("Card {0} was not part of the current swap offer")]
    NotOffered(CardId),

    /// No swap offer is waiting for a selection.
    #[error("No card swap offer is pending")]
    NoPendingOffer,

    /// A game invariant was broken.
    #[error("Game integrity violated: {0}")]
    IntegrityViolation(String),

    /// A card id is not known to the vault.
    #[error("Unknown card: {0}")]
    UnknownCard(CardId),

    /// Invalid configuration or card data.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The settings store could not be read or written.
    #[error("Settings store error: {0}")]
    Settings(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err.to_string())
    }
}
