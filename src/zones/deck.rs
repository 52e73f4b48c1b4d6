//! The player's deck.

use crate::cards::{Card, CardPile, CardRef};
use crate::core::{GameError, GameRng, Result};

/// The deck the player draws from.
///
/// The deck never shuffles itself mid-run. Refilling it is the discard
/// pile's job; the only shuffle here is the initial load.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    pile: CardPile,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the deck's contents with `cards` in a random order.
    pub fn load_shuffled(&mut self, cards: &[CardRef], rng: &mut GameRng) {
        let mut cards = cards.to_vec();
        rng.shuffle(&mut cards);
        self.pile = cards.into_iter().collect();
        tracing::debug!(size = self.pile.len(), "Loaded shuffled deck");
    }

    /// Remove and return the top card.
    ///
    /// Fails with [`GameError::EmptyDeck`]; callers should check
    /// [`is_empty`](Self::is_empty) first.
    pub fn draw_from_top(&mut self) -> Result<CardRef> {
        let card = self.pile.pop().ok_or(GameError::EmptyDeck)?;
        tracing::debug!(card = %card.name, "Drew the top card");
        Ok(card)
    }

    /// Put a card on top of the deck.
    pub fn add_card(&mut self, card: CardRef) {
        tracing::debug!(card = %card.name, "Added card to the deck");
        self.pile.push(card);
    }

    /// Remove one copy of `card` from the deck.
    pub fn remove_card(&mut self, card: &Card) -> Result<CardRef> {
        self.pile.remove_first(card).ok_or(GameError::CardNotInPile {
            card: card.id,
            pile: "deck",
        })
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.pile.contains(card)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> Vec<CardRef> {
        self.pile.to_vec()
    }

    #[must_use]
    pub fn pile(&self) -> &CardPile {
        &self.pile
    }
}
