//! The discard pile, and reshuffling it into the deck.

use crate::cards::{Card, CardPile, CardRef};
use crate::core::{GameError, GameRng, Result};
use crate::events::{EventQueue, GameEvent};

use super::deck::Deck;

/// Cards that were played or discarded this cycle through the deck.
#[derive(Clone, Debug, Default)]
pub struct DiscardPile {
    pile: CardPile,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card on top of the discard pile and announce it.
    pub fn discard(&mut self, card: CardRef, events: &mut EventQueue) {
        tracing::debug!(card = %card.name, "Discarding card");
        self.pile.push(card.clone());
        events.push(GameEvent::CardDiscarded { card });
    }

    /// Move every discarded card into the (empty) deck in a uniformly random
    /// order.
    ///
    /// The pile is drained into a scratch list; then a random remaining card
    /// is picked and pushed onto the deck until the list is empty.
    pub fn shuffle_back_into_deck(&mut self, deck: &mut Deck, rng: &mut GameRng) -> Result<()> {
        if !deck.is_empty() {
            return Err(GameError::DeckNotEmpty {
                deck_size: deck.size(),
            });
        }

        tracing::info!(cards = self.pile.len(), "Shuffling the discard pile back into the deck");

        let mut remaining = self.pile.drain();
        while !remaining.is_empty() {
            let index = rng.gen_index(remaining.len());
            deck.add_card(remaining.swap_remove(index));
        }
        Ok(())
    }

    /// Copies of `card` in the discard pile.
    #[must_use]
    pub fn amount_in_discard_pile(&self, card: &Card) -> usize {
        self.pile.count(card)
    }

    /// Remove one copy of `card` from the discard pile.
    pub fn remove_card(&mut self, card: &Card) -> Result<CardRef> {
        self.pile.remove_first(card).ok_or(GameError::CardNotInPile {
            card: card.id,
            pile: "discard pile",
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
        self.pile.is_empty()
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
