//! The card pool: cards the player does not own yet.

use rustc_hash::FxHashSet;

use crate::cards::{Card, CardId, CardPile, CardRef};
use crate::core::{GameError, Result};

/// Reservoir of cards that can be offered in card swaps.
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    pile: CardPile,
}

impl CardPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_card(&mut self, card: CardRef) {
        self.pile.push(card);
    }

    /// Remove one copy of `card` from the pool.
    pub fn remove_card(&mut self, card: &Card) -> Result<CardRef> {
        self.pile.remove_first(card).ok_or(GameError::CardNotInPile {
            card: card.id,
            pile: "card pool",
        })
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.pile.contains(card)
    }

    /// Copies of `card` in the pool.
    #[must_use]
    pub fn count_of(&self, card: &Card) -> usize {
        self.pile.count(card)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// One entry per distinct card with `rarity <= max_rarity`, in pool order.
    #[must_use]
    pub fn cards_up_to_rarity(&self, max_rarity: u32) -> Vec<CardRef> {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        self.pile
            .iter()
            .filter(|card| card.rarity <= max_rarity)
            .filter(|card| seen.insert(card.id))
            .cloned()
            .collect()
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
