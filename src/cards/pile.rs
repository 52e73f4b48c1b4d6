//! Ordered card stacks.
//!
//! The deck, the discard pile and the card pool are each one [`CardPile`].
//! Index 0 is the bottom, the last element is the top.

use im::Vector;
use serde::Serialize;

use super::definition::{Card, CardRef};

/// An ordered stack of card references.
///
/// Backed by `im::Vector`, so cloning a pile for a snapshot is O(1).
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct CardPile {
    cards: Vector<CardRef>,
}

impl CardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a card onto the top.
    pub fn push(&mut self, card: CardRef) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn pop(&mut self) -> Option<CardRef> {
        self.cards.pop_back()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&CardRef> {
        self.cards.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// Whether a card with the same identity is in the pile.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| Card::same_card(c, card))
    }

    /// Number of copies of `card` in the pile.
    #[must_use]
    pub fn count(&self, card: &Card) -> usize {
        self.cards.iter().filter(|c| Card::same_card(c, card)).count()
    }

    /// Remove the copy of `card` closest to the top.
    pub fn remove_first(&mut self, card: &Card) -> Option<CardRef> {
        let index = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| Card::same_card(c, card))
            .map(|(i, _)| i)
            .last()?;
        Some(self.cards.remove(index))
    }

    /// Remove every card, returned top first (the order they would be popped).
    pub fn drain(&mut self) -> Vec<CardRef> {
        let mut drained = Vec::with_capacity(self.cards.len());
        while let Some(card) = self.cards.pop_back() {
            drained.push(card);
        }
        drained
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CardRef> {
        self.cards.iter().cloned().collect()
    }
}

impl FromIterator<CardRef> for CardPile {
    fn from_iter<I: IntoIterator<Item = CardRef>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
