//! The player's hand and the operations that move cards through it.
//!
//! [`PlayerHandService`] owns nothing. It borrows the hand, deck, discard
//! pile, turn and effect assembly from the game context for the length of
//! one operation.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRef};
use crate::core::{GameError, GameRng, Result, Turn};
use crate::effects::EffectAssembly;
use crate::events::{EventQueue, GameEvent};

use super::deck::Deck;
use super::discard::DiscardPile;

/// Cards currently held, in draw order, plus how many to draw per turn.
#[derive(Clone, Debug, Default)]
pub struct PlayerHand {
    cards: Vec<CardRef>,
    draw_amount: usize,
}

impl PlayerHand {
    #[must_use]
    pub fn new(draw_amount: usize) -> Self {
        Self {
            cards: Vec::new(),
            draw_amount,
        }
    }

    #[must_use]
    pub fn draw_amount(&self) -> usize {
        self.draw_amount
    }

    pub fn set_draw_amount(&mut self, amount: usize) {
        self.draw_amount = amount;
    }

    #[must_use]
    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.position(card).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| Card::same_card(c, card))
    }
}

/// Result of trying to play a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The card left the hand and its effects were queued.
    Played,
    /// Not enough time left this turn. Nothing changed.
    Rejected { time_cost: u32, remaining_time: u32 },
}

/// Draw, play and discard operations on the hand.
pub struct PlayerHandService<'a> {
    pub hand: &'a mut PlayerHand,
    pub deck: &'a mut Deck,
    pub discard: &'a mut DiscardPile,
    pub turn: &'a mut Turn,
    pub assembly: &'a mut EffectAssembly,
    pub rng: &'a mut GameRng,
    pub events: &'a mut EventQueue,
}

impl PlayerHandService<'_> {
    /// Draw the hand's configured draw amount. Returns the number drawn.
    pub fn draw(&mut self) -> Result<usize> {
        let amount = self.hand.draw_amount;
        self.draw_n(amount)
    }

    /// Draw `amount` cards.
    ///
    /// When the deck runs short, the rest of the deck is drawn, the discard
    /// pile is shuffled back in once, and the remainder comes from the
    /// refilled deck. If even that is not enough the draw stops early.
    pub fn draw_n(&mut self, amount: usize) -> Result<usize> {
        tracing::info!(amount, "Drawing card(s)");
        let in_deck = self.deck.size();

        if amount <= in_deck {
            return self.draw_cards_from_deck(amount, 0);
        }

        let drawn = self.draw_cards_from_deck(in_deck, 0)?;
        self.discard.shuffle_back_into_deck(self.deck, self.rng)?;

        let remaining = amount - drawn;
        let available = remaining.min(self.deck.size());
        if available < remaining {
            tracing::warn!(
                requested = amount,
                available = drawn + available,
                "Deck and discard pile together hold fewer cards than requested"
            );
        }
        Ok(drawn + self.draw_cards_from_deck(available, drawn)?)
    }

    /// Play a card from the hand.
    ///
    /// Fails if the card is not in the hand. The held copy's time cost is
    /// what counts: a card that costs more time than is left is rejected
    /// without changing anything. Otherwise the time is spent, the card's
    /// effects are queued for the end of the turn and the card goes to the
    /// discard pile.
    pub fn play_card(&mut self, card: &Card) -> Result<PlayOutcome> {
        let index = self
            .hand
            .position(card)
            .ok_or(GameError::CardNotInHand(card.id))?;

        let held = &self.hand.cards[index];
        if !self.turn.can_afford(held.time_cost) {
            let time_cost = held.time_cost;
            let remaining_time = self.turn.remaining_time();
            tracing::info!(
                card = %held.name,
                time_cost,
                remaining_time,
                "Not enough time to play card"
            );
            self.events.push(GameEvent::PlayRejected {
                card: held.clone(),
                time_cost,
                remaining_time,
            });
            return Ok(PlayOutcome::Rejected {
                time_cost,
                remaining_time,
            });
        }

        let played = self.hand.cards.remove(index);
        tracing::info!(card = %played.name, "Playing card");
        self.turn.spend(played.time_cost);
        self.assembly.add_card_effects(&played);
        self.discard.discard(played, self.events);

        Ok(PlayOutcome::Played)
    }

    /// Discard every card in the hand, in hand order.
    pub fn discard_hand(&mut self) {
        tracing::info!(cards = self.hand.len(), "Discarding the entire player hand");
        for card in self.hand.cards.drain(..) {
            self.discard.discard(card, self.events);
        }
        self.events.push(GameEvent::HandDiscarded);
    }

    /// Move `amount` cards from the deck to the hand. The caller guarantees
    /// the deck holds them. `offset_base` continues the ordinal numbering of
    /// an interrupted draw.
    fn draw_cards_from_deck(&mut self, amount: usize, offset_base: usize) -> Result<usize> {
        for i in 0..amount {
            let card = self.deck.draw_from_top()?;
            self.hand.cards.push(card.clone());
            self.events.push(GameEvent::CardDrawn {
                card,
                offset: offset_base + i + 1,
            });
        }
        Ok(amount)
    }
}
