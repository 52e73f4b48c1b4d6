//! Offer generation and selection handling for card swaps.

use rustc_hash::FxHashSet;

use crate::cards::{Card, CardId, CardRef};
use crate::core::{Game, GameError, GameRng, Result, Turn, SWAP_OFFER_SIZE};
use crate::events::{EventQueue, GameEvent};
use crate::zones::{CardPool, Deck, DiscardPile};

use super::offer::SwapOffer;

/// Builds swap offers and applies the player's selection.
pub struct CardSwapService<'a> {
    pub deck: &'a mut Deck,
    pub discard: &'a mut DiscardPile,
    pub pool: &'a mut CardPool,
    pub game: &'a mut Game,
    pub turn: &'a Turn,
    pub rng: &'a mut GameRng,
    pub events: &'a mut EventQueue,
}

impl CardSwapService<'_> {
    /// Whether the current turn falls inside the swap window.
    #[must_use]
    pub fn can_swap_cards(&self) -> bool {
        self.game.in_swap_window(self.turn.current_turn_number())
    }

    /// Build an offer without announcing or recording it.
    ///
    /// Removable cards are three distinct cards from deck and discard pile
    /// in random order. Offered cards are three distinct pool cards no rarer
    /// than the current turn number, rarest first with ties in random order.
    /// If the offered three match last turn's offer exactly, one random slot
    /// is replaced with the next-ranked candidate.
    pub fn generate_offer(&mut self) -> Result<SwapOffer> {
        let removable = self.removable_candidates()?;
        let mut candidates = self.offered_candidates()?;

        let reserve = candidates.get(SWAP_OFFER_SIZE).cloned();
        candidates.truncate(SWAP_OFFER_SIZE);
        let mut offer = SwapOffer {
            removable,
            offered: candidates,
        };

        let repeated = self
            .game
            .last_offered_cards
            .as_deref()
            .is_some_and(|previous| offer.repeats(previous));
        if repeated {
            match reserve {
                Some(card) => {
                    let slot = self.rng.gen_index(SWAP_OFFER_SIZE);
                    tracing::debug!(slot, card = %card.name, "Replacing repeated swap offer slot");
                    offer.offered[slot] = card;
                }
                None => {
                    tracing::warn!("No reserve candidate, repeating last turn's swap offer");
                }
            }
        }

        Ok(offer)
    }

    /// Generate, record and announce this turn's offer.
    ///
    /// Returns `Ok(None)` outside the swap window.
    pub fn handle_card_swap_options(&mut self) -> Result<Option<SwapOffer>> {
        if !self.can_swap_cards() {
            return Ok(None);
        }

        let offer = self.generate_offer()?;
        tracing::info!(
            turn = self.turn.current_turn_number(),
            removable = ?names(&offer.removable),
            offered = ?names(&offer.offered),
            "Offering card swap"
        );

        self.game.last_offered_cards = Some(offer.offered.clone());
        self.events.push(GameEvent::CardSwapOptions {
            removable: offer.removable.clone(),
            offered: offer.offered.clone(),
        });
        Ok(Some(offer))
    }

    /// Trade `remove` (from deck, else discard pile) for `add` (from the
    /// pool). `add` goes on top of the deck and `remove` into the pool.
    pub fn register_card_swap_selections(&mut self, remove: &Card, add: &Card) -> Result<()> {
        let in_deck = self.deck.contains(remove);
        if !in_deck && !self.discard.contains(remove) {
            return Err(GameError::CardNotInPile {
                card: remove.id,
                pile: "deck or discard pile",
            });
        }
        if !self.pool.contains(add) {
            return Err(GameError::CardNotInPile {
                card: add.id,
                pile: "card pool",
            });
        }

        let owned_before = self.owned_outside_hand();

        let removed = if in_deck {
            self.deck.remove_card(remove)?
        } else {
            self.discard.remove_card(remove)?
        };
        let added = self.pool.remove_card(add)?;
        self.pool.add_card(removed.clone());
        self.deck.add_card(added.clone());

        let owned_after = self.owned_outside_hand();
        debug_assert_eq!(owned_before, owned_after, "card swap changed the deck size");
        if owned_before != owned_after {
            return Err(GameError::IntegrityViolation(format!(
                "card swap changed deck and discard size from {} to {}",
                owned_before, owned_after
            )));
        }

        tracing::info!(removed = %removed.name, added = %added.name, "Swapped cards");
        self.events.push(GameEvent::CardsSwapped { removed, added });
        Ok(())
    }

    fn owned_outside_hand(&self) -> usize {
        self.deck.size() + self.discard.size()
    }

    fn removable_candidates(&mut self) -> Result<Vec<CardRef>> {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        let mut cards: Vec<CardRef> = self
            .deck
            .cards()
            .into_iter()
            .chain(self.discard.cards())
            .filter(|card| seen.insert(card.id))
            .collect();

        if cards.len() < SWAP_OFFER_SIZE {
            return Err(GameError::NotEnoughSwapCandidates {
                side: "removable",
                required: SWAP_OFFER_SIZE,
                found: cards.len(),
            });
        }

        self.rng.shuffle(&mut cards);
        cards.truncate(SWAP_OFFER_SIZE);
        Ok(cards)
    }

    /// Up to four ranked pool candidates: three to show plus a reserve.
    fn offered_candidates(&mut self) -> Result<Vec<CardRef>> {
        let max_rarity = self.turn.current_turn_number();
        let mut keyed: Vec<(u32, CardRef)> = self
            .pool
            .cards_up_to_rarity(max_rarity)
            .into_iter()
            .map(|card| (self.rng.sort_key(), card))
            .collect();

        if keyed.len() < SWAP_OFFER_SIZE {
            return Err(GameError::NotEnoughSwapCandidates {
                side: "offered",
                required: SWAP_OFFER_SIZE,
                found: keyed.len(),
            });
        }

        keyed.sort_by(|(ka, a), (kb, b)| b.rarity.cmp(&a.rarity).then(ka.cmp(kb)));
        Ok(keyed
            .into_iter()
            .take(SWAP_OFFER_SIZE + 1)
            .map(|(_, card)| card)
            .collect())
    }
}

fn names(cards: &[CardRef]) -> Vec<&str> {
    cards.iter().map(|c| c.name.as_str()).collect()
}
