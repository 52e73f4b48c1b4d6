//! The effect assembly: card effects queued during a turn and resolved at
//! its end.
//!
//! Playing a card does not resolve anything. Its effects are appended here
//! and run in FIFO order during `EndOfTurnEffectExecution`, so effects of
//! several cards interact in a fixed order.

use rustc_hash::FxHashMap;

use crate::cards::{Card, CardId};

use super::in_play::CardEffectInPlay;
use super::targets::EffectContext;

/// FIFO queue of effects waiting for the end of the turn.
#[derive(Clone, Debug, Default)]
pub struct EffectAssembly {
    queue: Vec<CardEffectInPlay>,
    plays: FxHashMap<CardId, u32>,
    next_play: u32,
}

impl EffectAssembly {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single effect.
    pub fn add_effect(&mut self, effect: CardEffectInPlay) {
        self.queue.push(effect);
    }

    /// Queue every effect of a played card, in the card's effect order.
    pub fn add_card_effects(&mut self, card: &Card) {
        let play = self.next_play;
        self.next_play += 1;
        *self.plays.entry(card.id).or_insert(0) += 1;

        for effect in &card.effects {
            self.add_effect(CardEffectInPlay::new(effect.clone(), card.id, play));
        }
        tracing::debug!(card = %card.id, effects = card.effects.len(), "Queued card effects");
    }

    /// Queued effects, oldest first.
    #[must_use]
    pub fn queued(&self) -> &[CardEffectInPlay] {
        &self.queue
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Times `card` was played since the last resolution.
    #[must_use]
    pub fn plays_of(&self, card: CardId) -> u32 {
        self.plays.get(&card).copied().unwrap_or(0)
    }

    /// Resolve every queued effect once, oldest first, then clear the queue
    /// and the play counts. Returns how many effects ran.
    pub fn execute_all(&mut self, ctx: EffectContext<'_>) -> usize {
        let queue = std::mem::take(&mut self.queue);
        let plays = std::mem::take(&mut self.plays);
        self.next_play = 0;

        let mut ctx = ctx.with_plays(plays);
        let mut current_play = None;
        let mut play_factor = 1;

        for in_play in &queue {
            if current_play != Some(in_play.play) {
                current_play = Some(in_play.play);
                play_factor = if ctx.take_double_next_play() { 2 } else { 1 };
            }
            let all_factor = if ctx.double_all() { 2 } else { 1 };
            in_play.execute(&mut ctx, play_factor * all_factor);
        }

        tracing::info!(executed = queue.len(), "Executed all end of turn effects");
        queue.len()
    }

    /// Drop everything queued without resolving it.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.plays.clear();
        self.next_play = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Turn;
    use crate::effects::{Board, CardEffect, Fish};

    fn scaler(id: u32, scales: u32) -> Card {
        Card::new(CardId::new(id), format!("Scaler {}", id))
            .with_effect(CardEffect::ScaleFish { scales })
    }

    #[test]
    fn test_add_card_effects_keeps_order() {
        let mut assembly = EffectAssembly::new();
        let card = Card::new(CardId::new(1), "Combo")
            .with_effect(CardEffect::ScaleFish { scales: 1 })
            .with_effect(CardEffect::TimeGain { amount: 2 });

        assembly.add_card_effects(&card);
        assembly.add_card_effects(&scaler(2, 5));

        assert_eq!(assembly.len(), 3);
        let queued = assembly.queued();
        assert_eq!(queued[0].effect, CardEffect::ScaleFish { scales: 1 });
        assert_eq!(queued[1].effect, CardEffect::TimeGain { amount: 2 });
        assert_eq!(queued[2].source, CardId::new(2));
        assert_eq!(queued[0].play, queued[1].play);
        assert_ne!(queued[1].play, queued[2].play);
        assert_eq!(assembly.plays_of(CardId::new(1)), 1);
    }

    #[test]
    fn test_execute_all_runs_each_once_and_clears() {
        let mut assembly = EffectAssembly::new();
        assembly.add_card_effects(&scaler(1, 2));
        assembly.add_card_effects(&scaler(2, 3));

        let (mut turn, mut fish, mut board) = (Turn::new(5), Fish::new(), Board::new());
        let executed = assembly.execute_all(EffectContext::new(&mut turn, &mut fish, &mut board));

        assert_eq!(executed, 2);
        assert_eq!(fish.scales_this_turn(), 5);
        assert!(assembly.is_empty());
        assert_eq!(assembly.plays_of(CardId::new(1)), 0);

        let executed = assembly.execute_all(EffectContext::new(&mut turn, &mut fish, &mut board));
        assert_eq!(executed, 0);
        assert_eq!(fish.scales_this_turn(), 5);
    }

    #[test]
    fn test_fifo_order_observable_through_boost() {
        // A boost only affects scaling that resolves after it.
        let boost = Card::new(CardId::new(9), "Boost").with_effect(CardEffect::ScaleBoost { scales: 10 });

        let mut assembly = EffectAssembly::new();
        assembly.add_card_effects(&scaler(1, 1));
        assembly.add_card_effects(&boost);
        assembly.add_card_effects(&scaler(2, 1));

        let (mut turn, mut fish, mut board) = (Turn::new(5), Fish::new(), Board::new());
        assembly.execute_all(EffectContext::new(&mut turn, &mut fish, &mut board));

        assert_eq!(fish.scales_this_turn(), 1 + 11);
    }

    #[test]
    fn test_double_next_card() {
        let double = Card::new(CardId::new(8), "Double")
            .with_effect(CardEffect::DoubleEffects { all_cards_this_turn: false });

        let mut assembly = EffectAssembly::new();
        assembly.add_card_effects(&double);
        assembly.add_card_effects(&scaler(1, 3));
        assembly.add_card_effects(&scaler(2, 3));

        let (mut turn, mut fish, mut board) = (Turn::new(5), Fish::new(), Board::new());
        assembly.execute_all(EffectContext::new(&mut turn, &mut fish, &mut board));

        assert_eq!(fish.scales_this_turn(), 6 + 3);
    }

    #[test]
    fn test_double_all_remaining() {
        let double = Card::new(CardId::new(8), "Double All")
            .with_effect(CardEffect::DoubleEffects { all_cards_this_turn: true });

        let mut assembly = EffectAssembly::new();
        assembly.add_card_effects(&scaler(1, 1));
        assembly.add_card_effects(&double);
        assembly.add_card_effects(&scaler(2, 3));
        assembly.add_card_effects(&scaler(3, 3));

        let (mut turn, mut fish, mut board) = (Turn::new(5), Fish::new(), Board::new());
        assembly.execute_all(EffectContext::new(&mut turn, &mut fish, &mut board));

        assert_eq!(fish.scales_this_turn(), 1 + 6 + 6);
    }

    #[test]
    fn test_repeat_plays_feed_multiplied_effect() {
        let card = Card::new(CardId::new(3), "Frenzy").with_effect(CardEffect::ScaleFishMultiplied {
            base_scales: 1,
            increment_per_play: 1,
            play_limit: 5,
        });

        let mut assembly = EffectAssembly::new();
        assembly.add_card_effects(&card);
        assembly.add_card_effects(&card);
        assert_eq!(assembly.plays_of(CardId::new(3)), 2);

        let (mut turn, mut fish, mut board) = (Turn::new(5), Fish::new(), Board::new());
        assembly.execute_all(EffectContext::new(&mut turn, &mut fish, &mut board));

        // Each resolution sees two plays: 1 + 1 per extra play.
        assert_eq!(fish.scales_this_turn(), 4);
    }

    #[test]
    fn test_clear() {
        let mut assembly = EffectAssembly::new();
        assembly.add_card_effects(&scaler(1, 1));
        assembly.clear();
        assert!(assembly.is_empty());
        assert_eq!(assembly.plays_of(CardId::new(1)), 0);
    }
}
