//! A queued instance of a card effect.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

use super::effect::CardEffect;
use super::targets::EffectContext;

/// One effect of one played card, waiting in the effect assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffectInPlay {
    /// The effect definition.
    pub effect: CardEffect,
    /// Scale applied to the effect when it resolves.
    pub multiplier: u32,
    /// Card that queued the effect.
    pub source: CardId,
    /// Which play of the turn queued the effect (0-based). Effects of the
    /// same play share this value.
    pub play: u32,
}

impl CardEffectInPlay {
    /// A multiplier-1 instance of `effect` queued by `source`.
    #[must_use]
    pub fn new(effect: CardEffect, source: CardId, play: u32) -> Self {
        Self {
            effect,
            multiplier: 1,
            source,
            play,
        }
    }

    /// Resolve the effect once with `multiplier × extra_factor`.
    pub fn execute(&self, ctx: &mut EffectContext<'_>, extra_factor: u32) {
        ctx.set_source(self.source);
        self.effect
            .execute(ctx, self.multiplier.saturating_mul(extra_factor));
    }
}
