//! Card effect definitions.
//!
//! Every effect a card can carry is one variant of [`CardEffect`]. Effects
//! are stateless data; they act on an [`EffectContext`] when the effect
//! assembly resolves them at the end of the turn.
//!
//! ## Multiplier
//!
//! `execute` is called exactly once per queued effect, with the effect's
//! multiplier. Each variant scales its own amounts by it. Effects are never
//! executed `multiplier` times in a loop.

use serde::{Deserialize, Serialize};

use super::targets::EffectContext;

/// An effect carried by a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardEffect {
    /// Write a message to the log. Used for placeholder cards.
    LogMessage { message: String },

    // === Fish ===

    /// Remove scales from the fish.
    ScaleFish { scales: u32 },

    /// Remove more scales the more often this card was played this turn:
    /// `base_scales + increment_per_play * (plays - 1)`, with `plays`
    /// capped at `play_limit`.
    ScaleFishMultiplied {
        base_scales: u32,
        increment_per_play: u32,
        play_limit: u32,
    },

    /// Every later scaling this turn removes `scales` more.
    ScaleBoost { scales: u32 },

    // === Time ===

    /// Add time to the next turn's budget.
    TimeGain { amount: u32 },

    /// Remove time from the next turn's budget, or halve it instead.
    TimeReduction {
        amount: u32,
        #[serde(default)]
        halve_instead: bool,
    },

    // === Board ===

    /// Put an item on the board that grants time at each turn start.
    TimeBuffWhileOnBoard {
        name: String,
        time_per_turn: u32,
        turns: u32,
    },

    /// Keep every board item on the board longer.
    ExtendBoardItems { turns: u32 },

    // === Modifiers ===

    /// Double the next card's effects, or every remaining effect this turn.
    DoubleEffects {
        #[serde(default)]
        all_cards_this_turn: bool,
    },
}

impl CardEffect {
    /// Apply the effect once, scaled by `multiplier`.
    pub fn execute(&self, ctx: &mut EffectContext<'_>, multiplier: u32) {
        match self {
            CardEffect::LogMessage { message } => {
                tracing::info!(multiplier, "Card effect message: {}", message);
            }

            CardEffect::ScaleFish { scales } => {
                let removed = ctx.fish.scale(scales.saturating_mul(multiplier));
                tracing::debug!(removed, "Scaled the fish");
            }

            CardEffect::ScaleFishMultiplied {
                base_scales,
                increment_per_play,
                play_limit,
            } => {
                let plays = ctx.plays_of_source().min((*play_limit).max(1));
                let per_play = base_scales.saturating_add(increment_per_play.saturating_mul(plays - 1));
                let removed = ctx.fish.scale(per_play.saturating_mul(multiplier));
                tracing::debug!(plays, removed, "Scaled the fish (multiplied)");
            }

            CardEffect::ScaleBoost { scales } => {
                ctx.fish.boost(scales.saturating_mul(multiplier));
            }

            CardEffect::TimeGain { amount } => {
                ctx.turn
                    .adjust_next_turn(i64::from(amount.saturating_mul(multiplier)));
            }

            CardEffect::TimeReduction {
                amount,
                halve_instead,
            } => {
                if *halve_instead {
                    ctx.turn.halve_next_turn();
                } else {
                    ctx.turn
                        .adjust_next_turn(-i64::from(amount.saturating_mul(multiplier)));
                }
            }

            CardEffect::TimeBuffWhileOnBoard {
                name,
                time_per_turn,
                turns,
            } => {
                ctx.board
                    .add_item(name.clone(), time_per_turn.saturating_mul(multiplier), *turns);
            }

            CardEffect::ExtendBoardItems { turns } => {
                ctx.board.extend_all(turns.saturating_mul(multiplier));
            }

            CardEffect::DoubleEffects { all_cards_this_turn } => {
                ctx.request_double(*all_cards_this_turn);
            }
        }
    }
}
