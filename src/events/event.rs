//! Outbound notifications for the presentation layer.
//!
//! The core never calls into rendering code. Instead every observable
//! change is pushed onto an [`EventQueue`], which the presentation layer
//! drains whenever it likes and animates at its own pace.

use serde::Serialize;

use crate::cards::CardRef;
use crate::core::GameState;

/// Something the presentation layer may want to show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A card moved from the deck into the hand.
    ///
    /// `offset` is the 1-based position of the card within the draw that
    /// produced it, for staggering draw animations.
    CardDrawn { card: CardRef, offset: usize },

    /// A card was put on the discard pile.
    CardDiscarded { card: CardRef },

    /// The whole hand was discarded.
    HandDiscarded,

    /// A card could not be played because the turn has too little time left.
    PlayRejected {
        card: CardRef,
        time_cost: u32,
        remaining_time: u32,
    },

    /// A card-swap offer is waiting for the player's selection.
    CardSwapOptions {
        /// Cards from deck and discard pile, one of which leaves the deck.
        removable: Vec<CardRef>,
        /// Cards from the pool, one of which joins the deck.
        offered: Vec<CardRef>,
    },

    /// The player's swap selection was applied.
    CardsSwapped { removed: CardRef, added: CardRef },

    /// The game moved to a new state.
    StateChanged { from: GameState, to: GameState },

    /// The run ended.
    GameOver { elapsed_turns: u32 },
}

/// FIFO queue of pending [`GameEvent`]s.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event.
    pub fn push(&mut self, event: GameEvent) {
        tracing::trace!(?event, "Queued event");
        self.events.push(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Look at the queued events without taking them.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
