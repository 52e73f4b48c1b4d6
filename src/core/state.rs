//! Game state machine and per-run bookkeeping.
//!
//! ## Turn cycle
//!
//! ```text
//! PlayCards -> TurnEnd -> EndOfTurnEffectExecution -> GameOverCheck
//!     GameOverCheck -> GameOver                       (terminal)
//!     GameOverCheck -> CardsSwap -> TurnStart -> PlayCards
//! ```
//!
//! Only the game service moves the state, and only through the edges above.

use serde::{Deserialize, Serialize};

use crate::cards::CardRef;

use super::config::GameConfig;

/// Phase of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player to play cards or end the turn.
    PlayCards,
    /// The player ended the turn.
    TurnEnd,
    /// Queued card effects are being resolved.
    EndOfTurnEffectExecution,
    /// Deciding whether the run continues.
    GameOverCheck,
    /// The run is over. Terminal.
    GameOver,
    /// Hand discarded, card-swap offer (if any) awaiting a selection.
    CardsSwap,
    /// Refreshing time and drawing the next hand.
    TurnStart,
}

impl GameState {
    /// Whether `next` is a legal successor of this state.
    #[must_use]
    pub fn can_transition_to(self, next: GameState) -> bool {
        use GameState::*;
        matches!(
            (self, next),
            (PlayCards, TurnEnd)
                | (TurnEnd, EndOfTurnEffectExecution)
                | (EndOfTurnEffectExecution, GameOverCheck)
                | (GameOverCheck, GameOver)
                | (GameOverCheck, CardsSwap)
                | (CardsSwap, TurnStart)
                | (TurnStart, PlayCards)
        )
    }

    /// Whether this is the terminal state.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == GameState::GameOver
    }
}

/// Per-run game bookkeeping.
#[derive(Clone, Debug)]
pub struct Game {
    /// Current phase.
    pub state: GameState,

    /// Turns completed so far.
    pub elapsed_turns: u32,

    /// Whether any fish was scaled this turn or the turn before.
    pub fish_scaled_this_or_last_turn: bool,

    /// Whether any fish was scaled in the most recently finished turn. The
    /// turn before the first counts as scaled.
    pub fish_scaled_last_turn: bool,

    /// The pool cards offered in the previous swap, in offer order.
    pub last_offered_cards: Option<Vec<CardRef>>,

    /// First turn (inclusive) with a card-swap offer.
    pub turn_to_start_swapping_cards: u32,

    /// Last turn (inclusive) with a card-swap offer.
    pub turn_to_stop_swapping_cards: u32,

    /// Run length in turns.
    pub turns_in_a_game: u32,
}

impl Game {
    /// Fresh bookkeeping for a new run.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::PlayCards,
            elapsed_turns: 0,
            fish_scaled_this_or_last_turn: true,
            fish_scaled_last_turn: true,
            last_offered_cards: None,
            turn_to_start_swapping_cards: config.turn_to_start_swapping_cards,
            turn_to_stop_swapping_cards: config.turn_to_stop_swapping_cards,
            turns_in_a_game: config.turns_in_a_game,
        }
    }

    /// Record whether a fish was scaled in the turn that just ended and
    /// update the this-or-last-turn flag.
    pub fn record_fish_scaling(&mut self, scaled_this_turn: bool) {
        self.fish_scaled_this_or_last_turn = scaled_this_turn || self.fish_scaled_last_turn;
        self.fish_scaled_last_turn = scaled_this_turn;
    }

    /// A run ends when no fish has been scaled for two turns in a row or the
    /// turn limit has been reached.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.fish_scaled_this_or_last_turn || self.elapsed_turns >= self.turns_in_a_game
    }

    /// Whether `turn_number` falls inside the inclusive swap window.
    #[must_use]
    pub fn in_swap_window(&self, turn_number: u32) -> bool {
        (self.turn_to_start_swapping_cards..=self.turn_to_stop_swapping_cards)
            .contains(&turn_number)
    }
}
