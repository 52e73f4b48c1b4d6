//! Run configuration.
//!
//! Everything tunable about a run lives in [`GameConfig`]: the seed, draw
//! sizes, the time budget per turn, the run length and the card-swap window.
//! Configs can be built in code with the `with_*` builders or loaded from
//! JSON.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Number of cards on each side of a card-swap offer.
pub const SWAP_OFFER_SIZE: usize = 3;

/// Run configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for every random decision in the run.
    pub seed: u64,

    /// Cards drawn at the start of each turn.
    pub draw_amount: usize,

    /// Cards drawn when a new game starts.
    pub starting_hand_size: usize,

    /// Time budget the player gets at the start of every turn.
    pub initial_time: u32,

    /// The run is over once this many turns have elapsed.
    pub turns_in_a_game: u32,

    /// First turn (inclusive) with a card-swap offer.
    pub turn_to_start_swapping_cards: u32,

    /// Last turn (inclusive) with a card-swap offer.
    pub turn_to_stop_swapping_cards: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            draw_amount: 5,
            starting_hand_size: 5,
            initial_time: 10,
            turns_in_a_game: 20,
            turn_to_start_swapping_cards: 4,
            turn_to_stop_swapping_cards: 15,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values that cannot produce a playable run.
    pub fn validate(&self) -> Result<()> {
        if self.draw_amount == 0 {
            return Err(GameError::Config("draw_amount must be at least 1".into()));
        }
        if self.turns_in_a_game == 0 {
            return Err(GameError::Config("turns_in_a_game must be at least 1".into()));
        }
        if self.turn_to_start_swapping_cards > self.turn_to_stop_swapping_cards {
            return Err(GameError::Config(format!(
                "swap window starts at turn {} but stops at turn {}",
                self.turn_to_start_swapping_cards, self.turn_to_stop_swapping_cards
            )));
        }
        Ok(())
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-turn draw amount.
    #[must_use]
    pub fn with_draw_amount(mut self, amount: usize) -> Self {
        self.draw_amount = amount;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the per-turn time budget.
    #[must_use]
    pub fn with_initial_time(mut self, time: u32) -> Self {
        self.initial_time = time;
        self
    }

    /// Set the run length in turns.
    #[must_use]
    pub fn with_turns_in_a_game(mut self, turns: u32) -> Self {
        self.turns_in_a_game = turns;
        self
    }

    /// Set the inclusive card-swap window.
    #[must_use]
    pub fn with_swap_window(mut self, start: u32, stop: u32) -> Self {
        self.turn_to_start_swapping_cards = start;
        self.turn_to_stop_swapping_cards = stop;
        self
    }
}
