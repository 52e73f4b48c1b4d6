//! Per-turn time budget and turn counter.

use serde::{Deserialize, Serialize};

/// The current turn: its number and the time the player has left to spend.
///
/// Playing a card spends its time cost. At the start of every turn the
/// remaining time is refreshed to `initial_time`, adjusted by whatever the
/// previous turn's effects scheduled for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    initial_time: u32,
    current_turn_number: u32,
    remaining_time: u32,
    next_turn_delta: i64,
    halve_next_turn: bool,
}

impl Turn {
    /// Turn 1 with a full time budget.
    #[must_use]
    pub fn new(initial_time: u32) -> Self {
        Self {
            initial_time,
            current_turn_number: 1,
            remaining_time: initial_time,
            next_turn_delta: 0,
            halve_next_turn: false,
        }
    }

    #[must_use]
    pub fn initial_time(&self) -> u32 {
        self.initial_time
    }

    #[must_use]
    pub fn current_turn_number(&self) -> u32 {
        self.current_turn_number
    }

    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Whether `cost` fits in the remaining time.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        cost <= self.remaining_time
    }

    /// Spend time. Saturates at zero.
    pub fn spend(&mut self, cost: u32) {
        self.remaining_time = self.remaining_time.saturating_sub(cost);
    }

    /// Add time to the current turn.
    pub fn gain(&mut self, amount: u32) {
        self.remaining_time = self.remaining_time.saturating_add(amount);
    }

    /// Add (or with a negative delta, remove) time from the next turn.
    pub fn adjust_next_turn(&mut self, delta: i64) {
        self.next_turn_delta = self.next_turn_delta.saturating_add(delta);
    }

    /// Halve the next turn's base budget.
    pub fn halve_next_turn(&mut self) {
        self.halve_next_turn = true;
    }

    /// Net adjustment currently scheduled for the next turn.
    #[must_use]
    pub fn next_turn_delta(&self) -> i64 {
        self.next_turn_delta
    }

    /// Reset the remaining time to the full budget, applying and clearing
    /// any adjustments scheduled for this turn.
    pub fn refresh(&mut self) {
        let base = if self.halve_next_turn {
            self.initial_time / 2
        } else {
            self.initial_time
        };
        let adjusted = (i64::from(base) + self.next_turn_delta).clamp(0, i64::from(u32::MAX));
        self.remaining_time = u32::try_from(adjusted).unwrap_or(u32::MAX);
        self.next_turn_delta = 0;
        self.halve_next_turn = false;
    }

    /// Move on to the next turn number.
    pub fn advance(&mut self) {
        self.current_turn_number += 1;
    }
}
