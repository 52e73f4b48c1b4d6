//! What card effects act on.
//!
//! Effects resolve against the fish (scales removed), the board (items that
//! keep granting time) and the turn (time budget). [`EffectContext`]
//! borrows all three for the duration of one resolution pass.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Turn;

/// Scale tally for the fish being worked on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    scales_this_turn: u32,
    scales_last_turn: u32,
    total_scales: u64,
    boost_this_turn: u32,
}

impl Fish {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `scales` scales, plus any boost active this turn.
    ///
    /// Returns the number actually removed.
    pub fn scale(&mut self, scales: u32) -> u32 {
        let removed = scales.saturating_add(self.boost_this_turn);
        self.scales_this_turn = self.scales_this_turn.saturating_add(removed);
        self.total_scales += u64::from(removed);
        removed
    }

    /// Increase every later scaling this turn by `scales`.
    pub fn boost(&mut self, scales: u32) {
        self.boost_this_turn = self.boost_this_turn.saturating_add(scales);
    }

    #[must_use]
    pub fn scales_this_turn(&self) -> u32 {
        self.scales_this_turn
    }

    #[must_use]
    pub fn scales_last_turn(&self) -> u32 {
        self.scales_last_turn
    }

    #[must_use]
    pub fn total_scales(&self) -> u64 {
        self.total_scales
    }

    /// Whether anything was scaled this turn.
    #[must_use]
    pub fn scaled_this_turn(&self) -> bool {
        self.scales_this_turn > 0
    }

    /// Whether anything was scaled in the previous turn.
    #[must_use]
    pub fn scaled_last_turn(&self) -> bool {
        self.scales_last_turn > 0
    }

    /// Roll this turn's tally over into last turn's and clear boosts.
    pub fn end_turn(&mut self) {
        self.scales_last_turn = self.scales_this_turn;
        self.scales_this_turn = 0;
        self.boost_this_turn = 0;
    }
}

/// An item that stays on the board and grants time every turn start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub name: String,
    pub time_per_turn: u32,
    pub turns_remaining: u32,
}

/// Items currently on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    items: Vec<BoardItem>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an item on the board. Items with zero turns are ignored.
    pub fn add_item(&mut self, name: impl Into<String>, time_per_turn: u32, turns: u32) {
        if turns == 0 {
            return;
        }
        self.items.push(BoardItem {
            name: name.into(),
            time_per_turn,
            turns_remaining: turns,
        });
    }

    /// Keep every item on the board `turns` turns longer.
    pub fn extend_all(&mut self, turns: u32) {
        for item in &mut self.items {
            item.turns_remaining = item.turns_remaining.saturating_add(turns);
        }
    }

    /// Collect the time every item grants this turn, then tick the items
    /// down and drop the expired ones.
    pub fn on_turn_start(&mut self) -> u32 {
        let gained = self
            .items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.time_per_turn));
        for item in &mut self.items {
            item.turns_remaining -= 1;
        }
        self.items.retain(|item| item.turns_remaining > 0);
        gained
    }

    #[must_use]
    pub fn items(&self) -> &[BoardItem] {
        &self.items
    }
}

/// Mutable view of everything an effect can touch.
pub struct EffectContext<'a> {
    /// The current turn's time budget.
    pub turn: &'a mut Turn,
    /// The fish being scaled.
    pub fish: &'a mut Fish,
    /// Items on the board.
    pub board: &'a mut Board,
    source: Option<CardId>,
    plays_this_turn: FxHashMap<CardId, u32>,
    double_next_play: bool,
    double_all: bool,
}

impl<'a> EffectContext<'a> {
    pub fn new(turn: &'a mut Turn, fish: &'a mut Fish, board: &'a mut Board) -> Self {
        Self {
            turn,
            fish,
            board,
            source: None,
            plays_this_turn: FxHashMap::default(),
            double_next_play: false,
            double_all: false,
        }
    }

    /// Provide how many times each card was played this turn.
    #[must_use]
    pub fn with_plays(mut self, plays: FxHashMap<CardId, u32>) -> Self {
        self.plays_this_turn = plays;
        self
    }

    /// The card whose effect is resolving.
    #[must_use]
    pub fn source(&self) -> Option<CardId> {
        self.source
    }

    pub(crate) fn set_source(&mut self, source: CardId) {
        self.source = Some(source);
    }

    /// Times the resolving card was played this turn (at least 1).
    #[must_use]
    pub fn plays_of_source(&self) -> u32 {
        self.source
            .and_then(|id| self.plays_this_turn.get(&id).copied())
            .unwrap_or(1)
            .max(1)
    }

    /// Double the effects of the next card that resolves, or of every
    /// remaining effect this turn.
    pub fn request_double(&mut self, all_cards_this_turn: bool) {
        if all_cards_this_turn {
            self.double_all = true;
        } else {
            self.double_next_play = true;
        }
    }

    /// Take the pending next-card doubling, if any.
    pub(crate) fn take_double_next_play(&mut self) -> bool {
        std::mem::take(&mut self.double_next_play)
    }

    pub(crate) fn double_all(&self) -> bool {
        self.double_all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fish_scaling_and_rollover() {
        let mut fish = Fish::new();
        assert!(!fish.scaled_this_turn());

        assert_eq!(fish.scale(3), 3);
        fish.boost(2);
        assert_eq!(fish.scale(1), 3);
        assert_eq!(fish.scales_this_turn(), 6);
        assert_eq!(fish.total_scales(), 6);

        fish.end_turn();
        assert!(!fish.scaled_this_turn());
        assert!(fish.scaled_last_turn());
        assert_eq!(fish.scale(1), 1, "boost ends with the turn");

        fish.end_turn();
        fish.end_turn();
        assert!(!fish.scaled_last_turn());
        assert_eq!(fish.total_scales(), 7);
    }

    #[test]
    fn test_board_items_expire() {
        let mut board = Board::new();
        board.add_item("Lantern", 2, 2);
        board.add_item("Clock", 1, 1);
        board.add_item("Nothing", 5, 0);
        assert_eq!(board.items().len(), 2);

        assert_eq!(board.on_turn_start(), 3);
        assert_eq!(board.items().len(), 1);
        assert_eq!(board.on_turn_start(), 2);
        assert!(board.items().is_empty());
        assert_eq!(board.on_turn_start(), 0);
    }

    #[test]
    fn test_board_extend() {
        let mut board = Board::new();
        board.add_item("Lantern", 2, 1);
        board.extend_all(2);
        assert_eq!(board.items()[0].turns_remaining, 3);
    }

    #[test]
    fn test_context_plays_default_to_one() {
        let mut turn = Turn::new(5);
        let mut fish = Fish::new();
        let mut board = Board::new();
        let mut plays = FxHashMap::default();
        plays.insert(CardId::new(1), 3);

        let mut ctx = EffectContext::new(&mut turn, &mut fish, &mut board).with_plays(plays);
        assert_eq!(ctx.plays_of_source(), 1);
        ctx.set_source(CardId::new(1));
        assert_eq!(ctx.plays_of_source(), 3);
        ctx.set_source(CardId::new(2));
        assert_eq!(ctx.plays_of_source(), 1);
    }

    #[test]
    fn test_context_doubling_flags() {
        let mut turn = Turn::new(5);
        let mut fish = Fish::new();
        let mut board = Board::new();
        let mut ctx = EffectContext::new(&mut turn, &mut fish, &mut board);

        ctx.request_double(false);
        assert!(ctx.take_double_next_play());
        assert!(!ctx.take_double_next_play());

        ctx.request_double(true);
        assert!(ctx.double_all());
    }
}
