use serde::Serialize;

use crate::cards::{CardPile, CardRef};
use crate::core::GameState;
use crate::effects::{Board, Fish};
use crate::swap::SwapOffer;

/// What the presentation layer needs to draw one frame.
///
/// Piles are persistent vectors, so taking a snapshot does not copy cards.
#[derive(Clone, Debug, Serialize)]
pub struct GameSnapshot {
    pub state: GameState,
    pub turn_number: u32,
    pub elapsed_turns: u32,
    pub remaining_time: u32,
    pub hand: Vec<CardRef>,
    pub deck: CardPile,
    pub discard: CardPile,
    pub pool: CardPile,
    pub fish: Fish,
    pub board: Board,
    pub pending_offer: Option<SwapOffer>,
}
