//! All mutable state of one run.

use crate::core::{Game, GameConfig, GameRng, Turn};
use crate::effects::{Board, EffectAssembly, EffectContext, Fish};
use crate::events::EventQueue;
use crate::swap::{CardSwapService, SwapOffer};
use crate::zones::{CardPool, Deck, DiscardPile, PlayerHand, PlayerHandService};

/// Run state. The services borrow the parts they need from here for the
/// length of one operation.
#[derive(Clone, Debug)]
pub struct GameContext {
    pub deck: Deck,
    pub discard: DiscardPile,
    pub pool: CardPool,
    pub hand: PlayerHand,
    pub turn: Turn,
    pub assembly: EffectAssembly,
    pub fish: Fish,
    pub board: Board,
    pub game: Game,
    pub rng: GameRng,
    pub events: EventQueue,
    /// The swap offer awaiting the player's selection, if any.
    pub pending_offer: Option<SwapOffer>,
}

impl GameContext {
    /// Empty piles and fresh counters for a run using `rng`.
    #[must_use]
    pub fn new(config: &GameConfig, rng: GameRng) -> Self {
        Self {
            deck: Deck::new(),
            discard: DiscardPile::new(),
            pool: CardPool::new(),
            hand: PlayerHand::new(config.draw_amount),
            turn: Turn::new(config.initial_time),
            assembly: EffectAssembly::new(),
            fish: Fish::new(),
            board: Board::new(),
            game: Game::new(config),
            rng,
            events: EventQueue::new(),
            pending_offer: None,
        }
    }

    pub fn hand_service(&mut self) -> PlayerHandService<'_> {
        PlayerHandService {
            hand: &mut self.hand,
            deck: &mut self.deck,
            discard: &mut self.discard,
            turn: &mut self.turn,
            assembly: &mut self.assembly,
            rng: &mut self.rng,
            events: &mut self.events,
        }
    }

    pub fn swap_service(&mut self) -> CardSwapService<'_> {
        CardSwapService {
            deck: &mut self.deck,
            discard: &mut self.discard,
            pool: &mut self.pool,
            game: &mut self.game,
            turn: &self.turn,
            rng: &mut self.rng,
            events: &mut self.events,
        }
    }

    /// Resolve the effect assembly against the turn, fish and board.
    pub fn execute_effects(&mut self) -> usize {
        let ctx = EffectContext::new(&mut self.turn, &mut self.fish, &mut self.board);
        self.assembly.execute_all(ctx)
    }

    /// Cards the player owns: deck, discard pile and hand.
    #[must_use]
    pub fn owned_card_count(&self) -> usize {
        self.deck.size() + self.discard.size() + self.hand.len()
    }
}
