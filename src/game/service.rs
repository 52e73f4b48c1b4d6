//! Turn state machine for a single run.
//!
//! ```text
//! end_turn():
//!   PlayCards -> TurnEnd -> EndOfTurnEffectExecution -> GameOverCheck
//!     -> GameOver                                 game over, stop
//!     -> CardsSwap (hand discarded)
//!          offer pending:   wait for register_card_swap_selections / skip_card_swap
//!          no offer:        -> TurnStart -> PlayCards
//! ```

use crate::cards::{Card, CardRef, CardVault};
use crate::core::{Game, GameConfig, GameError, GameRng, GameState, Result, Turn};
use crate::effects::{Board, Fish};
use crate::events::GameEvent;
use crate::swap::SwapOffer;
use crate::zones::{CardPool, Deck, DiscardPile, PlayOutcome};

use super::context::GameContext;
use super::snapshot::GameSnapshot;

/// Entry point for the presentation layer. Owns the vault and one run.
#[derive(Clone, Debug)]
pub struct GameService {
    config: GameConfig,
    vault: CardVault,
    ctx: GameContext,
}

impl GameService {
    /// Validate `config` and start a first run.
    pub fn new(config: GameConfig, vault: CardVault) -> Result<Self> {
        config.validate()?;
        let ctx = GameContext::new(&config, GameRng::new(config.seed));
        let mut service = Self { config, vault, ctx };
        service.start_new_game()?;
        Ok(service)
    }

    /// Throw away the current run and start a new one.
    ///
    /// The starter deck is shuffled into the deck, the pool gets
    /// `copies_in_pool` copies of every vault card minus one copy per starter
    /// card, and the starting hand is drawn. Pending events of the old run
    /// are dropped. The random stream continues from the previous run.
    pub fn start_new_game(&mut self) -> Result<()> {
        tracing::info!(seed = self.config.seed, "Starting a new game");

        let rng = self.ctx.rng.clone();
        let mut ctx = GameContext::new(&self.config, rng);

        ctx.deck.load_shuffled(self.vault.starter_deck(), &mut ctx.rng);
        ctx.pool = initial_pool(&self.vault);
        ctx.turn.refresh();
        ctx.hand_service().draw_n(self.config.starting_hand_size)?;

        self.ctx = ctx;
        tracing::info!(
            deck = self.ctx.deck.size(),
            hand = self.ctx.hand.len(),
            pool = self.ctx.pool.size(),
            "Game started, waiting for player actions"
        );
        Ok(())
    }

    /// Play a card from the hand.
    pub fn play_card(&mut self, card: &Card) -> Result<PlayOutcome> {
        self.require_state(GameState::PlayCards)?;
        self.ctx.hand_service().play_card(card)
    }

    /// End the current turn and run the state machine until it needs the
    /// player again.
    pub fn end_turn(&mut self) -> Result<()> {
        self.require_state(GameState::PlayCards)?;
        tracing::info!(turn = self.ctx.turn.current_turn_number(), "Ending the current turn");

        self.transition(GameState::TurnEnd)?;
        self.transition(GameState::EndOfTurnEffectExecution)?;
        self.ctx.execute_effects();

        self.ctx.game.record_fish_scaling(self.ctx.fish.scaled_this_turn());
        self.ctx.fish.end_turn();

        self.transition(GameState::GameOverCheck)?;
        if self.ctx.game.is_over() {
            return self.handle_game_over();
        }

        self.transition(GameState::CardsSwap)?;
        self.ctx.hand_service().discard_hand();

        match self.ctx.swap_service().handle_card_swap_options() {
            Ok(Some(offer)) => {
                self.ctx.pending_offer = Some(offer);
                tracing::info!("Waiting for the player to select cards to swap");
                return Ok(());
            }
            Ok(None) => {}
            Err(GameError::NotEnoughSwapCandidates { side, required, found }) => {
                tracing::warn!(side, required, found, "Skipping card swap this turn");
            }
            Err(err) => return Err(err),
        }

        self.start_next_turn()
    }

    /// Apply the player's swap selection and continue with the next turn.
    ///
    /// `remove` must be one of the offer's removable cards and `add` one of
    /// its offered cards.
    pub fn register_card_swap_selections(&mut self, remove: &Card, add: &Card) -> Result<()> {
        self.require_state(GameState::CardsSwap)?;
        let offer = self
            .ctx
            .pending_offer
            .as_ref()
            .ok_or(GameError::NoPendingOffer)?;
        if !offer.is_removable(remove) {
            return Err(GameError::NotOffered(remove.id));
        }
        if !offer.is_offered(add) {
            return Err(GameError::NotOffered(add.id));
        }

        self.ctx
            .swap_service()
            .register_card_swap_selections(remove, add)?;
        self.ctx.pending_offer = None;
        self.start_next_turn()
    }

    /// Decline the pending swap offer and continue with the next turn.
    pub fn skip_card_swap(&mut self) -> Result<()> {
        self.require_state(GameState::CardsSwap)?;
        if self.ctx.pending_offer.take().is_none() {
            return Err(GameError::NoPendingOffer);
        }
        tracing::info!("Player declined the card swap");
        self.start_next_turn()
    }

    /// Take every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.ctx.events.drain()
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.ctx.game.state
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state().is_terminal()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn vault(&self) -> &CardVault {
        &self.vault
    }

    #[must_use]
    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    #[must_use]
    pub fn hand(&self) -> &[CardRef] {
        self.ctx.hand.cards()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.ctx.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.ctx.discard
    }

    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.ctx.pool
    }

    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.ctx.turn
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.ctx.game
    }

    #[must_use]
    pub fn fish(&self) -> &Fish {
        &self.ctx.fish
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.ctx.board
    }

    #[must_use]
    pub fn pending_offer(&self) -> Option<&SwapOffer> {
        self.ctx.pending_offer.as_ref()
    }

    /// Copy of the visible state. Piles are shared, not copied.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let ctx = &self.ctx;
        GameSnapshot {
            state: ctx.game.state,
            turn_number: ctx.turn.current_turn_number(),
            elapsed_turns: ctx.game.elapsed_turns,
            remaining_time: ctx.turn.remaining_time(),
            hand: ctx.hand.cards().to_vec(),
            deck: ctx.deck.pile().clone(),
            discard: ctx.discard.pile().clone(),
            pool: ctx.pool.pile().clone(),
            fish: ctx.fish.clone(),
            board: ctx.board.clone(),
            pending_offer: ctx.pending_offer.clone(),
        }
    }

    fn handle_game_over(&mut self) -> Result<()> {
        self.transition(GameState::GameOver)?;
        let elapsed_turns = self.ctx.game.elapsed_turns;
        tracing::info!(
            elapsed_turns,
            total_scales = self.ctx.fish.total_scales(),
            "Game over"
        );
        self.ctx.events.push(GameEvent::GameOver { elapsed_turns });
        Ok(())
    }

    /// CardsSwap -> TurnStart -> PlayCards.
    fn start_next_turn(&mut self) -> Result<()> {
        self.ctx.game.elapsed_turns += 1;
        self.ctx.turn.advance();
        tracing::info!(
            turn = self.ctx.turn.current_turn_number(),
            elapsed_turns = self.ctx.game.elapsed_turns,
            "Starting the next turn"
        );

        self.transition(GameState::TurnStart)?;
        self.ctx.turn.refresh();
        let gained = self.ctx.board.on_turn_start();
        if gained > 0 {
            tracing::debug!(gained, "Board items granted time");
            self.ctx.turn.gain(gained);
        }
        self.ctx.hand_service().draw()?;

        self.transition(GameState::PlayCards)
    }

    fn require_state(&self, expected: GameState) -> Result<()> {
        let actual = self.ctx.game.state;
        if actual != expected {
            return Err(GameError::InvalidState { expected, actual });
        }
        Ok(())
    }

    fn transition(&mut self, to: GameState) -> Result<()> {
        let from = self.ctx.game.state;
        debug_assert!(from.can_transition_to(to), "illegal transition {:?} -> {:?}", from, to);
        if !from.can_transition_to(to) {
            return Err(GameError::IntegrityViolation(format!(
                "illegal state transition {:?} -> {:?}",
                from, to
            )));
        }

        tracing::debug!(?from, ?to, "Game state changed");
        self.ctx.game.state = to;
        self.ctx.events.push(GameEvent::StateChanged { from, to });
        Ok(())
    }
}

/// `copies_in_pool` copies of every vault card, minus one copy per starter
/// deck card.
fn initial_pool(vault: &CardVault) -> CardPool {
    let mut pool = CardPool::new();
    for card in vault.iter() {
        for _ in 0..card.copies_in_pool {
            pool.add_card(card.clone());
        }
    }
    for card in vault.starter_deck() {
        if pool.remove_card(card).is_err() {
            tracing::debug!(card = %card.name, "Starter card has no pool copy to remove");
        }
    }
    tracing::debug!(size = pool.size(), "Filled the card pool");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::effects::CardEffect;

    fn vault(cards: u32, starter: &[u32]) -> CardVault {
        let mut vault = CardVault::new();
        for id in 1..=cards {
            vault.register(
                Card::new(CardId::new(id), format!("Card {}", id))
                    .with_time_cost(1)
                    .with_effect(CardEffect::ScaleFish { scales: 1 })
                    .with_copies_in_pool(2),
            );
        }
        let ids: Vec<_> = starter.iter().copied().map(CardId::new).collect();
        vault.set_starter_deck(&ids).unwrap();
        vault
    }

    fn service(config: GameConfig) -> GameService {
        GameService::new(config, vault(12, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10])).unwrap()
    }

    #[test]
    fn test_new_game_setup() {
        let svc = service(GameConfig::default());
        assert_eq!(svc.state(), GameState::PlayCards);
        assert_eq!(svc.hand().len(), 5);
        assert_eq!(svc.deck().size(), 5);
        assert!(svc.discard_pile().is_empty());
        assert_eq!(svc.turn().remaining_time(), 10);
        assert!(svc.game().fish_scaled_this_or_last_turn);
        // 12 cards x 2 copies, minus one copy of each of the 10 starters.
        assert_eq!(svc.pool().size(), 14);
    }

    #[test]
    fn test_initial_pool_tolerates_missing_copies() {
        let mut vault = CardVault::new();
        vault.register(Card::new(CardId::new(1), "Solo").with_copies_in_pool(0));
        vault.set_starter_deck(&[CardId::new(1), CardId::new(1)]).unwrap();
        assert!(initial_pool(&vault).is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig::default().with_draw_amount(0);
        assert!(matches!(
            GameService::new(config, vault(3, &[1])),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_actions_require_matching_state() {
        let mut svc = service(GameConfig::default().with_swap_window(10, 12));
        svc.end_turn().unwrap();
        svc.end_turn().unwrap();
        assert_eq!(svc.state(), GameState::GameOver);

        assert_eq!(
            svc.end_turn().unwrap_err(),
            GameError::InvalidState { expected: GameState::PlayCards, actual: GameState::GameOver }
        );
        let card = Card::new(CardId::new(1), "Card 1");
        assert!(matches!(svc.play_card(&card), Err(GameError::InvalidState { .. })));
        assert!(matches!(
            svc.register_card_swap_selections(&card, &card),
            Err(GameError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_end_turn_without_swap_reaches_next_turn() {
        let mut svc = service(GameConfig::default().with_swap_window(10, 12));
        let card = svc.hand()[0].clone();
        assert_eq!(svc.play_card(&card).unwrap(), PlayOutcome::Played);
        svc.drain_events();

        svc.end_turn().unwrap();

        assert_eq!(svc.state(), GameState::PlayCards);
        assert_eq!(svc.turn().current_turn_number(), 2);
        assert_eq!(svc.game().elapsed_turns, 1);
        assert_eq!(svc.hand().len(), 5);
        assert_eq!(svc.fish().scales_last_turn(), 1);

        let states: Vec<_> = svc
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::StateChanged { to, .. } => Some(to),
                _ => None,
            })
            .collect();
        assert_eq!(
            states,
            vec![
                GameState::TurnEnd,
                GameState::EndOfTurnEffectExecution,
                GameState::GameOverCheck,
                GameState::CardsSwap,
                GameState::TurnStart,
                GameState::PlayCards,
            ]
        );
    }

    #[test]
    fn test_swap_selection_must_come_from_offer() {
        let mut svc = service(GameConfig::default().with_swap_window(1, 5));
        let card = svc.hand()[0].clone();
        svc.play_card(&card).unwrap();
        svc.end_turn().unwrap();
        assert_eq!(svc.state(), GameState::CardsSwap);

        let offer = svc.pending_offer().cloned().unwrap();
        let outsider = Card::new(CardId::new(99), "Outsider");
        assert_eq!(
            svc.register_card_swap_selections(&outsider, &offer.offered[0])
                .unwrap_err(),
            GameError::NotOffered(CardId::new(99))
        );
        assert_eq!(
            svc.register_card_swap_selections(&offer.removable[0], &outsider)
                .unwrap_err(),
            GameError::NotOffered(CardId::new(99))
        );
        assert_eq!(svc.state(), GameState::CardsSwap);

        svc.register_card_swap_selections(&offer.removable[0], &offer.offered[0])
            .unwrap();
        assert_eq!(svc.state(), GameState::PlayCards);
        assert!(svc.pending_offer().is_none());
        assert_eq!(svc.context().owned_card_count(), 10);
    }

    #[test]
    fn test_skip_card_swap() {
        let mut svc = service(GameConfig::default().with_swap_window(1, 5));
        let card = svc.hand()[0].clone();
        svc.play_card(&card).unwrap();
        svc.end_turn().unwrap();

        let pool_before = svc.pool().size();
        svc.skip_card_swap().unwrap();
        assert_eq!(svc.state(), GameState::PlayCards);
        assert_eq!(svc.pool().size(), pool_before);
        assert_eq!(svc.skip_card_swap().unwrap_err(), GameError::InvalidState {
            expected: GameState::CardsSwap,
            actual: GameState::PlayCards,
        });
    }

    #[test]
    fn test_two_turns_without_scaling_end_the_game() {
        let mut svc = service(GameConfig::default().with_swap_window(10, 12));

        svc.end_turn().unwrap();
        assert_eq!(svc.state(), GameState::PlayCards);
        assert!(svc.game().fish_scaled_this_or_last_turn);

        svc.drain_events();
        svc.end_turn().unwrap();
        assert_eq!(svc.state(), GameState::GameOver);

        let events = svc.drain_events();
        assert_eq!(events.last(), Some(&GameEvent::GameOver { elapsed_turns: 1 }));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::HandDiscarded)));
    }

    #[test]
    fn test_restart_resets_the_run() {
        let mut svc = service(GameConfig::default().with_swap_window(10, 12));
        let card = svc.hand()[0].clone();
        svc.play_card(&card).unwrap();
        svc.end_turn().unwrap();

        svc.start_new_game().unwrap();
        assert_eq!(svc.state(), GameState::PlayCards);
        assert_eq!(svc.turn().current_turn_number(), 1);
        assert_eq!(svc.game().elapsed_turns, 0);
        assert_eq!(svc.hand().len(), 5);
        assert_eq!(svc.fish().total_scales(), 0);
        assert!(svc.drain_events().iter().all(|e| matches!(e, GameEvent::CardDrawn { .. })));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let svc = service(GameConfig::default());
        let snapshot = svc.snapshot();
        assert_eq!(snapshot.state, GameState::PlayCards);
        assert_eq!(snapshot.turn_number, 1);
        assert_eq!(snapshot.hand.len(), 5);
        assert_eq!(snapshot.deck.len(), 5);
        assert_eq!(snapshot.pool.len(), 14);
        assert!(snapshot.pending_offer.is_none());
    }
}
