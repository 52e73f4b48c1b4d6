//! Card swap tests.
//!
//! These tests verify the swap rules across consecutive turns:
//! - Offers stay within the allowed rarity
//! - An identical offer is never shown twice in a row while a reserve exists
//! - Selections move exactly one card each way

use roguedeck::cards::{Card, CardId, CardRef};
use roguedeck::core::{Game, GameConfig, GameRng, Turn};
use roguedeck::events::{EventQueue, GameEvent};
use roguedeck::swap::CardSwapService;
use roguedeck::zones::{CardPool, Deck, DiscardPile};

struct Table {
    deck: Deck,
    discard: DiscardPile,
    pool: CardPool,
    game: Game,
    turn: Turn,
    rng: GameRng,
    events: EventQueue,
}

impl Table {
    fn new(pool_rarities: &[u32]) -> Self {
        let mut deck = Deck::new();
        for id in 1..=6 {
            deck.add_card(card(id, 0));
        }
        let mut pool = CardPool::new();
        for (i, &rarity) in pool_rarities.iter().enumerate() {
            pool.add_card(card(100 + i as u32, rarity));
        }
        Self {
            deck,
            discard: DiscardPile::new(),
            pool,
            game: Game::new(&GameConfig::default().with_swap_window(1, 30)),
            turn: Turn::new(10),
            rng: GameRng::new(8),
            events: EventQueue::new(),
        }
    }

    fn swap_service(&mut self) -> CardSwapService<'_> {
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
}

fn card(id: u32, rarity: u32) -> CardRef {
    Card::new(CardId::new(id), format!("Card {}", id))
        .with_rarity(rarity)
        .into_ref()
}

fn ids(cards: &[CardRef]) -> Vec<u32> {
    cards.iter().map(|c| c.id.raw()).collect()
}

/// Test that no two consecutive offers are identical when a reserve exists.
#[test]
fn test_offers_never_repeat_back_to_back() {
    // Three rarity-1 cards always rank first; rarity-0 cards are reserves.
    let mut table = Table::new(&[1, 1, 1, 0, 0]);
    table.turn.advance();

    let mut previous: Option<Vec<u32>> = None;
    for _ in 0..20 {
        let offer = table
            .swap_service()
            .handle_card_swap_options()
            .unwrap()
            .unwrap();
        let current = ids(&offer.offered);
        if let Some(previous) = &previous {
            assert_ne!(&current, previous);
        }
        previous = Some(current);
    }
}

/// Test that offers respect the rarity cap of the current turn.
#[test]
fn test_rarity_cap_follows_turn_number() {
    let mut table = Table::new(&[0, 0, 0, 1, 2, 3, 4, 5]);

    for turn_number in 1..=5u32 {
        let offer = table.swap_service().generate_offer().unwrap();
        assert!(offer.offered.iter().all(|c| c.rarity <= turn_number));
        // Rarest eligible card always leads.
        assert_eq!(offer.offered[0].rarity, turn_number);
        table.turn.advance();
    }
}

/// Test a selection taken from the discard pile.
#[test]
fn test_selection_moves_one_card_each_way() {
    let mut table = Table::new(&[0, 0, 0]);
    let mut events = EventQueue::new();
    table.discard.discard(card(50, 0), &mut events);

    let owned_before = table.deck.size() + table.discard.size();
    let pool_before = table.pool.size();

    table
        .swap_service()
        .register_card_swap_selections(&card(50, 0), &card(101, 0))
        .unwrap();

    assert_eq!(table.deck.size() + table.discard.size(), owned_before);
    assert_eq!(table.pool.size(), pool_before);
    assert!(table.pool.contains(&card(50, 0)));
    assert_eq!(table.deck.pile().top().map(|c| c.id.raw()), Some(101));
    assert_eq!(
        table.events.drain(),
        vec![GameEvent::CardsSwapped {
            removed: card(50, 0),
            added: card(101, 0),
        }]
    );
}
