//! The card vault: every card definition a run knows about.
//!
//! The vault is read-only once the run starts. It also carries the starter
//! deck list, and seeds the card pool with `copies_in_pool` copies of each
//! card.
//!
//! Card data is authored outside the engine and loaded as JSON:
//!
//! ```
//! use roguedeck::cards::{CardId, CardVault};
//!
//! let vault = CardVault::from_json(r#"{
//!     "cards": [
//!         { "id": 1, "name": "Hook", "rarity": 0, "time_cost": 1 },
//!         { "id": 2, "name": "Net", "rarity": 1, "time_cost": 2, "copies_in_pool": 3 }
//!     ],
//!     "starter_deck": [1, 1, 2]
//! }"#).unwrap();
//!
//! assert_eq!(vault.len(), 2);
//! assert_eq!(vault.starter_deck().len(), 3);
//! assert_eq!(vault.get(CardId::new(2)).unwrap().name, "Net");
//! ```

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::core::{GameError, Result};

use super::definition::{Card, CardId, CardRef};

/// Registry of card definitions plus the starter deck.
#[derive(Clone, Debug, Default)]
pub struct CardVault {
    cards: Vec<CardRef>,
    index: FxHashMap<CardId, usize>,
    starter_deck: Vec<CardRef>,
}

#[derive(Deserialize)]
struct VaultFile {
    cards: Vec<Card>,
    #[serde(default)]
    starter_deck: Vec<CardId>,
}

impl CardVault {
    /// Create a new empty vault.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load card definitions and the starter deck list from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: VaultFile = serde_json::from_str(json)?;

        let mut vault = Self::new();
        for card in file.cards {
            if vault.contains(card.id) {
                return Err(GameError::Config(format!("duplicate card id {}", card.id)));
            }
            vault.register(card);
        }
        vault.set_starter_deck(&file.starter_deck)?;

        tracing::debug!(
            cards = vault.len(),
            starter_deck = vault.starter_deck.len(),
            "Loaded card vault"
        );
        Ok(vault)
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) -> CardRef {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        let card = card.into_ref();
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card.clone());
        card
    }

    /// Set the starter deck from card ids. Ids may repeat.
    pub fn set_starter_deck(&mut self, ids: &[CardId]) -> Result<()> {
        let deck = ids
            .iter()
            .map(|&id| self.get(id).cloned().ok_or(GameError::UnknownCard(id)))
            .collect::<Result<Vec<_>>>()?;
        self.starter_deck = deck;
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardRef> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Get a card definition by ID, or [`GameError::UnknownCard`].
    pub fn require(&self, id: CardId) -> Result<&CardRef> {
        self.get(id).ok_or(GameError::UnknownCard(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the vault is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRef> {
        self.cards.iter()
    }

    /// Cards of the starter deck, repeats included.
    #[must_use]
    pub fn starter_deck(&self) -> &[CardRef] {
        &self.starter_deck
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardRef>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}
