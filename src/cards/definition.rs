//! Card definitions - static card data.
//!
//! A [`Card`] is authored once and never changes during a run. Piles hold
//! shared [`CardRef`]s to definitions, so two copies of "Scale Scraper" in
//! the deck are the same card as far as identity goes. Equality and hashing
//! use the [`CardId`] only.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::CardEffect;

/// Shared handle to an immutable card definition.
pub type CardRef = Arc<Card>;

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use roguedeck::cards::{Card, CardId};
/// use roguedeck::effects::CardEffect;
///
/// let card = Card::new(CardId::new(1), "Scale Scraper")
///     .with_rarity(2)
///     .with_time_cost(3)
///     .with_effect(CardEffect::ScaleFish { scales: 4 });
///
/// assert_eq!(card.rarity, 2);
/// assert_eq!(card.effects.len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Identity of the card.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Rarity tier. Lower is more common.
    #[serde(default)]
    pub rarity: u32,

    /// Time spent when the card is played.
    #[serde(default)]
    pub time_cost: u32,

    /// Effects queued when the card is played.
    #[serde(default)]
    pub effects: SmallVec<[CardEffect; 2]>,

    /// Copies placed in the card pool when a run starts.
    #[serde(default = "default_copies")]
    pub copies_in_pool: u32,
}

fn default_copies() -> u32 {
    1
}

impl Card {
    /// Create a new card with rarity 0, no cost, no effects and one pool copy.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            rarity: 0,
            time_cost: 0,
            effects: SmallVec::new(),
            copies_in_pool: default_copies(),
        }
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: u32) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_time_cost(mut self, cost: u32) -> Self {
        self.time_cost = cost;
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_copies_in_pool(mut self, copies: u32) -> Self {
        self.copies_in_pool = copies;
        self
    }

    /// Wrap the definition in a shared handle.
    #[must_use]
    pub fn into_ref(self) -> CardRef {
        Arc::new(self)
    }

    /// Identity comparison used by every pile.
    #[must_use]
    pub fn same_card(a: &Card, b: &Card) -> bool {
        a.id == b.id
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        Card::same_card(self, other)
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (rarity {}, cost {})", self.name, self.rarity, self.time_cost)
    }
}
