use serde::Serialize;

use crate::cards::{Card, CardRef};

/// A pending card-swap offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwapOffer {
    /// Cards from the deck and discard pile. One may leave the deck.
    pub removable: Vec<CardRef>,
    /// Cards from the pool. One may join the deck.
    pub offered: Vec<CardRef>,
}

impl SwapOffer {
    #[must_use]
    pub fn is_removable(&self, card: &Card) -> bool {
        self.removable.iter().any(|c| Card::same_card(c, card))
    }

    #[must_use]
    pub fn is_offered(&self, card: &Card) -> bool {
        self.offered.iter().any(|c| Card::same_card(c, card))
    }

    /// Whether the pool side shows the same cards in the same order as
    /// `previous`.
    #[must_use]
    pub fn repeats(&self, previous: &[CardRef]) -> bool {
        same_cards_in_order(&self.offered, previous)
    }
}

fn same_cards_in_order(a: &[CardRef], b: &[CardRef]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Card::same_card(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn card(id: u32) -> CardRef {
        Card::new(CardId::new(id), format!("Card {}", id)).into_ref()
    }

    #[test]
    fn test_membership() {
        let offer = SwapOffer {
            removable: vec![card(1), card(2), card(3)],
            offered: vec![card(7), card(8), card(9)],
        };
        assert!(offer.is_removable(&card(2)));
        assert!(!offer.is_removable(&card(7)));
        assert!(offer.is_offered(&card(9)));
        assert!(!offer.is_offered(&card(1)));
    }

    #[test]
    fn test_repeats_requires_same_order() {
        let offer = SwapOffer {
            removable: vec![],
            offered: vec![card(7), card(8), card(9)],
        };
        assert!(offer.repeats(&[card(7), card(8), card(9)]));
        assert!(!offer.repeats(&[card(8), card(7), card(9)]));
        assert!(!offer.repeats(&[card(7), card(8)]));
    }
}
