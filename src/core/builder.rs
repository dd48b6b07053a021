//! Board builder module - the deterministic construction sequence for a deal
//!
//! Building a board is a fixed sequence of steps:
//! `reset -> create_deck -> init_foundations -> init_tableau -> deal_tableau
//! -> build`. Each step is chainable; running them out of order is not
//! prevented but yields an incomplete board, so callers go through
//! [`deal_standard_board`] unless they are testing a single step.

use log::debug;

use crate::core::board::Board;
use crate::core::card::Card;
use crate::core::family::CardFamily;
use crate::core::rng::SimpleRng;
use crate::types::TABLEAU_COLUMNS;

/// Step-by-step builder for a dealt [`Board`].
pub struct BoardBuilder<'a> {
    family: &'a dyn CardFamily,
    rng: SimpleRng,
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: Vec<Vec<Card>>,
    tableau: Vec<Vec<Card>>,
}

impl<'a> BoardBuilder<'a> {
    /// A fresh builder for the given family; `seed` fixes the shuffle.
    pub fn new(family: &'a dyn CardFamily, seed: u32) -> Self {
        Self {
            family,
            rng: SimpleRng::new(seed),
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: Vec::new(),
            tableau: Vec::new(),
        }
    }

    /// Clear every pile, making the builder reusable for another build.
    pub fn reset(&mut self) -> &mut Self {
        self.stock.clear();
        self.waste.clear();
        self.foundations.clear();
        self.tableau.clear();
        self
    }

    /// Enumerate every (rank, suit) pair of the family, shuffle uniformly,
    /// and store the result as the stock. All cards start face-down.
    pub fn create_deck(&mut self) -> &mut Self {
        let rank_count = self.family.rank_count();
        let suit_count = self.family.suit_count();

        let mut deck = Vec::with_capacity(rank_count as usize * suit_count as usize);
        for suit in 0..suit_count {
            for rank in 0..rank_count {
                deck.push(self.family.create_card(rank, suit));
            }
        }
        self.rng.shuffle(&mut deck);
        self.stock.append(&mut deck);
        self
    }

    /// One empty foundation per suit.
    pub fn init_foundations(&mut self) -> &mut Self {
        for _ in 0..self.family.suit_count() {
            self.foundations.push(Vec::new());
        }
        self
    }

    /// Seven empty tableau columns.
    pub fn init_tableau(&mut self) -> &mut Self {
        for _ in 0..TABLEAU_COLUMNS {
            self.tableau.push(Vec::new());
        }
        self
    }

    /// Triangular deal: column `i` receives `i + 1` cards off the top of the
    /// stock; only the last card dealt into each column is flipped face-up.
    pub fn deal_tableau(&mut self) -> &mut Self {
        for col in 0..self.tableau.len() {
            for row in 0..=col {
                if let Some(mut card) = self.stock.pop() {
                    if row == col {
                        card.flip();
                    }
                    self.tableau[col].push(card);
                }
            }
        }
        debug!(
            "dealt tableau: {} cards left in stock",
            self.stock.len()
        );
        self
    }

    /// Move the piles out into a [`Board`]. The builder is left empty.
    pub fn build(&mut self) -> Board {
        Board::new(
            std::mem::take(&mut self.stock),
            std::mem::take(&mut self.waste),
            std::mem::take(&mut self.foundations),
            std::mem::take(&mut self.tableau),
        )
    }
}

/// Run the full construction sequence for a standard deal.
pub fn deal_standard_board(family: &dyn CardFamily, seed: u32) -> Board {
    BoardBuilder::new(family, seed)
        .reset()
        .create_deck()
        .init_foundations()
        .init_tableau()
        .deal_tableau()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::family::FrenchDeck;
    use std::collections::HashSet;

    #[test]
    fn test_create_deck_enumerates_every_card_once() {
        let family = FrenchDeck;
        let mut builder = BoardBuilder::new(&family, 1);
        builder.reset().create_deck();
        let board = builder.build();

        assert_eq!(board.stock().len(), 52);
        let identities: HashSet<(u8, u8)> =
            board.stock().iter().map(|c| (c.rank(), c.suit())).collect();
        assert_eq!(identities.len(), 52);
        assert!(board.stock().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_deal_shape() {
        let family = FrenchDeck;
        let board = deal_standard_board(&family, 42);

        // Column i holds i + 1 cards, only the top one face-up.
        for (i, column) in board.tableau().iter().enumerate() {
            assert_eq!(column.len(), i + 1, "column {} size", i);
            for (row, card) in column.iter().enumerate() {
                assert_eq!(
                    card.is_face_up(),
                    row == column.len() - 1,
                    "column {} row {} face state",
                    i,
                    row
                );
            }
        }

        // 28 cards dealt, 24 left in the stock, all face-down, waste empty.
        assert_eq!(board.stock().len(), 52 - 28);
        assert!(board.stock().iter().all(|c| !c.is_face_up()));
        assert!(board.waste().is_empty());

        // One empty foundation per suit.
        assert_eq!(board.foundation_count(), 4);
        assert_eq!(board.foundation_card_count(), 0);
    }

    #[test]
    fn test_deal_conserves_cards() {
        let family = FrenchDeck;
        let board = deal_standard_board(&family, 7);
        let total = board.stock().len()
            + board.waste().len()
            + board.foundation_card_count()
            + board.tableau_card_count();
        assert_eq!(total, 52);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let family = FrenchDeck;
        let a = deal_standard_board(&family, 123);
        let b = deal_standard_board(&family, 123);
        assert_eq!(a, b);

        let c = deal_standard_board(&family, 124);
        assert_ne!(a, c);
    }

    #[test]
    fn test_builder_is_reusable_after_reset() {
        let family = FrenchDeck;
        let mut builder = BoardBuilder::new(&family, 5);

        let first = builder
            .reset()
            .create_deck()
            .init_foundations()
            .init_tableau()
            .deal_tableau()
            .build();
        let second = builder
            .reset()
            .create_deck()
            .init_foundations()
            .init_tableau()
            .deal_tableau()
            .build();

        // The RNG advances between builds, so decks differ but stay complete.
        assert_eq!(first.tableau_card_count(), second.tableau_card_count());
        assert_eq!(first.stock().len(), second.stock().len());
        assert_ne!(first, second);
    }
}
