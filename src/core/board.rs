//! Board module - the piles that make up a game in progress
//!
//! The board owns four kinds of piles: the face-down stock, the face-up
//! waste, one foundation per suit, and the seven tableau columns. Every pile
//! stores its top card at the end of its `Vec`; columns run bottom to top.
//! The board is a dumb container - it validates nothing. The engine owns the
//! rules and drives all mutation through the narrow primitives below, so a
//! card always leaves one pile and lands in another within a single call
//! sequence.

use crate::core::card::Card;
use crate::core::traversal::{FaceUpCursor, TableauCursor};
use crate::types::TABLEAU_COLUMNS;

/// The complete mutable game state: stock, waste, foundations, tableau.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: Vec<Vec<Card>>,
    tableau: Vec<Vec<Card>>,
}

impl Board {
    /// Assemble a board from pre-built piles. Used by the builder only.
    pub(crate) fn new(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: Vec<Vec<Card>>,
        tableau: Vec<Vec<Card>>,
    ) -> Self {
        Self {
            stock,
            waste,
            foundations,
            tableau,
        }
    }

    // --- read accessors (presentation / persistence surface) ---

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    pub fn foundations(&self) -> &[Vec<Card>] {
        &self.foundations
    }

    pub fn foundation_top(&self, index: usize) -> Option<&Card> {
        self.foundations.get(index).and_then(|pile| pile.last())
    }

    pub fn foundation_count(&self) -> usize {
        self.foundations.len()
    }

    /// Total number of cards across all foundations.
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    pub fn tableau(&self) -> &[Vec<Card>] {
        &self.tableau
    }

    pub fn column(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(Vec::as_slice)
    }

    /// Total number of cards across the tableau.
    pub fn tableau_card_count(&self) -> usize {
        self.tableau.iter().map(Vec::len).sum()
    }

    /// Locate a card in the tableau by identity: (column, row from bottom).
    pub fn position_of(&self, card: &Card) -> Option<(usize, usize)> {
        for (col, column) in self.tableau.iter().enumerate() {
            for (row, candidate) in column.iter().enumerate() {
                if candidate.same_identity(card) {
                    return Some((col, row));
                }
            }
        }
        None
    }

    // --- mutation primitives (engine surface, no validation) ---

    pub fn pop_stock(&mut self) -> Option<Card> {
        self.stock.pop()
    }

    pub fn push_stock(&mut self, card: Card) {
        self.stock.push(card);
    }

    pub fn pop_waste(&mut self) -> Option<Card> {
        self.waste.pop()
    }

    pub fn push_waste(&mut self, card: Card) {
        self.waste.push(card);
    }

    pub fn push_foundation(&mut self, index: usize, card: Card) {
        if let Some(pile) = self.foundations.get_mut(index) {
            pile.push(card);
        }
    }

    /// Remove the card at `at` in a column. `None` if out of range.
    pub fn remove_from_column(&mut self, column: usize, at: usize) -> Option<Card> {
        let pile = self.tableau.get_mut(column)?;
        if at < pile.len() {
            Some(pile.remove(at))
        } else {
            None
        }
    }

    /// Remove every card from `from` to the column top, in bottom-to-top order.
    pub fn drain_column_from(&mut self, column: usize, from: usize) -> Vec<Card> {
        match self.tableau.get_mut(column) {
            Some(pile) if from <= pile.len() => pile.drain(from..).collect(),
            _ => Vec::new(),
        }
    }

    pub fn extend_column(&mut self, column: usize, cards: impl IntoIterator<Item = Card>) {
        if let Some(pile) = self.tableau.get_mut(column) {
            pile.extend(cards);
        }
    }

    /// Flip the top card of a column face-up if it is face-down.
    /// Returns true when a card was actually flipped.
    pub fn flip_column_top_face_up(&mut self, column: usize) -> bool {
        if let Some(top) = self.tableau.get_mut(column).and_then(|pile| pile.last_mut()) {
            if !top.is_face_up() {
                top.flip();
                return true;
            }
        }
        false
    }

    // --- traversal factories ---

    /// Cursor over every tableau card, column-major, bottom to top.
    pub fn tableau_cursor(&self) -> TableauCursor<'_> {
        TableauCursor::new(&self.tableau)
    }

    /// Cursor over face-up tableau cards only.
    pub fn face_up_cursor(&self) -> FaceUpCursor<'_> {
        FaceUpCursor::new(self.tableau_cursor())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            Vec::new(),
            Vec::new(),
            vec![Vec::new(); 4],
            vec![Vec::new(); TABLEAU_COLUMNS],
        )
    }
}
