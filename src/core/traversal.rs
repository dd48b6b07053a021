//! Traversal module - sequential cursors over the tableau
//!
//! `TableauCursor` walks every card in column-major order (all of column 0
//! bottom to top, then column 1, and so on). `FaceUpCursor` wraps a base
//! cursor and yields only face-up cards, buffering one element of lookahead
//! so `has_next` never consumes. Both are finite, restartable via `reset`,
//! and not meant to be shared across threads.
//!
//! Exhaustion surfaces as `None` from `next_card` (and from the `Iterator`
//! impls); calling past the end is a caller bug, never a state change.

use crate::core::card::Card;

/// Column-major cursor over the tableau.
#[derive(Debug, Clone)]
pub struct TableauCursor<'a> {
    columns: &'a [Vec<Card>],
    column: usize,
    index: usize,
}

impl<'a> TableauCursor<'a> {
    pub fn new(columns: &'a [Vec<Card>]) -> Self {
        Self {
            columns,
            column: 0,
            index: 0,
        }
    }

    /// Whether another card remains. Skips over exhausted and empty columns.
    pub fn has_next(&mut self) -> bool {
        while self.column < self.columns.len() {
            if self.index < self.columns[self.column].len() {
                return true;
            }
            self.column += 1;
            self.index = 0;
        }
        false
    }

    /// The next card, or `None` when the cursor is exhausted.
    pub fn next_card(&mut self) -> Option<&'a Card> {
        if !self.has_next() {
            return None;
        }
        let card = &self.columns[self.column][self.index];
        self.index += 1;
        Some(card)
    }

    /// Rewind to the first card of column 0.
    pub fn reset(&mut self) {
        self.column = 0;
        self.index = 0;
    }
}

impl<'a> Iterator for TableauCursor<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_card()
    }
}

/// Filtering cursor that yields only face-up cards.
///
/// Keeps one card of lookahead so `has_next` can answer without consuming
/// from the wrapped cursor.
#[derive(Debug, Clone)]
pub struct FaceUpCursor<'a> {
    base: TableauCursor<'a>,
    lookahead: Option<&'a Card>,
}

impl<'a> FaceUpCursor<'a> {
    pub fn new(base: TableauCursor<'a>) -> Self {
        let mut cursor = Self {
            base,
            lookahead: None,
        };
        cursor.advance();
        cursor
    }

    /// Pull the next face-up card from the base cursor into the buffer.
    fn advance(&mut self) {
        self.lookahead = None;
        while let Some(card) = self.base.next_card() {
            if card.is_face_up() {
                self.lookahead = Some(card);
                break;
            }
        }
    }

    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }

    /// The buffered card, re-priming the lookahead. `None` when exhausted.
    pub fn next_card(&mut self) -> Option<&'a Card> {
        let current = self.lookahead?;
        self.advance();
        Some(current)
    }

    /// Reset the wrapped cursor and re-prime the lookahead.
    pub fn reset(&mut self) {
        self.base.reset();
        self.advance();
    }
}

impl<'a> Iterator for FaceUpCursor<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_card()
    }
}
