//! Card module - the immutable identity and face state of a single card
//!
//! A `Card` is a plain value: rank and suit indices within its family, the
//! face-up flag, and the display data its family baked in at creation time
//! (color class, rank name, suit symbol, and the family's highest rank).
//! Cards never change identity after creation; they only move between piles
//! and flip.

use crate::types::CardColor;

/// A single playing card. Copyable; piles own their cards outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    rank: u8,
    suit: u8,
    face_up: bool,
    color: CardColor,
    rank_name: &'static str,
    suit_symbol: &'static str,
    /// Highest rank index in the creating family (a "king" opens empty columns).
    top_rank: u8,
}

impl Card {
    /// Construct a face-down card. Called by card families only.
    pub(crate) fn new(
        rank: u8,
        suit: u8,
        color: CardColor,
        rank_name: &'static str,
        suit_symbol: &'static str,
        top_rank: u8,
    ) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
            color,
            rank_name,
            suit_symbol,
            top_rank,
        }
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    pub fn suit(&self) -> u8 {
        self.suit
    }

    pub fn color(&self) -> CardColor {
        self.color
    }

    pub fn rank_name(&self) -> &'static str {
        self.rank_name
    }

    pub fn suit_symbol(&self) -> &'static str {
        self.suit_symbol
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Toggle the face-up flag.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }

    /// Whether two cards are the same card of the same deck.
    ///
    /// Identity is (rank, suit); a deck holds each pair exactly once, so this
    /// is as strong as reference identity for cards of one board.
    pub fn same_identity(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    /// Whether this card may legally sit on `other` in a tableau column.
    ///
    /// With no card below (`None`, an empty column) only the family's highest
    /// rank qualifies. Otherwise colors must differ and this card's rank must
    /// be exactly one less than `other`'s.
    pub fn is_tableau_predecessor_of(&self, other: Option<&Card>) -> bool {
        match other {
            None => self.rank == self.top_rank,
            Some(top) => self.color != top.color && self.rank + 1 == top.rank,
        }
    }

    /// Whether this card follows `other` directly in foundation order:
    /// same suit, rank exactly one greater.
    pub fn is_immediate_successor_in_suit(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank + 1
    }

    /// Display label, e.g. `"A♠"` or `"10♥"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.rank_name, self.suit_symbol)
    }
}
