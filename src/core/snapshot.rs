use serde::{Deserialize, Serialize};

use crate::core::card::Card;

/// The visible state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub rank: u8,
    pub suit: u8,
    pub face_up: bool,
}

impl From<&Card> for CardSnapshot {
    fn from(value: &Card) -> Self {
        Self {
            rank: value.rank(),
            suit: value.suit(),
            face_up: value.is_face_up(),
        }
    }
}

/// A serializable read model of one frame of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub stock: Vec<CardSnapshot>,
    pub waste: Vec<CardSnapshot>,
    pub foundations: Vec<Vec<CardSnapshot>>,
    pub tableau: Vec<Vec<CardSnapshot>>,
    pub moves: u32,
    pub elapsed_ms: u64,
    pub score: i32,
    pub victory: bool,
}

impl GameSnapshot {
    pub fn total_cards(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(Vec::len).sum::<usize>()
            + self.tableau.iter().map(Vec::len).sum::<usize>()
    }
}
