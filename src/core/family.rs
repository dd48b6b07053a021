//! Card family module - the deck variant behind a game
//!
//! A family fixes the rank/suit vocabulary of a deck: how many of each exist,
//! what they are called, and which suits count as red. The board builder asks
//! the family for every (rank, suit) combination; the engine asks it for the
//! victory threshold (rank count x suit count).

use crate::core::card::Card;
use crate::types::CardColor;

/// A deck variant. Rank and suit counts are fixed for the family's lifetime.
pub trait CardFamily {
    /// Descriptive name of the family.
    fn name(&self) -> &'static str;

    /// Number of distinct ranks (drives deck size and victory threshold).
    fn rank_count(&self) -> u8;

    /// Number of distinct suits (drives foundation count).
    fn suit_count(&self) -> u8;

    /// Construct a face-down card of this family.
    ///
    /// `rank` and `suit` must be within this family's counts; the family does
    /// no range validation beyond consistency with its own tables.
    fn create_card(&self, rank: u8, suit: u8) -> Card;
}

const RANK_NAMES: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];
const SUIT_SYMBOLS: [&str; 4] = ["♠", "♥", "♦", "♣"];

/// Hearts and diamonds are red, spades and clubs black.
fn standard_suit_color(suit: u8) -> CardColor {
    if suit == 1 || suit == 2 {
        CardColor::Red
    } else {
        CardColor::Black
    }
}

/// The French 52-card deck: ranks A..K, suits ♠ ♥ ♦ ♣.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrenchDeck;

impl CardFamily for FrenchDeck {
    fn name(&self) -> &'static str {
        "French"
    }

    fn rank_count(&self) -> u8 {
        13
    }

    fn suit_count(&self) -> u8 {
        4
    }

    fn create_card(&self, rank: u8, suit: u8) -> Card {
        Card::new(
            rank,
            suit,
            standard_suit_color(suit),
            RANK_NAMES[rank as usize],
            SUIT_SYMBOLS[suit as usize],
            self.rank_count() - 1,
        )
    }
}

/// The English 52-card deck. Shares the French vocabulary; kept as a distinct
/// family so deck variants stay swappable at the engine seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDeck;

impl CardFamily for EnglishDeck {
    fn name(&self) -> &'static str {
        "English"
    }

    fn rank_count(&self) -> u8 {
        13
    }

    fn suit_count(&self) -> u8 {
        4
    }

    fn create_card(&self, rank: u8, suit: u8) -> Card {
        Card::new(
            rank,
            suit,
            standard_suit_color(suit),
            RANK_NAMES[rank as usize],
            SUIT_SYMBOLS[suit as usize],
            self.rank_count() - 1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_deck_dimensions() {
        let family = FrenchDeck;
        assert_eq!(family.rank_count(), 13);
        assert_eq!(family.suit_count(), 4);
        assert_eq!(family.name(), "French");
    }

    #[test]
    fn test_english_deck_dimensions() {
        let family = EnglishDeck;
        assert_eq!(family.rank_count(), 13);
        assert_eq!(family.suit_count(), 4);
        assert_eq!(family.name(), "English");
    }

    #[test]
    fn test_suit_colors() {
        let family = FrenchDeck;
        assert_eq!(family.create_card(0, 0).color(), CardColor::Black); // spades
        assert_eq!(family.create_card(0, 1).color(), CardColor::Red); // hearts
        assert_eq!(family.create_card(0, 2).color(), CardColor::Red); // diamonds
        assert_eq!(family.create_card(0, 3).color(), CardColor::Black); // clubs
    }

    #[test]
    fn test_created_cards_are_face_down() {
        let family = FrenchDeck;
        for suit in 0..family.suit_count() {
            for rank in 0..family.rank_count() {
                assert!(!family.create_card(rank, suit).is_face_up());
            }
        }
    }

    #[test]
    fn test_rank_names_cover_full_range() {
        let family = FrenchDeck;
        assert_eq!(family.create_card(0, 0).rank_name(), "A");
        assert_eq!(family.create_card(12, 0).rank_name(), "K");
    }
}
