//! Core module - pure game logic with no I/O
//!
//! Cards, card families, rule sets, scoring, board construction, and the
//! traversal cursors all live here. Nothing in this module touches the
//! terminal or the filesystem; time only enters through the timed scoring
//! presenter.

pub mod board;
pub mod builder;
pub mod card;
pub mod family;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod traversal;

// Re-export commonly used types
pub use board::Board;
pub use builder::{deal_standard_board, BoardBuilder};
pub use card::Card;
pub use family::{CardFamily, EnglishDeck, FrenchDeck};
pub use rng::SimpleRng;
pub use rules::{EasyRules, HardRules, KlondikeRules, RuleSet};
pub use scoring::{
    ClassicScoring, ModernScoring, ScoreCalculation, ScorePresenter, StandardPresenter,
    TimedPresenter, VegasScoring,
};
pub use snapshot::{CardSnapshot, GameSnapshot};
pub use traversal::{FaceUpCursor, TableauCursor};
