//! Klondike solitaire rules engine - pure, deterministic, and testable
//!
//! This crate holds the complete rules and state management for a Klondike
//! game. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Pluggable**: Deck family, rule set, and scoring are all runtime-swappable
//! - **Testable**: Every player operation reports success or failure as a `bool`
//!
//! # Module Structure
//!
//! - [`core`]: cards, families, rule sets, scoring, board construction,
//!   traversal cursors, and the serializable snapshot
//! - [`engine`]: the [`GameEngine`](engine::GameEngine) orchestrating a game
//! - [`types`]: shared constants and the card color type
//!
//! # Example
//!
//! ```
//! use solitaire_core::engine::GameEngine;
//!
//! let mut game = GameEngine::standard(12345).expect("deal is always complete");
//!
//! // Player operations return false when illegal; the board never changes
//! // on a rejected request.
//! game.draw_from_stock();
//! if game.select_waste_card() {
//!     game.move_selection_to_foundation(0);
//! }
//!
//! assert!(game.verify_integrity().is_ok());
//! ```

pub mod core;
pub mod engine;
pub mod types;

pub use crate::core::{Board, Card, CardFamily, GameSnapshot, RuleSet, ScoreCalculation, ScorePresenter};
pub use crate::engine::{GameEngine, IntegrityError};
