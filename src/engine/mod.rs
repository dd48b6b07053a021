//! Engine module - game orchestration over the core types
//!
//! The [`GameEngine`] owns a board plus the three pluggable strategies
//! (family, rules, scoring) and exposes every operation a player can take.
//! Player operations return `bool`: `true` means the board changed, `false`
//! means the request was illegal and the board is untouched. Card accounting
//! failures are not player mistakes; those surface as [`IntegrityError`].

pub mod selection;

use std::fmt;
use std::time::Instant;

use log::{debug, info};

use crate::core::board::Board;
use crate::core::builder::deal_standard_board;
use crate::core::card::Card;
use crate::core::family::{CardFamily, FrenchDeck};
use crate::core::rng::SimpleRng;
use crate::core::rules::{KlondikeRules, RuleSet};
use crate::core::scoring::{ClassicScoring, ScoreCalculation, ScorePresenter, StandardPresenter};
use crate::core::snapshot::{CardSnapshot, GameSnapshot};

pub use selection::{Selection, SelectionSource};

/// The board lost or duplicated a card. This is a bug, not a player error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityError {
    pub expected: usize,
    pub found: usize,
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "card conservation violated: expected {} cards, found {}",
            self.expected, self.found
        )
    }
}

impl std::error::Error for IntegrityError {}

/// A running game: board, strategies, selection, and the move/time counters.
pub struct GameEngine {
    board: Board,
    family: Box<dyn CardFamily>,
    rules: Box<dyn RuleSet>,
    scoring: Box<dyn ScorePresenter>,
    selection: Selection,
    moves: u32,
    started_at: Instant,
    rng: SimpleRng,
}

impl GameEngine {
    /// Deal a fresh game with the given strategies. `seed` fixes the shuffle.
    pub fn new(
        family: Box<dyn CardFamily>,
        rules: Box<dyn RuleSet>,
        scoring: Box<dyn ScorePresenter>,
        seed: u32,
    ) -> Result<Self, IntegrityError> {
        let board = deal_standard_board(family.as_ref(), seed);
        let engine = Self {
            board,
            family,
            rules,
            scoring,
            selection: Selection::empty(),
            moves: 0,
            started_at: Instant::now(),
            rng: SimpleRng::new(seed),
        };
        engine.verify_integrity()?;
        info!(
            "new game: {} deck, {} rules, seed {}",
            engine.family.name(),
            engine.rules.name(),
            seed
        );
        Ok(engine)
    }

    /// French deck, Klondike rules, classic scoring without time bonuses.
    pub fn standard(seed: u32) -> Result<Self, IntegrityError> {
        Self::new(
            Box::new(FrenchDeck),
            Box::new(KlondikeRules),
            Box::new(StandardPresenter::new(Box::new(ClassicScoring))),
            seed,
        )
    }

    // --- queries ---

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn family(&self) -> &dyn CardFamily {
        self.family.as_ref()
    }

    pub fn rules(&self) -> &dyn RuleSet {
        self.rules.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Every card of the family sits on a foundation.
    pub fn is_victory(&self) -> bool {
        self.board.foundation_card_count() == self.deck_size()
    }

    pub fn current_score(&self) -> i32 {
        self.scoring
            .final_score(self.moves, self.elapsed_ms(), self.board.foundation_card_count())
    }

    pub fn score_summary(&self) -> String {
        self.scoring.stats_summary()
    }

    /// Count every card on the board and compare against the family's deck
    /// size. Called after construction and every strategy swap. The tableau
    /// is counted through the cursor, so a broken traversal fails here too.
    pub fn verify_integrity(&self) -> Result<(), IntegrityError> {
        let expected = self.deck_size();
        let found = self.board.stock().len()
            + self.board.waste().len()
            + self.board.foundation_card_count()
            + self.board.tableau_cursor().count();
        if found == expected {
            Ok(())
        } else {
            Err(IntegrityError { expected, found })
        }
    }

    fn deck_size(&self) -> usize {
        self.family.rank_count() as usize * self.family.suit_count() as usize
    }

    // --- player operations ---

    /// Pass cards from stock to waste, or recycle the waste when the stock is
    /// out. Both count as one move. With both piles empty nothing happens.
    pub fn draw_from_stock(&mut self) -> bool {
        if self.board.stock().is_empty() {
            if self.board.waste().is_empty() {
                return false;
            }
            // Recycle: the waste goes back face-down, oldest card on top.
            while let Some(mut card) = self.board.pop_waste() {
                card.set_face_up(false);
                self.board.push_stock(card);
            }
            self.selection.clear();
            self.moves += 1;
            debug!("recycled waste, stock is {} cards", self.board.stock().len());
            return true;
        }

        self.selection.clear();
        for _ in 0..self.rules.draw_count() {
            match self.board.pop_stock() {
                Some(mut card) => {
                    card.set_face_up(true);
                    self.board.push_waste(card);
                }
                None => break,
            }
        }
        self.moves += 1;
        true
    }

    /// Select a face-up card in a tableau column. When the rules allow
    /// multi-card moves and the cards from `index` to the column's end form a
    /// valid run, the whole run is selected; otherwise just the one card.
    /// Selecting a face-down top card flips it instead, which counts as one
    /// move and leaves nothing selected.
    pub fn select_tableau_card(&mut self, column: usize, index: usize) -> bool {
        let cards = match self.board.column(column) {
            Some(cards) if index < cards.len() => cards,
            _ => return false,
        };

        if !cards[index].is_face_up() {
            if index != cards.len() - 1 {
                return false;
            }
            self.selection.clear();
            if self.board.flip_column_top_face_up(column) {
                self.moves += 1;
                return true;
            }
            return false;
        }

        let run = &cards[index..];
        let take_run = self.rules.allows_multi_card_move() && is_valid_run(run);
        let selected = if take_run { run.to_vec() } else { vec![run[0]] };
        self.selection = Selection::new(selected, SelectionSource::Tableau { column, start: index });
        true
    }

    /// Select the top card of the waste.
    pub fn select_waste_card(&mut self) -> bool {
        match self.board.waste_top() {
            Some(card) => {
                self.selection = Selection::new(vec![*card], SelectionSource::Waste);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Move a single selected card onto a foundation. Empty foundations take
    /// the family's lowest rank; otherwise the card must follow the top card
    /// of the same suit.
    pub fn move_selection_to_foundation(&mut self, foundation: usize) -> bool {
        if self.selection.len() != 1 || foundation >= self.board.foundation_count() {
            return false;
        }
        if !self.selection_is_current() {
            self.selection.clear();
            return false;
        }
        let card = match self.selection.leading_card() {
            Some(card) => *card,
            None => return false,
        };
        let eligible = match self.board.foundation_top(foundation) {
            None => card.rank() == 0,
            Some(top) => card.is_immediate_successor_in_suit(top),
        };
        if !eligible {
            return false;
        }

        let source = self.selection.source();
        let taken = match source {
            SelectionSource::Waste => self.board.pop_waste(),
            SelectionSource::Tableau { column, start } => {
                self.board.remove_from_column(column, start)
            }
            SelectionSource::None => None,
        };
        let taken = match taken {
            Some(card) => card,
            None => return false,
        };
        self.board.push_foundation(foundation, taken);
        self.moves += 1;
        if let SelectionSource::Tableau { column, .. } = source {
            self.flip_exposed_top(column);
        }
        self.selection.clear();
        debug!(
            "{} to foundation {}; score now {}",
            taken.label(),
            foundation + 1,
            self.current_score()
        );
        if self.is_victory() {
            info!("victory in {} moves", self.moves);
        }
        true
    }

    /// Move the selected run onto a tableau column. The rule set decides
    /// whether the leading card may land there.
    pub fn move_selection_to_tableau(&mut self, column: usize) -> bool {
        if self.selection.is_empty() || column >= self.board.tableau().len() {
            return false;
        }
        if self.selection.len() > 1 && !self.rules.allows_multi_card_move() {
            return false;
        }
        if let SelectionSource::Tableau { column: from, .. } = self.selection.source() {
            if from == column {
                return false;
            }
        }
        if !self.selection_is_current() {
            self.selection.clear();
            return false;
        }
        let leading = match self.selection.leading_card() {
            Some(card) => *card,
            None => return false,
        };
        let destination = match self.board.column(column) {
            Some(cards) => cards,
            None => return false,
        };
        if !self.rules.can_place(&leading, destination) {
            return false;
        }

        let source = self.selection.source();
        let taken: Vec<Card> = match source {
            SelectionSource::Waste => self.board.pop_waste().into_iter().collect(),
            SelectionSource::Tableau { column: from, start } => {
                self.board.drain_column_from(from, start)
            }
            SelectionSource::None => Vec::new(),
        };
        if taken.is_empty() {
            return false;
        }
        self.board.extend_column(column, taken);
        self.moves += 1;
        if let SelectionSource::Tableau { column: from, .. } = source {
            self.flip_exposed_top(from);
        }
        self.selection.clear();
        true
    }

    /// Labels for every face-up tableau card that a foundation would accept.
    pub fn suggest_automatic_moves(&self) -> Vec<String> {
        let mut suggestions = Vec::new();
        let mut cursor = self.board.face_up_cursor();
        while let Some(card) = cursor.next_card() {
            let (column, _) = match self.board.position_of(card) {
                Some(position) => position,
                None => continue,
            };
            for foundation in 0..self.board.foundation_count() {
                let eligible = match self.board.foundation_top(foundation) {
                    None => card.rank() == 0,
                    Some(top) => card.is_immediate_successor_in_suit(top),
                };
                if eligible {
                    suggestions.push(format!(
                        "{} (column {}) -> foundation {}",
                        card.label(),
                        column + 1,
                        foundation + 1
                    ));
                }
            }
        }
        suggestions
    }

    // --- strategy swaps and reset ---

    /// Swap the deck family. The old board's cards belong to the old family,
    /// so the game restarts with a fresh deal of the new deck.
    pub fn change_family(&mut self, family: Box<dyn CardFamily>) -> Result<(), IntegrityError> {
        info!("family change: {} -> {}", self.family.name(), family.name());
        self.family = family;
        self.redeal()
    }

    /// Swap the rule set in place. The board and any selection stand; a
    /// selection the new rules forbid is rejected at move time.
    pub fn change_rule_set(&mut self, rules: Box<dyn RuleSet>) {
        info!("rule change: {} -> {}", self.rules.name(), rules.name());
        self.rules = rules;
    }

    /// Swap the score presenter.
    pub fn change_scoring(&mut self, scoring: Box<dyn ScorePresenter>) {
        self.scoring = scoring;
    }

    /// Swap the calculation inside the current presenter.
    pub fn change_score_calculation(&mut self, calculation: Box<dyn ScoreCalculation>) {
        self.scoring.set_calculation(calculation);
    }

    /// Restart with a fresh shuffle of the current family.
    pub fn reset_game(&mut self) -> Result<(), IntegrityError> {
        info!("game reset after {} moves", self.moves);
        self.redeal()
    }

    fn redeal(&mut self) -> Result<(), IntegrityError> {
        let seed = self.rng.next_u32();
        self.board = deal_standard_board(self.family.as_ref(), seed);
        self.selection.clear();
        self.moves = 0;
        self.started_at = Instant::now();
        self.scoring.reset_timer();
        self.verify_integrity()
    }

    // --- read models ---

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            stock: self.board.stock().iter().map(CardSnapshot::from).collect(),
            waste: self.board.waste().iter().map(CardSnapshot::from).collect(),
            foundations: self
                .board
                .foundations()
                .iter()
                .map(|pile| pile.iter().map(CardSnapshot::from).collect())
                .collect(),
            tableau: self
                .board
                .tableau()
                .iter()
                .map(|column| column.iter().map(CardSnapshot::from).collect())
                .collect(),
            moves: self.moves,
            elapsed_ms: self.elapsed_ms(),
            score: self.current_score(),
            victory: self.is_victory(),
        }
    }

    /// Plain-text board dump. Face-down cards render as `##`.
    pub fn status_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} deck | {} rules | time {} | moves {} | score {}\n",
            self.family.name(),
            self.rules.name(),
            format_elapsed(self.elapsed_ms()),
            self.moves,
            self.current_score()
        ));
        out.push_str(&format!(
            "stock: {} | waste: {}\n",
            self.board.stock().len(),
            self.board
                .waste_top()
                .map(Card::label)
                .unwrap_or_else(|| "--".to_string())
        ));
        let tops: Vec<String> = (0..self.board.foundation_count())
            .map(|i| {
                self.board
                    .foundation_top(i)
                    .map(Card::label)
                    .unwrap_or_else(|| "--".to_string())
            })
            .collect();
        out.push_str(&format!("foundations: {}\n", tops.join(" ")));
        for (i, column) in self.board.tableau().iter().enumerate() {
            let rendered: Vec<String> = column
                .iter()
                .map(|card| {
                    if card.is_face_up() {
                        card.label()
                    } else {
                        "##".to_string()
                    }
                })
                .collect();
            out.push_str(&format!("{}: {}\n", i + 1, rendered.join(" ")));
        }
        let selected: Vec<String> = self.selection.cards().iter().map(Card::label).collect();
        out.push_str(&format!(
            "selected: {}\n",
            if selected.is_empty() {
                "none".to_string()
            } else {
                selected.join(" ")
            }
        ));
        let progress = self.board.foundation_card_count() * 100 / self.deck_size();
        out.push_str(&format!(
            "progress: {}% | integrity: {}\n",
            progress,
            match self.verify_integrity() {
                Ok(()) => "ok".to_string(),
                Err(err) => err.to_string(),
            }
        ));
        out
    }

    // --- internals ---

    /// The selection records cards by value; the board may have changed since
    /// it was taken. Confirm the recorded source still holds those cards.
    fn selection_is_current(&self) -> bool {
        match self.selection.source() {
            SelectionSource::None => false,
            SelectionSource::Waste => match (self.board.waste_top(), self.selection.leading_card())
            {
                (Some(top), Some(selected)) => top.same_identity(selected),
                _ => false,
            },
            SelectionSource::Tableau { column, start } => {
                let cards = match self.board.column(column) {
                    Some(cards) => cards,
                    None => return false,
                };
                if cards.len() != start + self.selection.len() {
                    return false;
                }
                cards[start..]
                    .iter()
                    .zip(self.selection.cards())
                    .all(|(on_board, selected)| on_board.same_identity(selected))
            }
        }
    }

    /// Moving cards off a column may expose a face-down card; it flips for
    /// free (no move charged).
    fn flip_exposed_top(&mut self, column: usize) {
        if self.board.flip_column_top_face_up(column) {
            debug!(
                "exposed card flipped on column {}; score now {}",
                column + 1,
                self.current_score()
            );
        }
    }
}

/// Whether `run` is a movable unit: strictly descending ranks in alternating
/// colors from first to last.
fn is_valid_run(run: &[Card]) -> bool {
    run.windows(2)
        .all(|pair| pair[1].is_tableau_predecessor_of(Some(&pair[0])))
}

/// `MM:SS`, minutes uncapped.
pub fn format_elapsed(elapsed_ms: u64) -> String {
    let total_secs = elapsed_ms / 1000;
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}
