//! Scoring module - Classic, Modern and Vegas scoring rules
//!
//! Scoring is split in two swappable layers. A calculation maps
//! (moves, elapsed time, foundation cards) to a raw score and is pure - it
//! may go negative. A presenter wraps a calculation, clamps the result to a
//! minimum of zero, may add time bonuses, and renders a human-readable
//! summary. Presenters keep their own state (the timed presenter holds a
//! start instant for its bonus windows); that state is independent of the
//! board and survives calculation swaps.

use std::time::Instant;

use crate::types::{
    CLASSIC_FOUNDATION_POINTS, CLASSIC_MOVE_PENALTY, FAST_WIN_BONUS, FAST_WIN_CUTOFF_MS,
    MODERN_FOUNDATION_POINTS, MODERN_MOVE_PENALTY, MODERN_TIME_POOL, SLOW_WIN_BONUS,
    SLOW_WIN_CUTOFF_MS, VEGAS_BUY_IN, VEGAS_CARD_PAYOUT,
};

/// A pure scoring algorithm. May return negative values.
pub trait ScoreCalculation {
    fn score(&self, moves: u32, elapsed_ms: u64, foundation_cards: usize) -> i32;

    /// One-line description of the algorithm.
    fn description(&self) -> &'static str;
}

/// Traditional solitaire scoring: each foundation card pays, each move costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicScoring;

impl ScoreCalculation for ClassicScoring {
    fn score(&self, moves: u32, _elapsed_ms: u64, foundation_cards: usize) -> i32 {
        foundation_cards as i32 * CLASSIC_FOUNDATION_POINTS - moves as i32 * CLASSIC_MOVE_PENALTY
    }

    fn description(&self) -> &'static str {
        "Classic: +100 per foundation card, -2 per move"
    }
}

/// Contemporary scoring: high card payout, a time bonus pool that drains one
/// point per second, a small penalty per move.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernScoring;

impl ScoreCalculation for ModernScoring {
    fn score(&self, moves: u32, elapsed_ms: u64, foundation_cards: usize) -> i32 {
        let time_points = (MODERN_TIME_POOL - (elapsed_ms / 1000) as i32).max(0);
        foundation_cards as i32 * MODERN_FOUNDATION_POINTS + time_points
            - moves as i32 * MODERN_MOVE_PENALTY
    }

    fn description(&self) -> &'static str {
        "Modern: +150 per card, time bonus, -1 per move"
    }
}

/// Casino scoring: pay the buy-in, earn per foundation card.
#[derive(Debug, Clone, Copy, Default)]
pub struct VegasScoring;

impl ScoreCalculation for VegasScoring {
    fn score(&self, _moves: u32, _elapsed_ms: u64, foundation_cards: usize) -> i32 {
        foundation_cards as i32 * VEGAS_CARD_PAYOUT - VEGAS_BUY_IN
    }

    fn description(&self) -> &'static str {
        "Vegas: $5 per foundation card, -$52 buy-in"
    }
}

/// Presentation layer over a [`ScoreCalculation`].
///
/// Implementations clamp the final score to a minimum of zero and may add
/// bonuses first. `reset_timer` is a capability with a no-op default so the
/// engine never has to inspect which presenter it holds.
pub trait ScorePresenter {
    /// Final, player-facing score. Never negative.
    fn final_score(&self, moves: u32, elapsed_ms: u64, foundation_cards: usize) -> i32;

    /// Human-readable summary of the presenter and its calculation.
    fn stats_summary(&self) -> String;

    /// Swap the wrapped calculation at runtime. Presenter state is kept.
    fn set_calculation(&mut self, calculation: Box<dyn ScoreCalculation>);

    /// Restart any time-based presenter state. No-op by default.
    fn reset_timer(&mut self) {}
}

/// Plain presentation: the wrapped calculation, clamped at zero.
pub struct StandardPresenter {
    calculation: Box<dyn ScoreCalculation>,
}

impl StandardPresenter {
    pub fn new(calculation: Box<dyn ScoreCalculation>) -> Self {
        Self { calculation }
    }
}

impl ScorePresenter for StandardPresenter {
    fn final_score(&self, moves: u32, elapsed_ms: u64, foundation_cards: usize) -> i32 {
        self.calculation
            .score(moves, elapsed_ms, foundation_cards)
            .max(0)
    }

    fn stats_summary(&self) -> String {
        format!("Standard scoring - {}", self.calculation.description())
    }

    fn set_calculation(&mut self, calculation: Box<dyn ScoreCalculation>) {
        self.calculation = calculation;
    }
}

/// Time-bonus presentation: +1000 under five minutes, +500 under ten, then
/// clamped at zero. Holds its own start instant for the stats summary.
pub struct TimedPresenter {
    calculation: Box<dyn ScoreCalculation>,
    timer_start: Instant,
}

impl TimedPresenter {
    pub fn new(calculation: Box<dyn ScoreCalculation>) -> Self {
        Self {
            calculation,
            timer_start: Instant::now(),
        }
    }
}

impl ScorePresenter for TimedPresenter {
    fn final_score(&self, moves: u32, elapsed_ms: u64, foundation_cards: usize) -> i32 {
        let mut score = self.calculation.score(moves, elapsed_ms, foundation_cards);
        if elapsed_ms < FAST_WIN_CUTOFF_MS {
            score += FAST_WIN_BONUS;
        } else if elapsed_ms < SLOW_WIN_CUTOFF_MS {
            score += SLOW_WIN_BONUS;
        }
        score.max(0)
    }

    fn stats_summary(&self) -> String {
        format!(
            "Timed scoring - {} | elapsed: {}s",
            self.calculation.description(),
            self.timer_start.elapsed().as_secs()
        )
    }

    fn set_calculation(&mut self, calculation: Box<dyn ScoreCalculation>) {
        self.calculation = calculation;
    }

    fn reset_timer(&mut self) {
        self.timer_start = Instant::now();
    }
}
