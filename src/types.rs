//! Core types shared across the crate
//! This module contains pure data types and tuning constants with no external dependencies

use serde::{Deserialize, Serialize};

/// Number of tableau columns in a standard deal
pub const TABLEAU_COLUMNS: usize = 7;

/// Classic scoring: points per card parked on a foundation
pub const CLASSIC_FOUNDATION_POINTS: i32 = 100;
/// Classic scoring: penalty per move made
pub const CLASSIC_MOVE_PENALTY: i32 = 2;

/// Modern scoring: points per card parked on a foundation
pub const MODERN_FOUNDATION_POINTS: i32 = 150;
/// Modern scoring: time bonus pool, drained one point per elapsed second
pub const MODERN_TIME_POOL: i32 = 10_000;
/// Modern scoring: penalty per move made
pub const MODERN_MOVE_PENALTY: i32 = 1;

/// Vegas scoring: payout per card parked on a foundation
pub const VEGAS_CARD_PAYOUT: i32 = 5;
/// Vegas scoring: up-front cost of the deal
pub const VEGAS_BUY_IN: i32 = 52;

/// Timed presentation: bonus windows (milliseconds) and their payouts
pub const FAST_WIN_CUTOFF_MS: u64 = 300_000;
pub const FAST_WIN_BONUS: i32 = 1000;
pub const SLOW_WIN_CUTOFF_MS: u64 = 600_000;
pub const SLOW_WIN_BONUS: i32 = 500;

/// Color class of a card, the only suit property tableau placement cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Black => "black",
        }
    }
}
