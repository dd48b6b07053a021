//! Rule set module - the swappable rules a game is played under
//!
//! A rule set answers three questions the engine cannot answer alone: may
//! this card land on that tableau column, how many cards does one draw action
//! pass from stock to waste, and may a run of cards move as a unit. The
//! classic Klondike placement rule (alternating colors, descending rank, king
//! on empty) is shared by all shipped variants, so it lives as a provided
//! method; stricter variants may override it.

use log::debug;

use crate::core::card::Card;

/// The rules a game is played under. Swappable at runtime.
pub trait RuleSet {
    /// Whether `card` may be placed on top of `destination`.
    fn can_place(&self, card: &Card, destination: &[Card]) -> bool {
        let legal = card.is_tableau_predecessor_of(destination.last());
        debug!(
            "rule check: {} onto {} -> {}",
            card.label(),
            destination
                .last()
                .map(|top| top.label())
                .unwrap_or_else(|| "empty column".to_string()),
            legal
        );
        legal
    }

    /// Number of cards one draw action passes from stock to waste.
    fn draw_count(&self) -> usize;

    /// Whether a valid run of several cards may be selected and moved at once.
    fn allows_multi_card_move(&self) -> bool;

    /// Descriptive name of the rule set.
    fn name(&self) -> &'static str;
}

/// Standard Klondike: draw three, runs move together.
#[derive(Debug, Clone, Copy, Default)]
pub struct KlondikeRules;

impl RuleSet for KlondikeRules {
    fn draw_count(&self) -> usize {
        3
    }

    fn allows_multi_card_move(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "Klondike"
    }
}

/// Permissive variant: draw one, runs move together.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyRules;

impl RuleSet for EasyRules {
    fn draw_count(&self) -> usize {
        1
    }

    fn allows_multi_card_move(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "Easy"
    }
}

/// Restrictive variant: draw three, one card at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardRules;

impl RuleSet for HardRules {
    fn draw_count(&self) -> usize {
        3
    }

    fn allows_multi_card_move(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "Hard"
    }
}
