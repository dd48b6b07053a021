//! Engine integration tests - full games driven through the public API

use solitaire_core::core::{
    Card, EasyRules, EnglishDeck, FrenchDeck, HardRules, ModernScoring, TimedPresenter,
    VegasScoring,
};
use solitaire_core::engine::{GameEngine, SelectionSource};

fn top_of(engine: &GameEngine, column: usize) -> Option<Card> {
    engine.board().column(column).and_then(|c| c.last()).copied()
}

fn column_len(engine: &GameEngine, column: usize) -> usize {
    engine.board().column(column).map(|c| c.len()).unwrap_or(0)
}

#[test]
fn test_new_game_passes_integrity() {
    let engine = GameEngine::standard(1).expect("fresh deal conserves cards");
    assert!(engine.verify_integrity().is_ok());
    assert_eq!(engine.moves(), 0);
    assert_eq!(engine.current_score(), 0);
}

#[test]
fn test_draw_cycle_counts() {
    let mut engine = GameEngine::standard(5).unwrap();
    for expected in [21, 18, 15, 12, 9, 6, 3, 0] {
        assert!(engine.draw_from_stock());
        assert_eq!(engine.board().stock().len(), expected);
    }
    assert_eq!(engine.board().waste().len(), 24);

    // The next draw recycles: waste back into the stock, face-down.
    assert!(engine.draw_from_stock());
    assert_eq!(engine.board().stock().len(), 24);
    assert!(engine.board().waste().is_empty());
    assert!(engine.board().stock().iter().all(|c| !c.is_face_up()));
    assert_eq!(engine.moves(), 9);
    assert!(engine.verify_integrity().is_ok());
}

#[test]
fn test_rejected_moves_leave_board_untouched() {
    let mut engine = GameEngine::standard(9).unwrap();
    engine.draw_from_stock();
    let before = engine.board().clone();
    let moves_before = engine.moves();

    // A rank-5-or-anything-but-ace waste top cannot open a foundation.
    if let Some(card) = engine.board().waste_top().copied() {
        if card.rank() != 0 {
            assert!(engine.select_waste_card());
            for foundation in 0..4 {
                assert!(!engine.move_selection_to_foundation(foundation));
            }
            assert_eq!(engine.board(), &before);
            assert_eq!(engine.moves(), moves_before);
        }
    }
}

#[test]
fn test_multi_card_moves_blocked_under_hard_rules() {
    // Build a genuine two-card run with a legal tableau move, select it,
    // then swap to rules that forbid multi-card moves: the run must refuse
    // to move no matter the destination.
    for seed in 0..100 {
        let mut engine = GameEngine::standard(seed).unwrap();
        for from in 0..7 {
            let len = column_len(&engine, from);
            let card = match top_of(&engine, from) {
                Some(card) => card,
                None => continue,
            };
            for to in 0..7 {
                if to == from {
                    continue;
                }
                let dest_len = column_len(&engine, to);
                if dest_len == 0 {
                    continue;
                }
                if !card.is_tableau_predecessor_of(top_of(&engine, to).as_ref()) {
                    continue;
                }
                assert!(engine.select_tableau_card(from, len - 1));
                assert!(engine.move_selection_to_tableau(to));

                // The destination now ends in a valid two-card run.
                assert!(engine.select_tableau_card(to, dest_len - 1));
                assert_eq!(engine.selection().len(), 2);

                engine.change_rule_set(Box::new(HardRules));
                let before = engine.board().clone();
                for other in 0..7 {
                    assert!(!engine.move_selection_to_tableau(other));
                }
                assert_eq!(engine.board(), &before);
                return;
            }
        }
    }
    panic!("no two-card run constructible in 100 deals");
}

#[test]
fn test_auto_flip_after_moving_column_top() {
    // Search seeds for a tableau-to-tableau move out of a column that still
    // has buried cards, then check the exposed card flipped for free.
    for seed in 0..100 {
        let mut engine = GameEngine::standard(seed).unwrap();
        for from in 1..7 {
            let len = column_len(&engine, from);
            let card = match top_of(&engine, from) {
                Some(card) => card,
                None => continue,
            };
            for to in 0..7 {
                if to == from {
                    continue;
                }
                let dest_top = top_of(&engine, to);
                if !card.is_tableau_predecessor_of(dest_top.as_ref()) {
                    continue;
                }
                let dest_len = column_len(&engine, to);
                assert!(engine.select_tableau_card(from, len - 1));
                let moves_before = engine.moves();
                assert!(engine.move_selection_to_tableau(to));

                // One move charged, the exposed card face-up for free.
                assert_eq!(engine.moves(), moves_before + 1);
                assert_eq!(column_len(&engine, from), len - 1);
                if let Some(exposed) = top_of(&engine, from) {
                    assert!(exposed.is_face_up());
                }
                assert_eq!(column_len(&engine, to), dest_len + 1);
                assert!(engine.verify_integrity().is_ok());
                return;
            }
        }
    }
    panic!("no legal tableau move in 100 deals");
}

#[test]
fn test_waste_to_tableau_move() {
    for seed in 0..200 {
        let mut engine = GameEngine::standard(seed).unwrap();
        for _ in 0..16 {
            engine.draw_from_stock();
            let card = match engine.board().waste_top().copied() {
                Some(card) => card,
                None => continue,
            };
            for to in 0..7 {
                let dest_top = top_of(&engine, to);
                if card.is_tableau_predecessor_of(dest_top.as_ref()) {
                    let waste_before = engine.board().waste().len();
                    assert!(engine.select_waste_card());
                    assert_eq!(engine.selection().source(), SelectionSource::Waste);
                    assert!(engine.move_selection_to_tableau(to));
                    assert_eq!(engine.board().waste().len(), waste_before - 1);
                    assert!(top_of(&engine, to).unwrap().same_identity(&card));
                    assert!(engine.verify_integrity().is_ok());
                    return;
                }
            }
        }
    }
    panic!("no waste-to-tableau move in 200 deals");
}

#[test]
fn test_victory_requires_full_foundations() {
    let engine = GameEngine::standard(2).unwrap();
    assert!(!engine.is_victory());
    assert_eq!(engine.snapshot().total_cards(), 52);
}

#[test]
fn test_family_swap_is_symmetric_and_redeal() {
    let mut engine = GameEngine::standard(3).unwrap();
    engine.draw_from_stock();

    engine.change_family(Box::new(EnglishDeck)).unwrap();
    assert_eq!(engine.family().name(), "English");
    assert_eq!(engine.moves(), 0);
    assert!(engine.board().waste().is_empty());

    engine.change_family(Box::new(FrenchDeck)).unwrap();
    assert_eq!(engine.family().name(), "French");
    assert!(engine.verify_integrity().is_ok());
}

#[test]
fn test_rule_swap_changes_draw_count() {
    let mut engine = GameEngine::standard(4).unwrap();
    engine.draw_from_stock();
    assert_eq!(engine.board().waste().len(), 3);

    engine.change_rule_set(Box::new(EasyRules));
    engine.draw_from_stock();
    assert_eq!(engine.board().waste().len(), 4);
}

#[test]
fn test_timed_presenter_resets_with_game() {
    let mut engine = GameEngine::new(
        Box::new(FrenchDeck),
        Box::new(EasyRules),
        Box::new(TimedPresenter::new(Box::new(ModernScoring))),
        6,
    )
    .unwrap();

    // Fresh game under five minutes: modern time pool plus the fast bonus.
    assert!(engine.current_score() >= 10_000);
    engine.reset_game().unwrap();
    assert!(engine.current_score() >= 10_000);
    assert!(engine.score_summary().contains("Timed"));
}

#[test]
fn test_vegas_scores_clamp_at_zero() {
    let mut engine = GameEngine::standard(8).unwrap();
    engine.change_score_calculation(Box::new(VegasScoring));
    // No foundation cards yet: raw -52 presents as 0.
    assert_eq!(engine.current_score(), 0);
}

#[test]
fn test_suggestions_are_well_formed() {
    for seed in 0..30 {
        let engine = GameEngine::standard(seed).unwrap();
        for suggestion in engine.suggest_automatic_moves() {
            assert!(
                suggestion.contains("(column ") && suggestion.contains(") -> foundation "),
                "malformed suggestion: {}",
                suggestion
            );
        }
    }
}

#[test]
fn test_integrity_holds_through_random_play() {
    // Hammer the engine with a scripted mix of operations; integrity must
    // hold after every one of them.
    let mut engine = GameEngine::standard(1234).unwrap();
    for step in 0..500u32 {
        match step % 7 {
            0 => {
                engine.draw_from_stock();
            }
            1 => {
                engine.select_waste_card();
            }
            2 | 3 => {
                let column = (step as usize / 7) % 7;
                let len = column_len(&engine, column);
                if len > 0 {
                    engine.select_tableau_card(column, len - 1);
                }
            }
            4 => {
                engine.move_selection_to_foundation((step as usize / 7) % 4);
            }
            5 => {
                engine.move_selection_to_tableau((step as usize / 11) % 7);
            }
            _ => {
                engine.clear_selection();
            }
        }
        assert!(engine.verify_integrity().is_ok(), "step {}", step);
    }
}
