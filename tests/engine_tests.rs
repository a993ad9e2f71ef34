//! Puzzle engine integration tests.
//!
//! Scripted random sources pin exact grids and targets; seeded
//! `GameRng`s cover the same rules on larger, arbitrary boards.

use sum_match::{
    EngineConfig, EngineError, Evaluation, GameRng, Position, PuzzleEngine, ScriptedRng,
    CELL_MAX, CELL_MIN, EMPTY_CELL,
};

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Grid [[2,3,1],[4,2,5],[3,1,4]], target from (0,0) and (1,1).
fn scripted_3x3() -> PuzzleEngine<ScriptedRng> {
    let rng = ScriptedRng::new(vec![1, 2, 0, 3, 1, 4, 2, 0, 3, 0, 0, 1, 1]);
    PuzzleEngine::new(3, 3, rng).unwrap()
}

/// Find two distinct positions whose values sum to `target`.
fn find_pair<R: sum_match::RandomSource>(
    engine: &PuzzleEngine<R>,
    matching: bool,
) -> Option<(Position, Position)> {
    let target = engine.target_number();
    let cells: Vec<_> = engine.grid().iter().collect();
    for (i, &(a, va)) in cells.iter().enumerate() {
        for &(b, vb) in &cells[i + 1..] {
            let sum = u32::from(va) + u32::from(vb);
            if (sum == target) == matching {
                return Some((a, b));
            }
        }
    }
    None
}

// =============================================================================
// Walkthrough
// =============================================================================

/// Match, miss, then refill on the 3x3 example board.
#[test]
fn test_example_round() {
    let mut engine = scripted_3x3();
    assert_eq!(engine.target_number(), 4);

    assert!(engine.evaluate_selection(p(0, 0), p(1, 1)).unwrap());
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.get_value(0, 0), Ok(EMPTY_CELL));
    assert_eq!(engine.get_value(1, 1), Ok(EMPTY_CELL));

    // 3 + 4 = 7
    assert!(!engine.evaluate_selection(p(0, 1), p(2, 2)).unwrap());
    assert_eq!(engine.health(), 4);
    assert_eq!(engine.score(), 10);

    let before = engine.grid().clone();
    engine.refill_matrix();

    for (position, value) in engine.grid().iter() {
        if before[position] == EMPTY_CELL {
            assert!((CELL_MIN..=CELL_MAX).contains(&value));
        } else {
            assert_eq!(value, before[position]);
        }
    }
}

/// A caller can sequence match → refill → retarget indefinitely.
#[test]
fn test_caller_sequencing_keeps_target_traceable() {
    let mut engine = PuzzleEngine::seeded(4, 5, 2024).unwrap();

    for round in 1..=50u32 {
        let [a, b] = engine.target_cells();
        assert_ne!(a, b);
        assert_eq!(
            u32::from(engine.grid()[a]) + u32::from(engine.grid()[b]),
            engine.target_number()
        );

        assert_eq!(engine.evaluate(&[a, b]), Ok(Evaluation::Correct));
        assert_eq!(engine.score(), round * 10);

        engine.refill_matrix();
        engine.generate_target();
    }
    assert_eq!(engine.health(), 5);
}

// =============================================================================
// Evaluation
// =============================================================================

#[test]
fn test_correct_pair_on_seeded_board() {
    let mut engine = PuzzleEngine::seeded(3, 3, 11).unwrap();
    let (a, b) = find_pair(&engine, true).expect("target cells always form a pair");

    assert!(engine.evaluate_selection(a, b).unwrap());
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.health(), 5);
    assert_eq!(engine.get_value(a.row, a.col), Ok(0));
    assert_eq!(engine.get_value(b.row, b.col), Ok(0));
}

#[test]
fn test_wrong_pair_on_seeded_board() {
    // Search seeds for a board with at least one non-matching pair
    let mut engine = (0..100)
        .map(|seed| PuzzleEngine::seeded(3, 3, seed).unwrap())
        .find(|e| find_pair(e, false).is_some())
        .unwrap();
    let (a, b) = find_pair(&engine, false).unwrap();
    let before = engine.grid().clone();

    assert!(!engine.evaluate_selection(a, b).unwrap());
    assert_eq!(engine.health(), 4);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.grid(), &before);
}

#[test]
fn test_malformed_lengths() {
    let mut engine = scripted_3x3();
    let all: Vec<_> = engine.grid().positions().collect();

    for len in [0, 1, 3, 4, 9] {
        assert_eq!(engine.evaluate(&all[..len]), Ok(Evaluation::Malformed));
    }
    assert_eq!(engine.health(), 5);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.grid().empty_count(), 0);
}

#[test]
fn test_out_of_bounds_reported() {
    let mut engine = scripted_3x3();

    let err = engine.evaluate_selection(p(0, 0), p(0, 9)).unwrap_err();
    assert_eq!(
        err,
        EngineError::OutOfBounds {
            position: p(0, 9),
            rows: 3,
            columns: 3,
        }
    );
    assert_eq!(engine.health(), 5);
}

#[test]
#[should_panic(expected = "outside the 3x3 grid")]
fn test_grid_index_panics() {
    let engine = scripted_3x3();
    let _ = engine.grid()[p(3, 1)];
}

// =============================================================================
// Reset and lifecycle
// =============================================================================

#[test]
fn test_reset_after_exhaustion() {
    let mut engine = scripted_3x3();

    for _ in 0..6 {
        engine.evaluate_selection(p(0, 1), p(2, 2)).unwrap();
    }
    assert_eq!(engine.health(), -1);
    assert!(engine.is_exhausted());

    engine.reset();
    assert_eq!(engine.health(), 5);
    assert_eq!(engine.score(), 0);
    assert!(!engine.is_exhausted());
    assert_eq!(engine.grid().empty_count(), 0);
}

#[test]
fn test_generate_grid_leaves_counters() {
    let mut engine = scripted_3x3();
    engine.evaluate_selection(p(0, 0), p(1, 1)).unwrap();
    engine.evaluate_selection(p(0, 1), p(2, 2)).unwrap();
    let target = engine.target_number();

    engine.generate_grid();

    assert_eq!(engine.grid().empty_count(), 0);
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.health(), 4);
    assert_eq!(engine.target_number(), target);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = PuzzleEngine::seeded(5, 5, 77).unwrap();
    let mut b = PuzzleEngine::seeded(5, 5, 77).unwrap();

    for _ in 0..10 {
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.target_cells(), b.target_cells());
        a.reset();
        b.reset();
    }
}

#[test]
fn test_two_cell_grid_always_samples_both() {
    let mut engine = PuzzleEngine::with_config(EngineConfig::new(1, 2), GameRng::new(3)).unwrap();

    for _ in 0..20 {
        engine.generate_target();
        let mut cells = engine.target_cells();
        cells.sort();
        assert_eq!(cells, [p(0, 0), p(0, 1)]);
    }
}
