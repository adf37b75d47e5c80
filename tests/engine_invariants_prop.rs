//! Property tests for the engine's placement and scoring invariants.
//!
//! Random command and timing sequences must never:
//! - put a current-piece cell outside the side walls or below the floor,
//! - overlap the current piece with a locked cell while the game is running,
//! - leave a full row in the grid after a step,
//! - decrease the score or the cleared-row count.

use proptest::prelude::*;
use tui_blocks::core::{GameEngine, MemoryScoreStore, ScoreStore};
use tui_blocks::types::{Command, Difficulty, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy)]
enum Step {
    Command(Command),
    Tick(u32),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Command(Command::MoveLeft)),
        Just(Step::Command(Command::MoveRight)),
        Just(Step::Command(Command::SoftDrop)),
        Just(Step::Command(Command::RotateCw)),
        Just(Step::Command(Command::HardDrop)),
        (1u32..1_000).prop_map(Step::Tick),
    ]
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn assert_invariants<S: ScoreStore>(engine: &GameEngine<S>) -> Result<(), TestCaseError> {
    for (x, y) in engine.current().cells() {
        prop_assert!((0..GRID_WIDTH as i8).contains(&x), "x out of bounds: {x}");
        prop_assert!(y < GRID_HEIGHT as i8, "below floor: {y}");
        if !engine.game_over() && y >= 0 {
            prop_assert!(engine.grid().is_empty_at(x, y), "overlap at ({x}, {y})");
        }
    }
    prop_assert!(engine.grid().full_rows().is_empty());
    Ok(())
}

proptest! {
    #[test]
    fn random_play_respects_invariants(
        seed in any::<u64>(),
        difficulty in difficulty_strategy(),
        steps in prop::collection::vec(step_strategy(), 1..300),
    ) {
        let mut engine = GameEngine::new(difficulty, seed, MemoryScoreStore::new());
        assert_invariants(&engine)?;

        let mut score = engine.score();
        let mut lines = engine.lines();
        for step in steps {
            match step {
                Step::Command(command) => {
                    engine.apply(command);
                }
                Step::Tick(ms) => {
                    engine.tick(ms);
                }
            }

            assert_invariants(&engine)?;
            prop_assert!(engine.score() >= score);
            prop_assert!(engine.lines() >= lines);
            prop_assert!(engine.fall_time_ms() < engine.fall_interval_ms());
            score = engine.score();
            lines = engine.lines();
        }

        if engine.game_over() {
            prop_assert_eq!(engine.high_score(), engine.score());
            prop_assert_eq!(engine.new_high_score(), engine.score() > 0);
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        seed in any::<u64>(),
        commands in prop::collection::vec(0u8..4, 1..200),
    ) {
        let mut engine = GameEngine::new(Difficulty::Medium, seed, MemoryScoreStore::new());
        for c in commands {
            let command = match c {
                0 => Command::MoveLeft,
                1 => Command::MoveRight,
                2 => Command::SoftDrop,
                _ => Command::RotateCw,
            };
            let before = *engine.current();
            let grid_before = engine.grid().clone();
            if !engine.apply(command) {
                prop_assert_eq!(*engine.current(), before);
            }
            // Manual moves never lock.
            prop_assert_eq!(engine.grid(), &grid_before);
            prop_assert_eq!(engine.pieces_locked(), 0);
        }
    }
}
