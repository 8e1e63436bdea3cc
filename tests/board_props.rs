use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Board, BoardError, Coord, FleetLayoutGenerator, BOARD_SIZE};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    FleetLayoutGenerator::default().generate(&mut rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_shot_at_same_cell_always_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = random_board(seed);
        let coord = Coord::new(row, col);
        board.fire_at(coord).unwrap();
        prop_assert_eq!(board.fire_at(coord), Err(BoardError::AlreadyTargeted));
    }

    #[test]
    fn out_of_bounds_shot_never_mutates(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let before = board.clone();
        prop_assert_eq!(
            board.fire_at(Coord::new(BOARD_SIZE, 0)),
            Err(BoardError::OutOfBounds)
        );
        prop_assert_eq!(
            board.fire_at(Coord::new(0, BOARD_SIZE)),
            Err(BoardError::OutOfBounds)
        );
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                prop_assert_eq!(board.cell(Coord::new(r, c)), before.cell(Coord::new(r, c)));
            }
        }
        prop_assert_eq!(board.ships(), before.ships());
        prop_assert_eq!(board.sunk_count(), before.sunk_count());
    }

    #[test]
    fn defeat_latches_after_last_ship_cell(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let mut was_defeated = false;
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                // sweeping every cell; repeats from sunk-ship contours are fine
                let _ = board.fire_at(Coord::new(r, c));
                if was_defeated {
                    prop_assert!(board.is_defeated(), "defeat must never revert");
                }
                was_defeated = board.is_defeated();
            }
        }
        prop_assert!(board.is_defeated());
        prop_assert_eq!(board.sunk_count(), board.ships().len());
        prop_assert!(board.ships().iter().all(|s| s.is_sunk()));
    }
}
