use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Coord, FleetLayoutGenerator, BOARD_SIZE, FLEET_LENGTHS};

fn chebyshev(a: Coord, b: Coord) -> usize {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    dr.max(dc)
}

#[test]
fn test_generate_places_whole_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = FleetLayoutGenerator::default().generate(&mut rng);

    assert_eq!(board.ships().len(), FLEET_LENGTHS.len());
    let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
    lengths.sort_unstable();
    let mut expected = FLEET_LENGTHS.to_vec();
    expected.sort_unstable();
    assert_eq!(lengths, expected);

    let total_cells: usize = board.ships().iter().map(|s| s.cells().count()).sum();
    assert_eq!(total_cells, FLEET_LENGTHS.iter().sum::<usize>());
    for ship in board.ships() {
        for cell in ship.cells() {
            assert!(cell.row < BOARD_SIZE && cell.col < BOARD_SIZE);
        }
    }
}

#[test]
fn test_generated_ships_keep_one_cell_gap() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = FleetLayoutGenerator::default().generate(&mut rng);
        let ships = board.ships();
        for i in 0..ships.len() {
            for j in i + 1..ships.len() {
                for a in ships[i].cells() {
                    for b in ships[j].cells() {
                        assert!(
                            chebyshev(a, b) >= 2,
                            "seed {}: ships {} and {} touch at {} / {}",
                            seed,
                            i,
                            j,
                            a,
                            b
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic_for_a_seed() {
    let generator = FleetLayoutGenerator::default();
    let board_a = generator.generate(&mut SmallRng::seed_from_u64(7));
    let board_b = generator.generate(&mut SmallRng::seed_from_u64(7));
    assert_eq!(board_a.ships(), board_b.ships());
}

#[test]
fn test_generation_terminates_on_a_tight_board() {
    // 11 ship cells plus their exclusion margins crowd a 36-cell board; some
    // boards blow the attempt budget and restart, but generation still
    // finishes for every seed tried here.
    let generator = FleetLayoutGenerator::new(6, &FLEET_LENGTHS);
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = generator.generate(&mut rng);
        assert_eq!(board.ships().len(), FLEET_LENGTHS.len());
    }
}
