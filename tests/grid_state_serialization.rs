use battlegrid::{standard_fleet, Coord, Grid, GridError, GridState, DEFAULT_COLS, DEFAULT_ROWS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn shot_fleet(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::with_ships(DEFAULT_ROWS, DEFAULT_COLS, standard_fleet()).unwrap();
    let shots = rng.random_range(0..DEFAULT_ROWS * DEFAULT_COLS);
    for _ in 0..shots {
        let coord = Coord::new(
            rng.random_range(1..=DEFAULT_ROWS),
            rng.random_range(1..=DEFAULT_COLS),
        );
        grid.shoot(coord);
    }
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn grid_state_roundtrip(seed in any::<u64>()) {
        let grid = shot_fleet(seed);
        let bytes = GridState::from(&grid).encode().unwrap();
        let restored = Grid::try_from(GridState::decode(&bytes).unwrap()).unwrap();
        for coord in grid.coords() {
            prop_assert_eq!(grid.status(coord), restored.status(coord));
        }
        prop_assert_eq!(restored, grid);
    }
}

#[test]
fn test_short_shot_vector_rejected() {
    let mut state = GridState::from(&Grid::new(2, 2));
    state.shots.pop();
    assert_eq!(
        Grid::try_from(state).unwrap_err(),
        GridError::CellCountMismatch {
            expected: 4,
            found: 3
        }
    );
}

#[test]
fn test_tampered_ships_rejected() {
    let mut state = GridState::from(&Grid::new(2, 2));
    state.ships.push(vec![Coord::new(1, 1), Coord::new(1, 2)]);
    state.ships.push(vec![Coord::new(1, 2), Coord::new(2, 2)]);
    assert_eq!(Grid::try_from(state).unwrap_err(), GridError::ShipOverlaps);

    let mut state = GridState::from(&Grid::new(2, 2));
    state.ships.push(vec![Coord::new(3, 1)]);
    assert_eq!(Grid::try_from(state).unwrap_err(), GridError::ShipOutOfBounds);
}

#[test]
fn test_garbage_bytes_fail_to_decode() {
    assert!(GridState::decode(&[0xff, 0x01]).is_err());
}

#[test]
fn test_overflowing_dimensions_rejected() {
    let state = GridState {
        rows: usize::MAX,
        cols: 2,
        shots: vec![false; 4],
        ships: Vec::new(),
    };
    assert_eq!(
        Grid::try_from(state).unwrap_err(),
        GridError::CellCountMismatch {
            expected: usize::MAX,
            found: 4
        }
    );
}
