use battlegrid::{CellStatus, Coord, Grid, GridError, Orientation, Ship, ShotResult};

fn two_cell_grid() -> Grid {
    let mut grid = Grid::new(3, 3);
    grid.add_ship(Ship::line(Coord::new(1, 1), Orientation::Horizontal, 2))
        .unwrap();
    grid
}

#[test]
fn test_sink_two_cell_ship() {
    let mut grid = two_cell_grid();
    assert_eq!(grid.status(Coord::new(1, 1)), CellStatus::ShipUnrevealed);

    assert_eq!(grid.shoot(Coord::new(1, 1)), ShotResult::Hit);
    assert_eq!(grid.status(Coord::new(1, 1)), CellStatus::ShipHit);
    assert!(!grid.all_ships_are_sunk());

    assert_eq!(grid.shoot(Coord::new(1, 2)), ShotResult::Sink);
    assert!(grid.all_ships_are_sunk());
    assert_eq!(grid.remaining_ships(), 0);
}

#[test]
fn test_ship_at_only_sunk() {
    let mut grid = two_cell_grid();
    let ship = grid.ships()[0].clone();

    assert_eq!(grid.ship_at(Coord::new(1, 1), true), None);
    assert_eq!(grid.ship_at(Coord::new(1, 1), false), Some(&ship));
    assert_eq!(grid.ship_at(Coord::new(3, 3), false), None);

    grid.shoot(Coord::new(1, 1));
    assert_eq!(grid.ship_at(Coord::new(1, 2), true), None);
    grid.shoot(Coord::new(1, 2));
    assert_eq!(grid.ship_at(Coord::new(1, 1), true), Some(&ship));
    assert_eq!(grid.ship_at(Coord::new(1, 1), false), Some(&ship));
    assert!(grid.is_ship_sunk(&ship));
}

#[test]
fn test_miss_then_repeat() {
    let mut grid = two_cell_grid();
    assert_eq!(grid.status(Coord::new(3, 3)), CellStatus::Unknown);
    assert_eq!(grid.shoot(Coord::new(3, 3)), ShotResult::Miss);
    assert_eq!(grid.status(Coord::new(3, 3)), CellStatus::Empty);
    assert_eq!(grid.shoot(Coord::new(3, 3)), ShotResult::AlreadyMissed);
    assert_eq!(grid.status(Coord::new(3, 3)), CellStatus::Empty);
}

#[test]
fn test_repeat_hit_is_reported() {
    let mut grid = two_cell_grid();
    grid.shoot(Coord::new(1, 1));
    let before = grid.clone();
    assert_eq!(grid.shoot(Coord::new(1, 1)), ShotResult::AlreadyHit);
    assert_eq!(grid, before);
}

#[test]
fn test_add_ship_out_of_bounds() {
    let mut grid = two_cell_grid();
    let outside = Ship::line(Coord::new(5, 5), Orientation::Vertical, 2);
    assert_eq!(grid.add_ship(outside), Err(GridError::ShipOutOfBounds));

    let straddling = Ship::line(Coord::new(3, 2), Orientation::Horizontal, 3);
    assert_eq!(grid.add_ship(straddling), Err(GridError::ShipOutOfBounds));
    assert_eq!(grid.ships().len(), 1);
}

#[test]
fn test_add_ship_overlap() {
    let mut grid = two_cell_grid();
    let crossing = Ship::line(Coord::new(1, 2), Orientation::Vertical, 3);
    assert_eq!(grid.add_ship(crossing), Err(GridError::ShipOverlaps));
    assert_eq!(grid.ships().len(), 1);

    let clear = Ship::line(Coord::new(2, 1), Orientation::Horizontal, 3);
    assert_eq!(grid.add_ship(clear), Ok(()));
    assert_eq!(grid.ships().len(), 2);
}

#[test]
fn test_with_ships_stops_at_first_rejection() {
    let ships = vec![
        Ship::line(Coord::new(1, 1), Orientation::Horizontal, 2),
        Ship::line(Coord::new(1, 1), Orientation::Vertical, 2),
    ];
    assert_eq!(
        Grid::with_ships(3, 3, ships).unwrap_err(),
        GridError::ShipOverlaps
    );
}

#[test]
fn test_empty_grid_is_vacuously_sunk() {
    let grid = Grid::new(4, 2);
    assert!(grid.all_ships_are_sunk());
    assert_eq!(grid.coords().count(), 8);
    assert_eq!(grid.coords().last(), Some(Coord::new(4, 2)));
}

#[test]
fn test_arbitrary_footprint() {
    let mut grid = Grid::new(3, 3);
    let diagonal = Ship::new([Coord::new(1, 1), Coord::new(2, 2), Coord::new(3, 3)]);
    grid.add_ship(diagonal).unwrap();
    assert_eq!(grid.status(Coord::new(2, 2)), CellStatus::ShipUnrevealed);
    assert_eq!(grid.status(Coord::new(1, 2)), CellStatus::Unknown);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_status_out_of_range_panics() {
    let grid = Grid::new(3, 3);
    grid.status(Coord::new(4, 1));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_shoot_row_zero_panics() {
    let mut grid = Grid::new(3, 3);
    grid.shoot(Coord::new(0, 1));
}

#[test]
#[should_panic(expected = "too large")]
fn test_new_rejects_overflowing_size() {
    Grid::new(usize::MAX, 2);
}
