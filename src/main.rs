#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{fs, path::PathBuf};

#[cfg(feature = "std")]
use anyhow::{anyhow, bail, Context};
#[cfg(feature = "std")]
use battlegrid::{
    init_logging, standard_fleet, Coord, Grid, GridState, Orientation, OwnerView, Ship,
    DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Place ships on a fresh grid and fire a sequence of shots.
    Play {
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        #[arg(long = "ship", help = "Straight ship from one end to the other, e.g. 1,1:1,3")]
        ships: Vec<String>,
        #[arg(long = "shot", help = "Target cell, e.g. 2,3")]
        shots: Vec<String>,
        #[arg(long, help = "Write the final grid state to this file")]
        save: Option<PathBuf>,
    },
    /// Load a saved grid and keep shooting.
    Resume {
        file: PathBuf,
        #[arg(long = "shot", help = "Target cell, e.g. 2,3")]
        shots: Vec<String>,
        #[arg(long, help = "Write the final grid state to this file")]
        save: Option<PathBuf>,
    },
    /// Fire random shots at the standard fleet until it is sunk.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> anyhow::Result<Coord> {
    let (row, col) = input
        .split_once(',')
        .ok_or_else(|| anyhow!("expected row,col but got {:?}", input))?;
    let row = row.trim().parse::<usize>().with_context(|| format!("bad row in {:?}", input))?;
    let col = col.trim().parse::<usize>().with_context(|| format!("bad column in {:?}", input))?;
    Ok(Coord::new(row, col))
}

#[cfg(feature = "std")]
fn parse_ship(grid: &Grid, input: &str) -> anyhow::Result<Ship> {
    let (from, to) = input
        .split_once(':')
        .ok_or_else(|| anyhow!("expected start:end but got {:?}", input))?;
    let (from, to) = (parse_coord(from)?, parse_coord(to)?);
    // Endpoints inside the grid bound the length, so nothing below can overflow.
    for endpoint in [from, to] {
        if !grid.contains(endpoint) {
            bail!(
                "ship {:?} ends at {}, outside the {}x{} grid",
                input,
                endpoint,
                grid.num_rows(),
                grid.num_cols()
            );
        }
    }
    let (start, end) = (from.min(to), from.max(to));
    if start.row == end.row {
        Ok(Ship::line(start, Orientation::Horizontal, end.col - start.col + 1))
    } else if start.col == end.col {
        Ok(Ship::line(start, Orientation::Vertical, end.row - start.row + 1))
    } else {
        bail!("ship {:?} is not a straight line", input)
    }
}

#[cfg(feature = "std")]
fn fire(grid: &mut Grid, shots: &[String]) -> anyhow::Result<()> {
    for shot in shots {
        let coord = parse_coord(shot)?;
        if !grid.contains(coord) {
            bail!(
                "shot {} is outside the {}x{} grid",
                coord,
                grid.num_rows(),
                grid.num_cols()
            );
        }
        let result = grid.shoot(coord);
        println!("{} -> {:?}", coord, result);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn finish(grid: &Grid, save: Option<PathBuf>) -> anyhow::Result<()> {
    print!("{}", OwnerView(grid));
    println!(
        "{} of {} ships remaining{}",
        grid.remaining_ships(),
        grid.ships().len(),
        if grid.all_ships_are_sunk() { " - all sunk" } else { "" }
    );
    if let Some(path) = save {
        let bytes = GridState::from(grid).encode()?;
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            rows,
            cols,
            ships,
            shots,
            save,
        } => {
            if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
                bail!(
                    "grid of {}x{} exceeds the {} row/column limit",
                    rows,
                    cols,
                    MAX_DIMENSION
                );
            }
            let mut grid = Grid::new(rows, cols);
            for input in &ships {
                let ship = parse_ship(&grid, input)?;
                grid.add_ship(ship)
                    .map_err(|e| anyhow!("cannot place ship {}: {}", input, e))?;
            }
            fire(&mut grid, &shots)?;
            finish(&grid, save)?;
        }
        Commands::Resume { file, shots, save } => {
            let bytes = fs::read(&file).with_context(|| format!("reading {}", file.display()))?;
            let mut grid = Grid::try_from(GridState::decode(&bytes)?)?;
            fire(&mut grid, &shots)?;
            finish(&grid, save)?;
        }
        Commands::Sim { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (run will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut grid = Grid::with_ships(DEFAULT_ROWS, DEFAULT_COLS, standard_fleet())?;
            let mut fired = 0usize;
            while !grid.all_ships_are_sunk() {
                let coord = Coord::new(
                    rng.random_range(1..=DEFAULT_ROWS),
                    rng.random_range(1..=DEFAULT_COLS),
                );
                if !grid.shoot(coord).is_repeat() {
                    fired += 1;
                }
            }
            print!("{}", OwnerView(&grid));
            println!("Fleet sunk after {} shots", fired);
        }
    }
    Ok(())
}
