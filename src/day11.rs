//! Day 11: Dumbo Octopus.
//!
//! Each octopus has an energy level from 0 to 9.  On every step each
//! level goes up by one; an octopus whose level passes 9 flashes,
//! dropping back to 0 and giving one unit of energy to each of its
//! (up to eight) neighbours.  That can make the neighbours flash too.
//! No octopus flashes more than once per step.

use std::collections::{HashSet, VecDeque};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use ndarray::prelude::*;
use tracing::{event, span, Level};

use crate::grid::{neighbours, table_indexes, Position};

pub type Energy = Array2<u8>;

/// How many steps `first_synchronized_flash` is prepared to run
/// before giving up.
pub const SYNC_STEP_LIMIT: usize = 10_000;

const PART1_STEPS: usize = 100;

#[derive(Debug, Eq, PartialEq)]
pub enum ParseGridError {
    NoData,
    BadEnergyLevel {
        row: usize,
        column: usize,
        found: char,
    },
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseGridError::NoData => f.write_str("no data"),
            ParseGridError::BadEnergyLevel { row, column, found } => {
                write!(
                    f,
                    "invalid (non-numeric) energy level '{}' at row {}, column {}",
                    found, row, column
                )
            }
            ParseGridError::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {} has {} cells but the first row has {}",
                    row, found, expected
                )
            }
        }
    }
}

impl Error for ParseGridError {}

#[derive(Debug, Eq, PartialEq)]
pub struct NoSynchronizedFlash {
    pub steps: usize,
}

impl Display for NoSynchronizedFlash {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the octopuses did not all flash together within {} steps",
            self.steps
        )
    }
}

impl Error for NoSynchronizedFlash {}

fn decode_cell(row: usize, column: usize, cell: char) -> Result<u8, ParseGridError> {
    match cell.to_digit(10) {
        Some(n) => Ok(n as u8),
        None => Err(ParseGridError::BadEnergyLevel {
            row,
            column,
            found: cell,
        }),
    }
}

/// Parses one row of digits per line.  All rows must be the same
/// length.
pub fn parse_energy_levels(s: &str) -> Result<Energy, ParseGridError> {
    let rows: Vec<Vec<u8>> = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .enumerate()
        .map(|(r, line)| {
            line.chars()
                .enumerate()
                .map(|(c, cell)| decode_cell(r, c, cell))
                .collect::<Result<Vec<u8>, ParseGridError>>()
        })
        .collect::<Result<Vec<_>, ParseGridError>>()?;
    let width = match rows.first() {
        None => {
            return Err(ParseGridError::NoData);
        }
        Some(first) if first.is_empty() => {
            return Err(ParseGridError::NoData);
        }
        Some(first) => first.len(),
    };
    for (r, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ParseGridError::RaggedRow {
                row: r,
                expected: width,
                found: row.len(),
            });
        }
    }
    Ok(Array::from_shape_fn((rows.len(), width), |(r, c)| {
        rows[r][c]
    }))
}

/// Advances the simulation by one step, returning the positions of
/// the octopuses which flashed.
pub fn step(grid: &mut Energy) -> HashSet<Position> {
    let (nrows, ncols) = grid.dim();
    let mut pending: VecDeque<Position> = table_indexes(nrows, ncols).collect();
    let mut flashed: HashSet<Position> = HashSet::new();

    // A position may be queued many times by flashing neighbours, but
    // once it has flashed it must not gain energy again this step.
    while let Some(pos) = pending.pop_back() {
        if flashed.contains(&pos) {
            continue;
        }
        let energy = &mut grid[pos];
        *energy = (*energy + 1) % 10;
        if *energy == 0 {
            event!(Level::TRACE, "octopus at {:?} flashes", pos);
            flashed.insert(pos);
            for n in neighbours(pos, nrows, ncols) {
                pending.push_front(n);
            }
        }
    }
    flashed
}

/// Runs `steps` steps, returning the total number of flashes.
pub fn total_flashes(grid: &mut Energy, steps: usize) -> usize {
    let span = span!(Level::DEBUG, "total_flashes", steps);
    let _enter = span.enter();
    let mut flashes: usize = 0;
    for iteration in 1..=steps {
        let flashes_this_step = step(grid).len();
        event!(
            Level::DEBUG,
            "after step {}: {} flashes",
            iteration,
            flashes_this_step
        );
        flashes += flashes_this_step;
    }
    flashes
}

/// Returns the first step (counting from 1) during which every
/// octopus flashes, trying at most `limit` steps.
pub fn first_synchronized_flash(
    grid: &mut Energy,
    limit: usize,
) -> Result<usize, NoSynchronizedFlash> {
    let span = span!(Level::DEBUG, "first_synchronized_flash", limit);
    let _enter = span.enter();
    let cells = grid.len();
    for iteration in 1..=limit {
        let flashes_this_step = step(grid).len();
        event!(
            Level::TRACE,
            "after step {}: {} of {} octopuses flashed",
            iteration,
            flashes_this_step,
            cells
        );
        if flashes_this_step == cells {
            return Ok(iteration);
        }
    }
    Err(NoSynchronizedFlash { steps: limit })
}

pub fn part1(input: &str) -> Result<usize, ParseGridError> {
    let mut grid = parse_energy_levels(input)?;
    Ok(total_flashes(&mut grid, PART1_STEPS))
}

pub fn part2(input: &str) -> Result<usize, Box<dyn Error>> {
    let mut grid = parse_energy_levels(input)?;
    Ok(first_synchronized_flash(&mut grid, SYNC_STEP_LIMIT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const EXAMPLE: &str = "5483143223\n\
                           2745854711\n\
                           5264556173\n\
                           6141336146\n\
                           6357385478\n\
                           4167524645\n\
                           2176841721\n\
                           6882881134\n\
                           4846848554\n\
                           5283751526\n";

    const MIDDLE_OCTOPUS: &str = "11111\n\
                                  19991\n\
                                  19191\n\
                                  19991\n\
                                  11111";

    fn example() -> Energy {
        parse_energy_levels(EXAMPLE).expect("example should be valid")
    }

    #[test]
    fn test_parse() {
        let grid = parse_energy_levels("123\n456\r\n").expect("valid");
        assert_eq!(grid, array![[1, 2, 3], [4, 5, 6]]);
        assert_eq!(example().dim(), (10, 10));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_energy_levels(""), Err(ParseGridError::NoData));
        assert_eq!(parse_energy_levels("\n"), Err(ParseGridError::NoData));
        assert_eq!(
            parse_energy_levels("123\n4x6"),
            Err(ParseGridError::BadEnergyLevel {
                row: 1,
                column: 1,
                found: 'x'
            })
        );
        assert_eq!(
            parse_energy_levels("123\n45\n789"),
            Err(ParseGridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_middle_octopus() {
        let mut grid = parse_energy_levels(MIDDLE_OCTOPUS).expect("valid");
        assert_eq!(step(&mut grid).len(), 9);
        assert_eq!(
            grid,
            array![
                [3, 4, 5, 4, 3],
                [4, 0, 0, 0, 4],
                [5, 0, 0, 0, 5],
                [4, 0, 0, 0, 4],
                [3, 4, 5, 4, 3]
            ]
        );
        assert!(step(&mut grid).is_empty());
        assert_eq!(
            grid,
            array![
                [4, 5, 6, 5, 4],
                [5, 1, 1, 1, 5],
                [6, 1, 1, 1, 6],
                [5, 1, 1, 1, 5],
                [4, 5, 6, 5, 4]
            ]
        );
    }

    #[test]
    fn test_example_first_steps() {
        let mut grid = example();
        assert_eq!(step(&mut grid).len(), 0);
        let expected = parse_energy_levels(
            "6594254334\n\
             3856965822\n\
             6375667284\n\
             7252447257\n\
             7468496589\n\
             5278635756\n\
             3287952832\n\
             7993992245\n\
             5957959665\n\
             6394862637",
        )
        .expect("valid");
        assert_eq!(grid, expected);

        assert_eq!(step(&mut grid).len(), 35);
        let expected = parse_energy_levels(
            "8807476555\n\
             5089087054\n\
             8597889608\n\
             8485769600\n\
             8700908800\n\
             6600088989\n\
             6800005943\n\
             0000007456\n\
             9000000876\n\
             8700006848",
        )
        .expect("valid");
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_step_invariants() {
        let mut grid = example();
        let (nrows, ncols) = grid.dim();
        for _ in 0..200 {
            let flashed = step(&mut grid);
            assert!(flashed.len() <= grid.len());
            for &(r, c) in &flashed {
                assert!(r < nrows && c < ncols);
                assert_eq!(grid[(r, c)], 0);
            }
            assert!(grid.iter().all(|&energy| energy <= 9));
            // Anything at zero must have flashed.
            let zeroes = grid.iter().filter(|&&energy| energy == 0).count();
            assert_eq!(zeroes, flashed.len());
        }
    }

    #[test]
    fn test_zero_steps() {
        let mut grid = example();
        assert_eq!(total_flashes(&mut grid, 0), 0);
        assert_eq!(grid, example());
    }

    #[test]
    fn test_total_flashes() {
        assert_eq!(total_flashes(&mut example(), 10), 204);
        assert_eq!(total_flashes(&mut example(), 100), 1656);
        assert_eq!(part1(EXAMPLE), Ok(1656));
    }

    #[test]
    fn test_first_synchronized_flash() {
        assert_eq!(
            first_synchronized_flash(&mut example(), SYNC_STEP_LIMIT),
            Ok(195)
        );
        assert_eq!(part2(EXAMPLE).expect("should converge"), 195);
    }

    #[test]
    fn test_synchronized_flash_limit() {
        assert_eq!(
            first_synchronized_flash(&mut example(), 194),
            Err(NoSynchronizedFlash { steps: 194 })
        );
        let mut grid = example();
        assert_eq!(first_synchronized_flash(&mut grid, 195), Ok(195));
        assert!(grid.iter().all(|&energy| energy == 0));
    }
}
