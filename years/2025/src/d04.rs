//! Printing department: paper rolls reachable by forklifts.
//!
//! A roll is accessible if fewer than [ACCESS_LIMIT] of the 8 cells around it
//! hold rolls. Part one counts the accessible rolls, part two keeps removing
//! them round by round until the grid is stable.

#[cfg(test)]
mod tests;

use core::fmt;

use bstr::ByteSlice;
use lib::grid::Grid;
use lib::input::IStr;
use serde::Serialize;

use crate::error::{position, Error};

/// Marker of a cell holding a roll.
pub const ROLL: char = '@';

/// A roll is accessible if fewer than this many neighbors are rolls.
pub const ACCESS_LIMIT: usize = 4;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Roll,
    /// A roll marked as accessible, only used for annotation.
    Accessible,
}

impl Cell {
    #[inline]
    pub fn is_roll(self) -> bool {
        matches!(self, Cell::Roll)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Cell::Empty => '.',
            Cell::Roll => ROLL,
            Cell::Accessible => 'x',
        };

        write!(f, "{c}")
    }
}

/// Parse a grid of rolls.
///
/// The input is trimmed and every non-empty line becomes a row, where each
/// character is a cell. All rows must have the same length.
pub fn parse(input: IStr) -> Result<Grid<Cell>, Error> {
    let origin = input;
    let mut input = input.trim();

    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut grid = Grid::new();

    for line in input.lines().filter(|line| !line.is_empty()) {
        let row = line
            .as_data()
            .chars()
            .map(|c| if c == ROLL { Cell::Roll } else { Cell::Empty });

        if let Err(e) = grid.push_row(row) {
            return Err(Error::MalformedInput {
                pos: position(&origin, line.index()),
                expected: e.expected,
                actual: e.actual,
            });
        }
    }

    log::debug!(
        "parsed {}x{} grid with {} rolls",
        grid.rows_len(),
        grid.columns_len(),
        grid.count(|c| c.is_roll())
    );

    Ok(grid)
}

/// Count the rolls among the 8 cells surrounding the given one.
pub fn adjacent_rolls(grid: &Grid<Cell>, row: usize, column: usize) -> usize {
    grid.neighbors(row, column)
        .into_iter()
        .filter(|&(r, c)| grid.get(r, c).is_roll())
        .count()
}

/// Find every accessible roll in row-major order.
pub fn find_accessible(grid: &Grid<Cell>) -> Vec<(usize, usize)> {
    grid.cells()
        .filter(|(_, cell)| cell.is_roll())
        .map(|(pos, _)| pos)
        .filter(|&(r, c)| adjacent_rolls(grid, r, c) < ACCESS_LIMIT)
        .collect()
}

/// Answer to part one.
#[derive(Debug, Clone, Serialize)]
pub struct Accessible {
    /// Number of accessible rolls.
    pub count: usize,
    /// Copy of the grid with accessible rolls marked.
    pub grid: Grid<Cell>,
}

impl fmt::Display for Accessible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)?;

        if f.alternate() {
            write!(f, " accessible rolls (x = accessible)\n{}", self.grid)?;
        }

        Ok(())
    }
}

/// Count the rolls that are accessible right away.
///
/// The grid itself is left untouched.
pub fn count_accessible(grid: &Grid<Cell>) -> Accessible {
    let accessible = find_accessible(grid);
    let mut annotated = grid.clone();

    for &(r, c) in &accessible {
        *annotated.get_mut(r, c) = Cell::Accessible;
    }

    Accessible {
        count: accessible.len(),
        grid: annotated,
    }
}

/// Answer to part two.
#[derive(Debug, Clone, Serialize)]
pub struct Removal {
    /// Total number of rolls removed.
    pub total_removed: usize,
    /// Number of rounds which removed anything.
    pub rounds: usize,
    /// The stable grid left after all removals.
    pub grid: Grid<Cell>,
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total_removed)?;

        if f.alternate() {
            write!(
                f,
                " rolls removed in {} rounds, final state:\n{}",
                self.rounds, self.grid
            )?;
        }

        Ok(())
    }
}

/// Run a single removal round, returning the number of rolls removed.
///
/// Accessibility is decided against the grid as it was at the start of the
/// round, so removing a roll never affects its neighbors within the same
/// round.
pub fn remove_round(grid: &mut Grid<Cell>) -> usize {
    let accessible = find_accessible(grid);

    for &(r, c) in &accessible {
        *grid.get_mut(r, c) = Cell::Empty;
    }

    accessible.len()
}

/// Repeatedly remove accessible rolls until none are left.
pub fn remove_accessible(mut grid: Grid<Cell>) -> Removal {
    let mut total_removed = 0;
    let mut rounds = 0;

    loop {
        let removed = remove_round(&mut grid);

        if removed == 0 {
            break;
        }

        rounds += 1;
        total_removed += removed;
        log::debug!("round {rounds}: removed {removed} rolls");
    }

    Removal {
        total_removed,
        rounds,
        grid,
    }
}
