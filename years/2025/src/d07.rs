//! Laboratories: tachyon beams through a manifold of splitters.
//!
//! A beam enters at `S` and moves straight down. A beam hitting a splitter
//! stops, and two new beams continue down from the cells immediately to its
//! left and right. Beams leaving the grid are gone.

#[cfg(test)]
mod tests;

use core::fmt;

use bstr::ByteSlice;
use lib::grid::Grid;
use lib::input::{IStr, LineCol};
use serde::Serialize;

use crate::error::{position, Error};

/// A single cell of the manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Start,
    Splitter,
    /// A cell a beam passes through, only used for annotation.
    Beam,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Tile::Empty => '.',
            Tile::Start => 'S',
            Tile::Splitter => '^',
            Tile::Beam => '|',
        };

        write!(f, "{c}")
    }
}

/// A parsed manifold.
#[derive(Debug, Clone)]
pub struct Manifold {
    pub grid: Grid<Tile>,
    /// Column of `S` in the first row.
    pub start: usize,
    /// Input position of the first cell of every row.
    rows: Vec<LineCol>,
}

/// Parse a manifold.
pub fn parse(input: IStr) -> Result<Manifold, Error> {
    let origin = input;
    let mut input = input.trim();

    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut grid = Grid::new();
    let mut rows = Vec::new();

    for line in input.lines().filter(|line| !line.is_empty()) {
        let pos = position(&origin, line.index());
        let row = line.as_data().chars().map(|c| match c {
            'S' => Tile::Start,
            '^' => Tile::Splitter,
            _ => Tile::Empty,
        });

        if let Err(e) = grid.push_row(row) {
            return Err(Error::MalformedInput {
                pos,
                expected: e.expected,
                actual: e.actual,
            });
        }

        rows.push(pos);
    }

    let start = grid
        .row(0)
        .and_then(|row| row.iter().position(|&tile| tile == Tile::Start))
        .ok_or(Error::MissingStart)?;

    log::debug!(
        "parsed {}x{} manifold, start at column {start}",
        grid.rows_len(),
        grid.columns_len()
    );

    Ok(Manifold { grid, start, rows })
}

impl Manifold {
    /// Columns reached by a beam leaving a splitter at `column`, `None` for
    /// beams leaving the grid sideways.
    fn split(&self, column: usize) -> [Option<usize>; 2] {
        let right = column
            .checked_add(1)
            .filter(|&c| c < self.grid.columns_len());

        [column.checked_sub(1), right]
    }

    fn is_splitter(&self, row: usize, column: usize) -> bool {
        *self.grid.get(row, column) == Tile::Splitter
    }

    /// Input position of the given cell.
    fn pos(&self, row: usize, column: usize) -> LineCol {
        let start = self.rows.get(row).copied().unwrap_or_default();
        LineCol::new(start.line(), start.column() + column)
    }
}

/// Answer to part one.
#[derive(Debug, Clone, Serialize)]
pub struct Splits {
    /// Number of splitters hit by a beam.
    pub count: usize,
    /// The manifold with every cell a beam passes through marked.
    pub grid: Grid<Tile>,
}

impl fmt::Display for Splits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)?;

        if f.alternate() {
            write!(f, " splits\n{}", self.grid)?;
        }

        Ok(())
    }
}

/// Count the splitters hit, where beams meeting in the same cell merge.
pub fn splits(manifold: &Manifold) -> Splits {
    let columns = manifold.grid.columns_len();
    let mut annotated = manifold.grid.clone();
    let mut beams = vec![false; columns];
    let mut count = 0;

    if let Some(beam) = beams.get_mut(manifold.start) {
        *beam = true;
    }

    for row in 0..manifold.grid.rows_len() {
        let mut next = vec![false; columns];

        for column in (0..columns).filter(|&c| beams[c]) {
            if manifold.is_splitter(row, column) {
                count += 1;

                for c in manifold.split(column).into_iter().flatten() {
                    next[c] = true;
                }

                continue;
            }

            next[column] = true;
            let tile = annotated.get_mut(row, column);

            if *tile == Tile::Empty {
                *tile = Tile::Beam;
            }
        }

        beams = next;
    }

    Splits {
        count,
        grid: annotated,
    }
}

/// Answer to part two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timelines {
    /// Total number of timelines.
    pub count: u128,
    /// Timelines leaving through the bottom, per column.
    pub bottom: Vec<u128>,
    /// Timelines leaving through either side.
    pub sides: u128,
}

impl fmt::Display for Timelines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)?;

        if f.alternate() {
            write!(f, " timelines, {} leaving sideways", self.sides)?;

            for (column, n) in self.bottom.iter().enumerate().filter(|(_, n)| **n > 0) {
                write!(f, "\n  column {column}: {n}")?;
            }
        }

        Ok(())
    }
}

/// Count every distinct path from the start to an exit.
pub fn timelines(manifold: &Manifold) -> Result<Timelines, Error> {
    let columns = manifold.grid.columns_len();
    let mut counts = vec![0u128; columns];
    let mut sides = 0u128;

    if let Some(count) = counts.get_mut(manifold.start) {
        *count = 1;
    }

    for row in 0..manifold.grid.rows_len() {
        let mut next = vec![0u128; columns];

        for (column, &n) in counts.iter().enumerate().filter(|(_, n)| **n > 0) {
            let pos = manifold.pos(row, column);

            if !manifold.is_splitter(row, column) {
                add(&mut next[column], n, pos)?;
                continue;
            }

            for to in manifold.split(column) {
                let slot = match to {
                    Some(c) => &mut next[c],
                    None => &mut sides,
                };

                add(slot, n, pos)?;
            }
        }

        counts = next;
    }

    let mut count = sides;
    let last = manifold.grid.rows_len().saturating_sub(1);

    for (column, &n) in counts.iter().enumerate() {
        add(&mut count, n, manifold.pos(last, column))?;
    }

    Ok(Timelines {
        count,
        bottom: counts,
        sides,
    })
}

fn add(slot: &mut u128, n: u128, pos: LineCol) -> Result<(), Error> {
    *slot = slot.checked_add(n).ok_or(Error::Overflow { pos })?;
    Ok(())
}
