//! Trash compactor: a cephalopod math worksheet.
//!
//! Problems are laid out side by side, separated by columns of nothing but
//! spaces. The bottom row holds each problem's operator and the rows above it
//! hold its numbers. Part one reads the numbers row by row, part two reads
//! them column by column from right to left.

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::Range;

use bstr::ByteSlice;
use lib::grid::Grid;
use lib::input::{ErrorKind, IStr, IStrError, LineCol};
use serde::Serialize;

use crate::error::{position, Error};

/// Padding used for short lines.
const PAD: u8 = b' ';

/// Operator applied to a problem's numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Op {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "*")]
    Mul,
}

impl Op {
    /// Apply the operator over all numbers, or `None` on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2025::d06::Op;
    ///
    /// assert_eq!(Op::Add.apply(&[1, 2, 3]), Some(6));
    /// assert_eq!(Op::Mul.apply(&[4, 5, 6]), Some(120));
    /// assert_eq!(Op::Mul.apply(&[u128::MAX, 2]), None);
    /// ```
    pub fn apply(self, numbers: &[u128]) -> Option<u128> {
        match self {
            Op::Add => numbers.iter().try_fold(0u128, |acc, &n| acc.checked_add(n)),
            Op::Mul => numbers.iter().try_fold(1u128, |acc, &n| acc.checked_mul(n)),
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
        }
    }
}

/// A single problem on the worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Columns covered by the problem.
    pub columns: Range<usize>,
    pub op: Op,
    /// Position of the operator in the input.
    pub pos: LineCol,
}

/// A parsed worksheet.
#[derive(Debug, Clone)]
pub struct Worksheet {
    /// Every line of the worksheet padded to the same width, the operator
    /// row last.
    pub grid: Grid<u8>,
    /// Problems from left to right.
    pub problems: Vec<Problem>,
}

impl Worksheet {
    /// Number of rows holding digits.
    #[inline]
    fn digit_rows(&self) -> usize {
        self.grid.rows_len().saturating_sub(1)
    }

    fn row_numbers(&self, problem: &Problem) -> Result<Vec<u128>, Error> {
        let mut numbers = Vec::new();

        for r in 0..self.digit_rows() {
            let cells = self
                .grid
                .row(r)
                .and_then(|row| row.get(problem.columns.clone()))
                .unwrap_or_default();

            if let Some(n) = number(cells.iter().copied(), problem.pos)? {
                numbers.push(n);
            }
        }

        Ok(numbers)
    }

    fn column_numbers(&self, problem: &Problem) -> Result<Vec<u128>, Error> {
        let mut numbers = Vec::new();

        for c in problem.columns.clone().rev() {
            let cells = (0..self.digit_rows()).map(|r| *self.grid.get(r, c));

            if let Some(n) = number(cells, problem.pos)? {
                numbers.push(n);
            }
        }

        Ok(numbers)
    }
}

/// Read the digits among `cells` as a single number, or `None` if there are
/// no digits.
fn number<I>(cells: I, pos: LineCol) -> Result<Option<u128>, Error>
where
    I: IntoIterator<Item = u8>,
{
    let mut value = None;

    for b in cells {
        if !b.is_ascii_digit() {
            continue;
        }

        let n = value
            .unwrap_or(0u128)
            .checked_mul(10)
            .and_then(|n| n.checked_add(u128::from(b - b'0')))
            .ok_or(Error::Overflow { pos })?;

        value = Some(n);
    }

    Ok(value)
}

/// Parse a worksheet.
///
/// Leading spaces are significant, trailing blank lines are dropped.
pub fn parse(input: IStr) -> Result<Worksheet, Error> {
    let origin = input;

    if input.is_blank() {
        return Err(Error::EmptyInput);
    }

    let mut input = input;
    let mut lines = input.lines().collect::<Vec<_>>();

    while lines.last().is_some_and(IStr::is_blank) {
        lines.pop();
    }

    let Some((ops, digits)) = lines.split_last() else {
        return Err(Error::EmptyInput);
    };

    for line in digits {
        let data = line.as_data();

        if let Some(at) = data
            .iter()
            .position(|b| !b.is_ascii_whitespace() && !b.is_ascii_digit())
        {
            let at = line.index() + at;
            let kind = ErrorKind::Custom(String::from("expected digit"));
            let error = IStrError::new(at..at + 1, kind);
            return Err(Error::invalid_number(&origin, line, error));
        }
    }

    let width = lines.iter().map(IStr::len).max().unwrap_or_default();
    let mut grid = Grid::new();

    for line in &lines {
        let data = line.as_data();
        let row = (0..width).map(|c| data.get(c).copied().unwrap_or(PAD));

        if let Err(e) = grid.push_row(row) {
            return Err(Error::MalformedInput {
                pos: position(&origin, line.index()),
                expected: e.expected,
                actual: e.actual,
            });
        }
    }

    let mut problems = Vec::new();
    let mut start = None;

    for c in 0..=width {
        let blank = c == width
            || (0..grid.rows_len()).all(|r| grid.get(r, c).is_ascii_whitespace());

        match (start, blank) {
            (None, false) => {
                start = Some(c);
            }
            (Some(s), true) => {
                problems.push(problem(&origin, ops, s..c)?);
                start = None;
            }
            _ => {}
        }
    }

    log::debug!(
        "parsed {} problems over {} digit rows",
        problems.len(),
        digits.len()
    );

    Ok(Worksheet { grid, problems })
}

/// Find the operator of the problem covering `columns`.
///
/// The operator is the first non-space character in the operator row, which
/// is the problem's leftmost column on a well-formed worksheet.
fn problem(origin: &IStr, ops: &IStr, columns: Range<usize>) -> Result<Problem, Error> {
    let data = ops.as_data();

    let Some(c) = columns
        .clone()
        .find(|&c| data.get(c).is_some_and(|b| !b.is_ascii_whitespace()))
    else {
        return Err(Error::MissingOperator {
            pos: position(origin, ops.index() + columns.start),
        });
    };

    let pos = position(origin, ops.index() + c);

    let op = match data.get(c..).and_then(|rest| rest.chars().next()) {
        Some('+') => Op::Add,
        Some('*') => Op::Mul,
        op => {
            return Err(Error::UnknownOperator {
                pos,
                op: op.unwrap_or(char::REPLACEMENT_CHARACTER),
            });
        }
    };

    Ok(Problem { columns, op, pos })
}

/// How numbers are read from a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// Every row is a number.
    Rows,
    /// Every column is a number, read top to bottom and taken right to left.
    Columns,
}

/// A solved problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solved {
    pub op: Op,
    pub numbers: Vec<u128>,
    pub result: u128,
}

/// Answer to either part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrandTotal {
    pub total: u128,
    pub problems: Vec<Solved>,
}

impl fmt::Display for GrandTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total)?;

        if f.alternate() {
            write!(f, " (grand total of {} problems)", self.problems.len())?;

            for solved in &self.problems {
                write!(f, "\n  ")?;

                for (n, number) in solved.numbers.iter().enumerate() {
                    if n > 0 {
                        write!(f, " {} ", solved.op)?;
                    }

                    write!(f, "{number}")?;
                }

                write!(f, " = {}", solved.result)?;
            }
        }

        Ok(())
    }
}

/// Solve every problem on the worksheet and sum the results.
pub fn solve(sheet: &Worksheet, reading: Reading) -> Result<GrandTotal, Error> {
    let mut total = 0u128;
    let mut problems = Vec::with_capacity(sheet.problems.len());

    for problem in &sheet.problems {
        let overflow = Error::Overflow { pos: problem.pos };

        let numbers = match reading {
            Reading::Rows => sheet.row_numbers(problem)?,
            Reading::Columns => sheet.column_numbers(problem)?,
        };

        let Some(result) = problem.op.apply(&numbers) else {
            return Err(overflow);
        };

        let Some(sum) = total.checked_add(result) else {
            return Err(overflow);
        };

        total = sum;

        problems.push(Solved {
            op: problem.op,
            numbers,
            result,
        });
    }

    Ok(GrandTotal { total, problems })
}
