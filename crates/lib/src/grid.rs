//! Owned rectangular grids.

#[cfg(test)]
mod tests;

use core::fmt;
use core::slice;

use arrayvec::ArrayVec;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Offsets of the 8 cells surrounding a cell, as `(row, column)` deltas.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Error raised when a row of the wrong length is pushed onto a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RowLengthError {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for RowLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row has {} columns, expected {}", self.actual, self.expected)
    }
}

impl std::error::Error for RowLengthError {}

/// A rectangular grid of cells stored row-major.
///
/// The number of columns is fixed by the first row pushed, and every
/// following row must match it.
///
/// # Examples
///
/// ```
/// use lib::grid::Grid;
///
/// let mut grid = Grid::new();
/// grid.push_row([1, 2, 3])?;
/// grid.push_row([4, 5, 6])?;
///
/// assert_eq!(grid.rows_len(), 2);
/// assert_eq!(grid.columns_len(), 3);
/// assert_eq!(*grid.get(1, 2), 6);
/// assert!(grid.push_row([7, 8]).is_err());
/// # Ok::<_, lib::grid::RowLengthError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    columns: Option<usize>,
}

impl<T> Grid<T> {
    /// Construct a new empty grid.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            columns: None,
        }
    }

    /// Push a row onto the grid.
    pub fn push_row<I>(&mut self, row: I) -> Result<(), RowLengthError>
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.data.len();
        self.data.extend(row);
        let actual = self.data.len() - start;

        match self.columns {
            Some(expected) if expected != actual => {
                self.data.truncate(start);
                Err(RowLengthError { expected, actual })
            }
            Some(..) => Ok(()),
            None => {
                self.columns = Some(actual);
                Ok(())
            }
        }
    }

    /// Test if the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        match self.columns {
            Some(0) | None => 0,
            Some(columns) => self.data.len() / columns,
        }
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns.unwrap_or_default()
    }

    /// Get the element at the given row and column.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> &T {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the element at the given row and column.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<&T> {
        let index = self.index(row, column)?;
        self.data.get(index)
    }

    /// Get the element at the given row and column mutably.
    #[inline]
    #[track_caller]
    pub fn get_mut(&mut self, row: usize, column: usize) -> &mut T {
        match self.index(row, column).and_then(|index| self.data.get_mut(index)) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        let columns = self.columns_len();
        let start = row.checked_mul(columns)?;
        self.data.get(start..start.checked_add(columns)?)
    }

    /// Iterate over rows in the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::Grid;
    ///
    /// let mut grid = Grid::new();
    /// grid.push_row([1, 2])?;
    /// grid.push_row([3, 4])?;
    ///
    /// assert!(grid.rows().flatten().copied().eq([1, 2, 3, 4]));
    /// # Ok::<_, lib::grid::RowLengthError>(())
    /// ```
    #[inline]
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            iter: self.data.chunks_exact(self.columns_len().max(1)),
        }
    }

    /// Iterate over every cell together with its `(row, column)` coordinate,
    /// in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let columns = self.columns_len().max(1);

        self.data
            .iter()
            .enumerate()
            .map(move |(index, value)| ((index / columns, index % columns), value))
    }

    /// Coordinates of the up to 8 cells surrounding the given one which are
    /// inside of the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::Grid;
    ///
    /// let mut grid = Grid::new();
    /// grid.push_row([0; 3])?;
    /// grid.push_row([0; 3])?;
    ///
    /// assert_eq!(grid.neighbors(0, 0).as_slice(), &[(0, 1), (1, 0), (1, 1)]);
    /// assert_eq!(grid.neighbors(1, 1).len(), 5);
    /// # Ok::<_, lib::grid::RowLengthError>(())
    /// ```
    pub fn neighbors(&self, row: usize, column: usize) -> ArrayVec<(usize, usize), 8> {
        let mut out = ArrayVec::new();

        for (dr, dc) in NEIGHBORS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), column.checked_add_signed(dc))
            else {
                continue;
            };

            if r < self.rows_len() && c < self.columns_len() {
                out.push((r, c));
            }
        }

        out
    }

    /// Count the cells matching the given predicate.
    pub fn count<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.data.iter().filter(|value| predicate(value)).count()
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows_len() || column >= self.columns_len() {
            return None;
        }

        row.checked_mul(self.columns_len())?.checked_add(column)
    }
}

impl<T> Default for Grid<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over rows in a grid.
///
/// See [Grid::rows].
pub struct Rows<'a, T> {
    iter: slice::ChunksExact<'a, T>,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Rows<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

/// Displays a single row of a grid without separators.
struct RowDisplay<'a, T>(&'a [T]);

impl<T> fmt::Display for RowDisplay<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.0 {
            fmt::Display::fmt(cell, f)?;
        }

        Ok(())
    }
}

impl<T> fmt::Display for Grid<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, row) in self.rows().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }

            write!(f, "{}", RowDisplay(row))?;
        }

        Ok(())
    }
}

/// Grids serialize as a sequence of rendered rows.
impl<T> Serialize for Grid<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows_len()))?;

        for row in self.rows() {
            seq.serialize_element(&DisplayString(RowDisplay(row)))?;
        }

        seq.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
