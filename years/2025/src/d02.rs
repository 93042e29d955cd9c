//! Gift shop: invalid product IDs.
//!
//! An ID is invalid if its decimal digits are a shorter sequence repeated.

#[cfg(test)]
mod tests;

use core::fmt;

use arrayvec::ArrayVec;
use lib::input::{IStr, Split};
use serde::Serialize;

use crate::error::Error;

/// Number of decimal digits in [u64::MAX].
const MAX_DIGITS: usize = 20;

/// An inclusive range of product IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdRange {
    pub start: u64,
    pub end: u64,
}

lib::from_input! {
    |Split((start, end)): Split<'-', (u64, u64)>| -> IdRange {
        Ok(IdRange { start, end })
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parse comma-separated ranges.
///
/// Entries may be spread over multiple lines and a trailing comma is
/// allowed.
pub fn parse(input: IStr) -> Result<Vec<IdRange>, Error> {
    let origin = input;

    if input.is_blank() {
        return Err(Error::EmptyInput);
    }

    let mut input = input;
    let mut ranges = Vec::new();

    for entry in input.split(b',') {
        let entry = entry.trim();

        if entry.is_empty() {
            continue;
        }

        let mut value = entry;

        let range = value
            .complete::<IdRange>()
            .map_err(|e| Error::invalid_number(&origin, &entry, e))?;

        ranges.push(range);
    }

    log::debug!("parsed {} ranges", ranges.len());
    Ok(ranges)
}

/// How many times a digit sequence has to repeat for an ID to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Exactly twice, like `6464`.
    Twice,
    /// Two or more times, like `646464`.
    AtLeastTwice,
}

/// Test if the given ID is invalid.
///
/// # Examples
///
/// ```
/// use y2025::d02::{is_invalid, Repeat};
///
/// assert!(is_invalid(123123, Repeat::Twice));
/// assert!(!is_invalid(123123123, Repeat::Twice));
/// assert!(is_invalid(123123123, Repeat::AtLeastTwice));
/// assert!(!is_invalid(101, Repeat::AtLeastTwice));
/// ```
pub fn is_invalid(id: u64, repeat: Repeat) -> bool {
    let mut digits = ArrayVec::<u8, MAX_DIGITS>::new();
    let mut n = id;

    // Least significant digit first, which doesn't matter for repetition.
    loop {
        digits.push((n % 10) as u8);
        n /= 10;

        if n == 0 {
            break;
        }
    }

    let len = digits.len();

    (1..=len / 2)
        .filter(|&width| len % width == 0)
        .filter(|&width| match repeat {
            Repeat::Twice => len / width == 2,
            Repeat::AtLeastTwice => true,
        })
        .any(|width| {
            let pattern = &digits[..width];
            digits.chunks_exact(width).all(|chunk| chunk == pattern)
        })
}

/// Answer to either part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidIds {
    /// Sum of all invalid IDs.
    pub sum: u128,
    /// Every invalid ID in range order.
    pub ids: Vec<u64>,
}

impl fmt::Display for InvalidIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sum)?;

        if f.alternate() {
            write!(f, " (sum of {} invalid ids)", self.ids.len())?;

            for id in &self.ids {
                write!(f, "\n  {id}")?;
            }
        }

        Ok(())
    }
}

/// Collect every invalid ID across all ranges.
pub fn find_invalid(ranges: &[IdRange], repeat: Repeat) -> InvalidIds {
    let mut ids = Vec::new();

    for range in ranges {
        let before = ids.len();
        ids.extend((range.start..=range.end).filter(|&id| is_invalid(id, repeat)));
        log::debug!("{range}: {} invalid ids", ids.len() - before);
    }

    InvalidIds {
        sum: ids.iter().map(|&id| u128::from(id)).sum(),
        ids,
    }
}
