//! Cafeteria: fresh ingredient ranges.
//!
//! The input lists inclusive ID ranges, a blank line, and then the IDs to
//! check. Part one checks each ID against the ranges, part two merges the
//! ranges and counts every ID they cover.


use core::fmt;
use core::ops::RangeInclusive;

use lib::input::{ErrorKind, IStr, IStrError};
use serde::Serialize;

use crate::error::Error;

/// Coverage below which merged ranges are listed as individual IDs.
pub const DISPLAY_LIMIT: u128 = 1000;

/// An inclusive range of IDs.
///
/// `start <= end` is assumed but not checked, a reversed interval contains
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Construct a new interval.
    #[inline]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Test if the interval contains the given ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2025::d05::Interval;
    ///
    /// let interval = Interval::new(3, 5);
    /// assert!(interval.contains(3));
    /// assert!(interval.contains(5));
    /// assert!(!interval.contains(6));
    /// ```
    #[inline]
    pub fn contains(&self, id: i64) -> bool {
        self.start <= id && id <= self.end
    }

    /// Number of IDs in the interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2025::d05::Interval;
    ///
    /// assert_eq!(Interval::new(10, 20).len(), 11);
    /// assert_eq!(Interval::new(i64::MIN, i64::MAX).len(), 1 << 64);
    /// assert_eq!(Interval::new(5, 4).len(), 0);
    /// ```
    #[inline]
    pub fn len(&self) -> u128 {
        if self.end < self.start {
            return 0;
        }

        (i128::from(self.end) - i128::from(self.start) + 1) as u128
    }

    /// Test if the interval is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Iterate over the IDs in the interval.
    #[inline]
    pub fn ids(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parsed ranges and IDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    /// Ranges in input order.
    pub ranges: Vec<Interval>,
    /// IDs in input order.
    pub ids: Vec<i64>,
}

/// Parse the input database.
pub fn parse(input: IStr) -> Result<Database, Error> {
    let origin = input;

    if input.is_blank() {
        return Err(Error::EmptyInput);
    }

    let mut input = input.trim();
    let mut lines = input.lines();
    let mut ranges = Vec::new();
    let mut separated = false;

    for line in lines.by_ref() {
        if line.is_blank() {
            separated = true;
            break;
        }

        ranges.push(parse_interval(&origin, &line)?);
    }

    if !separated {
        return Err(Error::MissingSeparator);
    }

    let mut ids = Vec::new();

    for line in lines.filter(|line| !line.is_blank()) {
        let mut value = line;

        let id = value
            .complete::<i64>()
            .map_err(|e| Error::invalid_number(&origin, &line, e))?;

        ids.push(id);
    }

    log::debug!("parsed {} ranges and {} ids", ranges.len(), ids.len());
    Ok(Database { ranges, ids })
}

/// Parse a single `<start>-<end>` line.
///
/// The separator is the first `-` after the first character so that a
/// leading sign is allowed, like in `-5--3`.
fn parse_interval(origin: &IStr, line: &IStr) -> Result<Interval, Error> {
    let trimmed = line.trim();

    let Some((mut start, mut end)) = trimmed.split_pair(b'-', 1) else {
        let span = trimmed.index()..trimmed.index() + trimmed.len();
        let error = IStrError::new(span, ErrorKind::ExpectedSeparator('-'));
        return Err(Error::invalid_number(origin, line, error));
    };

    let start = start
        .complete::<i64>()
        .map_err(|e| Error::invalid_number(origin, line, e))?;

    let end = end
        .complete::<i64>()
        .map_err(|e| Error::invalid_number(origin, line, e))?;

    Ok(Interval::new(start, end))
}

/// The result of checking a single ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdCheck {
    pub id: i64,
    pub fresh: bool,
    /// Every range containing the ID, in input order.
    pub matching: Vec<Interval>,
}

/// Answer to part one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Freshness {
    /// Number of fresh IDs.
    pub fresh_count: usize,
    /// Details for each ID, in input order.
    pub checks: Vec<IdCheck>,
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fresh_count)?;

        if f.alternate() {
            write!(f, " fresh ids")?;

            for check in &self.checks {
                write!(f, "\n  {}: ", check.id)?;

                if !check.fresh {
                    write!(f, "spoiled")?;
                    continue;
                }

                write!(f, "fresh (")?;

                for (n, range) in check.matching.iter().enumerate() {
                    if n > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{range}")?;
                }

                write!(f, ")")?;
            }
        }

        Ok(())
    }
}

/// Check every ID against every range.
pub fn check_ids(db: &Database) -> Freshness {
    let checks = db
        .ids
        .iter()
        .map(|&id| {
            let matching = db
                .ranges
                .iter()
                .filter(|range| range.contains(id))
                .copied()
                .collect::<Vec<_>>();

            IdCheck {
                id,
                fresh: !matching.is_empty(),
                matching,
            }
        })
        .collect::<Vec<_>>();

    Freshness {
        fresh_count: checks.iter().filter(|c| c.fresh).count(),
        checks,
    }
}

/// Merge ranges into a sorted list of disjoint intervals.
///
/// Reversed ranges cover nothing and are dropped. Ranges which overlap or
/// are directly adjacent, like `1-5` and `6-10`, are coalesced. Consecutive
/// merged intervals are separated by at least one uncovered ID.
///
/// # Examples
///
/// ```
/// use y2025::d05::{merge, Interval};
///
/// let merged = merge(&[Interval::new(6, 10), Interval::new(1, 5)]);
/// assert_eq!(merged, [Interval::new(1, 10)]);
/// ```
pub fn merge(ranges: &[Interval]) -> Vec<Interval> {
    let mut sorted = ranges
        .iter()
        .filter(|range| !range.is_empty())
        .copied()
        .collect::<Vec<_>>();

    sorted.sort_by_key(|range| range.start);

    let mut merged = Vec::<Interval>::with_capacity(sorted.len());

    for range in sorted {
        match merged.last_mut() {
            Some(current) if range.start <= current.end.saturating_add(1) => {
                current.end = current.end.max(range.end);
            }
            _ => {
                merged.push(range);
            }
        }
    }

    merged
}

/// How merged ranges are listed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Listing {
    /// Every covered ID.
    Ids(Vec<i64>),
    /// The merged ranges themselves.
    Ranges(Vec<Interval>),
}

/// Answer to part two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage {
    /// Number of IDs covered by any range.
    pub total: u128,
    /// The merged ranges.
    pub merged: Vec<Interval>,
    /// Listing at [DISPLAY_LIMIT].
    pub listing: Listing,
}

impl Coverage {
    /// List covered IDs if there are fewer than `limit` of them, otherwise
    /// the merged ranges.
    pub fn listing(&self, limit: u128) -> Listing {
        if self.total < limit {
            Listing::Ids(self.merged.iter().flat_map(Interval::ids).collect())
        } else {
            Listing::Ranges(self.merged.clone())
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.total)?;

        if f.alternate() {
            write!(f, " ids covered by {} merged ranges", self.merged.len())?;

            match &self.listing {
                Listing::Ids(ids) => {
                    write!(f, "\n  ids:")?;

                    for id in ids {
                        write!(f, " {id}")?;
                    }
                }
                Listing::Ranges(ranges) => {
                    for range in ranges {
                        write!(f, "\n  {range} ({} ids)", range.len())?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Count every ID covered by any range.
pub fn coverage(db: &Database) -> Coverage {
    let merged = merge(&db.ranges);
    let total = merged.iter().map(Interval::len).sum();

    log::debug!("merged {} ranges into {}", db.ranges.len(), merged.len());

    let mut coverage = Coverage {
        total,
        merged,
        listing: Listing::Ranges(Vec::new()),
    };

    coverage.listing = coverage.listing(DISPLAY_LIMIT);
    coverage
}
