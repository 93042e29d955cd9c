use lib::input::{IStr, IStrError, LineCol};
use thiserror::Error;

/// Errors raised while parsing puzzle input.
///
/// All of these are detected before any solving starts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("no input provided")]
    EmptyInput,
    #[error("{pos}: row has {actual} cells, expected {expected}")]
    MalformedInput {
        pos: LineCol,
        expected: usize,
        actual: usize,
    },
    #[error("missing blank line separating ranges from ids")]
    MissingSeparator,
    #[error("{pos}: invalid number in `{text}`")]
    InvalidNumber {
        pos: LineCol,
        text: String,
        #[source]
        source: IStrError,
    },
    #[error("{pos}: unknown operator `{op}`")]
    UnknownOperator { pos: LineCol, op: char },
    #[error("{pos}: missing operator")]
    MissingOperator { pos: LineCol },
    #[error("missing start `S` in the first row")]
    MissingStart,
    #[error("{pos}: result does not fit in 128 bits")]
    Overflow { pos: LineCol },
}

impl Error {
    /// Construct an invalid number error for the given line, resolving the
    /// position of the error against the original input.
    pub(crate) fn invalid_number(origin: &IStr, line: &IStr, source: IStrError) -> Self {
        Self::InvalidNumber {
            pos: position(origin, source.span().start),
            text: line.as_bstr().to_string(),
            source,
        }
    }
}

/// Resolve a byte index against the original input.
pub(crate) fn position(origin: &IStr, index: usize) -> LineCol {
    LineCol::from_index(origin.as_data(), index.saturating_sub(origin.index()))
}
