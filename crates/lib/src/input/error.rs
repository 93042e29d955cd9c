use core::fmt;
use core::ops::Range;

use crate::input::NL;

/// A line and column combination.
///
/// Both are stored zero-based and displayed one-based.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    /// Construct a new line and column.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Get the current input position based on the given byte index into
    /// `data`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::LineCol;
    ///
    /// let data = b"abc\nde\nf";
    /// assert_eq!(LineCol::from_index(data, 0), LineCol::new(0, 0));
    /// assert_eq!(LineCol::from_index(data, 5), LineCol::new(1, 1));
    /// assert_eq!(LineCol::from_index(data, 7).to_string(), "3:1");
    /// ```
    pub fn from_index(data: &[u8], index: usize) -> Self {
        let d = data.get(..index).unwrap_or(data);

        let (line, start) = memchr::memchr_iter(NL, d)
            .enumerate()
            .last()
            .map(|(line, n)| (line + 1, n + 1))
            .unwrap_or_default();

        Self::new(line, d.len() - start)
    }

    /// Zero-based line.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(&'static str),
    NotUtf8,
    ExpectedTuple(usize),
    ExpectedSeparator(char),
    TrailingInput(&'static str),
    UnexpectedEof,
    Custom(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::ExpectedSeparator(c) => write!(f, "expected separator `{c}`"),
            ErrorKind::TrailingInput(rest) => write!(f, "unexpected trailing input `{rest}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::Custom(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through string processing.
#[derive(Debug, Clone)]
pub struct IStrError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// Byte span of the error in the original input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The kind of the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Resolve where the error starts in the original input `data`.
    #[inline]
    pub fn pos(&self, data: &[u8]) -> LineCol {
        LineCol::from_index(data, self.span.start)
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for IStrError {}
