//! Input scanner.

mod error;
mod iter;
#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

use bstr::BStr;

pub use self::error::{ErrorKind, IStrError, LineCol};
pub use self::iter::{InputIterator, Lines, SplitIter};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';
const CR: u8 = b'\r';

/// Helper to parse input.
///
/// Input data is `'static` since it's read once at startup and lives for the
/// remainder of the process. The index is the byte offset of the remaining
/// data into the original input, which is what error positions are reported
/// against.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    /// The remaining data.
    data: &'static [u8],
    /// Offset of `data` into the original input.
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"1 -2");
    /// assert_eq!(input.next::<(u64, i64)>().unwrap(), (1, -2));
    /// ```
    #[inline]
    pub const fn new(data: &'static [u8]) -> Self {
        Self { data, index: 0 }
    }

    /// Construct an input processor over an owned buffer.
    ///
    /// The buffer is leaked, memory for it will be freed once the process
    /// exits *anyway*.
    pub fn leak(buf: Vec<u8>) -> Self {
        Self::new(Box::leak(buf.into_boxed_slice()))
    }

    #[inline]
    const fn at(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Test if input only contains whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(u8::is_ascii_whitespace)
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'static BStr {
        BStr::new(self.data)
    }

    /// Trim leading and trailing whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let input = IStr::new(b"\n\n  abc \n");
    /// let trimmed = input.trim();
    /// assert_eq!(trimmed.as_data(), b"abc");
    /// assert_eq!(trimmed.index(), 4);
    /// ```
    pub fn trim(&self) -> IStr {
        let s = self.find(0, |b| !b.is_ascii_whitespace());

        let n = self
            .data
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(s, |n| n + 1);

        self.slice(s..n.max(s))
            .unwrap_or(IStr::at(&[], self.index + self.data.len()))
    }

    /// Construct an iterator over remaining lines.
    ///
    /// A trailing carriage return is stripped from every line, and a trailing
    /// newline does not produce an empty last line.
    #[inline]
    pub fn lines(&mut self) -> Lines<'_> {
        Lines::new(self)
    }

    /// Split on the given byte until the input is consumed.
    #[inline]
    pub fn split(&mut self, byte: u8) -> SplitIter<'_> {
        SplitIter::new(self, byte)
    }

    /// Split into the parts before and after the first `byte` found at or
    /// after offset `from`, dropping the separator itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let input = IStr::new(b"-5--3");
    /// let (a, b) = input.split_pair(b'-', 1).unwrap();
    /// assert_eq!(a.as_data(), b"-5");
    /// assert_eq!(b.as_data(), b"-3");
    /// ```
    pub fn split_pair(&self, byte: u8, from: usize) -> Option<(IStr, IStr)> {
        let rest = self.data.get(from..)?;
        let at = from.checked_add(memchr::memchr(byte, rest)?)?;
        let a = self.slice(0..at)?;
        let b = self.slice(at.checked_add(1)?..self.data.len())?;
        Some((a, b))
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the whole remaining input as a single `T`, erroring if anything
    /// but whitespace remains afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// assert_eq!(IStr::new(b" 42 ").complete::<i64>().unwrap(), 42);
    /// assert!(IStr::new(b"42 43").complete::<i64>().is_err());
    /// ```
    pub fn complete<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let value = self.next()?;
        self.ws()?;

        if !self.data.is_empty() {
            let index = self.index;
            let rest = mem::take(&mut self.data);
            self.index += rest.len();
            let kind = from_utf8(rest).map_or(ErrorKind::NotUtf8, ErrorKind::TrailingInput);
            return Err(IStrError::new(index..self.index, kind));
        }

        Ok(value)
    }

    /// Shorthand for using [Ws] to scan whitespace.
    #[inline]
    pub fn ws(&mut self) -> Result<usize> {
        let Ws(n) = self.next::<Ws>()?;
        Ok(n)
    }

    /// Try to parse the next word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((s, value)))
    }

    /// Split off the next line, stripping a trailing carriage return.
    pub(crate) fn split_line(&mut self) -> Option<IStr> {
        let mut line = self.split_once(NL)?;

        if let [rest @ .., CR] = line.data {
            line.data = rest;
        }

        Some(line)
    }

    /// Split once at the given byte or until the end of string, returning
    /// the new IStr associated with the split.
    pub(crate) fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(b, self.data) else {
            let index = self.index;
            self.index += self.data.len();
            let data = mem::take(&mut self.data);
            return Some(IStr::at(data, index));
        };

        let data = self.data.get(..at)?;
        let index = self.index;
        self.advance(at.checked_add(1)?);
        Some(IStr::at(data, index))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;
        Some(IStr::at(self.data.get(range)?, index))
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Optionally try to consume input ignoring leading whitespace by default.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Parse something from a sequence of inputs.
pub trait FromInputIter: Sized {
    /// Try to build a value out of the inputs, returning `None` if they run
    /// out too early.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<$first, $($rest,)*> FromInputIter for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator
            {
                let Some(mut $first_id) = inputs.next_input() else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next_input() else {
                        return Ok(None);
                    };
                )*

                let Some($first_id) = <$first>::try_from_input(&mut $first_id)? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = <$rest>::try_from_input(&mut $rest_id)? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

#[rustfmt::skip]
macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    return Err(IStrError::new(index.saturating_add(n)..p.index, ErrorKind::NotInteger(string)));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(2 => A a, B b);

integer!(u64);
integer!(i64);

impl FromInput for &[u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        p.index += p.data.len();
        Ok(Some(mem::take(&mut p.data)))
    }
}

impl FromInput for &str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

/// Consume whitespace and return the number of lines consumed.
pub struct Ws(pub usize);

impl FromInput for Ws {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let n = p.find(0, |b| !b.is_ascii_whitespace());

        if n == 0 {
            return Ok(Some(Self(0)));
        }

        let Some(data) = p.data.get(..n) else {
            return Ok(Some(Self(0)));
        };

        p.advance(n);
        Ok(Some(Self(memchr::memchr_iter(NL, data).count())))
    }
}

/// Split on character `D` and feed each part into `T`.
///
/// # Examples
///
/// ```
/// use lib::input::{IStr, Split};
///
/// let mut input = IStr::new(b"11-22");
/// let Split((a, b)) = input.next::<Split<'-', (u64, u64)>>().unwrap();
/// assert_eq!((a, b), (11, 22));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::ExpectedSeparator(D)
    }

    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let mut buf = [0; 4];
        let &[d] = D.encode_utf8(&mut buf).as_bytes() else {
            return Err(IStrError::new(p.index..p.index, ErrorKind::ExpectedSeparator(D)));
        };

        let Some(out) = T::from_input_iter(p.split(d))? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}
