use crate::input::IStr;

/// Iterator over inputs.
pub trait InputIterator {
    /// Get the next chunk.
    fn next_input(&mut self) -> Option<IStr>;
}

impl<I> InputIterator for &mut I
where
    I: InputIterator,
{
    #[inline]
    fn next_input(&mut self) -> Option<IStr> {
        (**self).next_input()
    }
}

/// Iterator over lines of an [IStr].
///
/// See [IStr::lines].
pub struct Lines<'a> {
    input: &'a mut IStr,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(input: &'a mut IStr) -> Self {
        Self { input }
    }
}

impl Iterator for Lines<'_> {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.split_line()
    }
}

/// Iterator splitting an [IStr] on a byte.
///
/// See [IStr::split].
pub struct SplitIter<'a> {
    input: &'a mut IStr,
    byte: u8,
}

impl<'a> SplitIter<'a> {
    pub(crate) fn new(input: &'a mut IStr, byte: u8) -> Self {
        Self { input, byte }
    }
}

impl Iterator for SplitIter<'_> {
    type Item = IStr;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.input.split_once(self.byte)
    }
}

impl InputIterator for SplitIter<'_> {
    #[inline]
    fn next_input(&mut self) -> Option<IStr> {
        self.input.split_once(self.byte)
    }
}
