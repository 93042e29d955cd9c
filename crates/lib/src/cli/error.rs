use core::fmt;

/// Context attached to errors raised while solving, naming the input source
/// they were raised for.
#[derive(Debug)]
pub struct ErrorContext {
    source: String,
}

impl ErrorContext {
    pub(crate) fn new(source: String) -> Self {
        Self { source }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}
