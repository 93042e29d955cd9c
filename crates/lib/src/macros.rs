/// Helper macro to build an input processor.
///
/// # Examples
///
/// ```
/// use lib::input::{IStr, Split};
///
/// struct Span {
///     start: u64,
///     end: u64,
/// }
///
/// lib::from_input! {
///     |Split((start, end)): Split<'-', (u64, u64)>| -> Span {
///         anyhow::ensure!(start <= end, "start after end");
///         Ok(Span { start, end })
///     }
/// }
///
/// let span = IStr::new(b"3-5").next::<Span>().unwrap();
/// assert_eq!((span.start, span.end), (3, 5));
/// assert!(IStr::new(b"5-3").next::<Span>().is_err());
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = $crate::input::FromInput::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::new(
                            span,
                            $crate::input::ErrorKind::Custom(e.to_string()),
                        ))
                    }
                }
            }
        }
    };
}
