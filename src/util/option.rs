pub(crate) trait OptionExtension<T> {
    /// Acts like [`Option::unwrap`], but with a message that names the expectation rather than the
    /// method, to keep test failures readable.
    ///
    /// # Panics
    /// Panics if the [`Option`] is [`None`].
    fn throw_none(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    fn throw_none(self) -> T {
        match self {
            Some(val) => val,
            None => panic!("expected a value but found None"),
        }
    }
}
