//! Test-only shorthand for unwrapping the crate's typed errors.

use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the [`Ok`] value, or panics with the error's own [`Display`](std::fmt::Display)
    /// message, so a failing test reports "Capacity overflow!" rather than the error's `Debug`
    /// form.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
