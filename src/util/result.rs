use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Similar to [`Result::unwrap`], except that it only applies to error types and panics with
    /// the Display message of the error rather than its Debug representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
