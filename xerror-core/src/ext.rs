use crate::Error;

/// Extends the `Result` and `Option` types with methods
/// to turn their failure case into an [`Error`].
///
/// # Examples
///
/// ```
/// use xerror_core::ErrorContext;
///
/// let result = "hello".parse::<i32>().wrap_err(400, "parse integer");
/// let error = result.unwrap_err();
/// assert_eq!(error.code(), 400);
/// assert_eq!(error.to_string(), "parse integer");
/// assert_eq!(error.cause().unwrap().to_string(), "invalid digit found in string");
///
/// let missing: Option<u8> = None;
/// assert_eq!(missing.wrap_err(404, "no value").unwrap_err().code(), 404);
/// ```
pub trait ErrorContext<T>: private::SealedErrorContext {
    /// Turn the failure case into an [`Error`] with the given code and message.
    ///
    /// For a `Result` the original error is kept as cause.
    #[track_caller]
    fn wrap_err<M>(self, code: i64, message: M) -> Result<T, Error>
    where
        M: Into<String>;

    /// Lazily turn the failure case into an [`Error`] with the given code and message.
    #[track_caller]
    fn with_wrap_err<M, F>(self, code: i64, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn wrap_err<M>(self, code: i64, message: M) -> Result<T, Error>
    where
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Error::wrap(code, error, message)),
        }
    }

    #[track_caller]
    fn with_wrap_err<M, F>(self, code: i64, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(Error::wrap(code, error, message())),
        }
    }
}

impl<T> ErrorContext<T> for Option<T> {
    #[track_caller]
    fn wrap_err<M>(self, code: i64, message: M) -> Result<T, Error>
    where
        M: Into<String>,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::new(code, message)),
        }
    }

    #[track_caller]
    fn with_wrap_err<M, F>(self, code: i64, message: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::new(code, message())),
        }
    }
}

/// Extends any error type with a method to wrap it in an [`Error`].
///
/// # Examples
///
/// ```
/// use xerror_core::ErrorExt;
/// use std::io;
///
/// let error = io::Error::other("connection reset").wrap_err(503, "fetch failed");
/// assert_eq!(error.code(), 503);
/// assert!(error.is_caused_by::<io::Error>());
/// ```
pub trait ErrorExt: private::SealedErrorExt {
    /// Wrap the error in an [`Error`] with the given code and message.
    #[track_caller]
    fn wrap_err<M>(self, code: i64, message: M) -> Error
    where
        M: Into<String>;
}

impl<E> ErrorExt for E
where
    E: std::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn wrap_err<M>(self, code: i64, message: M) -> Error
    where
        M: Into<String>,
    {
        Error::wrap(code, self, message)
    }
}

mod private {
    pub trait SealedErrorContext {}

    impl<T, E> SealedErrorContext for Result<T, E> where E: std::error::Error + Send + Sync + 'static {}
    impl<T> SealedErrorContext for Option<T> {}

    pub trait SealedErrorExt {}

    impl<E> SealedErrorExt for E where E: std::error::Error + Send + Sync + 'static {}
}
