/// Name of the function the macro is expanded in.
#[doc(hidden)]
#[macro_export]
macro_rules! __func_name {
    () => {{
        fn __xerror_marker() {}
        $crate::__private::func_name(__xerror_marker)
    }};
}

/// Create a new [`Error`] from a code and a (formatted) message.
///
/// Unlike [`Error::new`] and [`Error::newf`] the captured caller
/// also records the function in which the error was created.
///
/// # Example
///
/// ```
/// let user = "alice";
/// let error = xerror_core::error!(403, "user {user} may not access {}", "/admin");
/// assert_eq!(error.code(), 403);
/// assert_eq!(error.to_string(), "user alice may not access /admin");
/// ```
///
/// [`Error`]: crate::Error
/// [`Error::new`]: crate::Error::new
/// [`Error::newf`]: crate::Error::newf
#[macro_export]
macro_rules! error {
    ($code:expr, $fmt:literal $(, $($arg:tt)*)?) => {
        $crate::__private::error(
            $code,
            ::std::format!($fmt $(, $($arg)*)?),
            $crate::__func_name!(),
        )
    };
}

/// Wrap a cause in a new [`Error`] with a code and a (formatted) message.
///
/// Unlike [`Error::wrap`] and [`Error::wrapf`] the captured caller
/// also records the function in which the error was created.
///
/// # Example
///
/// ```
/// use std::io;
///
/// let path = "/etc/app.toml";
/// let error = xerror_core::wrap!(500, io::Error::other("denied"), "read {path}");
/// assert_eq!(error.to_string(), "read /etc/app.toml");
/// assert!(error.is_caused_by::<io::Error>());
/// ```
///
/// [`Error`]: crate::Error
/// [`Error::wrap`]: crate::Error::wrap
/// [`Error::wrapf`]: crate::Error::wrapf
#[macro_export]
macro_rules! wrap {
    ($code:expr, $cause:expr, $fmt:literal $(, $($arg:tt)*)?) => {
        $crate::__private::wrap(
            $code,
            $cause,
            ::std::format!($fmt $(, $($arg)*)?),
            $crate::__func_name!(),
        )
    };
}

/// Return early with an [`Error`] created by [`error!`].
///
/// The error is converted with [`Into`] into the error type of the function.
///
/// # Example
///
/// ```
/// use xerror_core::{Error, bail};
///
/// fn check(age: u8) -> Result<u8, Error> {
///     if age < 18 {
///         bail!(400, "age {age} is too young");
///     }
///     Ok(age)
/// }
///
/// assert_eq!(check(42).unwrap(), 42);
/// assert_eq!(check(3).unwrap_err().code(), 400);
/// ```
///
/// [`Error`]: crate::Error
#[macro_export]
macro_rules! bail {
    ($($tt:tt)+) => {
        return ::std::result::Result::Err(::std::convert::Into::into($crate::error!($($tt)+)))
    };
}
