use crate::{AttrValue, Attrs, BoxError, Chain};
use std::{error::Error as StdError, fmt};
use xerror_caller::{Caller, CallerConfig, UNKNOWN, capture_caller};
use xerror_utils::macros::generate_set_and_with;

/// An error with a code, attributes, an optional caller and an optional cause.
///
/// The code and message are fixed at construction, as are the [`Caller`]
/// and the wrapped cause. Attributes can be attached afterwards, either
/// through the consuming `with_*` methods or the in-place `set_*` methods.
///
/// Whether the [`Caller`] is captured depends on the process-wide
/// [`CallerConfig`] at the time of construction
/// (see [`xerror_caller::capture_caller_info`]), unless one of the
/// `*_with_config` constructors is used.
///
/// The [`Display`] implementation prints only the message.
/// Use the alternate flag (`{:#}`) or [`Error::to_json_string`]
/// to get the full JSON representation.
///
/// # Example
///
/// ```
/// use xerror_core::Error;
///
/// let error = Error::new(404, "not found").with_attr("path", "/index.html");
/// assert_eq!(error.code(), 404);
/// assert_eq!(error.to_string(), "not found");
/// assert_eq!(
///     format!("{error:#}"),
///     r#"{"code":404,"message":"not found","attrs":{"path":"/index.html"}}"#,
/// );
/// ```
///
/// [`Display`]: fmt::Display
#[derive(Debug)]
pub struct Error {
    code: i64,
    message: String,
    attrs: Attrs,
    caller: Option<Caller>,
    cause: Option<BoxError>,
}

impl Error {
    /// Create a new [`Error`] with the given code and message.
    #[track_caller]
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self::from_parts(code, message.into(), None, capture_caller())
    }

    /// Create a new [`Error`] with the given code and formatted message.
    ///
    /// See also the `error!` macro, which also records the function name.
    #[track_caller]
    pub fn newf(code: i64, args: fmt::Arguments<'_>) -> Self {
        Self::from_parts(code, fmt::format(args), None, capture_caller())
    }

    /// Wrap the given cause in a new [`Error`] with the given code and message.
    #[track_caller]
    pub fn wrap(code: i64, cause: impl Into<BoxError>, message: impl Into<String>) -> Self {
        Self::from_parts(code, message.into(), Some(cause.into()), capture_caller())
    }

    /// Wrap the given cause in a new [`Error`] with the given code and formatted message.
    ///
    /// See also the `wrap!` macro, which also records the function name.
    #[track_caller]
    pub fn wrapf(code: i64, cause: impl Into<BoxError>, args: fmt::Arguments<'_>) -> Self {
        Self::from_parts(code, fmt::format(args), Some(cause.into()), capture_caller())
    }

    /// Create a new [`Error`], using the given [`CallerConfig`]
    /// instead of the process-wide one.
    #[track_caller]
    pub fn new_with_config(config: &CallerConfig, code: i64, message: impl Into<String>) -> Self {
        Self::from_parts(code, message.into(), None, config.capture())
    }

    /// Wrap the given cause in a new [`Error`], using the given
    /// [`CallerConfig`] instead of the process-wide one.
    #[track_caller]
    pub fn wrap_with_config(
        config: &CallerConfig,
        code: i64,
        cause: impl Into<BoxError>,
        message: impl Into<String>,
    ) -> Self {
        Self::from_parts(code, message.into(), Some(cause.into()), config.capture())
    }

    /// Used by the macros, which know the function they are expanded in.
    #[track_caller]
    pub(crate) fn new_in_func(
        code: i64,
        message: String,
        cause: Option<BoxError>,
        func: &'static str,
    ) -> Self {
        let caller = capture_caller().map(|caller| caller.with_func(func));
        Self::from_parts(code, message, cause, caller)
    }

    fn from_parts(
        code: i64,
        message: String,
        cause: Option<BoxError>,
        caller: Option<Caller>,
    ) -> Self {
        Self {
            code,
            message,
            attrs: Attrs::new(),
            caller,
            cause,
        }
    }

    generate_set_and_with!(
        /// Attach an attribute to the error, overwriting
        /// the previous value of the same key if any.
        pub fn attr(mut self, key: impl Into<String>, value: impl AttrValue) -> Self {
            self.attrs.insert(key.into(), Box::new(value));
            self
        }
    );

    generate_set_and_with!(
        /// Attach multiple attributes to the error, overwriting
        /// the previous values of the same keys if any.
        ///
        /// The last value wins in case the input contains the same key multiple times.
        pub fn attrs(
            mut self,
            attrs: impl IntoIterator<Item = (impl Into<String>, impl AttrValue)>,
        ) -> Self {
            for (key, value) in attrs {
                self.attrs.insert(key.into(), Box::new(value));
            }
            self
        }
    );

    /// The code of the error.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// The message of the error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attributes attached to the error, empty if none were attached.
    #[must_use]
    pub const fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// The [`Caller`] that created this error, if it was captured.
    #[must_use]
    pub const fn caller(&self) -> Option<Caller> {
        self.caller
    }

    /// File in which the error was created, `"???"` if not captured.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.caller.map_or(UNKNOWN, |caller| caller.file())
    }

    /// Line at which the error was created, `0` if not captured.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.caller.map_or(0, |caller| caller.line())
    }

    /// Function in which the error was created, `"???"` if not known.
    #[must_use]
    pub fn func(&self) -> &'static str {
        self.caller.map_or(UNKNOWN, |caller| caller.func())
    }

    /// The wrapped cause of this error, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Iterate over this error, followed by its chain of causes.
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(Some(self as &(dyn StdError + 'static)))
    }

    /// The last error in the chain, `self` if there is no cause.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut root: &(dyn StdError + 'static) = self;
        while let Some(next) = root.source() {
            root = next;
        }
        root
    }

    /// Iterate over the chain of causes, starting with the wrapped cause.
    fn causes(&self) -> Chain<'_> {
        Chain::new(self.source())
    }

    /// Returns `true` if the given target is found in the chain of causes
    /// rooted at the wrapped cause.
    ///
    /// A link matches when it is of the same type as the target and equal to it.
    /// This error itself is never compared, and an error without cause
    /// never matches. Compare [`Error::code`] directly to match on category.
    ///
    /// ```
    /// use xerror_core::Error;
    ///
    /// let not_found = Error::new(404, "not found");
    /// let error = Error::wrap(500, Error::new(404, "not found"), "lookup failed");
    ///
    /// assert!(error.is(&not_found));
    /// assert!(!error.is(&Error::new(403, "forbidden")));
    /// ```
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: StdError + PartialEq + 'static,
    {
        self.causes()
            .any(|cause| cause.downcast_ref::<E>().is_some_and(|cause| cause == target))
    }

    /// Returns `true` if an error of type `E` is found in the chain of causes.
    #[must_use]
    pub fn is_caused_by<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.find_cause::<E>().is_some()
    }

    /// Find the first error of type `E` in the chain of causes.
    #[must_use]
    pub fn find_cause<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.causes().find_map(|cause| cause.downcast_ref::<E>())
    }
}

/// Errors are equal when their code and message are equal.
///
/// Attributes, caller and cause are not compared.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.to_json_string())
        } else {
            f.write_str(&self.message)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}
