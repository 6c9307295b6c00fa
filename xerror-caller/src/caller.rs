use serde::Serialize;
use std::{fmt, panic::Location};

/// Value used for the file and function of a [`Caller`]
/// that could not be resolved.
pub const UNKNOWN: &str = "???";

/// Location from which an error was created.
///
/// Serialized as `{"file", "line", "func"}`, where `func` is
/// omitted when the function is not known.
///
/// Created using [`CallerConfig::capture`], [`CallerConfig::caller`]
/// or one of the global functions such as [`caller_info`].
/// When nothing could be resolved it equals [`Caller::unknown`].
///
/// [`CallerConfig::capture`]: crate::CallerConfig::capture
/// [`CallerConfig::caller`]: crate::CallerConfig::caller
/// [`caller_info`]: crate::caller_info
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Caller {
    file: &'static str,
    line: u32,
    #[serde(skip_serializing_if = "is_unknown_func")]
    func: &'static str,
}

fn is_unknown_func(func: &&'static str) -> bool {
    *func == UNKNOWN
}

impl Caller {
    /// Create a new [`Caller`] from its raw parts.
    #[must_use]
    pub const fn new(file: &'static str, line: u32, func: &'static str) -> Self {
        Self { file, line, func }
    }

    /// The sentinel [`Caller`], used when no location could be resolved.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file: UNKNOWN,
            line: 0,
            func: UNKNOWN,
        }
    }

    /// Resolve a [`Caller`] from a [`Location`],
    /// stripping the first of the given prefixes that matches its file.
    ///
    /// The function name is left unknown, see [`Caller::with_func`].
    #[must_use]
    pub fn from_location<S: AsRef<str>>(location: &'static Location<'static>, prefixes: &[S]) -> Self {
        Self {
            file: strip_first_prefix(location.file(), prefixes),
            line: location.line(),
            func: UNKNOWN,
        }
    }

    /// Attach the name of the function the [`Caller`] points into.
    ///
    /// An empty name is ignored.
    #[must_use]
    pub const fn with_func(mut self, func: &'static str) -> Self {
        if !func.is_empty() {
            self.func = func;
        }
        self
    }

    /// File in which the error was created, with the configured prefix stripped.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Line at which the error was created, `0` if unknown.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Fully qualified name of the function in which the error was created.
    #[must_use]
    pub const fn func(&self) -> &'static str {
        self.func
    }

    /// Returns `true` if this is the sentinel [`Caller::unknown`].
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

impl Default for Caller {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.func)
    }
}

pub(crate) fn strip_first_prefix<'a, S: AsRef<str>>(file: &'a str, prefixes: &[S]) -> &'a str {
    prefixes
        .iter()
        .find_map(|prefix| file.strip_prefix(prefix.as_ref()))
        .unwrap_or(file)
}
