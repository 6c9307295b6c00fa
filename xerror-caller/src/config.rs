use crate::Caller;
use std::panic::Location;
use xerror_utils::macros::generate_set_and_with;

/// Configuration controlling whether and how
/// the [`Caller`] of a new error is captured.
///
/// The default configuration has capturing disabled.
/// A process-wide instance is used by the plain error constructors,
/// see [`capture_caller_info`] and [`set_global_caller_config`],
/// but a [`CallerConfig`] can just as well be passed around explicitly.
///
/// [`capture_caller_info`]: crate::capture_caller_info
/// [`set_global_caller_config`]: crate::set_global_caller_config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerConfig {
    enabled: bool,
    strip_prefixes: Vec<String>,
}

impl CallerConfig {
    /// Create a new [`CallerConfig`] with capturing disabled
    /// and no file prefixes to strip.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: false,
            strip_prefixes: Vec::new(),
        }
    }

    generate_set_and_with!(
        /// Enable or disable the capturing of callers.
        pub fn enabled(mut self, enabled: bool) -> Self {
            self.enabled = enabled;
            self
        }
    );

    generate_set_and_with!(
        /// Replace the prefixes stripped from captured file paths.
        ///
        /// Only the first prefix (in the given order) that matches is stripped.
        pub fn strip_prefixes(mut self, prefixes: impl IntoIterator<Item: Into<String>>) -> Self {
            self.strip_prefixes = prefixes.into_iter().map(Into::into).collect();
            self
        }
    );

    /// Returns `true` if callers are captured for new errors.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// File prefixes stripped from captured file paths.
    #[must_use]
    pub fn strip_prefixes(&self) -> &[String] {
        &self.strip_prefixes
    }

    /// Capture the [`Caller`] of the (`#[track_caller]`) call chain,
    /// if capturing is enabled.
    #[track_caller]
    #[must_use]
    pub fn capture(&self) -> Option<Caller> {
        let location = Location::caller();
        self.enabled.then(|| self.caller_at(location))
    }

    /// Capture the [`Caller`] of the (`#[track_caller]`) call chain,
    /// regardless of whether capturing is enabled.
    #[track_caller]
    #[must_use]
    pub fn caller(&self) -> Caller {
        self.caller_at(Location::caller())
    }

    fn caller_at(&self, location: &'static Location<'static>) -> Caller {
        Caller::from_location(location, &self.strip_prefixes)
    }
}
