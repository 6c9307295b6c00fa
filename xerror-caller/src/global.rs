use crate::{Caller, CallerConfig};
use parking_lot::{Mutex, const_mutex};

static GLOBAL_CALLER_CONFIG: Mutex<CallerConfig> = const_mutex(CallerConfig::new());

/// Enable or disable the capturing of callers for new errors, process wide.
///
/// Disabled by default. This call is thread-safe.
pub fn capture_caller_info(enable: bool) {
    GLOBAL_CALLER_CONFIG.lock().set_enabled(enable);
    tracing::debug!(enabled = enable, "xerror: global caller capture toggled");
}

/// Set the prefixes to strip from the file path of captured callers, process wide.
///
/// Only the first matching prefix is stripped. The previous list is replaced.
/// This call is thread-safe.
pub fn strip_caller_file_prefixes<I>(prefixes: I)
where
    I: IntoIterator<Item: Into<String>>,
{
    let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
    // never log under the lock, a subscriber may create errors itself
    tracing::debug!(?prefixes, "xerror: global caller file prefixes replaced");
    GLOBAL_CALLER_CONFIG.lock().set_strip_prefixes(prefixes);
}

/// Returns `true` if callers are currently captured for new errors.
#[must_use]
pub fn is_caller_capture_enabled() -> bool {
    GLOBAL_CALLER_CONFIG.lock().is_enabled()
}

/// Get a snapshot of the process-wide [`CallerConfig`].
#[must_use]
pub fn global_caller_config() -> CallerConfig {
    GLOBAL_CALLER_CONFIG.lock().clone()
}

/// Replace the process-wide [`CallerConfig`] in one go.
pub fn set_global_caller_config(config: CallerConfig) {
    tracing::debug!(
        enabled = config.is_enabled(),
        prefixes = ?config.strip_prefixes(),
        "xerror: global caller config replaced",
    );
    *GLOBAL_CALLER_CONFIG.lock() = config;
}

/// Capture the [`Caller`] of the (`#[track_caller]`) call chain
/// using the process-wide [`CallerConfig`].
///
/// Returns `None` if capturing is disabled. The configuration is read and
/// the caller resolved under a single lock, so the result always reflects
/// one consistent configuration.
#[track_caller]
#[must_use]
pub fn capture_caller() -> Option<Caller> {
    GLOBAL_CALLER_CONFIG.lock().capture()
}

/// Resolve the [`Caller`] of the (`#[track_caller]`) call chain
/// using the process-wide file prefixes, even if capturing is disabled.
#[track_caller]
#[must_use]
pub fn caller_info() -> Caller {
    GLOBAL_CALLER_CONFIG.lock().caller()
}
