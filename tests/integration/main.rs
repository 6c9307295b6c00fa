//! Integration tests for the `xerror` facade.
//!
//! Several tests toggle the process-wide caller capture,
//! these hold [`global_guard`] for their whole duration.

use parking_lot::{Mutex, MutexGuard, const_mutex};
use xerror::caller::{CallerConfig, set_global_caller_config};

mod concurrency;
mod identity;
mod macros;
mod serialization;

static GLOBAL_GUARD: Mutex<()> = const_mutex(());

/// Lock the process-wide caller config for the duration of a test,
/// starting from the given config.
fn global_guard(config: CallerConfig) -> MutexGuard<'static, ()> {
    let guard = GLOBAL_GUARD.lock();
    set_global_caller_config(config);
    guard
}
