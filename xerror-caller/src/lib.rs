//! Caller capture for `xerror` errors.
//!
//! An error can record the location it was created at: the file, line and
//! (when created through one of the `xerror` macros) the function.
//! Whether this happens is controlled by a [`CallerConfig`], of which one
//! process-wide instance exists, guarded by a mutex.
//!
//! Locations are resolved through `#[track_caller]` rather than by walking
//! the stack, so every function in the chain between the user code and the
//! actual capture has to carry that attribute as well.
//!
//! # Example
//!
//! ```
//! use xerror_caller::{CallerConfig, Caller};
//!
//! let config = CallerConfig::new().with_enabled(true);
//! let caller = config.capture().unwrap_or_else(Caller::unknown);
//! assert_eq!(caller.file(), file!());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod caller;
pub use caller::{Caller, UNKNOWN};

mod config;
pub use config::CallerConfig;

mod global;
pub use global::{
    capture_caller, capture_caller_info, caller_info, global_caller_config,
    is_caller_capture_enabled, set_global_caller_config, strip_caller_file_prefixes,
};
