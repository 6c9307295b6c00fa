//! Augmented error values for the 🦀 Rust language.
//!
//! An [`Error`] carries, beyond its human-readable message:
//!
//! - a numeric [code](Error::code), assigned by the caller to classify the error;
//! - [attributes](Error::attrs): arbitrary key-value pairs attached with
//!   [`Error::with_attr`] or [`Error::set_attr`];
//! - the [caller](Error::caller) which created it, if [caller capture](caller)
//!   was enabled at the time;
//! - an optional wrapped [cause](Error::cause), forming a causal chain
//!   that can be queried with [`Error::is`] and friends.
//!
//! The [`Display`](std::fmt::Display) implementation only prints the message,
//! so an [`Error`] can be used anywhere a plain error is expected.
//! The full structured view is available as JSON:
//!
//! ```
//! use xerror::{Error, ErrorExt};
//! use std::io;
//!
//! let error = io::Error::other("disk full")
//!     .wrap_err(500, "write failed")
//!     .with_attr("path", "/var/log/app.log");
//!
//! assert_eq!(error.to_string(), "write failed");
//! assert_eq!(
//!     error.to_json_string(),
//!     r#"{"code":500,"message":"write failed","attrs":{"path":"/var/log/app.log"},"wrappedError":{"message":"disk full"}}"#,
//! );
//! ```
//!
//! # Caller capture
//!
//! Capturing the caller is disabled by default. Enable it process wide with
//! [`caller::capture_caller_info`], optionally stripping a prefix
//! (e.g. the workspace root) from the captured files with
//! [`caller::strip_caller_file_prefixes`]. Alternatively pass a
//! [`CallerConfig`] explicitly using [`Error::new_with_config`].
//!
//! The [`error!`] and [`wrap!`] macros also record the function
//! the error was created in, which the plain constructors cannot.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use xerror_core::{
    AttrValue, Attrs, BoxError, Chain, Error, ErrorContext, ErrorExt, bail, error, wrap,
};

pub mod caller {
    //! Caller capture, see the [crate docs](crate#caller-capture).

    #[doc(inline)]
    pub use xerror_caller::{
        Caller, CallerConfig, UNKNOWN, caller_info, capture_caller, capture_caller_info,
        global_caller_config, is_caller_capture_enabled, set_global_caller_config,
        strip_caller_file_prefixes,
    };
}

#[doc(inline)]
pub use caller::{Caller, CallerConfig};
