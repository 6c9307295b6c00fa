//! Augmented error value for `xerror`.
//!
//! [`Error`] carries, next to its message, a numeric code, optional
//! key/value attributes, the optional [`Caller`] it was created from and an
//! optional wrapped cause. It serializes to a stable JSON shape, see
//! [`Error::to_json`].
//!
//! The [`BoxError`] type is the type-erased error type used for causes,
//! any error that implements `std::error::Error + Send + Sync` can be wrapped.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub use xerror_caller::{Caller, CallerConfig};

mod attrs;
pub use attrs::{AttrValue, Attrs};

mod chain;
pub use chain::Chain;

mod error;
pub use error::Error;

mod ext;
pub use ext::{ErrorContext, ErrorExt};

mod finite;
mod ser;

#[macro_use]
mod macros;

#[doc(hidden)]
pub mod __private;
