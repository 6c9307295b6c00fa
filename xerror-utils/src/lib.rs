//! utilities crate for xerror
//!
//! `xerror-utils` contains the small helpers shared by the
//! other `xerror` crates, mostly declarative macros.
//!
//! # xerror
//!
//! Crate used by the end-user `xerror` crate and `xerror` crate authors alike.

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;
