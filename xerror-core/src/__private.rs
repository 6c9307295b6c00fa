//! Used by the exported macros, not part of the public API.

use crate::{BoxError, Error};

#[track_caller]
#[must_use]
pub fn error(code: i64, message: String, func: &'static str) -> Error {
    Error::new_in_func(code, message, None, func)
}

#[track_caller]
#[must_use]
pub fn wrap(code: i64, cause: impl Into<BoxError>, message: String, func: &'static str) -> Error {
    Error::new_in_func(code, message, Some(cause.into()), func)
}

/// Name of the function in which the given marker function is defined.
#[must_use]
pub fn func_name<F: Copy>(_marker: F) -> &'static str {
    let mut name = std::any::type_name::<F>();
    name = name.strip_suffix("::__xerror_marker").unwrap_or(name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
