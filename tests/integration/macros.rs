use crate::global_guard;
use xerror::{BoxError, CallerConfig, Error, bail, error, wrap};

fn lookup(id: u32) -> Result<u32, Error> {
    if id == 0 {
        bail!(404, "user {id} not found");
    }
    Ok(id)
}

fn lookup_boxed(id: u32) -> Result<u32, BoxError> {
    if id == 0 {
        bail!(404, "user {} not found", id);
    }
    Ok(id)
}

#[test]
fn macros_record_enclosing_function() {
    let _guard = global_guard(CallerConfig::new().with_enabled(true));

    let line = line!() + 1;
    let error = error!(400, "bad input {}", 1);
    assert_eq!(error.file(), file!());
    assert_eq!(error.line(), line);
    assert_eq!(error.func(), "integration::macros::macros_record_enclosing_function");

    let error = wrap!(500, error, "outer");
    assert_eq!(error.func(), "integration::macros::macros_record_enclosing_function");
    assert_eq!(
        error.to_json_value().unwrap()["caller"]["func"],
        "integration::macros::macros_record_enclosing_function",
    );
}

#[test]
fn plain_constructors_have_unknown_func() {
    let _guard = global_guard(CallerConfig::new().with_enabled(true));

    let error = Error::new(1, "x");
    assert_eq!(error.func(), xerror::caller::UNKNOWN);
    assert!(error.caller().is_some());
}

#[test]
fn bail_returns_early() {
    let _guard = global_guard(CallerConfig::new().with_enabled(true));

    assert_eq!(lookup(3).unwrap(), 3);
    let error = lookup(0).unwrap_err();
    assert_eq!(error.code(), 404);
    assert_eq!(error.to_string(), "user 0 not found");
    assert_eq!(error.func(), "integration::macros::lookup");

    let boxed = lookup_boxed(0).unwrap_err();
    let error = boxed.downcast_ref::<Error>().unwrap();
    assert_eq!(error.func(), "integration::macros::lookup_boxed");
}
