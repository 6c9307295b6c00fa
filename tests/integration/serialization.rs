use crate::global_guard;
use serde::Serialize;
use serde_json::json;
use std::io;
use xerror::{CallerConfig, Error, ErrorExt};

#[derive(Debug, Serialize)]
struct Request {
    method: &'static str,
    retries: u8,
}

#[test]
fn not_found_example() {
    let _guard = global_guard(CallerConfig::new());

    let error = Error::new(404, "Not Found").with_attr("path", "/index.html");
    assert_eq!(
        error.to_json_string(),
        r#"{"code":404,"message":"Not Found","attrs":{"path":"/index.html"}}"#,
    );
    assert_eq!(error.to_string(), "Not Found");
}

#[test]
fn structured_attrs_and_sorted_keys() {
    let _guard = global_guard(CallerConfig::new());

    let error = Error::new(503, "unavailable")
        .with_attr("zone", "eu-west")
        .with_attr(
            "request",
            Request {
                method: "GET",
                retries: 2,
            },
        )
        .with_attrs([("attempt", 3), ("attempt", 4)]);

    let keys: Vec<_> = error.attrs().keys().collect();
    assert_eq!(keys, ["attempt", "request", "zone"]);
    assert_eq!(
        error.to_json_value().unwrap()["attrs"],
        json!({
            "attempt": 4,
            "request": {"method": "GET", "retries": 2},
            "zone": "eu-west",
        }),
    );
}

#[test]
fn nested_errors_with_caller() {
    let _guard = global_guard(CallerConfig::new().with_enabled(true));

    let line = line!() + 1;
    let inner = Error::new(404, "missing");
    let error = io::Error::other("io").wrap_err(1, "io failed");
    let error = Error::wrap(500, inner, "outer").with_attr("other", error.code());

    assert_eq!(
        error.to_json_value().unwrap(),
        json!({
            "code": 500,
            "message": "outer",
            "attrs": {"other": 1},
            "caller": {"file": file!(), "line": line + 2},
            "wrappedError": {
                "code": 404,
                "message": "missing",
                "caller": {"file": file!(), "line": line},
            },
        }),
    );
}

#[test]
fn error_serializes_as_field_of_another_value() {
    let _guard = global_guard(CallerConfig::new());

    #[derive(Serialize)]
    struct Response<'a> {
        ok: bool,
        error: &'a Error,
    }

    let error = Error::wrap(502, "bad gateway", "proxy");
    let value = serde_json::to_value(Response {
        ok: false,
        error: &error,
    })
    .unwrap();
    assert_eq!(
        value,
        json!({
            "ok": false,
            "error": {"code": 502, "message": "proxy", "wrappedError": {"message": "bad gateway"}},
        }),
    );
}

#[test]
fn non_finite_attr_is_not_encoded_as_null() {
    let _guard = global_guard(CallerConfig::new());

    let error = Error::new(422, "bad ratio").with_attr("ratio", f64::NAN);
    error.to_json().unwrap_err();
    assert!(
        error
            .to_json_string()
            .starts_with("failed to marshal error to JSON: "),
    );
    assert_eq!(error.to_string(), "bad ratio");
}
