use std::{fmt, io};
use xerror::{Error, ErrorContext, ErrorExt};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Timeout {
    after_ms: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.after_ms)
    }
}

impl std::error::Error for Timeout {}

fn fetch(fail: bool) -> Result<&'static str, Timeout> {
    if fail {
        Err(Timeout { after_ms: 250 })
    } else {
        Ok("payload")
    }
}

fn load(fail: bool) -> Result<&'static str, Error> {
    let body = fetch(fail).wrap_err(504, "fetch upstream")?;
    Ok(body)
}

fn handle(fail: bool) -> Result<&'static str, Error> {
    load(fail).wrap_err(500, "handle request")
}

#[test]
fn success_passes_through_layers() {
    assert_eq!(handle(false).unwrap(), "payload");
}

#[test]
fn is_matches_any_cause_in_chain() {
    let error = handle(true).unwrap_err();

    assert!(error.is(&Timeout { after_ms: 250 }));
    assert!(!error.is(&Timeout { after_ms: 1 }));
    assert!(error.is(&Error::new(504, "fetch upstream")));
    assert!(!error.is(&Error::new(500, "handle request")));
    assert!(!error.is(&Error::new(504, "other message")));
}

#[test]
fn is_without_cause_is_false() {
    let error = Error::new(1, "leaf");
    assert!(!error.is(&Error::new(1, "leaf")));
}

#[test]
fn chain_walks_from_outermost_to_root() {
    let error = handle(true).unwrap_err();

    let messages: Vec<_> = error.chain().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        ["handle request", "fetch upstream", "timed out after 250ms"],
    );
    assert_eq!(error.root_cause().to_string(), "timed out after 250ms");
    assert_eq!(
        error.find_cause::<Timeout>(),
        Some(&Timeout { after_ms: 250 }),
    );
    assert!(error.is_caused_by::<Error>());
    assert!(!error.is_caused_by::<io::Error>());
}

#[test]
fn source_exposes_cause_to_std_consumers() {
    use std::error::Error as _;

    let error = io::Error::other("closed").wrap_err(499, "client gone");
    let source = error.source().unwrap();
    assert_eq!(source.to_string(), "closed");
    assert!(source.downcast_ref::<io::Error>().is_some());
}

#[test]
fn into_box_error_keeps_identity() {
    let boxed: xerror::BoxError = Error::new(418, "teapot").into();
    let error = boxed.downcast_ref::<Error>().unwrap();
    assert_eq!(error, &Error::new(418, "teapot"));
}

#[quickcheck_macros::quickcheck]
fn json_keeps_code_and_message(code: i64, message: String) -> bool {
    let value = Error::new(code, message.clone()).to_json_value().unwrap();
    value["code"] == code && value["message"] == message.as_str()
}

#[quickcheck_macros::quickcheck]
fn is_finds_wrapped_error_at_any_depth(depth: u8) -> bool {
    let target = Error::new(7, "target");
    let mut error = Error::wrap(1, Error::new(7, "target"), "level 0");
    for n in 0..depth % 16 {
        error = Error::wrap(1, error, format!("level {}", n + 1));
    }
    error.is(&target)
}
