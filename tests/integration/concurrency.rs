use crate::global_guard;
use std::sync::atomic::{AtomicBool, Ordering};
use xerror::{
    Error,
    caller::{CallerConfig, UNKNOWN, capture_caller_info, strip_caller_file_prefixes},
};

const TOGGLERS: usize = 4;
const BUILDERS: usize = 8;
const ROUNDS: usize = 2_000;

#[test]
fn toggling_capture_while_constructing_never_tears_caller() {
    let _guard = global_guard(CallerConfig::new());
    let done = AtomicBool::new(false);

    std::thread::scope(|s| {
        for i in 0..TOGGLERS {
            let done = &done;
            s.spawn(move || {
                let mut enable = i % 2 == 0;
                while !done.load(Ordering::Relaxed) {
                    capture_caller_info(enable);
                    strip_caller_file_prefixes(if enable { vec!["tests/"] } else { vec![] });
                    enable = !enable;
                }
            });
        }

        let builders: Vec<_> = (0..BUILDERS)
            .map(|_| {
                s.spawn(|| {
                    let mut seen = (0usize, 0usize);
                    for n in 0..ROUNDS {
                        let error = Error::new(1, format!("error {n}"));
                        match error.caller() {
                            Some(caller) => {
                                assert_ne!(caller.file(), UNKNOWN);
                                assert!(caller.file().ends_with("concurrency.rs"));
                                assert!(caller.line() > 0);
                                seen.0 += 1;
                            }
                            None => {
                                assert_eq!(error.file(), UNKNOWN);
                                assert_eq!(error.line(), 0);
                                seen.1 += 1;
                            }
                        }
                    }
                    seen
                })
            })
            .collect();

        for builder in builders {
            let (with, without) = builder.join().unwrap();
            assert_eq!(with + without, ROUNDS);
        }
        done.store(true, Ordering::Relaxed);
    });

    capture_caller_info(false);
}
