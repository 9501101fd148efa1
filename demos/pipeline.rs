//! Wires a small processing pipeline up front, then feeds it its inputs.
//!
//! Run with `RUST_LOG=trace cargo run --example pipeline` to watch the
//! dispatch loop work.

use pact::{make_promise, Error, ErrorKind, Future};

fn main() {
    env_logger::init();

    let (mut input, mut bytes) = make_promise::<Vec<u8>>();
    let (mut scale_input, mut scale) = make_promise::<u32>();

    let mut report: Future<String> = bytes
        .then(|raw: Vec<u8>| -> Result<String, Error> {
            String::from_utf8(raw).map_err(|_| Error::new("payload is not UTF-8"))
        })
        .then(|text: String| -> Result<u32, Error> {
            text.trim()
                .parse()
                .map_err(|_| Error::new("payload is not a number"))
        })
        .then(move |n: u32| scale.then(move |factor| format!("scaled result: {}", n * factor)))
        .catch(|error| format!("pipeline failed: {}", error));

    report.finally(|outcome| match outcome {
        Ok(line) => println!("{}", line),
        Err(error) => println!("unrecovered: {}", error),
    });

    // The chain above is fully parked; both producers deliver afterwards.
    input.set_value(b"  21 ".to_vec());
    scale_input.set_value(2);

    // A producer that goes away without delivering.
    let (abandoned, mut pending) = make_promise::<u32>();
    pending.finally(|outcome| match outcome {
        Err(error) if error.kind() == ErrorKind::BrokenPromise => {
            println!("producer vanished: {}", error)
        }
        other => println!("unexpected outcome: {:?}", other),
    });
    drop(abandoned);
}
