// Copyright 2026 The pact Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Resolution of handler outputs into destination states.

use crate::cell::Cell;
use crate::continuation::{Attach, Step};
use crate::error::Error;
use crate::future::Future;
use crate::state::StateRef;

/// What a `then` or `catch` handler may produce, and how that output
/// completes the future the chaining call returned.
///
/// Three shapes are understood:
///
/// * any plain value `R` fulfills the produced future directly, with `()`
///   serving as the completion-only value;
/// * `Result<R, Error>` fulfills or rejects it, which is how a handler
///   signals failure;
/// * `Future<R>` forwards its eventual outcome, so a handler that starts
///   another asynchronous step flattens into it instead of nesting.
///
/// A returned future or result leaves `R` open to inference. Pin it with an
/// annotation or a later typed continuation when the compiler asks.
///
/// ```
/// use pact::{make_promise, make_ready_value, Future};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let (mut promise, mut future) = make_promise::<i32>();
/// let mut doubled: Future<i32> = future.then(|n| make_ready_value(n * 2));
///
/// let seen = Rc::new(Cell::new(0));
/// let sink = seen.clone();
/// doubled.finally(move |outcome| sink.set(outcome.unwrap()));
///
/// promise.set_value(4);
/// assert_eq!(seen.get(), 8);
/// ```
pub trait Chainable<R: 'static> {
    /// Settle `dest` with this output, handing follow-up work back to the
    /// dispatch loop rather than running it inline.
    fn complete(self, dest: StateRef<R>) -> Option<Step>;
}

impl<R: 'static> Chainable<R> for R {
    fn complete(self, dest: StateRef<R>) -> Option<Step> {
        dest.settle(Cell::Value(self))
    }
}

impl<R: 'static> Chainable<R> for Result<R, Error> {
    fn complete(self, dest: StateRef<R>) -> Option<Step> {
        match self {
            Ok(value) => dest.settle(Cell::Value(value)),
            Err(error) => dest.settle(Cell::Error(error)),
        }
    }
}

impl<R: 'static> Chainable<R> for Future<R> {
    fn complete(mut self, dest: StateRef<R>) -> Option<Step> {
        match self.take_state() {
            Some(source) => source
                .chain(Box::new(Attach::new(dest)))
                .map(|next| Step::new(next, source)),
            None => dest.settle(Cell::Error(Error::invalid_future())),
        }
    }
}
