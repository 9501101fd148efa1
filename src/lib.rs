//! Single-producer, single-consumer promise/future pairs with chained
//! continuations.
//!
//! A [`Promise`] produces one value or one [`Error`]; the paired [`Future`]
//! consumes it by attaching a continuation with [`then`](Future::then),
//! [`catch`](Future::catch) or [`finally`](Future::finally). A handler that
//! returns another future flattens into it, and chains of already-ready
//! continuations are dispatched iteratively, so pipelines complete at
//! constant stack depth no matter how deep they are.
//!
//! Everything is single-threaded and synchronous. Whoever satisfies the
//! promise, or chains onto a future that has already settled, runs the
//! ready part of the chain before the call returns; there is no executor
//! and no queue behind the scenes.
//!
//! ```
//! use pact::make_promise;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let (mut promise, mut future) = make_promise::<i32>();
//! let seen = Rc::new(Cell::new(0));
//! let sink = seen.clone();
//!
//! future
//!     .then(|n| n * 2)
//!     .catch(|_err| -1)
//!     .finally(move |outcome| sink.set(outcome.unwrap()));
//!
//! promise.set_value(21);
//! assert_eq!(seen.get(), 42);
//! ```

mod cell;
mod chain;
mod continuation;
mod error;
mod future;
mod promise;
mod state;

pub use crate::chain::Chainable;
pub use crate::continuation::Step;
pub use crate::error::{Error, ErrorKind};
pub use crate::future::Future;
pub use crate::promise::Promise;
pub use crate::state::{State, StateRef};

/// Create a connected promise/future pair over one fresh shared state.
#[must_use]
pub fn make_promise<T: 'static>() -> (Promise<T>, Future<T>) {
    let state = state::State::new();
    (Promise::with_state(state.clone()), Future::with_state(state))
}

/// Ready future carrying `value`, with the carried type taken from the
/// argument. Use [`Future::resolved`] to name the type and convert into it.
#[must_use]
pub fn make_ready_value<T: 'static>(value: T) -> Future<T> {
    Future::resolved(value)
}

/// Ready future already rejected with `error`.
#[must_use]
pub fn make_ready_error<T: 'static>(error: Error) -> Future<T> {
    Future::rejected(error)
}
