// Copyright 2026 The pact Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::marker::PhantomData;

use crate::cell::Cell;
use crate::chain::Chainable;
use crate::continuation::{Continuation, Step};
use crate::error::Error;
use crate::state::StateRef;

/// Error handler. A value in the source bypasses the handler and is
/// forwarded verbatim, which is also what fixes the destination type to
/// the source type.
pub(crate) struct Catch<U, T: 'static, F> {
    func: F,
    dest: StateRef<T>,
    _raw: PhantomData<U>,
}

impl<U, T: 'static, F> Catch<U, T, F> {
    pub(crate) fn new(func: F, dest: StateRef<T>) -> Catch<U, T, F> {
        Catch {
            func,
            dest,
            _raw: PhantomData,
        }
    }
}

impl<T, U, F> Continuation<T> for Catch<U, T, F>
where
    T: 'static,
    U: Chainable<T> + 'static,
    F: FnOnce(Error) -> U + 'static,
{
    fn continue_with(self: Box<Self>, source: StateRef<T>) -> Option<Step> {
        let this = *self;

        match source.take_cell() {
            Cell::Value(value) => this.dest.settle(Cell::Value(value)),
            Cell::Error(error) => (this.func)(error).complete(this.dest),
            Cell::Empty => unreachable!("continuation dispatched on an empty cell"),
        }
    }
}
