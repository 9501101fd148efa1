// Copyright 2026 The pact Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::cell::Cell;
use crate::continuation::{Continuation, Step};
use crate::error::Error;
use crate::state::StateRef;

/// Terminal observer: runs the callback with the settled outcome and ends
/// the chain.
pub(crate) struct Finally<F> {
    func: F,
}

impl<F> Finally<F> {
    pub(crate) fn new(func: F) -> Finally<F> {
        Finally { func }
    }
}

impl<T, F> Continuation<T> for Finally<F>
where
    T: 'static,
    F: FnOnce(Result<T, Error>) + 'static,
{
    fn continue_with(self: Box<Self>, source: StateRef<T>) -> Option<Step> {
        let outcome = match source.take_cell() {
            Cell::Value(value) => Ok(value),
            Cell::Error(error) => Err(error),
            Cell::Empty => unreachable!("continuation dispatched on an empty cell"),
        };

        (self.func)(outcome);
        None
    }
}
