// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy payloads: producers realized only for the selected slot.
//!
//! A [`Lazy`] wraps a closure taking the host environment by reference.
//! Building a set of producers costs nothing per alternative; only the slot
//! picked by [`choose`](crate::select::choose) is ever realized.
//!
//! ```
//! use understory_breakpoints::{Breakpoint, BreakpointSet, Lazy};
//!
//! struct Env { scale: f64 }
//!
//! let set: BreakpointSet<Lazy<'_, Env, f64>> = BreakpointSet::empty()
//!     .with(Breakpoint::Xs, Lazy::new(|env: &Env| 1.0 * env.scale))
//!     .with(Breakpoint::Lg, Lazy::new(|env: &Env| 4.0 * env.scale));
//!
//! let producer = set.choose(1000.0).unwrap();
//! assert_eq!(producer.realize(&Env { scale: 2.0 }), 8.0);
//! ```

use alloc::boxed::Box;
use core::fmt;

/// A zero-argument producer bound to one environment parameter.
///
/// `realize` takes `&self`, so a set of producers can be queried and realized
/// any number of times.
pub struct Lazy<'a, E: ?Sized, T> {
    produce: Box<dyn Fn(&E) -> T + 'a>,
}

impl<'a, E: ?Sized, T> Lazy<'a, E, T> {
    /// Wrap a producer.
    pub fn new(produce: impl Fn(&E) -> T + 'a) -> Self {
        Self {
            produce: Box::new(produce),
        }
    }

    /// Invoke the producer with the environment.
    #[inline]
    pub fn realize(&self, env: &E) -> T {
        (self.produce)(env)
    }
}

impl<'a, E: ?Sized, T: Clone + 'a> Lazy<'a, E, T> {
    /// The trivial producer: ignores the environment and returns `value` unchanged.
    pub fn ready(value: T) -> Self {
        Self::new(move |_env: &E| value.clone())
    }
}

impl<E: ?Sized, T> fmt::Debug for Lazy<'_, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn ready_returns_value_unchanged() {
        let p: Lazy<'_, (), &str> = Lazy::ready("A");
        assert_eq!(p.realize(&()), "A");
        assert_eq!(p.realize(&()), "A");
    }

    #[test]
    fn producer_sees_environment() {
        let p: Lazy<'_, u32, u32> = Lazy::new(|n: &u32| n * 2);
        assert_eq!(p.realize(&21), 42);
    }

    #[test]
    fn producer_runs_only_when_realized() {
        let calls = Cell::new(0);
        let p: Lazy<'_, (), ()> = Lazy::new(|_: &()| calls.set(calls.get() + 1));
        assert_eq!(calls.get(), 0);
        p.realize(&());
        assert_eq!(calls.get(), 1);
    }
}
