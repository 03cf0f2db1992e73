// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection: pick the slot that applies at a scalar.
//!
//! ## Rule
//!
//! - Among populated slots, pick the greatest threshold `t` with `t <= x`.
//! - If `x` is below every populated threshold, fall back to the smallest populated slot.
//! - A custom threshold equal to a standard bound shadows the standard slot.
//! - An empty set is an [`Error::UnresolvableSelection`].
//!
//! The fallback is deliberate: a set populated from `sm` upwards still yields
//! its `sm` payload on a narrow screen, rather than nothing.
//!
//! Selection never realizes a [`Lazy`](crate::lazy::Lazy) payload; that is left
//! to the caller, for the one slot that was chosen.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::set::{BreakpointSet, Entry};

impl<T> BreakpointSet<T> {
    /// The payload that applies at `x`.
    ///
    /// See the [module docs](crate::select) for the rule.
    pub fn choose(&self, x: f64) -> Result<&T> {
        self.choose_entry(x).map(|e| e.value)
    }

    /// Like [`choose`](Self::choose), but also reports which slot won.
    pub fn choose_entry(&self, x: f64) -> Result<Entry<'_, T>> {
        let mut entries = self.entries();
        let Some(first) = entries.next() else {
            debug!(scalar = x, "no populated breakpoint to select");
            return Err(Error::UnresolvableSelection);
        };

        // Entries ascend, so the last admitted entry is the greatest one.
        let mut best = first.threshold().admits(x).then_some(first);
        for e in entries {
            if !e.threshold().admits(x) {
                break;
            }
            best = Some(e);
        }

        let chosen = best.unwrap_or(first);
        trace!(
            scalar = x,
            slot = %chosen.key,
            fallback = best.is_none(),
            "selected breakpoint"
        );
        Ok(chosen)
    }
}

/// The payload of `set` that applies at `x`.
///
/// Free-function form of [`BreakpointSet::choose`].
pub fn choose<T>(set: &BreakpointSet<T>, x: f64) -> Result<&T> {
    set.choose(x)
}
