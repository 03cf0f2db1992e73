// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state: re-run selection on every new scalar and report only changes.
//!
//! Layout constraints can change many times while the selected slot stays the
//! same. [`SelectionState`] remembers the last selected [`Key`] so callers only
//! rebuild their content when the selection actually moves.
//!
//! ```
//! use understory_breakpoints::{Breakpoint, BreakpointSet, Key, SelectionState};
//!
//! let set = BreakpointSet::empty()
//!     .with(Breakpoint::Xs, "compact")
//!     .with(Breakpoint::Md, "regular");
//!
//! let mut state = SelectionState::new();
//! assert_eq!(state.update(&set, 320.0), Ok(Some(Key::Standard(Breakpoint::Xs))));
//! assert_eq!(state.update(&set, 400.0), Ok(None));
//! assert_eq!(state.update(&set, 900.0), Ok(Some(Key::Standard(Breakpoint::Md))));
//! ```

use crate::error::Result;
use crate::set::{BreakpointSet, Key};

/// Tracks the most recently selected slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Option<Key>,
}

impl SelectionState {
    /// Create a state with nothing selected yet.
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// The currently selected slot, if any.
    pub fn current(&self) -> Option<Key> {
        self.current
    }

    /// Forget the current selection; the next [`update`](Self::update) reports a change.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Select against `set` at `x`.
    ///
    /// Returns `Some(key)` when the selected slot differs from the previous one
    /// (including the first selection) and `None` when it is unchanged.
    /// On error the previous selection is kept.
    pub fn update<T>(&mut self, set: &BreakpointSet<T>, x: f64) -> Result<Option<Key>> {
        let key = set.choose_entry(x)?.key;
        Ok(self.observe(key))
    }

    /// Record a slot that was already selected elsewhere.
    ///
    /// Returns `Some(key)` if it differs from the current one, like
    /// [`update`](Self::update).
    pub fn observe(&mut self, key: Key) -> Option<Key> {
        if self.current == Some(key) {
            return None;
        }
        self.current = Some(key);
        Some(key)
    }
}
