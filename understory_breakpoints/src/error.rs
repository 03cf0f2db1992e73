// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for breakpoint selection.

use thiserror::Error;

/// Result type for breakpoint operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while selecting a breakpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The set has no populated slot, standard or custom, so nothing can be selected.
    ///
    /// This is deterministic: re-running the selection on the same set fails again.
    #[error("unresolvable selection: breakpoint set has no populated slots")]
    UnresolvableSelection,
}
