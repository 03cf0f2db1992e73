// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_breakpoints --heading-base-level=0

//! Understory Breakpoints: responsive breakpoint sets for UI, in `no_std`.
//!
//! ## Overview
//!
//! This crate picks one of several alternative representations based on a
//! measured scalar such as a window width or a layout constraint.
//! It does not measure, lay out, or render anything.
//! Feed it a scalar, and it tells you which slot applies.
//!
//! ## Breakpoint sets
//!
//! A [`BreakpointSet`] holds an optional payload for each of six standard
//! [`Breakpoint`]s with fixed bounds (`xs` from −∞, `sm` 576, `md` 768,
//! `lg` 992, `xl` 1200, `xxl` 1400) plus any number of custom thresholds.
//!
//! ## Selection
//!
//! [`choose`] returns the payload of the greatest populated threshold that does
//! not exceed the scalar.
//! If the scalar is below every populated threshold, the smallest populated
//! slot is used instead.
//! A custom threshold equal to a standard bound shadows the standard slot.
//! An empty set yields [`Error::UnresolvableSelection`].
//!
//! ## Laziness
//!
//! Alternatives are usually expensive to build.
//! Convert an eager set with [`BreakpointSet::into_lazy`], or build one from
//! [`Lazy`] producers directly; selection never realizes a producer, so only the
//! chosen one is ever run.
//!
//! ## Workflow
//!
//! 1) Build a set of values or producers, once.
//! 2) Sample a scalar from the host (see [`adapters`] for Kurbo-based sources).
//! 3) Select with [`BreakpointSet::choose`] and realize the winner.
//!    For constraint-driven layouts, [`SelectionState`] reports only changes.
//!
//! ```rust
//! use understory_breakpoints::{Breakpoint, BreakpointSet, Error};
//!
//! let set = BreakpointSet::empty()
//!     .with(Breakpoint::Sm, "A")
//!     .with(Breakpoint::Md, "B")
//!     .with(Breakpoint::Xl, "C")
//!     .with_custom(1600.0, "D");
//!
//! assert_eq!(set.choose(800.0), Ok(&"B"));
//! assert_eq!(set.choose(1700.0), Ok(&"D"));
//!
//! let lazy = set.into_lazy::<()>();
//! let label = lazy.choose(1250.0).map(|p| p.realize(&()));
//! assert_eq!(label, Ok("C"));
//!
//! let empty: BreakpointSet<&str> = BreakpointSet::empty();
//! assert_eq!(empty.choose(800.0), Err(Error::UnresolvableSelection));
//! ```
//!
//! ### Float semantics
//!
//! Thresholds are assumed not to be NaN. Debug builds assert.
//! A NaN scalar satisfies no threshold and so resolves to the smallest populated slot.
//!
//! This crate is `no_std` and uses `alloc`.
//! Selection emits `tracing` events at `trace` and `debug` level; install a
//! subscriber to see them.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod error;
pub mod lazy;
pub mod select;
pub mod set;
pub mod state;
pub mod threshold;

pub use error::{Error, Result};
pub use lazy::Lazy;
pub use select::choose;
pub use set::{BreakpointMask, BreakpointSet, Entries, Entry, Key, StandardSlots};
pub use state::SelectionState;
pub use threshold::{Breakpoint, Threshold};
