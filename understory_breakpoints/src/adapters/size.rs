// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size-driven adapters built on Kurbo.
//!
//! ## Feature
//!
//! Enable with `kurbo_adapter`.
//!
//! ## Notes
//!
//! There is one adapter, [`Responsive`], with a pluggable [`ScalarSource`].
//! The two common sources differ only in what they sample:
//! - [`ScreenSize`] reads the display size from a [`ScreenMetrics`] environment,
//!   typically once per presentation cycle.
//! - [`MaxExtent`] reads the maximum extent of [`LayoutConstraints`], and is
//!   meant to be re-sampled whenever constraints change; pair it with
//!   [`Responsive::resolve_if_changed`].
//!
//! ```
//! use kurbo::Size;
//! use understory_breakpoints::{Breakpoint, BreakpointSet};
//! use understory_breakpoints::adapters::size::{Axis, BoxConstraints, MaxExtent, Responsive};
//!
//! let set = BreakpointSet::empty()
//!     .with(Breakpoint::Xs, "one column")
//!     .with(Breakpoint::Lg, "two columns")
//!     .into_lazy::<BoxConstraints>();
//!
//! let layout = Responsive::new(set, MaxExtent::new(Axis::Width));
//! let narrow = BoxConstraints::tight(Size::new(400.0, 800.0));
//! let wide = BoxConstraints::new(Size::ZERO, Size::new(1280.0, 800.0));
//! assert_eq!(layout.resolve(&narrow), Ok("one column"));
//! assert_eq!(layout.resolve(&wide), Ok("two columns"));
//! ```

use core::fmt;

use kurbo::Size;

use crate::error::Result;
use crate::lazy::Lazy;
use crate::set::{BreakpointSet, Key};
use crate::state::SelectionState;

/// Which dimension of a size to sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal extent.
    #[default]
    Width,
    /// Vertical extent.
    Height,
}

impl Axis {
    /// The extent of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Width => size.width,
            Self::Height => size.height,
        }
    }
}

/// Something that can produce the current scalar from an environment.
///
/// Implemented for closures `Fn(&E) -> f64`.
pub trait ScalarSource<E: ?Sized> {
    /// Sample the current scalar.
    fn sample(&self, env: &E) -> f64;
}

impl<E: ?Sized, F: Fn(&E) -> f64> ScalarSource<E> for F {
    #[inline]
    fn sample(&self, env: &E) -> f64 {
        self(env)
    }
}

/// Environments that know the display size.
pub trait ScreenMetrics {
    /// Current display size in logical pixels.
    fn screen_size(&self) -> Size;
}

/// Environments that carry layout constraints.
pub trait LayoutConstraints {
    /// Largest size the content may take.
    fn max_size(&self) -> Size;
}

/// Minimum and maximum size handed down by a layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxConstraints {
    /// Smallest allowed size.
    pub min: Size,
    /// Largest allowed size.
    pub max: Size,
}

impl BoxConstraints {
    /// Constraints between `min` and `max`.
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Constraints that allow exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }
}

impl LayoutConstraints for BoxConstraints {
    fn max_size(&self) -> Size {
        self.max
    }
}

/// Samples the display size along an axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenSize {
    /// Axis to sample.
    pub axis: Axis,
}

impl ScreenSize {
    /// Sample along `axis`.
    pub const fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl<E: ScreenMetrics + ?Sized> ScalarSource<E> for ScreenSize {
    fn sample(&self, env: &E) -> f64 {
        self.axis.extent(env.screen_size())
    }
}

/// Samples the maximum extent of the layout constraints along an axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MaxExtent {
    /// Axis to sample.
    pub axis: Axis,
}

impl MaxExtent {
    /// Sample along `axis`.
    pub const fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl<E: LayoutConstraints + ?Sized> ScalarSource<E> for MaxExtent {
    fn sample(&self, env: &E) -> f64 {
        self.axis.extent(env.max_size())
    }
}

/// A lazy breakpoint set paired with a scalar source.
///
/// Resolving samples the source, selects a slot, and realizes only that slot's
/// producer with the same environment.
pub struct Responsive<'a, E: ?Sized, T, S> {
    set: BreakpointSet<Lazy<'a, E, T>>,
    source: S,
}

impl<E: ?Sized, T, S: fmt::Debug> fmt::Debug for Responsive<'_, E, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responsive")
            .field("slots", &self.set.len())
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<'a, E: ?Sized, T, S: ScalarSource<E>> Responsive<'a, E, T, S> {
    /// Pair a set of producers with a source.
    pub fn new(set: BreakpointSet<Lazy<'a, E, T>>, source: S) -> Self {
        Self { set, source }
    }

    /// The producers.
    pub fn set(&self) -> &BreakpointSet<Lazy<'a, E, T>> {
        &self.set
    }

    /// The scalar source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The slot that applies in `env`, without realizing it.
    pub fn select(&self, env: &E) -> Result<Key> {
        let x = self.source.sample(env);
        Ok(self.set.choose_entry(x)?.key)
    }

    /// Sample, select, and realize the chosen producer.
    pub fn resolve(&self, env: &E) -> Result<T> {
        let x = self.source.sample(env);
        Ok(self.set.choose(x)?.realize(env))
    }

    /// Like [`resolve`](Self::resolve), but only realizes when the selected slot
    /// differs from the one recorded in `state`.
    ///
    /// Returns `Ok(None)` when the selection is unchanged.
    pub fn resolve_if_changed(&self, state: &mut SelectionState, env: &E) -> Result<Option<T>> {
        let x = self.source.sample(env);
        let entry = self.set.choose_entry(x)?;
        if state.observe(entry.key).is_none() {
            return Ok(None);
        }
        Ok(Some(entry.value.realize(env)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::threshold::Breakpoint;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    struct Window(Size);

    impl ScreenMetrics for Window {
        fn screen_size(&self) -> Size {
            self.0
        }
    }

    #[test]
    fn axis_extent() {
        let s = Size::new(640.0, 480.0);
        assert_eq!(Axis::Width.extent(s), 640.0);
        assert_eq!(Axis::Height.extent(s), 480.0);
    }

    #[test]
    fn screen_size_samples_selected_axis() {
        let set = BreakpointSet::empty()
            .with(Breakpoint::Xs, 's')
            .with(Breakpoint::Md, 'm')
            .into_lazy::<Window>();
        let by_width = Responsive::new(set, ScreenSize::new(Axis::Width));
        let window = Window(Size::new(1024.0, 600.0));
        assert_eq!(by_width.resolve(&window), Ok('m'));

        let set = BreakpointSet::empty()
            .with(Breakpoint::Xs, 's')
            .with(Breakpoint::Md, 'm')
            .into_lazy::<Window>();
        let by_height = Responsive::new(set, ScreenSize::new(Axis::Height));
        assert_eq!(by_height.resolve(&window), Ok('s'));
        assert_eq!(by_height.select(&window), Ok(Key::Standard(Breakpoint::Xs)));
    }

    #[test]
    fn only_the_selected_producer_runs() {
        let log = RefCell::new(Vec::new());
        let set: BreakpointSet<Lazy<'_, BoxConstraints, &str>> = BreakpointSet::empty()
            .with(
                Breakpoint::Xs,
                Lazy::new(|_: &BoxConstraints| {
                    log.borrow_mut().push("xs");
                    "small"
                }),
            )
            .with(
                Breakpoint::Xl,
                Lazy::new(|_: &BoxConstraints| {
                    log.borrow_mut().push("xl");
                    "large"
                }),
            );
        let r = Responsive::new(set, MaxExtent::new(Axis::Width));
        let c = BoxConstraints::new(Size::ZERO, Size::new(1300.0, 10.0));
        assert_eq!(r.resolve(&c), Ok("large"));
        assert_eq!(*log.borrow(), ["xl"]);
    }

    #[test]
    fn producer_receives_environment() {
        let set: BreakpointSet<Lazy<'_, BoxConstraints, String>> = BreakpointSet::empty().with(
            Breakpoint::Xs,
            Lazy::new(|c: &BoxConstraints| alloc::format!("{}", c.max.width)),
        );
        let r = Responsive::new(set, MaxExtent::new(Axis::Width));
        let c = BoxConstraints::tight(Size::new(320.0, 10.0));
        assert_eq!(r.resolve(&c).as_deref(), Ok("320"));
    }

    #[test]
    fn closure_source() {
        let set = BreakpointSet::empty()
            .with(Breakpoint::Sm, 1)
            .with_custom(2000.0, 2)
            .into_lazy::<f64>();
        let r = Responsive::new(set, |x: &f64| *x * 2.0);
        assert_eq!(r.resolve(&1200.0), Ok(2));
        assert_eq!(r.resolve(&10.0), Ok(1));
    }

    #[test]
    fn resolve_if_changed_skips_unchanged_selection() {
        let realized = RefCell::new(0);
        let set: BreakpointSet<Lazy<'_, BoxConstraints, u8>> = BreakpointSet::empty()
            .with(
                Breakpoint::Xs,
                Lazy::new(|_: &BoxConstraints| {
                    *realized.borrow_mut() += 1;
                    0
                }),
            )
            .with(
                Breakpoint::Lg,
                Lazy::new(|_: &BoxConstraints| {
                    *realized.borrow_mut() += 1;
                    1
                }),
            );
        let r = Responsive::new(set, MaxExtent::new(Axis::Width));
        let mut state = SelectionState::new();
        let at = |w: f64| BoxConstraints::new(Size::ZERO, Size::new(w, 100.0));

        assert_eq!(r.resolve_if_changed(&mut state, &at(300.0)), Ok(Some(0)));
        assert_eq!(r.resolve_if_changed(&mut state, &at(500.0)), Ok(None));
        assert_eq!(r.resolve_if_changed(&mut state, &at(1000.0)), Ok(Some(1)));
        assert_eq!(r.resolve_if_changed(&mut state, &at(1100.0)), Ok(None));
        assert_eq!(*realized.borrow(), 2);
    }

    #[test]
    fn resolve_if_changed_samples_once_per_call() {
        let sampled = core::cell::Cell::new(0_u32);
        let set = BreakpointSet::empty()
            .with(Breakpoint::Xs, 's')
            .with(Breakpoint::Md, 'm')
            .into_lazy::<f64>();
        let r = Responsive::new(set, |x: &f64| {
            sampled.set(sampled.get() + 1);
            *x
        });
        let mut state = SelectionState::new();
        assert_eq!(r.resolve_if_changed(&mut state, &900.0), Ok(Some('m')));
        assert_eq!(state.current(), Some(Key::Standard(Breakpoint::Md)));
        assert_eq!(r.resolve_if_changed(&mut state, &1000.0), Ok(None));
        assert_eq!(r.resolve_if_changed(&mut state, &10.0), Ok(Some('s')));
        assert_eq!(state.current(), Some(Key::Standard(Breakpoint::Xs)));
        assert_eq!(sampled.get(), 3);
    }

    #[test]
    fn empty_set_surfaces_error() {
        let set: BreakpointSet<Lazy<'_, BoxConstraints, ()>> = BreakpointSet::empty();
        let r = Responsive::new(set, MaxExtent::new(Axis::Height));
        let c = BoxConstraints::tight(Size::new(100.0, 100.0));
        assert_eq!(r.resolve(&c), Err(Error::UnresolvableSelection));
        let mut state = SelectionState::new();
        assert_eq!(
            r.resolve_if_changed(&mut state, &c),
            Err(Error::UnresolvableSelection)
        );
    }
}
