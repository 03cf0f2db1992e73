// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive layout driven by constraints.
//!
//! Builds lazy producers for three column layouts, then feeds a series of
//! constraint changes through [`Responsive::resolve_if_changed`]. Only
//! selection changes realize a producer, and only the selected one.
//!
//! Run:
//! - `cargo run -p understory_demos --example breakpoints_responsive`

use kurbo::Size;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_breakpoints::adapters::size::{
    Axis, BoxConstraints, MaxExtent, Responsive, ScreenMetrics, ScreenSize,
};
use understory_breakpoints::{Breakpoint, BreakpointSet, Lazy, SelectionState};

struct Window {
    size: Size,
}

impl ScreenMetrics for Window {
    fn screen_size(&self) -> Size {
        self.size
    }
}

fn columns(n: usize) -> impl Fn(&BoxConstraints) -> Vec<f64> {
    move |c: &BoxConstraints| {
        info!(columns = n, width = c.max.width, "building layout");
        vec![c.max.width / n as f64; n]
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let set: BreakpointSet<Lazy<'_, BoxConstraints, Vec<f64>>> = BreakpointSet::empty()
        .with(Breakpoint::Xs, Lazy::new(columns(1)))
        .with(Breakpoint::Md, Lazy::new(columns(2)))
        .with(Breakpoint::Xl, Lazy::new(columns(3)));
    let layout = Responsive::new(set, MaxExtent::new(Axis::Width));

    println!("== Constraint changes ==");
    let mut state = SelectionState::new();
    for width in [360.0, 420.0, 800.0, 900.0, 1300.0, 700.0] {
        let c = BoxConstraints::new(Size::ZERO, Size::new(width, 600.0));
        match layout.resolve_if_changed(&mut state, &c) {
            Ok(Some(cols)) => println!("  width={width:>6}  rebuilt: {cols:?}"),
            Ok(None) => println!("  width={width:>6}  unchanged ({:?})", state.current()),
            Err(err) => println!("  width={width:>6}  {err}"),
        }
    }

    println!("== Screen size, by height ==");
    let labels = BreakpointSet::empty()
        .with(Breakpoint::Xs, "short")
        .with(Breakpoint::Sm, "tall")
        .into_lazy::<Window>();
    let by_height = Responsive::new(labels, ScreenSize::new(Axis::Height));
    for size in [Size::new(1920.0, 480.0), Size::new(1080.0, 1920.0)] {
        let window = Window { size };
        match by_height.resolve(&window) {
            Ok(label) => println!("  {size:?}  {label}"),
            Err(err) => println!("  {size:?}  {err}"),
        }
    }
}
