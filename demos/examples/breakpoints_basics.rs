// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint basics.
//!
//! This minimal example builds a set from standard slots and a custom
//! threshold, then sweeps a range of widths and prints which slot applies.
//! Set `RUST_LOG=understory_breakpoints=trace` to see selection events.
//!
//! Run:
//! - `cargo run -p understory_demos --example breakpoints_basics`

use tracing_subscriber::EnvFilter;
use understory_breakpoints::{BreakpointSet, StandardSlots};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let set = BreakpointSet::new(
        StandardSlots {
            sm: Some("phone landscape"),
            md: Some("tablet"),
            xl: Some("desktop"),
            ..Default::default()
        },
        [(1920.0, "wide desktop")],
    );

    println!("== Populated slots ==");
    for e in set.entries() {
        println!("  {:>14}  from {:>6}  {}", e.key.to_string(), e.threshold(), e.value);
    }

    println!("== Selection by width ==");
    for width in [320.0, 576.0, 800.0, 1150.0, 1200.0, 2560.0] {
        match set.choose_entry(width) {
            Ok(e) => println!("  width={width:>6}  slot={:<14}  {}", e.key.to_string(), e.value),
            Err(err) => println!("  width={width:>6}  {err}"),
        }
    }

    let empty: BreakpointSet<&str> = BreakpointSet::empty();
    if let Err(err) = empty.choose(800.0) {
        println!("== Empty set ==\n  {err}");
    }
}
