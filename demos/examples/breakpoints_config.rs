// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading a breakpoint table from JSON.
//!
//! Run:
//! - `cargo run -p understory_demos --example breakpoints_config`

use understory_breakpoints::BreakpointSet;

const CONFIG: &str = r#"{
    "xs": 12,
    "md": 16,
    "xl": 20,
    "custom": { "2400": 28 }
}"#;

fn main() {
    let font_sizes: BreakpointSet<u32> = match serde_json::from_str(CONFIG) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("invalid breakpoint config: {err}");
            return;
        }
    };

    println!("== Font size by width ==");
    for width in [320.0, 1024.0, 1440.0, 3840.0] {
        match font_sizes.choose_entry(width) {
            Ok(e) => println!("  width={width:>6}  {:>10}  {}pt", e.key.to_string(), e.value),
            Err(err) => println!("  width={width:>6}  {err}"),
        }
    }
}
